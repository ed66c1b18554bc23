use assert_cmd::Command;
use tempfile::tempdir;

fn snowman(log_dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("snowman").unwrap();
    cmd.arg("--log-file").arg(log_dir.path().join("snowman.log"));
    cmd
}

#[test]
fn help_lists_the_options() {
    let dir = tempdir().unwrap();
    let output = snowman(&dir).arg("--help").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--max-wrong", "--words", "--words-file", "--word-list", "--pick"] {
        assert!(stdout.contains(flag), "missing {flag} in help");
    }
}

#[test]
fn refuses_to_run_without_a_tty() {
    let dir = tempdir().unwrap();
    let output = snowman(&dir).args(["--words", "apple"]).output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("stdin must be a tty"));
}

#[test]
fn rejects_zero_max_wrong() {
    let dir = tempdir().unwrap();
    snowman(&dir).args(["--max-wrong", "0"]).assert().failure().code(2);
}

#[test]
fn reports_a_missing_word_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    let output = snowman(&dir)
        .arg("--words-file")
        .arg(&missing)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not read word file"), "{stderr}");
    assert!(stderr.contains("missing.txt"), "{stderr}");
    assert!(!stderr.contains("WordFile"), "{stderr}");
}

#[test]
fn reports_a_word_file_without_usable_words() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("numbers.txt");
    std::fs::write(&path, "123\n# comment\n").unwrap();

    let output = snowman(&dir).arg("--words-file").arg(&path).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("contains no usable words"), "{stderr}");
}
