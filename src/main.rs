use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use snowman::{
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    error::SnowmanError,
    logging,
    picker::PickStrategy,
    runtime::{self, CrosstermEventSource, FixedTicker, Runner},
    game::MAX_WRONG_LIMIT,
    words::{read_word_file, BuiltinWords},
    App, GameConfig,
};
use std::{
    error::Error,
    fmt::Display,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};
use tracing::info;

const TICK_RATE_MS: u64 = 250;

/// word-guessing snowman game for the terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Guess the secret word one letter at a time before the snowman melts. Click letters with the mouse or type them; Enter restarts, Esc quits."
)]
pub struct Cli {
    /// number of wrong guesses allowed before the snowman melts
    #[clap(short = 'm', long, value_parser = clap::value_parser!(u16).range(1..=26))]
    max_wrong: Option<u16>,

    /// words to pick the secret from, comma separated
    #[clap(short = 'w', long, value_delimiter = ',')]
    words: Vec<String>,

    /// file with one word per line to pick the secret from
    #[clap(long, conflicts_with = "words")]
    words_file: Option<PathBuf>,

    /// built-in word list to pick the secret from
    #[clap(short = 'l', long, value_enum)]
    word_list: Option<BuiltinWords>,

    /// how the secret is chosen from the words
    #[clap(long, value_enum)]
    pick: Option<PickStrategy>,

    /// where to write the log (default: ~/.local/state/snowman/snowman.log)
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// store the given options as the new defaults
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    /// Command line values override the stored configuration. A stored
    /// `max_wrong` is held to the same range the flag accepts.
    fn merge(&self, mut config: Config) -> Config {
        config.max_wrong = match self.max_wrong {
            Some(max_wrong) => max_wrong as usize,
            None => config.max_wrong.clamp(1, MAX_WRONG_LIMIT),
        };
        if let Some(word_list) = self.word_list {
            config.word_list = word_list;
            config.words.clear();
        }
        if !self.words.is_empty() {
            config.words = self.words.clone();
        }
        if let Some(pick) = self.pick {
            config.pick = pick;
        }
        config
    }

    fn game_config(&self, config: &Config) -> Result<GameConfig, SnowmanError> {
        let words = match &self.words_file {
            Some(path) => read_word_file(path)?,
            None if !config.words.is_empty() => config.words.clone(),
            None => config.word_list.load().words,
        };

        Ok(GameConfig {
            words,
            max_wrong: config.max_wrong,
            image_root: config.image_root.clone(),
        })
    }
}

/// Reports `err` the way clap reports usage errors and exits
fn fail(err: impl Display) -> ! {
    tracing::error!(%err, "startup failed");
    let mut cmd = Cli::command();
    cmd.error(ErrorKind::Io, err).exit()
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(path) = cli.log_file.clone().or_else(AppDirs::log_path) {
        if let Err(err) = logging::init(&path) {
            eprintln!("snowman: logging disabled ({err})");
        }
    }

    let store = FileConfigStore::new();
    let config = cli.merge(store.load());
    let game_config = cli.game_config(&config).unwrap_or_else(|err| fail(err));

    if cli.save_config {
        if let Err(err) = store.save(&config) {
            fail(err);
        }
        info!(path = %store.path().display(), "saved config");
    }

    if !stdin().is_tty() {
        fail("stdin must be a tty");
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::from_config(game_config, config.pick);
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );
    let result = runtime::run(&mut terminal, &mut app, &runner);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result?;
    info!("bye");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use snowman::Game;
    use tempfile::tempdir;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["snowman"]);

        assert_eq!(cli.max_wrong, None);
        assert!(cli.words.is_empty());
        assert_eq!(cli.words_file, None);
        assert_eq!(cli.word_list, None);
        assert_eq!(cli.pick, None);
        assert!(!cli.save_config);
    }

    #[test]
    fn test_cli_max_wrong() {
        let cli = Cli::parse_from(["snowman", "-m", "4"]);
        assert_eq!(cli.max_wrong, Some(4));

        let cli = Cli::parse_from(["snowman", "--max-wrong", "10"]);
        assert_eq!(cli.max_wrong, Some(10));
    }

    #[test]
    fn test_cli_max_wrong_out_of_range() {
        assert!(Cli::try_parse_from(["snowman", "-m", "0"]).is_err());
        assert!(Cli::try_parse_from(["snowman", "-m", "27"]).is_err());
    }

    #[test]
    fn test_cli_words() {
        let cli = Cli::parse_from(["snowman", "-w", "apple,pear"]);
        assert_eq!(cli.words, vec!["apple", "pear"]);

        let cli = Cli::parse_from(["snowman", "--words", "snow", "--words", "ice"]);
        assert_eq!(cli.words, vec!["snow", "ice"]);
    }

    #[test]
    fn test_cli_words_conflict_with_file() {
        let result = Cli::try_parse_from(["snowman", "-w", "apple", "--words-file", "w.txt"]);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_cli_word_list_and_pick() {
        let cli = Cli::parse_from(["snowman", "-l", "winter", "--pick", "first"]);
        assert_eq!(cli.word_list, Some(BuiltinWords::Winter));
        assert_eq!(cli.pick, Some(PickStrategy::First));
    }

    #[test]
    fn test_merge_keeps_config_without_flags() {
        let cli = Cli::parse_from(["snowman"]);
        let config = Config {
            max_wrong: 3,
            word_list: BuiltinWords::Fruits,
            words: vec!["kiwi".into()],
            pick: PickStrategy::First,
            image_root: "img".into(),
        };
        assert_eq!(cli.merge(config.clone()), config);
    }

    #[test]
    fn test_merge_overrides() {
        let cli = Cli::parse_from(["snowman", "-m", "4", "-w", "apple", "--pick", "first"]);
        let merged = cli.merge(Config::default());
        assert_eq!(merged.max_wrong, 4);
        assert_eq!(merged.words, vec!["apple"]);
        assert_eq!(merged.pick, PickStrategy::First);
    }

    #[test]
    fn test_merge_word_list_clears_stored_words() {
        let cli = Cli::parse_from(["snowman", "-l", "animals"]);
        let stored = Config {
            words: vec!["kiwi".into()],
            ..Config::default()
        };
        let merged = cli.merge(stored);
        assert_eq!(merged.word_list, BuiltinWords::Animals);
        assert!(merged.words.is_empty());
    }

    #[test]
    fn test_merge_clamps_stored_max_wrong() {
        let cli = Cli::parse_from(["snowman"]);
        for (stored, expected) in [(500, MAX_WRONG_LIMIT), (0, 1), (5, 5)] {
            let config = Config {
                max_wrong: stored,
                ..Config::default()
            };
            assert_eq!(cli.merge(config).max_wrong, expected);
        }
    }

    #[test]
    fn test_game_config_from_word_list() {
        let cli = Cli::parse_from(["snowman", "-l", "fruits"]);
        let game_config = cli.game_config(&cli.merge(Config::default())).unwrap();
        assert_eq!(game_config.words, BuiltinWords::Fruits.load().words);
    }

    #[test]
    fn test_game_config_from_words_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "icicle\nfrost\n").unwrap();

        let cli = Cli::parse_from(["snowman", "--words-file", path.to_str().unwrap()]);
        let game_config = cli.game_config(&cli.merge(Config::default())).unwrap();
        assert_eq!(game_config.words, vec!["icicle", "frost"]);
    }

    #[test]
    fn test_game_config_missing_words_file() {
        let cli = Cli::parse_from(["snowman", "--words-file", "/definitely/not/here.txt"]);
        assert!(matches!(
            cli.game_config(&Config::default()),
            Err(SnowmanError::WordFile { .. })
        ));
    }

    #[test]
    fn test_app_from_cli() {
        let cli = Cli::parse_from(["snowman", "-w", "apple", "-m", "4", "--pick", "first"]);
        let config = cli.merge(Config::default());
        let app = App::from_config(cli.game_config(&config).unwrap(), config.pick);

        assert_eq!(app.game.secret(), "apple");
        assert_eq!(app.view().illustration.alt, "4 guesses left");
    }

    #[test]
    fn test_default_settings_give_default_game() {
        let cli = Cli::parse_from(["snowman"]);
        let game_config = cli.game_config(&cli.merge(Config::default())).unwrap();
        let game = Game::new(game_config);
        assert_eq!(game.secret(), "apple");
        assert_eq!(game.max_wrong(), 6);
    }

    #[test]
    fn test_tick_rate_constant() {
        assert_eq!(TICK_RATE_MS, 250);
    }
}
