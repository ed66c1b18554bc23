use std::fs;
use std::path::Path;

use clap::ValueEnum;
use include_dir::{include_dir, Dir};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, SnowmanError};

static WORDS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/words");

/// Secret used when no usable word was supplied.
pub const DEFAULT_WORDS: &[&str] = &["apple"];

/// A named list of candidate secrets, as stored in `src/words/*.json`
#[derive(Deserialize, Clone, Debug)]
pub struct WordList {
    pub name: String,
    pub words: Vec<String>,
}

/// Word lists shipped inside the binary
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Default,
    ValueEnum,
    Serialize,
    Deserialize,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BuiltinWords {
    #[default]
    Classic,
    Fruits,
    Animals,
    Winter,
}

impl BuiltinWords {
    /// Loads the embedded list. Falls back to [`DEFAULT_WORDS`] if the
    /// embedded file is missing or malformed.
    pub fn load(&self) -> WordList {
        let file_name = format!("{self}.json");
        match read_embedded(&file_name) {
            Some(list) => list,
            None => {
                warn!(file = %file_name, "embedded word list unavailable, using default");
                WordList {
                    name: self.to_string(),
                    words: default_words(),
                }
            }
        }
    }
}

fn read_embedded(file_name: &str) -> Option<WordList> {
    let file = WORDS_DIR.get_file(file_name)?;
    let contents = file.contents_utf8()?;
    serde_json::from_str(contents).ok()
}

pub fn default_words() -> Vec<String> {
    DEFAULT_WORDS.iter().map(|w| w.to_string()).collect()
}

/// Trims and lowercases every entry, drops anything that is not a plain
/// ASCII word, and removes duplicates while keeping the first occurrence.
pub fn normalize_words<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .filter_map(|raw| {
            let word = raw.as_ref().trim().to_lowercase();
            if !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase()) {
                Some(word)
            } else {
                if !word.is_empty() {
                    warn!(word = %word, "dropping word with non-alphabetic characters");
                }
                None
            }
        })
        .unique()
        .collect()
}

/// Reads a plain text word file: one word per line, blank lines and lines
/// starting with `#` are skipped.
pub fn read_word_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| SnowmanError::WordFile {
        path: path.to_path_buf(),
        source,
    })?;

    let words = normalize_words(
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    );

    if words.is_empty() {
        return Err(SnowmanError::NoUsableWords {
            path: path.to_path_buf(),
        });
    }

    Ok(words)
}
