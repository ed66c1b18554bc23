use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::picker::{FirstWord, SecretPicker};
use crate::words::{default_words, normalize_words, DEFAULT_WORDS};

pub const DEFAULT_MAX_WRONG: usize = 6;
/// One wrong guess per letter of the alphabet at most
pub const MAX_WRONG_LIMIT: usize = 26;
pub const DEFAULT_IMAGE_ROOT: &str = "/src";

/// Input to a game; fixed for the lifetime of the [`Game`]
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub words: Vec<String>,
    pub max_wrong: usize,
    pub image_root: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            words: default_words(),
            max_wrong: DEFAULT_MAX_WRONG,
            image_root: DEFAULT_IMAGE_ROOT.to_string(),
        }
    }
}

impl GameConfig {
    pub fn new<I, S>(words: I, max_wrong: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_string()).collect(),
            max_wrong,
            ..Self::default()
        }
    }

    /// Normalised copy: usable words only (default list if none survive)
    /// and a cap between one and [`MAX_WRONG_LIMIT`].
    fn sanitized(mut self) -> Self {
        let words = normalize_words(&self.words);
        self.words = if words.is_empty() {
            default_words()
        } else {
            words
        };
        self.max_wrong = self.max_wrong.clamp(1, MAX_WRONG_LIMIT);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

impl Status {
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::Playing)
    }
}

/// What a single guess did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    Correct,
    Wrong,
    /// Letter was already guessed this round
    Repeated,
    /// Not a letter, or the round is over
    Ignored,
}

/// One word-guessing game: the secret, the guesses so far, and the
/// resulting status. Replaced wholesale on [`Game::restart`].
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    picker: Box<dyn SecretPicker>,
    secret: String,
    guessed: BTreeSet<char>,
    wrong: usize,
    status: Status,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game {
    /// Game whose secret is always the first configured word
    pub fn new(config: GameConfig) -> Self {
        Self::with_picker(config, Box::new(FirstWord))
    }

    pub fn with_picker(config: GameConfig, picker: Box<dyn SecretPicker>) -> Self {
        let config = config.sanitized();
        let secret = pick_secret(picker.as_ref(), &config.words);
        info!(max_wrong = config.max_wrong, words = config.words.len(), "new game");

        Self {
            config,
            picker,
            secret,
            guessed: BTreeSet::new(),
            wrong: 0,
            status: Status::Playing,
        }
    }

    pub fn guess(&mut self, letter: char) -> Guess {
        if self.status.is_over() || !letter.is_ascii_alphabetic() {
            return Guess::Ignored;
        }

        let letter = letter.to_ascii_lowercase();
        if !self.guessed.insert(letter) {
            return Guess::Repeated;
        }

        let outcome = if self.secret.contains(letter) {
            Guess::Correct
        } else {
            self.wrong += 1;
            Guess::Wrong
        };

        if self.wrong >= self.config.max_wrong {
            self.status = Status::Lost;
        } else if self.is_revealed() {
            self.status = Status::Won;
        }

        debug!(%letter, ?outcome, wrong = self.wrong, "guess");
        if self.status.is_over() {
            info!(status = ?self.status, wrong = self.wrong, "round over");
        }

        outcome
    }

    pub fn restart(&mut self) {
        self.secret = pick_secret(self.picker.as_ref(), &self.config.words);
        self.guessed.clear();
        self.wrong = 0;
        self.status = Status::Playing;
        info!("restart");
    }

    /// The secret with every unguessed letter replaced by `_`
    pub fn masked(&self) -> String {
        self.secret
            .chars()
            .map(|c| if self.guessed.contains(&c) { c } else { '_' })
            .collect()
    }

    pub fn is_revealed(&self) -> bool {
        self.secret.chars().all(|c| self.guessed.contains(&c))
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter.to_ascii_lowercase())
    }

    pub fn wrong(&self) -> usize {
        self.wrong
    }

    pub fn remaining(&self) -> usize {
        self.config.max_wrong.saturating_sub(self.wrong)
    }

    pub fn max_wrong(&self) -> usize {
        self.config.max_wrong
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

/// The picked word goes through the same normalisation as the configured
/// words; anything unusable falls back to the first configured word.
fn pick_secret(picker: &dyn SecretPicker, words: &[String]) -> String {
    let picked = picker.pick(words).and_then(|word| normalize_words([word]).pop());
    match picked {
        Some(secret) => secret,
        None => {
            warn!("picker gave no usable word, using the first one");
            words
                .first()
                .cloned()
                .unwrap_or_else(|| DEFAULT_WORDS[0].to_string())
        }
    }
}
