use std::fmt::Debug;

use clap::ValueEnum;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Strategy for choosing the secret word of a new round
pub trait SecretPicker: Debug + Send {
    /// Returns `None` only when `words` is empty.
    fn pick(&self, words: &[String]) -> Option<String>;
}

/// Always the first word; keeps rounds reproducible
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstWord;

impl SecretPicker for FirstWord {
    fn pick(&self, words: &[String]) -> Option<String> {
        words.first().cloned()
    }
}

/// Uniformly random word
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomWord;

impl SecretPicker for RandomWord {
    fn pick(&self, words: &[String]) -> Option<String> {
        let mut rng = rand::thread_rng();
        words.choose(&mut rng).cloned()
    }
}

/// Picker selection as exposed on the command line and in the config file
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
pub enum PickStrategy {
    First,
    #[default]
    Random,
}

impl PickStrategy {
    pub fn picker(&self) -> Box<dyn SecretPicker> {
        match self {
            PickStrategy::First => Box::new(FirstWord),
            PickStrategy::Random => Box::new(RandomWord),
        }
    }
}
