use std::path::PathBuf;

use thiserror::Error;

/// Failures that can surface outside the game itself: loading words and
/// reading or writing configuration. The game logic never fails.
#[derive(Debug, Error)]
pub enum SnowmanError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not read word file {path}: {source}")]
    WordFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word file {path} contains no usable words (expected one alphabetic word per line)")]
    NoUsableWords { path: PathBuf },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SnowmanError>;
