use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::Result;

/// Environment variable holding the log filter, e.g. `SNOWMAN_LOG=debug`
pub const LOG_ENV: &str = "SNOWMAN_LOG";

/// Installs the global subscriber, appending plain-text events to `path`.
/// The terminal belongs to the TUI, so nothing is ever written to stdout.
///
/// Returns `Ok(false)` when a subscriber was already installed.
pub fn init(path: &Path) -> Result<bool> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok();

    Ok(installed)
}
