// Library surface for the binary, headless tests and reuse.
pub mod app;
pub mod app_dirs;
pub mod art;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod picker;
pub mod runtime;
pub mod ui;
pub mod view;
pub mod words;

pub use app::{App, Control};
pub use error::SnowmanError;
pub use game::{Game, GameConfig, Guess, Status};
pub use view::GameView;
