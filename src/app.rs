use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use tracing::debug;

use crate::{
    game::{Game, GameConfig, Guess},
    picker::PickStrategy,
    runtime::SnowmanEvent,
    ui::{layout, Target},
    view::GameView,
};

/// What the event loop should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// The game component: owns one [`Game`] and turns terminal events into
/// guesses and restarts.
#[derive(Debug)]
pub struct App {
    pub game: Game,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Game::default())
    }
}

impl App {
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    pub fn from_config(config: GameConfig, pick: PickStrategy) -> Self {
        Self::new(Game::with_picker(config, pick.picker()))
    }

    pub fn view(&self) -> GameView {
        GameView::from(&self.game)
    }

    /// `area` must be the area the board was last drawn into so that
    /// mouse positions resolve to the targets on screen.
    pub fn handle_event(&mut self, event: SnowmanEvent, area: Rect) -> Control {
        match event {
            SnowmanEvent::Key(key) => self.on_key(key),
            SnowmanEvent::Mouse(mouse) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                    self.click(mouse.column, mouse.row, area);
                }
                Control::Continue
            }
            SnowmanEvent::Resize | SnowmanEvent::Tick => Control::Continue,
        }
    }

    /// Activates whatever target sits at (`column`, `row`)
    pub fn click(&mut self, column: u16, row: u16, area: Rect) -> Option<Target> {
        let target = layout(area, &self.view()).target_at(column, row)?;
        debug!(?target, column, row, "click");
        self.activate(target);
        Some(target)
    }

    pub fn activate(&mut self, target: Target) {
        match target {
            Target::Letter(letter) => {
                self.guess(letter);
            }
            Target::Restart => self.game.restart(),
        }
    }

    pub fn guess(&mut self, letter: char) -> Guess {
        self.game.guess(letter)
    }

    fn on_key(&mut self, key: KeyEvent) -> Control {
        if key.kind != KeyEventKind::Press {
            return Control::Continue;
        }

        match key.code {
            KeyCode::Esc => Control::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Control::Quit,
            KeyCode::Enter => {
                self.game.restart();
                Control::Continue
            }
            KeyCode::Char(c) => {
                self.guess(c);
                Control::Continue
            }
            _ => Control::Continue,
        }
    }
}
