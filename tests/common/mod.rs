// Headless stand-in for a rendered game: draws the app into a TestBackend,
// finds text on screen, and clicks it with real mouse events.
#![allow(dead_code)]

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};
use snowman::{picker::PickStrategy, runtime::SnowmanEvent, App, GameConfig};

pub const MAX_WRONG: usize = 4;
pub const WIDTH: u16 = 80;
pub const HEIGHT: u16 = 24;

pub struct RenderedGame {
    pub app: App,
    terminal: Terminal<TestBackend>,
}

impl RenderedGame {
    pub fn render(app: App) -> Self {
        let terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        let mut game = Self { app, terminal };
        game.draw();
        game
    }

    /// `max_wrong = 4`, the only word is "apple"
    pub fn apple() -> Self {
        Self::render(App::from_config(
            GameConfig::new(["apple"], MAX_WRONG),
            PickStrategy::First,
        ))
    }

    pub fn area(&self) -> Rect {
        Rect::new(0, 0, WIDTH, HEIGHT)
    }

    fn draw(&mut self) {
        let app = &self.app;
        self.terminal
            .draw(|f| f.render_widget(app, f.area()))
            .unwrap();
    }

    pub fn rows(&self) -> Vec<String> {
        let buffer = self.terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area().width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    /// Position of `text` standing on its own: bounded by the screen edge,
    /// whitespace, or the brackets around a target.
    pub fn query_by_text(&self, text: &str) -> Option<(u16, u16)> {
        let is_boundary = |c: Option<char>| c.map_or(true, |c| c.is_whitespace() || c == '[' || c == ']');

        for (y, row) in self.rows().iter().enumerate() {
            for (x, _) in row.match_indices(text) {
                let before = row[..x].chars().last();
                let after = row[x + text.len()..].chars().next();
                if is_boundary(before) && is_boundary(after) {
                    return Some((x as u16, y as u16));
                }
            }
        }
        None
    }

    pub fn get_by_text(&self, text: &str) -> (u16, u16) {
        self.query_by_text(text).unwrap_or_else(|| {
            panic!(
                "unable to find {text:?} on screen:\n{}",
                self.rows().join("\n")
            )
        })
    }

    pub fn has_text(&self, text: &str) -> bool {
        self.query_by_text(text).is_some()
    }

    /// The caption of the illustration plays the role of its alt text
    pub fn has_alt_text(&self, alt: &str) -> bool {
        self.has_text(alt) && self.app.view().illustration.alt == alt
    }

    pub fn image_src(&self) -> String {
        self.app.view().illustration.src
    }

    pub fn click(&mut self, text: &str) {
        let (column, row) = self.get_by_text(text);
        let event = SnowmanEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
        let area = self.area();
        self.app.handle_event(event, area);
        self.draw();
    }

    pub fn click_letters(&mut self, letters: &str) {
        for letter in letters.chars() {
            self.click(&letter.to_string());
        }
    }
}
