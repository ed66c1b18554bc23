use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use unicode_width::UnicodeWidthStr;

use crate::{
    art::{frame, frame_index, FRAME_HEIGHT},
    game::Status,
    view::GameView,
    App,
};

const HORIZONTAL_MARGIN: u16 = 2;
const VERTICAL_MARGIN: u16 = 1;
const LETTERS_PER_ROW: usize = 13;
const LETTER_WIDTH: u16 = 3;
const LETTER_GAP: u16 = 1;
const LEGEND: &str = "click or type letters / (enter) restart / (esc)ape";

/// Something on the board that reacts to a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Letter(char),
    Restart,
}

/// Where every part of the board goes for a given area. Rendering and
/// mouse hit testing share this so clicks land on what is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    pub art: Rect,
    pub caption: Rect,
    pub masked: Rect,
    pub wrong: Rect,
    pub controls: Rect,
    pub letters: Vec<(char, Rect)>,
    pub restart: Rect,
    pub legend: Rect,
}

impl BoardLayout {
    pub fn target_at(&self, column: u16, row: u16) -> Option<Target> {
        let hit = |rect: &Rect| {
            column >= rect.x
                && column < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height
        };

        if let Some((letter, _)) = self.letters.iter().find(|(_, rect)| hit(rect)) {
            return Some(Target::Letter(*letter));
        }
        hit(&self.restart).then_some(Target::Restart)
    }
}

pub fn layout(area: Rect, view: &GameView) -> BoardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(FRAME_HEIGHT), // art
            Constraint::Length(1),            // caption
            Constraint::Length(1),            // padding
            Constraint::Length(1),            // masked word
            Constraint::Length(1),            // wrong count
            Constraint::Length(1),            // padding
            Constraint::Length(2),            // letters or banner
            Constraint::Length(1),            // padding
            Constraint::Length(1),            // restart
            Constraint::Min(0),
            Constraint::Length(1), // legend
        ])
        .split(area);

    let controls = chunks[6];
    let letters = view
        .letters
        .iter()
        .enumerate()
        .map(|(idx, target)| {
            let row = (idx / LETTERS_PER_ROW) as u16;
            let col = (idx % LETTERS_PER_ROW) as u16;
            let in_row = view.letters.len().min(LETTERS_PER_ROW) as u16;
            let row_width = in_row * (LETTER_WIDTH + LETTER_GAP) - LETTER_GAP;
            let x = controls.x
                + controls.width.saturating_sub(row_width) / 2
                + col * (LETTER_WIDTH + LETTER_GAP);
            let rect = Rect::new(x, controls.y + row, LETTER_WIDTH, 1).intersection(controls);
            (target.letter, rect)
        })
        // letters pushed off a narrow screen are not clickable
        .filter(|(_, rect)| !rect.is_empty())
        .collect();

    BoardLayout {
        art: chunks[0],
        caption: chunks[1],
        masked: chunks[3],
        wrong: chunks[4],
        controls,
        letters,
        restart: centered(chunks[8], view.restart_label.width() as u16 + 2),
        legend: chunks[10],
    }
}

fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view = self.view();
        let board = layout(area, &view);

        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);
        let art_style = Style::default().fg(Color::White);

        let art = frame(frame_index(view.illustration.index, view.max_wrong))
            .iter()
            .map(|line| Line::from(Span::styled(*line, art_style)))
            .collect::<Vec<Line>>();
        Paragraph::new(art)
            .alignment(Alignment::Center)
            .render(board.art, buf);

        Paragraph::new(Span::styled(view.illustration.alt.as_str(), italic_style))
            .alignment(Alignment::Center)
            .render(board.caption, buf);

        Paragraph::new(Span::styled(
            view.masked.as_str(),
            bold_style.fg(Color::Cyan),
        ))
        .alignment(Alignment::Center)
        .render(board.masked, buf);

        let wrong_style = if view.illustration.index == 0 {
            bold_style
        } else {
            bold_style.fg(Color::Red)
        };
        Paragraph::new(Span::styled(view.wrong_text.as_str(), wrong_style))
            .alignment(Alignment::Center)
            .render(board.wrong, buf);

        match (&view.banner, view.status) {
            (Some(banner), status) => {
                let color = if status == Status::Won {
                    Color::Green
                } else {
                    Color::Red
                };
                Paragraph::new(Span::styled(banner.as_str(), bold_style.fg(color)))
                    .alignment(Alignment::Center)
                    .render(board.controls, buf);
            }
            (None, _) => {
                for (letter, rect) in &board.letters {
                    let guessed = view
                        .letters
                        .iter()
                        .any(|target| target.letter == *letter && target.guessed);
                    let style = if guessed {
                        dim_style
                    } else {
                        bold_style
                    };
                    Paragraph::new(Span::styled(format!("[{letter}]"), style)).render(*rect, buf);
                }
            }
        }

        Paragraph::new(Span::styled(
            format!("[{}]", view.restart_label),
            bold_style.fg(Color::Yellow),
        ))
        .render(board.restart, buf);

        Paragraph::new(Span::styled(LEGEND, italic_style.fg(Color::Gray)))
            .alignment(Alignment::Center)
            .render(board.legend, buf);
    }
}
