use crate::game::{Game, Status};

pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
pub const RESTART_LABEL: &str = "Restart";

/// The indexed snowman picture for the current wrong count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Illustration {
    pub index: usize,
    pub src: String,
    pub alt: String,
}

/// A letter the player can click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterTarget {
    pub letter: char,
    pub guessed: bool,
}

/// Everything the screen shows, derived from a [`Game`] and nothing else
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub masked: String,
    pub wrong_text: String,
    pub illustration: Illustration,
    pub status: Status,
    /// "You won!" / "You lose: {secret}" once the round is over
    pub banner: Option<String>,
    /// Empty once the round is over
    pub letters: Vec<LetterTarget>,
    pub restart_label: &'static str,
    pub max_wrong: usize,
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        let wrong = game.wrong();
        let illustration = Illustration {
            index: wrong,
            src: format!(
                "{}/{}.png",
                game.config().image_root.trim_end_matches('/'),
                wrong
            ),
            alt: format!("{} guesses left", game.remaining()),
        };

        let banner = match game.status() {
            Status::Playing => None,
            Status::Won => Some("You won!".to_string()),
            Status::Lost => Some(format!("You lose: {}", game.secret())),
        };

        let letters = if game.status() == Status::Playing {
            ALPHABET
                .chars()
                .map(|letter| LetterTarget {
                    letter,
                    guessed: game.has_guessed(letter),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            masked: game.masked(),
            wrong_text: format!("Wrong: {wrong}"),
            illustration,
            status: game.status(),
            banner,
            letters,
            restart_label: RESTART_LABEL,
            max_wrong: game.max_wrong(),
        }
    }
}

impl GameView {
    /// Every piece of text on screen, in reading order
    pub fn texts(&self) -> Vec<String> {
        let mut texts = vec![
            self.masked.clone(),
            self.wrong_text.clone(),
            self.illustration.alt.clone(),
        ];
        texts.extend(self.banner.clone());
        texts.extend(self.letters.iter().map(|l| l.letter.to_string()));
        texts.push(self.restart_label.to_string());
        texts
    }
}
