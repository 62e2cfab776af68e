#![forbid(unsafe_code)]

//! Turns input text into a sequence of styled phonetic tokens

use crate::alphabet::{self, Category};
use serde::Serialize;
use termcolor::{Color, ColorSpec};

/// Display style of a rendered token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Character outside the lookup table, printed as-is
    #[serde(rename = "unrecognized")]
    Plain,
    Letter,
    Digit,
    Symbol,
}

impl From<Category> for Style {
    fn from(category: Category) -> Self {
        match category {
            Category::Letter => Style::Letter,
            Category::Digit => Style::Digit,
            Category::Symbol => Style::Symbol,
        }
    }
}

impl Style {
    /// Terminal colors for this style
    ///
    /// Letters are neutral white, symbols use an alert red and digits an
    /// informational blue. Plain tokens get an empty spec.
    pub fn color_spec(self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        match self {
            Style::Plain => {}
            Style::Letter => {
                spec.set_fg(Some(Color::Rgb(0xFF, 0xFF, 0xFF)));
            }
            Style::Symbol => {
                spec.set_fg(Some(Color::Rgb(0xE2, 0x4E, 0x4E)));
            }
            Style::Digit => {
                spec.set_fg(Some(Color::Rgb(0x74, 0xA9, 0xE0)));
            }
        }
        spec
    }
}

/// One unit of output, produced for exactly one input character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderToken {
    /// The input character this token was produced from
    pub source: char,
    /// Phonetic word, or the source character itself when unrecognized
    pub text: String,
    pub style: Style,
}

impl RenderToken {
    fn from_char(c: char) -> Self {
        match alphabet::classify(c) {
            Some(entry) => RenderToken {
                source: c,
                text: entry.word.to_string(),
                style: entry.category.into(),
            },
            None => RenderToken {
                source: c,
                text: c.to_string(),
                style: Style::Plain,
            },
        }
    }
}

/// Render every character of `text` into a token
///
/// The result always has exactly `text.chars().count()` tokens, in input
/// order. Unrecognized characters are passed through with [`Style::Plain`].
pub fn render(text: &str) -> Vec<RenderToken> {
    let tokens: Vec<RenderToken> = text.chars().map(RenderToken::from_char).collect();
    log::debug!("rendered {} tokens", tokens.len());
    tokens
}
