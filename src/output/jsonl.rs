#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per token, in input order:
//!
//! ```text
//! {"char":"A","text":"Alpha","category":"letter"}
//! {"char":" ","text":" ","category":"unrecognized"}
//! ```

use crate::render::{RenderToken, Style};
use serde::Serialize;
use std::io::Write;

/// JSONL output formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format the tokens as JSONL
    ///
    /// Returns an empty string when there are no tokens.
    pub fn format(&self, tokens: &[RenderToken]) -> Result<String, serde_json::Error> {
        let mut output = String::new();
        for token in tokens {
            output.push_str(&serde_json::to_string(&TokenRecord::from(token))?);
            output.push('\n');
        }
        Ok(output)
    }

    /// Write the tokens as JSONL to stdout
    pub fn write_to_stdout(&self, tokens: &[RenderToken]) -> Result<(), crate::Error> {
        let output = self.format(tokens)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Token record for JSONL output
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    #[serde(rename = "char")]
    source: char,
    text: &'a str,
    category: Style,
}

impl<'a> From<&'a RenderToken> for TokenRecord<'a> {
    fn from(token: &'a RenderToken) -> Self {
        TokenRecord {
            source: token.source,
            text: &token.text,
            category: token.style,
        }
    }
}
