#![forbid(unsafe_code)]

//! Resolves the text to spell from the argument or standard input

use crate::error::InputError;
use std::io::Read;

/// Pick the input text from exactly one source
///
/// An explicit argument is used as-is, including the empty string. Otherwise
/// `stdin` is read to the end with trailing whitespace removed, unless it is
/// an interactive terminal, in which case there is nothing to read.
pub fn resolve_text<R: Read>(
    arg: Option<String>,
    stdin: &mut R,
    stdin_is_terminal: bool,
) -> Result<String, InputError> {
    if let Some(text) = arg {
        log::debug!("using text from argument ({} bytes)", text.len());
        return Ok(text);
    }

    if stdin_is_terminal {
        return Err(InputError::NoText);
    }

    let mut buffer = String::new();
    stdin.read_to_string(&mut buffer)?;
    let text = buffer.trim_end();
    if text.is_empty() {
        return Err(InputError::EmptyInput);
    }

    log::debug!("using text from stdin ({} bytes)", text.len());
    Ok(text.to_string())
}
