#![forbid(unsafe_code)]

//! Error types
//!
//! Rendering itself cannot fail. Errors only arise while acquiring the input
//! text or writing the result.

use std::io;
use thiserror::Error;

/// Errors that can occur while resolving the text to spell
#[derive(Debug, Error)]
pub enum InputError {
    /// No positional argument and standard input is an interactive terminal
    #[error("No text provided. Use --help for more information.")]
    NoText,

    /// Standard input held nothing but whitespace
    #[error("Empty input provided.")]
    EmptyInput,

    /// Standard input could not be read
    #[error("Failed to read standard input: {0}")]
    Read(#[from] io::Error),
}

/// Top-level error returned by the command-line entry point
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("Failed to serialize token: {0}")]
    Json(#[from] serde_json::Error),
}
