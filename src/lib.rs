#![forbid(unsafe_code)]

//! Phonetik: spell text in the NATO phonetic alphabet
//!
//! Each input character is classified as a letter, digit or symbol and
//! replaced by its phonetic word. Characters outside the table pass through
//! unchanged so the output always has one token per input character.

pub mod alphabet;
pub mod cli;
pub mod error;
pub mod output;
pub mod render;

pub use alphabet::{Category, PhoneticEntry, classify};
pub use error::{Error, InputError};
pub use render::{RenderToken, Style, render};
