//! CLI argument parsing and input resolution

pub mod args;
pub mod input;

// Re-export types for convenient access
pub use args::{Cli, ColorWhen, OutputFormat};
pub use input::resolve_text;
