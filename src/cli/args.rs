#![forbid(unsafe_code)]

//! Command-line argument definitions

use crate::output::Layout;
use clap::{ArgAction, Parser, ValueEnum};
use termcolor::ColorChoice;

/// Convert text into the NATO phonetic alphabet
///
/// Reads the text from the first argument, or from standard input when no
/// argument is given and input is piped.
#[derive(Parser, Debug)]
#[command(name = "phonetik", version, disable_version_flag = true)]
pub struct Cli {
    /// Text to convert. Use quotes for phrases. Read from stdin if omitted
    pub text: Option<String>,

    /// Disable colored output for plain terminal compatibility
    #[arg(short, long)]
    pub plain: bool,

    /// Print all words on a single line
    #[arg(short, long)]
    pub single_line: bool,

    /// When to use colors (ignored with --plain)
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, value_name = "WHEN")]
    pub color: ColorWhen,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Print the full phonetic table and exit
    #[arg(short, long)]
    pub list: bool,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
}

/// Color policy selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    /// Color when writing to a terminal
    Auto,
    Always,
    Never,
}

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Phonetic words, optionally colored
    Human,
    /// One JSON record per character
    Jsonl,
}

impl Cli {
    /// Resolve `--plain` and `--color` into a termcolor choice
    ///
    /// `stdout_is_terminal` downgrades `auto` to no color when output is
    /// redirected.
    pub fn color_choice(&self, stdout_is_terminal: bool) -> ColorChoice {
        if self.plain {
            return ColorChoice::Never;
        }
        match self.color {
            ColorWhen::Always => ColorChoice::Always,
            ColorWhen::Never => ColorChoice::Never,
            ColorWhen::Auto if stdout_is_terminal => ColorChoice::Auto,
            ColorWhen::Auto => ColorChoice::Never,
        }
    }

    /// Layout implied by `--single-line`
    pub fn layout(&self) -> Layout {
        if self.single_line {
            Layout::SingleLine
        } else {
            Layout::Multiline
        }
    }
}
