//! Output formatters for rendered tokens

pub mod human;
pub mod jsonl;

pub use human::HumanFormatter;
pub use jsonl::JsonlFormatter;

/// How tokens are joined in human-readable output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// One word per line
    #[default]
    Multiline,
    /// All words on one line, separated by spaces
    SingleLine,
}

impl Layout {
    /// Separator placed between consecutive tokens
    pub fn separator(self) -> &'static str {
        match self {
            Layout::Multiline => "\n",
            Layout::SingleLine => " ",
        }
    }
}
