#![forbid(unsafe_code)]

//! Human-readable output formatter with colorization support

use super::Layout;
use crate::alphabet::PhoneticEntry;
use crate::render::{RenderToken, Style};
use std::io::{self, Write};
use termcolor::{ColorChoice, StandardStream, WriteColor};

/// Human-readable output formatter
///
/// Joins token words with the separator of its [`Layout`] and terminates the
/// output with a single newline. An empty token list produces no output at
/// all. Colors only change styling, never the text written.
pub struct HumanFormatter {
    color_choice: ColorChoice,
    layout: Layout,
}

impl HumanFormatter {
    /// Creates a new HumanFormatter with the specified color choice and layout
    pub fn new(color_choice: ColorChoice, layout: Layout) -> Self {
        HumanFormatter {
            color_choice,
            layout,
        }
    }

    /// Format the tokens as uncolored text
    pub fn format(&self, tokens: &[RenderToken]) -> String {
        if tokens.is_empty() {
            return String::new();
        }

        let mut output = tokens
            .iter()
            .map(|token| token.text.as_str())
            .collect::<Vec<_>>()
            .join(self.layout.separator());
        output.push('\n');
        output
    }

    /// Write the tokens to a color-capable sink
    ///
    /// Each token is wrapped in the color of its style when the sink supports
    /// color. Separators are written uncolored.
    pub fn write<W: WriteColor>(&self, tokens: &[RenderToken], out: &mut W) -> io::Result<()> {
        if tokens.is_empty() {
            return Ok(());
        }

        for (index, token) in tokens.iter().enumerate() {
            if index > 0 {
                write!(out, "{}", self.layout.separator())?;
            }
            write_styled(out, &token.text, token.style)?;
        }
        writeln!(out)?;
        out.flush()
    }

    /// Write the tokens to stdout using the configured color choice
    pub fn write_to_stdout(&self, tokens: &[RenderToken]) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);
        self.write(tokens, &mut stdout)
    }

    /// Write the whole lookup table, one `CHAR  WORD` row per entry
    pub fn write_table<W, I>(&self, entries: I, out: &mut W) -> io::Result<()>
    where
        W: WriteColor,
        I: IntoIterator<Item = PhoneticEntry>,
    {
        for entry in entries {
            write!(out, "{}  ", entry.character)?;
            write_styled(out, entry.word, entry.category.into())?;
            writeln!(out)?;
        }
        out.flush()
    }

    /// Write the lookup table to stdout using the configured color choice
    pub fn write_table_to_stdout<I>(&self, entries: I) -> io::Result<()>
    where
        I: IntoIterator<Item = PhoneticEntry>,
    {
        let mut stdout = StandardStream::stdout(self.color_choice);
        self.write_table(entries, &mut stdout)
    }
}

fn write_styled<W: WriteColor>(out: &mut W, text: &str, style: Style) -> io::Result<()> {
    if style == Style::Plain {
        return write!(out, "{}", text);
    }
    out.set_color(&style.color_spec())?;
    write!(out, "{}", text)?;
    out.reset()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet;
    use crate::render::render;
    use termcolor::Buffer;

    fn write_plain(formatter: &HumanFormatter, tokens: &[RenderToken]) -> String {
        let mut buffer = Buffer::no_color();
        formatter.write(tokens, &mut buffer).unwrap();
        String::from_utf8(buffer.into_inner()).unwrap()
    }

    fn write_ansi(formatter: &HumanFormatter, tokens: &[RenderToken]) -> String {
        let mut buffer = Buffer::ansi();
        formatter.write(tokens, &mut buffer).unwrap();
        String::from_utf8(buffer.into_inner()).unwrap()
    }

    /// Drops ANSI escape sequences of the form `ESC [ ... m`
    fn strip_ansi(s: &str) -> String {
        let mut output = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for inner in chars.by_ref() {
                    if inner == 'm' {
                        break;
                    }
                }
            } else {
                output.push(c);
            }
        }
        output
    }

    #[test]
    fn test_format_multiline() {
        let formatter = HumanFormatter::new(ColorChoice::Never, Layout::Multiline);
        let output = formatter.format(&render("SOS"));
        assert_eq!(output, "Sierra\nOscar\nSierra\n");
    }

    #[test]
    fn test_format_single_line() {
        let formatter = HumanFormatter::new(ColorChoice::Never, Layout::SingleLine);
        let output = formatter.format(&render("A1@"));
        assert_eq!(output, "Alpha One At\n");
    }

    #[test]
    fn test_format_empty_produces_nothing() {
        let formatter = HumanFormatter::new(ColorChoice::Never, Layout::Multiline);
        assert_eq!(formatter.format(&[]), "");
        assert_eq!(write_plain(&formatter, &[]), "");
        assert_eq!(write_ansi(&formatter, &[]), "");
    }

    #[test]
    fn test_format_unrecognized_passthrough() {
        let formatter = HumanFormatter::new(ColorChoice::Never, Layout::Multiline);
        let output = formatter.format(&render("a-b c"));
        assert_eq!(output, "Alpha\nDash\nBravo\n \nCharlie\n");
    }

    #[test]
    fn test_single_line_has_no_line_breaks_between_words() {
        let formatter = HumanFormatter::new(ColorChoice::Never, Layout::SingleLine);
        let output = formatter.format(&render("Hello42"));
        let body = output.strip_suffix('\n').unwrap();
        assert!(!body.contains('\n'));
        assert_eq!(body.split(' ').count(), 7);
    }

    #[test]
    fn test_multiline_has_one_word_per_line() {
        let formatter = HumanFormatter::new(ColorChoice::Never, Layout::Multiline);
        let tokens = render("Whiskey9!");
        let output = formatter.format(&tokens);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), tokens.len());
        for (line, token) in lines.iter().zip(&tokens) {
            assert_eq!(*line, token.text);
        }
    }

    #[test]
    fn test_write_without_color_matches_format() {
        let tokens = render("Call me @ 555-0199.");
        for layout in [Layout::Multiline, Layout::SingleLine] {
            let formatter = HumanFormatter::new(ColorChoice::Never, layout);
            assert_eq!(write_plain(&formatter, &tokens), formatter.format(&tokens));
        }
    }

    #[test]
    fn test_colored_output_has_same_content() {
        let tokens = render("A1@ z");
        for layout in [Layout::Multiline, Layout::SingleLine] {
            let formatter = HumanFormatter::new(ColorChoice::Always, layout);
            let colored = write_ansi(&formatter, &tokens);
            assert!(colored.contains('\x1b'), "expected escape codes in {:?}", colored);
            assert_eq!(strip_ansi(&colored), formatter.format(&tokens));
        }
    }

    #[test]
    fn test_colored_output_uses_category_colors() {
        let formatter = HumanFormatter::new(ColorChoice::Always, Layout::SingleLine);
        let colored = write_ansi(&formatter, &render("A1@"));
        assert!(colored.contains("38;2;255;255;255"));
        assert!(colored.contains("38;2;116;169;224"));
        assert!(colored.contains("38;2;226;78;78"));
    }

    #[test]
    fn test_plain_tokens_are_not_colored() {
        let formatter = HumanFormatter::new(ColorChoice::Always, Layout::SingleLine);
        let colored = write_ansi(&formatter, &render(" "));
        assert_eq!(colored, " \n");
    }

    #[test]
    fn test_write_table() {
        let formatter = HumanFormatter::new(ColorChoice::Never, Layout::Multiline);
        let mut buffer = Buffer::no_color();
        formatter
            .write_table(alphabet::entries(), &mut buffer)
            .unwrap();
        let output = String::from_utf8(buffer.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), alphabet::entries().count());
        assert_eq!(lines[0], "A  Alpha");
        assert!(lines.contains(&"@  At"));
        assert_eq!(lines[lines.len() - 1], "9  Nine");
    }

    #[test]
    fn test_formatter_with_different_color_choices() {
        let _never = HumanFormatter::new(ColorChoice::Never, Layout::Multiline);
        let _always = HumanFormatter::new(ColorChoice::Always, Layout::SingleLine);
        let _auto = HumanFormatter::new(ColorChoice::Auto, Layout::default());
    }
}
