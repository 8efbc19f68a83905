//! Tokens, spans, and literal values shared by the sprig lexer, parser and syntax tree.

use crate::spanned::{LineReader, Span};
use std::fmt::{Display, Formatter, Write};

pub mod spanned;
pub mod token;

/// An error with a location
#[derive(Debug, thiserror::Error)]
pub struct SpannedError<E> {
    error: E,
    location: Option<Span>,
}

impl<E> SpannedError<E> {
    pub fn new(error: E, location: impl Into<Option<Span>>) -> Self {
        Self {
            error,
            location: location.into(),
        }
    }

    /// Gets the inner error
    pub fn error(&self) -> &E {
        &self.error
    }

    /// Gets where the error occurred, if known
    pub fn location(&self) -> Option<Span> {
        self.location
    }
}

impl<E: Display> SpannedError<E> {
    /// Renders this error along with the lines of `src` surrounding its location
    pub fn render(&self, src: &str) -> String {
        Rendered { error: self, src }.to_string()
    }

    /// Writes the rendering of this error into `f`
    pub fn render_into(&self, f: &mut impl Write, src: &str) -> std::fmt::Result {
        writeln!(f, "{}", self.error)?;
        if let Some(location) = &self.location {
            let (lines, base_line) = LineReader::new(2, 2).lines(src, location);
            let col = lines
                .iter()
                .find(|line| line.line == base_line)
                .map(|line| line.col)
                .unwrap_or(0);
            writeln!(f, "  -> {base_line}:{col}")?;
            let width = lines.iter().map(|line| line.line).max().unwrap_or(0) / 10 + 1;
            for line in &lines {
                writeln!(f, "{:width$} | {}", line.line, line.src.trim_end())?;
                if line.line == base_line {
                    if !location.is_empty() {
                        writeln!(
                            f,
                            "{}{}{}",
                            " ".repeat(width + 3),
                            " ".repeat(line.col),
                            "~".repeat(location.len())
                        )?;
                    } else {
                        writeln!(f, "{}{}^", " ".repeat(width + 3), "-".repeat(line.col))?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl<E: Display> Display for SpannedError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)?;
        if let Some(location) = &self.location {
            write!(f, " at {location}")?;
        }
        Ok(())
    }
}

/// Displays a [SpannedError] together with its source
struct Rendered<'a, E> {
    error: &'a SpannedError<E>,
    src: &'a str,
}

impl<E: Display> Display for Rendered<'_, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.error.render_into(f, self.src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_location() {
        let error = SpannedError::new("bad thing", Span::new(4, 1));
        assert_eq!(error.to_string(), "bad thing at 4..5");
        let error = SpannedError::new("bad thing", None);
        assert_eq!(error.to_string(), "bad thing");
    }

    #[test]
    fn test_render() {
        let src = "a = 1\nb = @\nc = 3";
        let error = SpannedError::new("unknown token '@'", Span::new(10, 1));
        let rendered = error.render(src);
        let expected = "\
unknown token '@'
  -> 2:4
1 | a = 1
2 | b = @
        ~
3 | c = 3
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_into_appends() {
        let error = SpannedError::new("bad", None);
        let mut out = String::from("> ");
        error.render_into(&mut out, "").expect("could not render");
        assert_eq!(out, "> bad\n");
    }

    #[test]
    fn test_render_empty_span() {
        let src = "f(";
        let error = SpannedError::new("expected expression", Span::new(2, 0));
        let rendered = error.render(src);
        assert!(rendered.ends_with("1 | f(\n    --^\n"), "{rendered}");
    }
}
