//! A trait that can provide the [Span] of a token or syntax node within its source text

use std::fmt::{Display, Formatter};

/// A trait that can provide the [Span] of a token or syntax node
pub trait Spanned {
    fn span(&self) -> Span;
}

/// A byte range `[offset, offset + len)` within a source string
#[derive(Debug, Copy, Clone, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Span {
    offset: usize,
    len: usize,
}

impl Span {
    /// Creates a new span
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Gets a span directly after this span
    pub const fn end(&self) -> Self {
        Self {
            offset: self.offset + self.len,
            len: 0,
        }
    }

    /// Creates a span that encompasses both
    pub fn join(&self, other: Self) -> Self {
        let min = self.offset.min(other.offset);
        let max = (self.offset + self.len).max(other.offset + other.len);
        Self {
            offset: min,
            len: max - min,
        }
    }

    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Gets the 1-based line and 0-based column (in chars) of the start of this span.
    ///
    /// Offsets past the end of `src` resolve to the position directly after the last char.
    pub fn line_col(&self, src: &str) -> (usize, usize) {
        let mut line = 1usize;
        let mut col = 0usize;
        for (offset, c) in src.char_indices() {
            if offset >= self.offset {
                break;
            }
            if c == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }
}

impl Spanned for Span {
    fn span(&self) -> Span {
        *self
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.offset, self.offset + self.len)
    }
}

/// A line reader struct that's responsible for getting the lines surrounding a span
#[derive(Debug, Default)]
pub struct LineReader {
    before: usize,
    after: usize,
}

impl LineReader {
    /// Creates a new line reader that gets `before` number of lines before a span and `after` number
    /// of lines after.
    pub fn new(before: usize, after: usize) -> Self {
        Self { before, after }
    }

    /// Gets the lines for a given span, plus the base line number
    pub fn lines(&self, src: &str, span: &Span) -> (Vec<Line>, usize) {
        let (base_line, base_col) = span.line_col(src);
        let range = base_line.saturating_sub(self.before)..=base_line.saturating_add(self.after);

        let mut byte_offset = 0usize;
        let mut lines = vec![];
        for (idx, text) in src.split('\n').enumerate() {
            let line = idx + 1;
            if range.contains(&line) {
                lines.push(Line {
                    line,
                    col: if line == base_line { base_col } else { 0 },
                    byte_offset,
                    src: text.to_string(),
                });
            }
            byte_offset += text.len() + 1;
        }
        if lines.iter().all(|line| line.line != base_line) {
            // span sits past the final newline
            lines.push(Line {
                line: base_line,
                col: base_col,
                byte_offset: src.len(),
                src: String::new(),
            });
        }
        (lines, base_line)
    }
}

/// A single line of source text
#[derive(Debug)]
pub struct Line {
    pub line: usize,
    pub col: usize,
    pub byte_offset: usize,
    pub src: String,
}
