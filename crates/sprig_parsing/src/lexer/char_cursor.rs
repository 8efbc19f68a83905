//! A forward cursor over the chars of a source string

/// A forward cursor over the chars of a source string.
///
/// The cursor starts *before* the first char; the first call to [next](Iterator::next) moves onto
/// it. Reads past either end degrade to `None` instead of failing.
#[derive(Debug, Clone)]
pub struct CharCursor<'s> {
    source: &'s str,
    /// byte offset of the current char
    position: Option<usize>,
}

impl<'s> CharCursor<'s> {
    /// Creates a new cursor positioned before the first char of `source`
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            position: None,
        }
    }

    /// The char most recently returned by [next](Iterator::next)
    pub fn current(&self) -> Option<char> {
        self.source.get(self.position?..)?.chars().next()
    }

    /// Whether there's another char after the current one
    pub fn has_next(&self) -> bool {
        self.end() < self.source.len()
    }

    /// Gets the char `n` positions after the current one without advancing. `peek(1)` is the char
    /// the next call to [next](Iterator::next) would return.
    pub fn peek(&self, n: usize) -> Option<char> {
        match n {
            0 => self.current(),
            n => self.source.get(self.end()..)?.chars().nth(n - 1),
        }
    }

    /// Whether the char `n` positions ahead is `c`
    pub fn is_peek(&self, c: char, n: usize) -> bool {
        self.peek(n) == Some(c)
    }

    /// Advances past the next char only if it is `c`
    pub fn is_eat(&mut self, c: char) -> bool {
        if self.is_peek(c, 1) {
            self.next();
            true
        } else {
            false
        }
    }

    /// The source text starting at the current char
    pub fn remaining(&self) -> &'s str {
        &self.source[self.offset()..]
    }

    /// Advances over a run of `len` bytes that starts at the current char, leaving the cursor on
    /// the last char of the run.
    pub fn skip_run(&mut self, len: usize) {
        let start = self.offset();
        let end = (start + len).min(self.source.len());
        if let Some((last, _)) = self.source[start..end].char_indices().next_back() {
            self.position = Some(start + last);
        }
    }

    /// Byte offset of the current char
    pub fn offset(&self) -> usize {
        self.position.unwrap_or(0)
    }

    /// Byte offset directly after the current char
    pub fn end(&self) -> usize {
        match self.position {
            None => 0,
            Some(position) => position + self.current().map_or(0, char::len_utf8),
        }
    }

    /// The whole source this cursor reads from
    pub fn source(&self) -> &'s str {
        self.source
    }
}

impl Iterator for CharCursor<'_> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.end();
        let c = self.source.get(offset..)?.chars().next()?;
        self.position = Some(offset);
        Some(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_before_first_char() {
        let cursor = CharCursor::new("ab");
        assert_eq!(cursor.current(), None);
        assert!(cursor.has_next());
        assert_eq!(cursor.peek(1), Some('a'));
        assert_eq!(cursor.peek(2), Some('b'));
        assert_eq!(cursor.peek(3), None);
    }

    #[test]
    fn test_next_until_exhausted() {
        let mut cursor = CharCursor::new("ab");
        assert_eq!(cursor.next(), Some('a'));
        assert!(cursor.has_next());
        assert_eq!(cursor.next(), Some('b'));
        assert!(!cursor.has_next());
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.current(), Some('b'));
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = CharCursor::new("");
        assert!(!cursor.has_next());
        assert_eq!(cursor.peek(1), None);
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.remaining(), "");
    }

    #[test]
    fn test_is_eat() {
        let mut cursor = CharCursor::new("+=1");
        assert_eq!(cursor.next(), Some('+'));
        assert!(!cursor.is_eat('1'));
        assert_eq!(cursor.current(), Some('+'));
        assert!(cursor.is_eat('='));
        assert_eq!(cursor.current(), Some('='));
        assert!(cursor.is_peek('1', 1));
    }

    #[test]
    fn test_skip_run_leaves_cursor_on_last_char() {
        let mut cursor = CharCursor::new("abc+d");
        cursor.next();
        assert_eq!(cursor.remaining(), "abc+d");
        cursor.skip_run(3);
        assert_eq!(cursor.current(), Some('c'));
        assert_eq!(cursor.end(), 3);
        assert_eq!(cursor.next(), Some('+'));
    }

    #[test]
    fn test_multibyte_chars() {
        let mut cursor = CharCursor::new("é1");
        assert_eq!(cursor.next(), Some('é'));
        assert_eq!(cursor.end(), 2);
        assert_eq!(cursor.peek(1), Some('1'));
        assert_eq!(cursor.next(), Some('1'));
        assert_eq!(cursor.offset(), 2);
    }
}
