//! A forward cursor over a lexed token sequence

use sprig_tokens::token::{Token, TokenKind};

/// A forward cursor over a borrowed token sequence.
///
/// Like [CharCursor](crate::lexer::CharCursor), it starts before the first token and lookahead
/// is counted from the current token, so `peek(1)` is the token [next](Iterator::next) returns.
#[derive(Debug, Clone)]
pub struct TokenCursor<'t> {
    tokens: &'t [Token],
    /// number of tokens consumed
    consumed: usize,
}

impl<'t> TokenCursor<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            consumed: 0,
        }
    }

    /// The most recently consumed token
    pub fn current(&self) -> Option<&'t Token> {
        self.tokens.get(self.consumed.checked_sub(1)?)
    }

    pub fn has_next(&self) -> bool {
        self.consumed < self.tokens.len()
    }

    /// Gets the token `n` positions after the current one, `None` past the end
    pub fn peek(&self, n: usize) -> Option<&'t Token> {
        match n {
            0 => self.current(),
            n => self.tokens.get(self.consumed + n - 1),
        }
    }

    /// Whether the token `n` positions ahead is of the given kind
    pub fn is_peek(&self, kind: TokenKind, n: usize) -> bool {
        self.peek(n).is_some_and(|token| token.kind() == kind)
    }

    /// Consumes the next token only if it's of the given kind
    pub fn eat(&mut self, kind: TokenKind) -> Option<&'t Token> {
        if self.is_peek(kind, 1) {
            self.next()
        } else {
            None
        }
    }

    /// Consumes the next token only if it's of the given kind, returning whether it did
    pub fn is_eat(&mut self, kind: TokenKind) -> bool {
        self.eat(kind).is_some()
    }

    /// Consumes the next token if its kind is one of `kinds`
    pub fn eat_any(&mut self, kinds: &[TokenKind]) -> Option<&'t Token> {
        let next = self.peek(1)?;
        if kinds.contains(&next.kind()) {
            self.next()
        } else {
            None
        }
    }
}

impl<'t> Iterator for TokenCursor<'t> {
    type Item = &'t Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.get(self.consumed)?;
        self.consumed += 1;
        Some(token)
    }
}
