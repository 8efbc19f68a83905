//! Responsible with converting source text into a token sequence

use crate::lexer::token_parsing::{match_identifier, match_number};
use sprig_tokens::spanned::{Span, Spanned};
use sprig_tokens::token::{Literal, Token, TokenKind};
use thiserror::Error;
use tracing::{debug, instrument, trace};

mod char_cursor;
mod token_parsing;

pub use char_cursor::CharCursor;

/// Lexes a whole source string. The returned tokens always end with a single [TokenKind::Eof].
#[instrument(skip_all, fields(len = src.len()))]
pub fn lex(src: &str) -> LexResult<Vec<Token>> {
    let tokens = Lexer::new(src).collect::<LexResult<Vec<_>>>()?;
    debug!("lexed {} tokens", tokens.len());
    Ok(tokens)
}

/// Responsible with converting a source string into a token stream.
///
/// Yields tokens up to and including [TokenKind::Eof], then stops.
#[derive(Debug)]
pub struct Lexer<'s> {
    cursor: CharCursor<'s>,
    finished: bool,
}

impl<'s> Lexer<'s> {
    /// Creates a new lexer
    pub fn new(src: &'s str) -> Self {
        Self {
            cursor: CharCursor::new(src),
            finished: false,
        }
    }

    fn next_token(&mut self) -> LexResult<Option<Token>> {
        loop {
            let Some(c) = self.cursor.next() else {
                if self.finished {
                    return Ok(None);
                }
                self.finished = true;
                let eof = Span::new(self.cursor.source().len(), 0);
                return Ok(Some(Token::new(eof, TokenKind::Eof)));
            };
            let start = self.cursor.offset();
            let kind = match c {
                ' ' | '\r' | '\t' => continue,
                '#' => {
                    self.skip_comment();
                    continue;
                }
                '(' => TokenKind::LeftParen,
                ')' => TokenKind::RightParen,
                '{' => TokenKind::LeftBrace,
                '}' => TokenKind::RightBrace,
                ',' => TokenKind::Comma,
                '!' => TokenKind::Not,
                '-' => self.with_equal(TokenKind::Minus, TokenKind::MinusEqual),
                '+' => self.with_equal(TokenKind::Plus, TokenKind::PlusEqual),
                '/' => self.with_equal(TokenKind::Divide, TokenKind::DivEqual),
                '*' => self.with_equal(TokenKind::Multiply, TokenKind::MultEqual),
                '=' => self.with_equal(TokenKind::Equal, TokenKind::EqualEqual),
                '>' => self.with_equal(TokenKind::Greater, TokenKind::GreaterEqual),
                '<' => self.with_equal(TokenKind::Less, TokenKind::LessEqual),
                '.' => match self.number(start) {
                    Some(token) => return Ok(Some(token)),
                    None => TokenKind::Dot,
                },
                '"' => return Ok(Some(self.string(start))),
                '\n' | ';' => TokenKind::Semicolon,
                c => return self.number_or_word(c, start).map(Some),
            };
            return Ok(Some(Token::new(self.span_from(start), kind)));
        }
    }

    /// Span from `start` through the current char
    fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.cursor.end() - start)
    }

    fn with_equal(&mut self, bare: TokenKind, with_equal: TokenKind) -> TokenKind {
        if self.cursor.is_eat('=') {
            with_equal
        } else {
            bare
        }
    }

    fn skip_comment(&mut self) {
        while self.cursor.peek(1).is_some_and(|c| c != '\n') {
            self.cursor.next();
        }
    }

    fn string(&mut self, start: usize) -> Token {
        let mut value = String::new();
        while let Some(c) = self.cursor.next() {
            match c {
                '"' => break,
                '\\' => match self.cursor.next() {
                    // line continuation
                    Some('\n') | None => {}
                    Some('r') => value.push('\r'),
                    Some('t') => value.push('\t'),
                    Some(escaped) => value.push(escaped),
                },
                c => value.push(c),
            }
        }
        trace!("string literal {value:?}");
        Token::with_value(
            self.span_from(start),
            TokenKind::String,
            Literal::String(value),
        )
    }

    /// Every match of the number pattern is a valid float, so a failed parse is treated as
    /// no match.
    fn number(&mut self, start: usize) -> Option<Token> {
        let text = match_number(self.cursor.remaining())?;
        let value = text.parse::<f64>().ok()?;
        self.cursor.skip_run(text.len());
        Some(Token::with_value(
            self.span_from(start),
            TokenKind::Number,
            Literal::Number(value),
        ))
    }

    fn number_or_word(&mut self, c: char, start: usize) -> LexResult<Token> {
        if let Some(token) = self.number(start) {
            return Ok(token);
        }
        let Some(word) = match_identifier(self.cursor.remaining()) else {
            return Err(LexingError::UnknownToken(c, self.span_from(start)));
        };
        self.cursor.skip_run(word.len());
        let span = self.span_from(start);
        let token = match TokenKind::keyword(&word.to_lowercase()) {
            Some(keyword) => Token::new(span, keyword),
            None => Token::with_value(span, TokenKind::Symbol, Literal::Symbol(word.to_string())),
        };
        Ok(token)
    }
}

impl Iterator for Lexer<'_> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.next_token().transpose();
        if let Some(Ok(token)) = &next {
            trace!("lexed {token} at {}", token.span());
        }
        next
    }
}

pub type LexResult<T> = Result<T, LexingError>;

#[derive(Debug, Error)]
pub enum LexingError {
    /// A char that starts no token
    #[error("unknown token {0:?} at {1}")]
    UnknownToken(char, Span),
}

impl LexingError {
    /// Where in the source this error occurred
    pub fn span(&self) -> Span {
        match self {
            LexingError::UnknownToken(_, span) => *span,
        }
    }
}
