//! Builds the abstract syntax tree from a token sequence by recursive descent

use sprig_ast::CompoundStmt;
use sprig_tokens::spanned::Spanned;
use sprig_tokens::token::{Literal, Token, TokenKind};
use tracing::{debug, instrument, trace};

pub mod error;
mod expr;
mod statement;
mod token_cursor;

pub use error::*;
pub use token_cursor::TokenCursor;

/// Parses a whole token sequence into the program it represents.
///
/// Parsing stops at the first [TokenKind::Eof], or at the end of the slice if there's none.
#[instrument(skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &[Token]) -> SyntaxResult<CompoundStmt> {
    let program = Parser::new(tokens).program()?;
    debug!("parsed {} top level statements", program.len());
    Ok(program)
}

/// How many productions may be open at once before parsing gives up
pub const MAX_NESTING: usize = 128;

/// A recursive descent parser over a borrowed token sequence.
///
/// Each grammar production is a method. Productions that might not apply return
/// `Ok(None)` without consuming anything, so errors are only raised where something is required.
#[derive(Debug)]
pub struct Parser<'t> {
    cursor: TokenCursor<'t>,
    non_terminals: Vec<&'static str>,
}

impl<'t> Parser<'t> {
    /// Creates a new parser positioned before the first token
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            non_terminals: vec![],
        }
    }

    /// Wrapper for running a production. The production name stays on the non-terminal stack
    /// of any error raised within it.
    ///
    /// Every recursive cycle of the grammar passes through here, so the stack's length bounds
    /// the recursion depth. Opening more than [MAX_NESTING] productions is an error.
    fn production<O>(
        &mut self,
        non_terminal: &'static str,
        parser: impl FnOnce(&mut Self) -> SyntaxResult<O>,
    ) -> SyntaxResult<O> {
        if self.non_terminals.len() >= MAX_NESTING {
            return Err(self.error(ErrorKind::NestingTooDeep {
                limit: MAX_NESTING,
                found: self.cursor.peek(1).cloned(),
            }));
        }
        trace!("starting parsing {non_terminal}");
        self.non_terminals.push(non_terminal);
        let result = parser(self);
        trace!(
            "after parsing {non_terminal}, next={:?}",
            self.cursor.peek(1).map(Token::kind)
        );
        if result.is_ok() {
            self.non_terminals.pop();
        }
        result
    }

    /// Creates an error at the offending token, or directly after the last token if the
    /// sequence ran out.
    fn error(&self, kind: ErrorKind) -> SyntaxError {
        let span = kind
            .found_span()
            .or_else(|| self.cursor.current().map(|token| token.span().end()));
        SyntaxError::new(kind, span, self.non_terminals.clone())
    }

    /// Consumes the next token, which must be of the given kind
    fn expect(&mut self, kind: TokenKind) -> SyntaxResult<&'t Token> {
        match self.cursor.eat(kind) {
            Some(token) => Ok(token),
            None => Err(self.error(ErrorKind::ExpectedToken {
                expected: kind,
                found: self.cursor.peek(1).cloned(),
            })),
        }
    }

    /// The payload of a token that must carry one. Payloads on kinds that never carry one are
    /// ignored.
    fn value_of(&self, token: &'t Token) -> SyntaxResult<&'t Literal> {
        token
            .value()
            .filter(|_| token.kind().has_value())
            .ok_or_else(|| self.error(ErrorKind::MissingValue(token.clone())))
    }

    /// Skips a run of statement terminators, returning how many were skipped
    fn skip_terminators(&mut self) -> usize {
        let mut skipped = 0;
        while self.cursor.is_eat(TokenKind::Semicolon) {
            skipped += 1;
        }
        skipped
    }

    /// Skips a run of terminators only if a token of `kind` follows them. Returns whether the
    /// next token is of that kind.
    fn skip_terminators_before(&mut self, kind: TokenKind) -> bool {
        let mut n = 1;
        while self.cursor.is_peek(TokenKind::Semicolon, n) {
            n += 1;
        }
        if !self.cursor.is_peek(kind, n) {
            return false;
        }
        for _ in 1..n {
            self.cursor.next();
        }
        true
    }

    /// Whether there's nothing left to parse
    fn at_end(&self) -> bool {
        !self.cursor.has_next() || self.cursor.is_peek(TokenKind::Eof, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;
    use sprig_tokens::spanned::Span;
    use test_log::test;

    #[test]
    fn test_skip_terminators_before() {
        let tokens = lex("x\n\n;else").expect("could not lex");
        let mut parser = Parser::new(&tokens);
        parser.cursor.next();
        assert!(!parser.skip_terminators_before(TokenKind::Elsif));
        assert!(parser.cursor.is_peek(TokenKind::Semicolon, 1));
        assert!(parser.skip_terminators_before(TokenKind::Else));
        assert!(parser.cursor.is_peek(TokenKind::Else, 1));
    }

    #[test]
    fn test_error_after_last_token() {
        let tokens = lex("abc").expect("could not lex");
        let tokens = &tokens[..1];
        let mut parser = Parser::new(tokens);
        parser.cursor.next();
        let error = parser
            .expect(TokenKind::RightParen)
            .expect_err("nothing left to consume");
        assert_eq!(error.span(), Some(Span::new(3, 0)));
        assert!(error.found().is_none());
    }

    #[test]
    fn test_non_terminal_stack_kept_on_error() {
        let tokens = lex("if x").expect("could not lex");
        let error = parse(&tokens).expect_err("missing paren");
        assert_eq!(error.non_terminal_stack, ["program", "statement", "if", "condition"]);
    }

    #[test]
    fn test_value_of_requires_payload_kind() {
        let bare = Token::new(Span::new(0, 1), TokenKind::Number);
        let stray = Token::with_value(Span::new(2, 1), TokenKind::Plus, Literal::Number(1.0));
        let tokens = [bare.clone(), stray.clone()];
        let parser = Parser::new(&tokens);
        let error = parser.value_of(&tokens[0]).expect_err("no payload");
        assert!(matches!(error.kind(), ErrorKind::MissingValue(t) if t == &bare));
        assert_eq!(error.span(), Some(Span::new(0, 1)));
        let error = parser.value_of(&tokens[1]).expect_err("PLUS never carries a value");
        assert!(matches!(error.kind(), ErrorKind::MissingValue(t) if t == &stray));
    }

    #[test]
    fn test_hand_built_number_without_value() {
        let tokens = [
            Token::new(Span::new(0, 1), TokenKind::Number),
            Token::new(Span::new(1, 0), TokenKind::Eof),
        ];
        let error = parse(&tokens).expect_err("number has no payload");
        assert!(matches!(error.kind(), ErrorKind::MissingValue(_)));
    }

    #[test]
    fn test_nesting_limit() {
        let src = format!("{}1", "(".repeat(10_000));
        let tokens = lex(&src).expect("could not lex");
        let error = parse(&tokens).expect_err("too deep");
        let ErrorKind::NestingTooDeep { limit, found } = error.kind() else {
            panic!("expected a nesting error, got {error}");
        };
        assert_eq!(*limit, MAX_NESTING);
        assert_eq!(found.as_ref().map(Token::kind), Some(TokenKind::LeftParen));
        assert_eq!(error.non_terminal_stack.len(), MAX_NESTING);
        assert_eq!(error.non_terminal_stack[..3], ["program", "statement", "or"]);
    }

    #[test]
    fn test_nesting_below_limit() {
        let depth = 40;
        let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        let tokens = lex(&src).expect("could not lex");
        let program = parse(&tokens).expect("could not parse");
        assert_eq!(program.len(), 1);
    }

    #[test]
    fn test_parse_without_eof() {
        let tokens = lex("a; b").expect("could not lex");
        let program = parse(&tokens[..tokens.len() - 1]).expect("could not parse");
        assert_eq!(program.len(), 2);
    }
}
