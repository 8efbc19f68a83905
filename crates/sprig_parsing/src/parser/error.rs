use sprig_tokens::spanned::{Span, Spanned};
use sprig_tokens::token::{Token, TokenKind};
use sprig_tokens::SpannedError;
use std::fmt::{Display, Formatter};

/// Represents an error occurring during parsing
#[derive(Debug, thiserror::Error)]
pub struct SyntaxError {
    pub kind: SpannedError<ErrorKind>,
    pub non_terminal_stack: Vec<&'static str>,
}

impl SyntaxError {
    /// Creates a new error
    pub fn new(
        kind: ErrorKind,
        location: impl Into<Option<Span>>,
        non_terminals: Vec<&'static str>,
    ) -> Self {
        Self {
            kind: SpannedError::new(kind, location),
            non_terminal_stack: non_terminals,
        }
    }

    /// Gets the kind of this error
    pub fn kind(&self) -> &ErrorKind {
        self.kind.error()
    }

    /// Gets the token found where something else was expected, `None` if the tokens ran out
    pub fn found(&self) -> Option<&Token> {
        match self.kind() {
            ErrorKind::ExpectedStatement(found)
            | ErrorKind::ExpectedToken { found, .. }
            | ErrorKind::ExpectedExpression { found, .. }
            | ErrorKind::NestingTooDeep { found, .. } => found.as_ref(),
            ErrorKind::MissingValue(token) => Some(token),
        }
    }

    /// Where in the source this error occurred
    pub fn span(&self) -> Option<Span> {
        self.kind.location()
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "syntax error: {}", self.kind)
    }
}

/// [SyntaxError] kind
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("expected a statement, found {}", describe(.0))]
    ExpectedStatement(Option<Token>),
    #[error("expected {expected}, found {}", describe(.found))]
    ExpectedToken {
        expected: TokenKind,
        found: Option<Token>,
    },
    #[error("expected an expression after {after}, found {}", describe(.found))]
    ExpectedExpression {
        after: TokenKind,
        found: Option<Token>,
    },
    /// A literal or symbol token without its payload, only possible for hand built tokens
    #[error("{0} token is missing its value")]
    MissingValue(Token),
    #[error("productions nested deeper than {limit} levels at {}", describe(.found))]
    NestingTooDeep { limit: usize, found: Option<Token> },
}

impl ErrorKind {
    /// The span of the offending token, if there is one
    pub(crate) fn found_span(&self) -> Option<Span> {
        match self {
            ErrorKind::ExpectedStatement(found)
            | ErrorKind::ExpectedToken { found, .. }
            | ErrorKind::ExpectedExpression { found, .. }
            | ErrorKind::NestingTooDeep { found, .. } => found.as_ref().map(Spanned::span),
            ErrorKind::MissingValue(token) => Some(token.span()),
        }
    }
}

fn describe(found: &Option<Token>) -> String {
    match found {
        Some(token) => token.to_string(),
        None => "end of input".to_string(),
    }
}

pub type SyntaxResult<T = ()> = Result<T, SyntaxError>;
