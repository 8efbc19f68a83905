//! Lexing and parsing of sprig source text.
//!
//! The pipeline is two passes. The [lexer] turns source text into a token sequence ending in
//! [Eof](sprig_tokens::token::TokenKind::Eof), then the [parser] builds a [CompoundStmt] holding
//! the whole program. Both passes stop at the first error.
//!
//! # Example
//! ```
//! # use sprig_parsing::parse_source;
//! let program = parse_source("x = 1\nprint(x + 2)").unwrap();
//! assert_eq!(program.len(), 2);
//! ```

use crate::lexer::{lex, LexingError};
use crate::parser::{parse, SyntaxError};
use sprig_ast::CompoundStmt;
use sprig_tokens::spanned::Span;
use sprig_tokens::SpannedError;
use tracing::instrument;

pub mod lexer;
pub mod parser;

/// Lexes then parses a whole source string
#[instrument(skip_all)]
pub fn parse_source(src: &str) -> Result<CompoundStmt, Error> {
    let tokens = lex(src)?;
    Ok(parse(&tokens)?)
}

/// Any error raised while turning source text into a syntax tree
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexingError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl Error {
    /// Where in the source this error occurred
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Lex(e) => Some(e.span()),
            Error::Syntax(e) => e.span(),
        }
    }

    /// Renders this error along with the source lines surrounding it
    pub fn render(&self, src: &str) -> String {
        match self {
            Error::Lex(e) => SpannedError::new(e, e.span()).render(src),
            Error::Syntax(e) => format!("syntax error: {}", e.kind.render(src)),
        }
    }
}
