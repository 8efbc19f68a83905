//! A lexical token from a source string, along with the literal payloads tokens carry

use crate::spanned::{Span, Spanned};
use std::fmt::{Debug, Display, Formatter};
use strum::{AsRefStr, EnumIter};

/// A lexical token from a source string
#[derive(Clone)]
pub struct Token {
    span: Span,
    kind: TokenKind,
    value: Option<Literal>,
}

impl Token {
    /// Creates a new token with no payload
    pub fn new(span: Span, kind: TokenKind) -> Self {
        Self {
            span,
            kind,
            value: None,
        }
    }

    /// Creates a new token carrying a literal payload
    pub fn with_value(span: Span, kind: TokenKind, value: Literal) -> Self {
        Self {
            span,
            kind,
            value: Some(value),
        }
    }

    /// Gets the kind for this token
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Gets the literal payload of this token. Only [TokenKind::Symbol], [TokenKind::String]
    /// and [TokenKind::Number] carry one.
    pub fn value(&self) -> Option<&Literal> {
        self.value.as_ref()
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            None => write!(f, "{}", self.kind),
            Some(value) => write!(f, "{}({})", self.kind, value.raw()),
        }
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

/// The kind for this token
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,

    /// !
    Not,
    Minus,
    MinusEqual,
    Plus,
    PlusEqual,
    Divide,
    DivEqual,
    Multiply,
    MultEqual,

    /// =
    Equal,
    /// ==
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    Fun,
    If,
    Else,
    Elsif,
    While,
    And,
    Or,
    True,
    False,

    Symbol,
    String,
    Number,

    /// `;` or a new line
    Semicolon,
    /// EOF, will only appear as the last token
    Eof,
}

impl TokenKind {
    /// Gets the keyword kind for an already lower-cased word, if it is one
    pub fn keyword(word: &str) -> Option<Self> {
        let kind = match word {
            "fun" => Self::Fun,
            "if" => Self::If,
            "else" => Self::Else,
            "elsif" => Self::Elsif,
            "while" => Self::While,
            "and" => Self::And,
            "or" => Self::Or,
            "true" => Self::True,
            "false" => Self::False,
            _ => return None,
        };
        Some(kind)
    }

    /// Whether this kind carries a literal payload
    pub fn has_value(&self) -> bool {
        matches!(self, Self::Symbol | Self::String | Self::Number)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// A literal value. Tokens use this as their payload, and the syntax tree uses it directly as
/// its leaf expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    String(String),
    Boolean(bool),
    Symbol(String),
}

impl Literal {
    /// Gets the numeric value of this literal, if it's a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Literal::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Gets the text of this literal, if it's a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(s) => Some(s),
            _ => None,
        }
    }

    /// Gets the value of this literal, if it's a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Literal::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Gets the identifier of this literal, if it's a symbol
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Literal::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// The bare value, without the literal kind
    fn raw(&self) -> String {
        match self {
            Literal::Number(n) => n.to_string(),
            Literal::String(s) => format!("{s:?}"),
            Literal::Boolean(b) => b.to_string(),
            Literal::Symbol(s) => s.clone(),
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Literal::Number(_) => "NumberLiteral",
            Literal::String(_) => "StringLiteral",
            Literal::Boolean(_) => "BooleanLiteral",
            Literal::Symbol(_) => "SymbolLiteral",
        };
        write!(f, "{name}({})", self.raw())
    }
}
