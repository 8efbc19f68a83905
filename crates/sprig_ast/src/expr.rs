//! Expressions

use derive_more::From;
use itertools::Itertools as _;
pub use sprig_tokens::token::Literal;
use sprig_tokens::token::TokenKind;
use std::fmt::{Display, Formatter};

/// An expression
#[derive(Debug, Clone, PartialEq, From)]
pub enum Expr {
    Literal(Literal),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    FuncCall(FuncCallExpr),
}

impl Expr {
    /// A number literal
    pub fn number(value: f64) -> Self {
        Self::Literal(Literal::Number(value))
    }

    /// A string literal
    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal(Literal::String(value.into()))
    }

    /// A boolean literal
    pub fn boolean(value: bool) -> Self {
        Self::Literal(Literal::Boolean(value))
    }

    /// A reference to a symbol
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Literal(Literal::Symbol(name.into()))
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Self::Unary(UnaryExpr::new(op, operand))
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Self::Binary(BinaryExpr::new(op, left, right))
    }

    pub fn call(callee: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Self {
        Self::FuncCall(FuncCallExpr::new(callee, args))
    }

    /// Gets the literal, if this expression is one
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Expr::Literal(literal) => Some(literal),
            _ => None,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Literal(e) => e.fmt(f),
            Expr::Unary(e) => e.fmt(f),
            Expr::Binary(e) => e.fmt(f),
            Expr::FuncCall(e) => e.fmt(f),
        }
    }
}

/// Operators that may prefix an expression
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Not,
    Minus,
}

impl UnaryOp {
    /// The token kind this operator is spelled with
    pub fn token_kind(&self) -> TokenKind {
        match self {
            UnaryOp::Not => TokenKind::Not,
            UnaryOp::Minus => TokenKind::Minus,
        }
    }
}

impl TryFrom<TokenKind> for UnaryOp {
    type Error = TokenKind;

    fn try_from(value: TokenKind) -> Result<Self, Self::Error> {
        match value {
            TokenKind::Not => Ok(UnaryOp::Not),
            TokenKind::Minus => Ok(UnaryOp::Minus),
            other => Err(other),
        }
    }
}

impl Display for UnaryOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.token_kind().fmt(f)
    }
}

/// Operators that join two expressions, including assignments
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Or,
    And,

    EqualEqual,
    LessEqual,
    GreaterEqual,
    Less,
    Greater,

    Equal,
    PlusEqual,
    MinusEqual,
    MultEqual,
    DivEqual,

    Plus,
    Minus,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// The token kind this operator is spelled with
    pub fn token_kind(&self) -> TokenKind {
        match self {
            BinaryOp::Or => TokenKind::Or,
            BinaryOp::And => TokenKind::And,
            BinaryOp::EqualEqual => TokenKind::EqualEqual,
            BinaryOp::LessEqual => TokenKind::LessEqual,
            BinaryOp::GreaterEqual => TokenKind::GreaterEqual,
            BinaryOp::Less => TokenKind::Less,
            BinaryOp::Greater => TokenKind::Greater,
            BinaryOp::Equal => TokenKind::Equal,
            BinaryOp::PlusEqual => TokenKind::PlusEqual,
            BinaryOp::MinusEqual => TokenKind::MinusEqual,
            BinaryOp::MultEqual => TokenKind::MultEqual,
            BinaryOp::DivEqual => TokenKind::DivEqual,
            BinaryOp::Plus => TokenKind::Plus,
            BinaryOp::Minus => TokenKind::Minus,
            BinaryOp::Multiply => TokenKind::Multiply,
            BinaryOp::Divide => TokenKind::Divide,
        }
    }

    /// Whether this operator stores into its left hand side
    pub fn is_assignment(&self) -> bool {
        matches!(
            self,
            BinaryOp::Equal
                | BinaryOp::PlusEqual
                | BinaryOp::MinusEqual
                | BinaryOp::MultEqual
                | BinaryOp::DivEqual
        )
    }
}

impl TryFrom<TokenKind> for BinaryOp {
    type Error = TokenKind;

    fn try_from(value: TokenKind) -> Result<Self, Self::Error> {
        let op = match value {
            TokenKind::Or => BinaryOp::Or,
            TokenKind::And => BinaryOp::And,
            TokenKind::EqualEqual => BinaryOp::EqualEqual,
            TokenKind::LessEqual => BinaryOp::LessEqual,
            TokenKind::GreaterEqual => BinaryOp::GreaterEqual,
            TokenKind::Less => BinaryOp::Less,
            TokenKind::Greater => BinaryOp::Greater,
            TokenKind::Equal => BinaryOp::Equal,
            TokenKind::PlusEqual => BinaryOp::PlusEqual,
            TokenKind::MinusEqual => BinaryOp::MinusEqual,
            TokenKind::MultEqual => BinaryOp::MultEqual,
            TokenKind::DivEqual => BinaryOp::DivEqual,
            TokenKind::Plus => BinaryOp::Plus,
            TokenKind::Minus => BinaryOp::Minus,
            TokenKind::Multiply => BinaryOp::Multiply,
            TokenKind::Divide => BinaryOp::Divide,
            other => return Err(other),
        };
        Ok(op)
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.token_kind().fmt(f)
    }
}

/// A prefix operation
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub operand: Box<Expr>,
}

impl UnaryExpr {
    pub fn new(op: UnaryOp, operand: Expr) -> Self {
        Self {
            op,
            operand: Box::new(operand),
        }
    }
}

impl Display for UnaryExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "UnaryExpression({}, {})", self.op, self.operand)
    }
}

/// A binary operation
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

impl BinaryExpr {
    pub fn new(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Self {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl Display for BinaryExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BinaryExpression({}, {}, {})",
            self.op, self.left, self.right
        )
    }
}

/// Calls a function by name
#[derive(Debug, Clone, PartialEq)]
pub struct FuncCallExpr {
    pub callee: String,
    pub args: Vec<Expr>,
}

impl FuncCallExpr {
    pub fn new(callee: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Self {
        Self {
            callee: callee.into(),
            args: args.into_iter().collect(),
        }
    }
}

impl Display for FuncCallExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FuncCallExpression({}, [{}])",
            self.callee,
            self.args.iter().join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_display() {
        let expr = Expr::binary(
            BinaryOp::Plus,
            Expr::symbol("a"),
            Expr::binary(BinaryOp::Multiply, Expr::symbol("b"), Expr::number(2.0)),
        );
        assert_eq!(
            expr.to_string(),
            "BinaryExpression(PLUS, SymbolLiteral(a), BinaryExpression(MULTIPLY, SymbolLiteral(b), NumberLiteral(2)))"
        );
    }

    #[test]
    fn test_call_display() {
        let expr = Expr::call("f", [Expr::number(1.0), Expr::string("x")]);
        assert_eq!(
            expr.to_string(),
            "FuncCallExpression(f, [NumberLiteral(1), StringLiteral(\"x\")])"
        );
        assert_eq!(Expr::call("g", []).to_string(), "FuncCallExpression(g, [])");
    }

    #[test]
    fn test_op_token_kinds_round_trip() {
        for op in [UnaryOp::Not, UnaryOp::Minus] {
            assert_eq!(UnaryOp::try_from(op.token_kind()), Ok(op));
        }
        assert_eq!(UnaryOp::try_from(TokenKind::Plus), Err(TokenKind::Plus));
        assert_eq!(BinaryOp::try_from(TokenKind::MultEqual), Ok(BinaryOp::MultEqual));
        assert_eq!(BinaryOp::try_from(TokenKind::Not), Err(TokenKind::Not));
        assert!(BinaryOp::DivEqual.is_assignment());
        assert!(!BinaryOp::Divide.is_assignment());
    }

    #[test]
    fn test_from_literal() {
        let expr: Expr = Literal::Boolean(false).into();
        assert_eq!(expr, Expr::boolean(false));
        assert_eq!(expr.as_literal().and_then(Literal::as_bool), Some(false));
    }
}
