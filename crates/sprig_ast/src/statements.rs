//! Statements

use crate::expr::Expr;
use derive_more::From;
use itertools::Itertools as _;
use std::fmt::{Display, Formatter};

/// A statement.
///
/// [ElsifStmt] and [ElseStmt] are statements too, but they can only occur as branches of an
/// [IfStmt], so they aren't variants here.
#[derive(Debug, Clone, PartialEq, From)]
pub enum Stmt {
    Compound(CompoundStmt),
    Expr(ExprStmt),
    If(IfStmt),
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Compound(s) => s.fmt(f),
            Stmt::Expr(s) => s.fmt(f),
            Stmt::If(s) => s.fmt(f),
        }
    }
}

/// An ordered sequence of statements. A whole program is one of these.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompoundStmt {
    pub statements: Vec<Stmt>,
}

impl CompoundStmt {
    pub fn new(statements: impl IntoIterator<Item = Stmt>) -> Self {
        Self {
            statements: statements.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Display for CompoundStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "CompoundStmt([{}])", self.statements.iter().join(", "))
    }
}

/// An expression evaluated for its effect
#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmt {
    pub expression: Expr,
}

impl ExprStmt {
    pub fn new(expression: Expr) -> Self {
        Self { expression }
    }
}

impl From<Expr> for Stmt {
    fn from(value: Expr) -> Self {
        Stmt::Expr(ExprStmt::new(value))
    }
}

impl Display for ExprStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ExprStmt({})", self.expression)
    }
}

/// `if (cond) stmt {elsif (cond) stmt} [else stmt]`
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_stmt: Box<Stmt>,
    pub elsif_branches: Vec<ElsifStmt>,
    pub else_branch: Option<ElseStmt>,
}

impl IfStmt {
    pub fn new(
        condition: Expr,
        then_stmt: impl Into<Stmt>,
        elsif_branches: impl IntoIterator<Item = ElsifStmt>,
        else_branch: impl Into<Option<ElseStmt>>,
    ) -> Self {
        Self {
            condition,
            then_stmt: Box::new(then_stmt.into()),
            elsif_branches: elsif_branches.into_iter().collect(),
            else_branch: else_branch.into(),
        }
    }
}

impl Display for IfStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "IfStmt({}, {}, [{}]",
            self.condition,
            self.then_stmt,
            self.elsif_branches.iter().join(", ")
        )?;
        if let Some(else_branch) = &self.else_branch {
            write!(f, ", {else_branch}")?;
        }
        write!(f, ")")
    }
}

/// An `elsif` branch of an [IfStmt]
#[derive(Debug, Clone, PartialEq)]
pub struct ElsifStmt {
    pub condition: Expr,
    pub then_stmt: Box<Stmt>,
}

impl ElsifStmt {
    pub fn new(condition: Expr, then_stmt: impl Into<Stmt>) -> Self {
        Self {
            condition,
            then_stmt: Box::new(then_stmt.into()),
        }
    }
}

impl Display for ElsifStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ElsifStmt({}, {})", self.condition, self.then_stmt)
    }
}

/// The `else` branch of an [IfStmt]
#[derive(Debug, Clone, PartialEq)]
pub struct ElseStmt {
    pub then_stmt: Box<Stmt>,
}

impl ElseStmt {
    pub fn new(then_stmt: impl Into<Stmt>) -> Self {
        Self {
            then_stmt: Box::new(then_stmt.into()),
        }
    }
}

impl Display for ElseStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ElseStmt({})", self.then_stmt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::BinaryOp;

    #[test]
    fn test_if_display() {
        let stmt = IfStmt::new(
            Expr::symbol("a"),
            Expr::number(1.0),
            [ElsifStmt::new(Expr::symbol("b"), Expr::number(2.0))],
            ElseStmt::new(CompoundStmt::default()),
        );
        assert_eq!(
            stmt.to_string(),
            "IfStmt(SymbolLiteral(a), ExprStmt(NumberLiteral(1)), \
             [ElsifStmt(SymbolLiteral(b), ExprStmt(NumberLiteral(2)))], \
             ElseStmt(CompoundStmt([])))"
        );
    }

    #[test]
    fn test_branches_reached_through_if() {
        let stmt = Stmt::from(IfStmt::new(
            Expr::symbol("a"),
            Expr::symbol("b"),
            [ElsifStmt::new(Expr::symbol("c"), Expr::symbol("d"))],
            ElseStmt::new(Expr::symbol("e")),
        ));
        let Stmt::If(if_stmt) = &stmt else {
            panic!("expected an if statement, got {stmt}");
        };
        assert_eq!(if_stmt.elsif_branches[0].condition, Expr::symbol("c"));
        assert_eq!(
            if_stmt.else_branch.as_ref().map(|e| e.to_string()),
            Some("ElseStmt(ExprStmt(SymbolLiteral(e)))".to_string())
        );
        assert!(stmt.to_string().contains("[ElsifStmt(SymbolLiteral(c), ExprStmt(SymbolLiteral(d)))]"));
    }

    #[test]
    fn test_if_without_else_display() {
        let stmt = IfStmt::new(Expr::symbol("a"), CompoundStmt::default(), [], None);
        assert_eq!(
            stmt.to_string(),
            "IfStmt(SymbolLiteral(a), CompoundStmt([]), [])"
        );
    }

    #[test]
    fn test_compound_from_exprs() {
        let program = CompoundStmt::new([
            Stmt::from(Expr::binary(
                BinaryOp::Equal,
                Expr::symbol("x"),
                Expr::number(1.0),
            )),
            Stmt::from(Expr::symbol("x")),
        ]);
        assert_eq!(program.len(), 2);
        assert!(matches!(program.statements[1], Stmt::Expr(_)));
    }
}
