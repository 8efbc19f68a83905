//! Read-only traversal of a syntax tree.
//!
//! Every method of [Visitor] defaults to the free function of the same name, which visits the
//! node's children in source order. Override a method to intercept a node kind, and call the
//! free function from the override to keep descending.

use crate::expr::{BinaryExpr, Expr, FuncCallExpr, Literal, UnaryExpr};
use crate::statements::{CompoundStmt, ElseStmt, ElsifStmt, ExprStmt, IfStmt, Stmt};

pub fn visit_stmt<V: Visitor + ?Sized>(visitor: &mut V, stmt: &Stmt) -> Result<(), V::Err> {
    match stmt {
        Stmt::Compound(s) => visitor.visit_compound_stmt(s),
        Stmt::Expr(s) => visitor.visit_expr_stmt(s),
        Stmt::If(s) => visitor.visit_if_stmt(s),
    }
}

pub fn visit_compound_stmt<V: Visitor + ?Sized>(
    visitor: &mut V,
    stmt: &CompoundStmt,
) -> Result<(), V::Err> {
    stmt.statements
        .iter()
        .try_for_each(|stmt| visitor.visit_stmt(stmt))
}

pub fn visit_expr_stmt<V: Visitor + ?Sized>(
    visitor: &mut V,
    stmt: &ExprStmt,
) -> Result<(), V::Err> {
    visitor.visit_expr(&stmt.expression)
}

pub fn visit_if_stmt<V: Visitor + ?Sized>(visitor: &mut V, stmt: &IfStmt) -> Result<(), V::Err> {
    visitor.visit_expr(&stmt.condition)?;
    visitor.visit_stmt(&stmt.then_stmt)?;
    for elsif in &stmt.elsif_branches {
        visitor.visit_elsif_stmt(elsif)?;
    }
    if let Some(else_branch) = &stmt.else_branch {
        visitor.visit_else_stmt(else_branch)?;
    }
    Ok(())
}

pub fn visit_elsif_stmt<V: Visitor + ?Sized>(
    visitor: &mut V,
    stmt: &ElsifStmt,
) -> Result<(), V::Err> {
    visitor.visit_expr(&stmt.condition)?;
    visitor.visit_stmt(&stmt.then_stmt)
}

pub fn visit_else_stmt<V: Visitor + ?Sized>(
    visitor: &mut V,
    stmt: &ElseStmt,
) -> Result<(), V::Err> {
    visitor.visit_stmt(&stmt.then_stmt)
}

pub fn visit_expr<V: Visitor + ?Sized>(visitor: &mut V, expr: &Expr) -> Result<(), V::Err> {
    match expr {
        Expr::Literal(e) => visitor.visit_literal(e),
        Expr::Unary(e) => visitor.visit_unary_expr(e),
        Expr::Binary(e) => visitor.visit_binary_expr(e),
        Expr::FuncCall(e) => visitor.visit_func_call_expr(e),
    }
}

pub fn visit_unary_expr<V: Visitor + ?Sized>(
    visitor: &mut V,
    expr: &UnaryExpr,
) -> Result<(), V::Err> {
    visitor.visit_expr(&expr.operand)
}

pub fn visit_binary_expr<V: Visitor + ?Sized>(
    visitor: &mut V,
    expr: &BinaryExpr,
) -> Result<(), V::Err> {
    visitor.visit_expr(&expr.left)?;
    visitor.visit_expr(&expr.right)
}

pub fn visit_func_call_expr<V: Visitor + ?Sized>(
    visitor: &mut V,
    expr: &FuncCallExpr,
) -> Result<(), V::Err> {
    expr.args.iter().try_for_each(|arg| visitor.visit_expr(arg))
}

/// Visits the nodes of a syntax tree
pub trait Visitor {
    type Err;

    fn visit_stmt(&mut self, stmt: &Stmt) -> Result<(), Self::Err> {
        visit_stmt(self, stmt)
    }

    fn visit_compound_stmt(&mut self, stmt: &CompoundStmt) -> Result<(), Self::Err> {
        visit_compound_stmt(self, stmt)
    }

    fn visit_expr_stmt(&mut self, stmt: &ExprStmt) -> Result<(), Self::Err> {
        visit_expr_stmt(self, stmt)
    }

    fn visit_if_stmt(&mut self, stmt: &IfStmt) -> Result<(), Self::Err> {
        visit_if_stmt(self, stmt)
    }

    fn visit_elsif_stmt(&mut self, stmt: &ElsifStmt) -> Result<(), Self::Err> {
        visit_elsif_stmt(self, stmt)
    }

    fn visit_else_stmt(&mut self, stmt: &ElseStmt) -> Result<(), Self::Err> {
        visit_else_stmt(self, stmt)
    }

    fn visit_expr(&mut self, expr: &Expr) -> Result<(), Self::Err> {
        visit_expr(self, expr)
    }

    fn visit_literal(&mut self, _literal: &Literal) -> Result<(), Self::Err> {
        Ok(())
    }

    fn visit_unary_expr(&mut self, expr: &UnaryExpr) -> Result<(), Self::Err> {
        visit_unary_expr(self, expr)
    }

    fn visit_binary_expr(&mut self, expr: &BinaryExpr) -> Result<(), Self::Err> {
        visit_binary_expr(self, expr)
    }

    fn visit_func_call_expr(&mut self, expr: &FuncCallExpr) -> Result<(), Self::Err> {
        visit_func_call_expr(self, expr)
    }
}
