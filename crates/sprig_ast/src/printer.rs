//! Renders a syntax tree as an indented outline, one node per line

use crate::expr::{BinaryExpr, FuncCallExpr, Literal, UnaryExpr};
use crate::statements::{CompoundStmt, ElseStmt, ElsifStmt, ExprStmt, IfStmt};
use crate::visitor::{self, Visitor};
use std::fmt::{self, Display, Formatter, Write};

/// Prints a syntax tree into any [Write]
#[derive(Debug)]
pub struct TreePrinter<W> {
    out: W,
    depth: usize,
}

impl TreePrinter<()> {
    /// Renders a whole program
    pub fn print(program: &CompoundStmt) -> String {
        Tree(program).to_string()
    }
}

impl<W: Write> TreePrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out, depth: 0 }
    }

    fn line(&mut self, text: impl Display) -> fmt::Result {
        writeln!(self.out, "{:indent$}{text}", "", indent = self.depth * 2)
    }

    fn nested<F>(&mut self, func: F) -> fmt::Result
    where
        F: FnOnce(&mut Self) -> fmt::Result,
    {
        self.depth += 1;
        let ret = func(self);
        self.depth -= 1;
        ret
    }
}

/// Displays a program as its tree outline
struct Tree<'a>(&'a CompoundStmt);

impl Display for Tree<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        TreePrinter::new(f).visit_compound_stmt(self.0)
    }
}

impl<W: Write> Visitor for TreePrinter<W> {
    type Err = fmt::Error;

    fn visit_compound_stmt(&mut self, stmt: &CompoundStmt) -> fmt::Result {
        self.line("CompoundStmt")?;
        self.nested(|p| visitor::visit_compound_stmt(p, stmt))
    }

    fn visit_expr_stmt(&mut self, stmt: &ExprStmt) -> fmt::Result {
        self.line("ExprStmt")?;
        self.nested(|p| visitor::visit_expr_stmt(p, stmt))
    }

    fn visit_if_stmt(&mut self, stmt: &IfStmt) -> fmt::Result {
        self.line("IfStmt")?;
        self.nested(|p| visitor::visit_if_stmt(p, stmt))
    }

    fn visit_elsif_stmt(&mut self, stmt: &ElsifStmt) -> fmt::Result {
        self.line("ElsifStmt")?;
        self.nested(|p| visitor::visit_elsif_stmt(p, stmt))
    }

    fn visit_else_stmt(&mut self, stmt: &ElseStmt) -> fmt::Result {
        self.line("ElseStmt")?;
        self.nested(|p| visitor::visit_else_stmt(p, stmt))
    }

    fn visit_literal(&mut self, literal: &Literal) -> fmt::Result {
        self.line(literal)
    }

    fn visit_unary_expr(&mut self, expr: &UnaryExpr) -> fmt::Result {
        self.line(format_args!("UnaryExpression {}", expr.op))?;
        self.nested(|p| visitor::visit_unary_expr(p, expr))
    }

    fn visit_binary_expr(&mut self, expr: &BinaryExpr) -> fmt::Result {
        self.line(format_args!("BinaryExpression {}", expr.op))?;
        self.nested(|p| visitor::visit_binary_expr(p, expr))
    }

    fn visit_func_call_expr(&mut self, expr: &FuncCallExpr) -> fmt::Result {
        self.line(format_args!("FuncCallExpression {}", expr.callee))?;
        self.nested(|p| visitor::visit_func_call_expr(p, expr))
    }
}
