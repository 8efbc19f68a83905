//! The syntax tree produced by the sprig parser.
//!
//! A parsed program is always a single [CompoundStmt](statements::CompoundStmt). Every node owns
//! its children, so the tree can be handed off to whatever evaluates it.

pub mod expr;
pub mod printer;
pub mod statements;
pub mod visitor;

pub use expr::{BinaryExpr, BinaryOp, Expr, FuncCallExpr, Literal, UnaryExpr, UnaryOp};
pub use statements::{CompoundStmt, ElseStmt, ElsifStmt, ExprStmt, IfStmt, Stmt};
