use sprig_ast::{CompoundStmt, Expr, Stmt};
use sprig_parsing::parse_source;

/// Parses `src`, panicking with the rendered error if it fails
pub fn parse_ok(src: &str) -> CompoundStmt {
    parse_source(src).unwrap_or_else(|e| panic!("could not parse {src:?}\n{}", e.render(src)))
}

/// The expressions of a program made only of expression statements
pub fn expressions(program: &CompoundStmt) -> Vec<&Expr> {
    program
        .statements
        .iter()
        .map(|stmt| match stmt {
            Stmt::Expr(stmt) => &stmt.expression,
            other => panic!("expected an expression statement, got {other}"),
        })
        .collect()
}
