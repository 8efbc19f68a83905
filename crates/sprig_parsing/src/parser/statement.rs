//! Statement productions

use super::{ErrorKind, Parser, SyntaxResult};
use sprig_ast::{CompoundStmt, ElseStmt, ElsifStmt, Expr, ExprStmt, IfStmt, Stmt};
use sprig_tokens::token::TokenKind;

impl<'t> Parser<'t> {
    /// `program := statement* EOF`
    pub(super) fn program(&mut self) -> SyntaxResult<CompoundStmt> {
        self.production("program", |p| {
            let mut statements = vec![];
            loop {
                p.skip_terminators();
                if p.at_end() {
                    break;
                }
                statements.push(p.statement()?);
            }
            p.cursor.eat(TokenKind::Eof);
            Ok(CompoundStmt::new(statements))
        })
    }

    /// `statement := if_stmt | block | or_expr`
    pub(super) fn statement(&mut self) -> SyntaxResult<Stmt> {
        self.production("statement", |p| {
            p.skip_terminators();
            match p.cursor.peek(1).map(|token| token.kind()) {
                Some(TokenKind::If) => return p.if_stmt().map(Stmt::from),
                Some(TokenKind::LeftBrace) => return p.block().map(Stmt::from),
                _ => {}
            }
            match p.or_expr()? {
                Some(expression) => Ok(ExprStmt::new(expression).into()),
                None => Err(p.error(ErrorKind::ExpectedStatement(p.cursor.peek(1).cloned()))),
            }
        })
    }

    /// `if_stmt := "if" condition statement ("elsif" condition statement)* ("else" statement)?`
    fn if_stmt(&mut self) -> SyntaxResult<IfStmt> {
        self.production("if", |p| {
            p.expect(TokenKind::If)?;
            let condition = p.condition()?;
            let then_stmt = p.statement()?;

            let mut elsif_branches = vec![];
            while p.skip_terminators_before(TokenKind::Elsif) {
                elsif_branches.push(p.elsif_stmt()?);
            }
            let else_branch = if p.skip_terminators_before(TokenKind::Else) {
                Some(p.else_stmt()?)
            } else {
                None
            };
            Ok(IfStmt::new(
                condition,
                then_stmt,
                elsif_branches,
                else_branch,
            ))
        })
    }

    fn elsif_stmt(&mut self) -> SyntaxResult<ElsifStmt> {
        self.production("elsif", |p| {
            p.expect(TokenKind::Elsif)?;
            let condition = p.condition()?;
            let then_stmt = p.statement()?;
            Ok(ElsifStmt::new(condition, then_stmt))
        })
    }

    fn else_stmt(&mut self) -> SyntaxResult<ElseStmt> {
        self.production("else", |p| {
            p.expect(TokenKind::Else)?;
            Ok(ElseStmt::new(p.statement()?))
        })
    }

    /// `condition := "(" or_expr ")"`, with both parens required
    fn condition(&mut self) -> SyntaxResult<Expr> {
        self.production("condition", |p| {
            p.expect(TokenKind::LeftParen)?;
            let condition = p.required(TokenKind::LeftParen, Self::or_expr)?;
            p.expect(TokenKind::RightParen)?;
            Ok(condition)
        })
    }

    /// `block := "{" statement* "}"`
    fn block(&mut self) -> SyntaxResult<CompoundStmt> {
        self.production("block", |p| {
            p.expect(TokenKind::LeftBrace)?;
            let mut statements = vec![];
            loop {
                p.skip_terminators();
                if p.cursor.is_eat(TokenKind::RightBrace) {
                    break;
                }
                if p.at_end() {
                    return Err(p.error(ErrorKind::ExpectedToken {
                        expected: TokenKind::RightBrace,
                        found: p.cursor.peek(1).cloned(),
                    }));
                }
                statements.push(p.statement()?);
            }
            Ok(CompoundStmt::new(statements))
        })
    }
}
