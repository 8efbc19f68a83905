//! The expression precedence ladder, lowest precedence first

use super::{ErrorKind, Parser, SyntaxResult};
use sprig_ast::{BinaryOp, Expr, UnaryOp};
use sprig_tokens::token::TokenKind;
use tracing::trace;

/// An expression production that may not apply at the current token
type Production<'t> = fn(&mut Parser<'t>) -> SyntaxResult<Option<Expr>>;

const COMPARISON_OPS: &[BinaryOp] = &[
    BinaryOp::EqualEqual,
    BinaryOp::LessEqual,
    BinaryOp::GreaterEqual,
    BinaryOp::Less,
    BinaryOp::Greater,
];
const ASSIGNMENT_OPS: &[BinaryOp] = &[
    BinaryOp::Equal,
    BinaryOp::PlusEqual,
    BinaryOp::MinusEqual,
    BinaryOp::MultEqual,
    BinaryOp::DivEqual,
];

impl<'t> Parser<'t> {
    /// `or_expr := and_expr ("or" and_expr)*`
    pub(super) fn or_expr(&mut self) -> SyntaxResult<Option<Expr>> {
        self.production("or", |p| p.fold_binary(&[BinaryOp::Or], Self::and_expr))
    }

    fn and_expr(&mut self) -> SyntaxResult<Option<Expr>> {
        self.fold_binary(&[BinaryOp::And], Self::comparison_expr)
    }

    fn comparison_expr(&mut self) -> SyntaxResult<Option<Expr>> {
        self.fold_binary(COMPARISON_OPS, Self::not_expr)
    }

    /// `not_expr := "!"* set_expr`, where pairs of `!` cancel out
    fn not_expr(&mut self) -> SyntaxResult<Option<Expr>> {
        let mut count = 0usize;
        while self.cursor.is_eat(TokenKind::Not) {
            count += 1;
        }
        if count == 0 {
            return self.set_expr();
        }
        let operand = self.required(TokenKind::Not, Self::set_expr)?;
        if count % 2 == 0 {
            Ok(Some(operand))
        } else {
            Ok(Some(Expr::unary(UnaryOp::Not, operand)))
        }
    }

    /// `set_expr := SYMBOL assign_op set_expr | plus_minus_expr`
    fn set_expr(&mut self) -> SyntaxResult<Option<Expr>> {
        let assignment = if self.cursor.is_peek(TokenKind::Symbol, 1) {
            ASSIGNMENT_OPS
                .iter()
                .copied()
                .find(|op| self.cursor.is_peek(op.token_kind(), 2))
        } else {
            None
        };
        let Some(op) = assignment else {
            return self.plus_minus_expr();
        };
        self.production("set", |p| {
            let target = Expr::symbol(p.symbol()?);
            p.cursor.next();
            let value = p.required(op.token_kind(), Self::set_expr)?;
            Ok(Some(Expr::binary(op, target, value)))
        })
    }

    fn plus_minus_expr(&mut self) -> SyntaxResult<Option<Expr>> {
        self.fold_binary(&[BinaryOp::Plus, BinaryOp::Minus], Self::mult_div_expr)
    }

    fn mult_div_expr(&mut self) -> SyntaxResult<Option<Expr>> {
        self.fold_binary(
            &[BinaryOp::Multiply, BinaryOp::Divide],
            Self::negate_expr,
        )
    }

    /// `negate_expr := "-"? primary`
    fn negate_expr(&mut self) -> SyntaxResult<Option<Expr>> {
        if !self.cursor.is_eat(TokenKind::Minus) {
            return self.primary();
        }
        let operand = self.required(TokenKind::Minus, Self::primary)?;
        Ok(Some(Expr::unary(UnaryOp::Minus, operand)))
    }

    /// `primary := SYMBOL | func_call | group | NUMBER | STRING`
    fn primary(&mut self) -> SyntaxResult<Option<Expr>> {
        let Some(token) = self.cursor.peek(1) else {
            return Ok(None);
        };
        let expr = match token.kind() {
            TokenKind::Symbol if self.cursor.is_peek(TokenKind::LeftParen, 2) => {
                self.func_call()?
            }
            TokenKind::Symbol => Expr::symbol(self.symbol()?),
            TokenKind::LeftParen => self.group()?,
            TokenKind::Number | TokenKind::String => {
                self.cursor.next();
                Expr::Literal(self.value_of(token)?.clone())
            }
            _ => return Ok(None),
        };
        Ok(Some(expr))
    }

    /// `func_call := SYMBOL "(" (or_expr ("," or_expr)*)? ")"?`
    fn func_call(&mut self) -> SyntaxResult<Expr> {
        self.production("function call", |p| {
            let callee = p.symbol()?;
            p.expect(TokenKind::LeftParen)?;
            let mut args = vec![];
            if let Some(first) = p.or_expr()? {
                args.push(first);
                while p.cursor.is_eat(TokenKind::Comma) {
                    args.push(p.required(TokenKind::Comma, Self::or_expr)?);
                }
            }
            if !p.cursor.is_eat(TokenKind::RightParen) {
                trace!("argument list of {callee} left open");
            }
            Ok(Expr::call(callee, args))
        })
    }

    /// `group := "(" or_expr ")"?`
    fn group(&mut self) -> SyntaxResult<Expr> {
        self.production("group", |p| {
            p.expect(TokenKind::LeftParen)?;
            let inner = p.required(TokenKind::LeftParen, Self::or_expr)?;
            if !p.cursor.is_eat(TokenKind::RightParen) {
                trace!("group left open");
            }
            Ok(inner)
        })
    }

    /// Consumes a symbol token, returning its name
    fn symbol(&mut self) -> SyntaxResult<&'t str> {
        let token = self.expect(TokenKind::Symbol)?;
        self.value_of(token)?
            .as_symbol()
            .ok_or_else(|| self.error(ErrorKind::MissingValue(token.clone())))
    }

    /// Parses `operand (op operand)*`, folding to the left
    fn fold_binary(
        &mut self,
        ops: &[BinaryOp],
        operand: Production<'t>,
    ) -> SyntaxResult<Option<Expr>> {
        let Some(mut left) = operand(self)? else {
            return Ok(None);
        };
        while let Some(op) = self.eat_op(ops) {
            let right = self.required(op.token_kind(), operand)?;
            left = Expr::binary(op, left, right);
        }
        Ok(Some(left))
    }

    fn eat_op(&mut self, ops: &[BinaryOp]) -> Option<BinaryOp> {
        let op = ops
            .iter()
            .copied()
            .find(|op| self.cursor.is_peek(op.token_kind(), 1))?;
        self.cursor.next();
        Some(op)
    }

    /// Runs a production whose absence is an error, as after an operator
    pub(super) fn required(
        &mut self,
        after: TokenKind,
        operand: Production<'t>,
    ) -> SyntaxResult<Expr> {
        match operand(self)? {
            Some(expr) => Ok(expr),
            None => Err(self.error(ErrorKind::ExpectedExpression {
                after,
                found: self.cursor.peek(1).cloned(),
            })),
        }
    }
}
