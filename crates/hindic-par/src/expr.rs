//! Expression parsing by precedence climbing (binding powers).
//!
//! # Operator precedence (lowest to highest)
//!
//! | Level | Operators | Associativity |
//! |-------|-----------|---------------|
//! | 1 | `=` | Right (variable targets only) |
//! | 2 | `\|\|` | Left |
//! | 3 | `&&` | Left |
//! | 4 | `==`, `!=` | Left |
//! | 5 | `<`, `>`, `<=`, `>=` | Left |
//! | 6 | `+`, `-` | Left |
//! | 7 | `*`, `/`, `%` | Left |
//!
//! Unary `-` and `!` bind tighter than any binary operator. A parsed
//! assignment whose left-hand side is not a plain variable reports
//! `Invalid assignment target.` and keeps the left-hand side, so parsing
//! continues.

use crate::{
    AssignExpr, BinOp, BinaryExpr, CallExpr, Expr, Literal, LiteralExpr, UnOp, UnaryExpr,
    VariableExpr,
};
use hindic_lex::Token;

use crate::Parser;

/// Binding power levels for precedence climbing.
/// Higher numbers = tighter binding.
#[doc(hidden)]
pub mod bp {
    /// Minimum binding power (start of expression)
    pub const MIN: u8 = 0;

    /// Assignment: = (right-associative)
    pub const ASSIGNMENT: u8 = 2;

    /// Logical OR: ||
    pub const LOGICAL_OR: u8 = 4;

    /// Logical AND: &&
    pub const LOGICAL_AND: u8 = 6;

    /// Equality: ==, !=
    pub const EQUALITY: u8 = 8;

    /// Comparison: <, >, <=, >=
    pub const COMPARISON: u8 = 10;

    /// Additive: +, -
    pub const TERM: u8 = 12;

    /// Multiplicative: *, /, %
    pub const FACTOR: u8 = 14;
}

impl<'a> Parser<'a> {
    /// Parse a complete expression.
    pub(crate) fn expression(&mut self) -> Option<Expr> {
        self.parse_expr_with_min_bp(bp::MIN)
    }

    /// Parse an expression, consuming operators whose left binding power
    /// is at least `min_bp`.
    ///
    /// Left-associative operators recurse with `left_bp + 1`; assignment
    /// recurses with `left_bp - 1`, making it right-associative.
    fn parse_expr_with_min_bp(&mut self, min_bp: u8) -> Option<Expr> {
        let mut lhs = self.unary()?;

        loop {
            let (left_bp, right_bp) = match self.infix_binding_power() {
                Some(powers) if powers.0 >= min_bp => powers,
                _ => break,
            };

            let op_token = self.current_token();
            let op_span = self.current_span();
            self.advance();

            if op_token == Token::Eq {
                // The value parses regardless; only a variable target
                // produces an assignment node.
                let value = self.parse_expr_with_min_bp(right_bp)?;
                lhs = match lhs {
                    Expr::Variable(var) => Expr::Assign(AssignExpr {
                        name: var.name,
                        value: Box::new(value),
                        span: var.span,
                    }),
                    other => {
                        self.error_at(op_span, "Invalid assignment target.");
                        other
                    }
                };
            } else {
                let rhs = self.parse_expr_with_min_bp(right_bp)?;
                let span = lhs.span();
                let op = match token_to_binop(&op_token) {
                    Some(op) => op,
                    None => break,
                };
                lhs = Expr::Binary(BinaryExpr {
                    left: Box::new(lhs),
                    op,
                    right: Box::new(rhs),
                    span,
                });
            }
        }

        Some(lhs)
    }

    /// Binding powers of the current token as an infix operator.
    ///
    /// Returns `(left_bp, right_bp)`; `None` if the current token is not
    /// an infix operator.
    fn infix_binding_power(&self) -> Option<(u8, u8)> {
        let powers = match self.current_token() {
            Token::Eq => (bp::ASSIGNMENT, bp::ASSIGNMENT - 1),
            Token::OrOr => (bp::LOGICAL_OR, bp::LOGICAL_OR + 1),
            Token::AndAnd => (bp::LOGICAL_AND, bp::LOGICAL_AND + 1),
            Token::EqEq | Token::NotEq => (bp::EQUALITY, bp::EQUALITY + 1),
            Token::Lt | Token::Gt | Token::LtEq | Token::GtEq => {
                (bp::COMPARISON, bp::COMPARISON + 1)
            }
            Token::Plus | Token::Minus => (bp::TERM, bp::TERM + 1),
            Token::Star | Token::Slash | Token::Percent => (bp::FACTOR, bp::FACTOR + 1),
            _ => return None,
        };
        Some(powers)
    }

    /// Parse a unary expression: `-`/`!` chains, then a call or primary.
    fn unary(&mut self) -> Option<Expr> {
        let op = match self.current_token() {
            Token::Minus => Some(UnOp::Neg),
            Token::Not => Some(UnOp::Not),
            _ => None,
        };

        if let Some(op) = op {
            self.advance();
            let operand = self.unary()?;
            let span = operand.span();
            return Some(Expr::Unary(UnaryExpr {
                op,
                operand: Box::new(operand),
                span,
            }));
        }

        self.call()
    }

    /// Parse a primary expression with an optional call suffix.
    ///
    /// Only a plain variable can be called; any other callee reports
    /// `Can only call functions.` and the arguments are left unparsed.
    fn call(&mut self) -> Option<Expr> {
        let expr = self.primary()?;

        if self.match_token(&Token::LParen) {
            let callee = match expr {
                Expr::Variable(var) => var,
                other => {
                    self.error_at_current("Can only call functions.");
                    return Some(other);
                }
            };

            let mut args = Vec::new();
            if !self.check(&Token::RParen) {
                loop {
                    if let Some(arg) = self.expression() {
                        args.push(arg);
                    }
                    if !self.match_token(&Token::Comma) {
                        break;
                    }
                }
            }

            self.consume(&Token::RParen, "Expect ')' after arguments.");

            return Some(Expr::Call(CallExpr {
                callee: callee.name,
                args,
                span: callee.span,
            }));
        }

        Some(expr)
    }

    /// Parse a primary expression: literal, variable, or grouping.
    ///
    /// On failure, reports `Expect expression.` at the offending token and
    /// consumes it, guaranteeing forward progress before resynchronization.
    fn primary(&mut self) -> Option<Expr> {
        let span = self.current_span();

        match self.current_token() {
            Token::Number { text, value } => {
                self.advance();
                Some(Expr::Literal(LiteralExpr {
                    value: Literal::Number { text, value },
                    span,
                }))
            }
            Token::Str(contents) => {
                self.advance();
                Some(Expr::Literal(LiteralExpr {
                    value: Literal::Str(contents),
                    span,
                }))
            }
            Token::Ident(name) => {
                self.advance();
                Some(Expr::Variable(VariableExpr { name, span }))
            }
            Token::LParen => {
                self.advance();
                let expr = self.expression()?;
                self.consume(&Token::RParen, "Expect ')' after expression.");
                Some(expr)
            }
            _ => {
                self.error_at_current("Expect expression.");
                self.advance();
                None
            }
        }
    }
}

/// Map an operator token to its binary operator.
fn token_to_binop(token: &Token) -> Option<BinOp> {
    let op = match token {
        Token::Plus => BinOp::Add,
        Token::Minus => BinOp::Sub,
        Token::Star => BinOp::Mul,
        Token::Slash => BinOp::Div,
        Token::Percent => BinOp::Rem,
        Token::EqEq => BinOp::Eq,
        Token::NotEq => BinOp::Ne,
        Token::Lt => BinOp::Lt,
        Token::Gt => BinOp::Gt,
        Token::LtEq => BinOp::Le,
        Token::GtEq => BinOp::Ge,
        Token::AndAnd => BinOp::And,
        Token::OrOr => BinOp::Or,
        _ => return None,
    };
    Some(op)
}
