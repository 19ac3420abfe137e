//! Statement parsing.

use crate::{
    Block, Expr, ExprStmt, ForStmt, IfStmt, ReturnStmt, Stmt, WhileStmt,
};
use hindic_lex::Token;

use crate::Parser;

impl<'a> Parser<'a> {
    /// Parse a statement.
    pub(crate) fn statement(&mut self) -> Option<Stmt> {
        if self.match_token(&Token::If) {
            return self.if_statement();
        }
        if self.match_token(&Token::While) {
            return self.while_statement();
        }
        if self.match_token(&Token::For) {
            return self.for_statement();
        }
        if self.match_token(&Token::Return) {
            return self.return_statement();
        }
        if self.match_token(&Token::LBrace) {
            return Some(Stmt::Block(self.block_statement()));
        }

        self.expression_statement()
    }

    /// Parse a block; the opening brace is already consumed.
    pub(crate) fn block_statement(&mut self) -> Block {
        let span = self.previous_span();
        let mut stmts = Vec::new();

        while !self.check(&Token::RBrace) && !self.check(&Token::Eof) {
            if let Some(stmt) = self.declaration() {
                stmts.push(stmt);
            }
        }

        self.consume(&Token::RBrace, "Expect '}' after block.");
        Block { stmts, span }
    }

    /// Parse an if statement; the keyword is already consumed.
    fn if_statement(&mut self) -> Option<Stmt> {
        let span = self.previous_span();

        self.consume(&Token::LParen, "Expect '(' after 'if'.");
        let condition = self.expression()?;
        self.consume(&Token::RParen, "Expect ')' after if condition.");

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.match_token(&Token::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Some(Stmt::If(IfStmt {
            condition,
            then_branch,
            else_branch,
            span,
        }))
    }

    /// Parse a while statement; the keyword is already consumed.
    fn while_statement(&mut self) -> Option<Stmt> {
        let span = self.previous_span();

        self.consume(&Token::LParen, "Expect '(' after 'while'.");
        let condition = self.expression()?;
        self.consume(&Token::RParen, "Expect ')' after while condition.");

        let body = Box::new(self.statement()?);

        Some(Stmt::While(WhileStmt {
            condition,
            body,
            span,
        }))
    }

    /// Parse a for statement; the keyword is already consumed.
    ///
    /// The initializer slot accepts a variable declaration, an expression
    /// statement, or a bare `;`.
    fn for_statement(&mut self) -> Option<Stmt> {
        let span = self.previous_span();

        self.consume(&Token::LParen, "Expect '(' after 'for'.");

        let initializer = if self.match_token(&Token::Semicolon) {
            None
        } else if let Some(ty) = self.match_value_type() {
            self.var_declaration(ty).map(Box::new)
        } else {
            self.expression_statement().map(Box::new)
        };

        let condition = if !self.check(&Token::Semicolon) {
            self.expression()
        } else {
            None
        };
        self.consume(&Token::Semicolon, "Expect ';' after loop condition.");

        let increment = if !self.check(&Token::RParen) {
            self.expression()
        } else {
            None
        };
        self.consume(&Token::RParen, "Expect ')' after for clauses.");

        let body = Box::new(self.statement()?);

        Some(Stmt::For(ForStmt {
            initializer,
            condition,
            increment,
            body,
            span,
        }))
    }

    /// Parse a return statement; the keyword is already consumed.
    fn return_statement(&mut self) -> Option<Stmt> {
        let keyword_span = self.previous_span();

        let value: Option<Expr> = if !self.check(&Token::Semicolon) {
            self.expression()
        } else {
            None
        };

        self.consume(&Token::Semicolon, "Expect ';' after return value.");

        let span = value.as_ref().map(Expr::span).unwrap_or(keyword_span);
        Some(Stmt::Return(ReturnStmt { value, span }))
    }

    /// Parse an expression statement.
    fn expression_statement(&mut self) -> Option<Stmt> {
        let expr = self.expression()?;
        let span = expr.span();
        self.consume(&Token::Semicolon, "Expect ';' after expression.");
        Some(Stmt::Expr(ExprStmt { expr, span }))
    }
}
