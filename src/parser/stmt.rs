//! Statement and block parsing.

use super::Parser;
use super::precedence::Precedence;
use crate::ast::{Block, Ident, Stmt, StmtKind};
use crate::token::TokenKind;

impl<'a> Parser<'a> {
    /// Parses one statement at the current token.
    ///
    /// Returns `None` when the statement could not be recovered; the
    /// diagnostics are already recorded in that case.
    pub(super) fn parse_statement(&mut self) -> Option<Stmt> {
        match self.current.kind {
            TokenKind::Let | TokenKind::Var | TokenKind::Const => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `let`/`var`/`const` `<ident> = <expr>` with an optional `;`.
    ///
    /// The three binding keywords are semantically identical; the keyword
    /// survives in the statement token.
    fn parse_let_statement(&mut self) -> Option<Stmt> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Ident::new(self.current.clone());

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.advance_tokens();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.consume_optional_semicolon();

        Some(Stmt::new(token, StmtKind::Let { name, value }))
    }

    /// Parses `return <expr>` with an optional `;`.
    fn parse_return_statement(&mut self) -> Option<Stmt> {
        let token = self.current.clone();
        self.advance_tokens();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.consume_optional_semicolon();

        Some(Stmt::new(token, StmtKind::Return(value)))
    }

    /// Parses a bare expression in statement position.
    fn parse_expression_statement(&mut self) -> Option<Stmt> {
        let token = self.current.clone();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.consume_optional_semicolon();

        Some(Stmt::new(token, StmtKind::Expression(value)))
    }

    /// Parses a braced block; `current` is the opening `{`.
    ///
    /// Statements are collected until `}` or end of input; failed
    /// statements are dropped, matching program-level behavior.
    pub(super) fn parse_block(&mut self) -> Block {
        let token = self.current.clone();
        let mut statements = Vec::new();

        self.advance_tokens();
        while self.current.kind != TokenKind::RBrace && self.current.kind != TokenKind::Eof {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.advance_tokens();
        }

        Block { token, statements }
    }

    fn consume_optional_semicolon(&mut self) {
        if self.peek.kind == TokenKind::Semicolon {
            self.advance_tokens();
        }
    }
}
