//! Expression parsing using Pratt parsing (precedence climbing).
//!
//! Prefix and infix parsing functions are dispatched on the token kind:
//! a prefix function begins an expression, an infix function extends one
//! rightward. The loop in [`Parser::parse_expression`] keeps applying
//! infix functions while the look-ahead binds tighter than the level the
//! expression was entered with.

use super::Parser;
use super::precedence::Precedence;
use crate::ast::{Expr, ExprKind, Ident};
use crate::token::TokenKind;

impl<'a> Parser<'a> {
    /// Parses an expression at the given minimum precedence.
    ///
    /// Returns `None` when no expression could be built; a diagnostic has
    /// been recorded by then and the enclosing construct is dropped.
    pub(super) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        while self.peek.kind != TokenKind::Semicolon && precedence < self.peek_precedence() {
            if !Self::has_infix(self.peek.kind) {
                return Some(left);
            }
            self.advance_tokens();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    /// Dispatches the prefix parsing function for the current token.
    fn parse_prefix(&mut self) -> Option<Expr> {
        match self.current.kind {
            TokenKind::Ident => Some(self.parse_identifier()),
            TokenKind::Int => self.parse_integer(),
            TokenKind::String => Some(self.parse_string_literal()),
            TokenKind::True | TokenKind::False => Some(self.parse_boolean()),
            TokenKind::Minus | TokenKind::Negation => self.parse_prefix_operator(),
            TokenKind::LParen => self.parse_grouped(),
            TokenKind::If => self.parse_if(),
            TokenKind::Function => self.parse_function(),
            _ => {
                self.errors.push(format!(
                    "No function found to parse: {}",
                    self.current.literal
                ));
                None
            }
        }
    }

    /// Returns whether an infix parsing function is registered for `kind`.
    ///
    /// `Assign` is registered but unreachable: its precedence is `Lowest`,
    /// so the Pratt loop never enters it.
    fn has_infix(kind: TokenKind) -> bool {
        matches!(
            kind,
            TokenKind::Assign
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Multiplication
                | TokenKind::Division
                | TokenKind::Equals
                | TokenKind::NotEquals
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::Le
                | TokenKind::Ge
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Xor
                | TokenKind::LParen
        )
    }

    /// Dispatches the infix parsing function for the current token.
    fn parse_infix(&mut self, left: Expr) -> Option<Expr> {
        match self.current.kind {
            TokenKind::LParen => self.parse_call(left),
            _ => self.parse_infix_operator(left),
        }
    }

    fn parse_identifier(&mut self) -> Expr {
        let token = self.current.clone();
        let name = token.literal.clone();
        Expr::new(token, ExprKind::Identifier(name))
    }

    fn parse_integer(&mut self) -> Option<Expr> {
        let token = self.current.clone();
        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expr::new(token, ExprKind::Integer(value))),
            Err(_) => {
                self.errors.push(format!("Is not an integer: {token}"));
                None
            }
        }
    }

    fn parse_string_literal(&mut self) -> Expr {
        let token = self.current.clone();
        let value = token.literal.clone();
        Expr::new(token, ExprKind::StringLit(value))
    }

    fn parse_boolean(&mut self) -> Expr {
        let token = self.current.clone();
        let value = token.kind == TokenKind::True;
        Expr::new(token, ExprKind::Boolean(value))
    }

    /// Parses `-<expr>` or `!<expr>`, binding the operand at `Prefix`.
    fn parse_prefix_operator(&mut self) -> Option<Expr> {
        let token = self.current.clone();
        let operator = token.literal.clone();

        self.advance_tokens();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expr::new(
            token,
            ExprKind::Prefix {
                operator,
                right: Box::new(right),
            },
        ))
    }

    /// Parses a binary operator with `left` already built.
    ///
    /// The right operand is parsed at the operator's own precedence, which
    /// yields left-associative trees for equal-precedence runs.
    fn parse_infix_operator(&mut self, left: Expr) -> Option<Expr> {
        let token = self.current.clone();
        let operator = token.literal.clone();
        let precedence = self.current_precedence();

        self.advance_tokens();
        let right = self.parse_expression(precedence)?;

        Some(Expr::new(
            token,
            ExprKind::Infix {
                left: Box::new(left),
                operator,
                right: Box::new(right),
            },
        ))
    }

    /// Parses a parenthesised group.
    fn parse_grouped(&mut self) -> Option<Expr> {
        self.advance_tokens();
        let expression = self.parse_expression(Precedence::Lowest);
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        expression
    }

    /// Parses `if (<cond>) { … }` with an optional `else { … }`.
    fn parse_if(&mut self) -> Option<Expr> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.advance_tokens();
        let condition = Box::new(self.parse_expression(Precedence::Lowest)?);

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block();

        let alternative = if self.peek.kind == TokenKind::Else {
            self.advance_tokens();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block())
        } else {
            None
        };

        Some(Expr::new(
            token,
            ExprKind::If {
                condition,
                consequence,
                alternative,
            },
        ))
    }

    /// Parses a function literal, named when an identifier follows the
    /// `function` keyword.
    fn parse_function(&mut self) -> Option<Expr> {
        let token = self.current.clone();

        let name = if self.peek.kind == TokenKind::Ident {
            self.advance_tokens();
            Some(Ident::new(self.current.clone()))
        } else {
            None
        };

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let params = self.parse_function_params()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block();

        Some(Expr::new(token, ExprKind::Function { name, params, body }))
    }

    /// Parses a comma-separated parameter list; `current` is the `(`.
    fn parse_function_params(&mut self) -> Option<Vec<Ident>> {
        let mut params = Vec::new();

        if self.peek.kind == TokenKind::RParen {
            self.advance_tokens();
            return Some(params);
        }

        self.advance_tokens();
        params.push(Ident::new(self.current.clone()));

        while self.peek.kind == TokenKind::Comma {
            self.advance_tokens();
            self.advance_tokens();
            params.push(Ident::new(self.current.clone()));
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(params)
    }

    /// Parses `(` as the call operator; `left` is the callee.
    fn parse_call(&mut self, left: Expr) -> Option<Expr> {
        let token = self.current.clone();
        let args = self.parse_call_args()?;

        Some(Expr::new(
            token,
            ExprKind::Call {
                function: Box::new(left),
                args,
            },
        ))
    }

    /// Parses the comma-separated call argument list.
    fn parse_call_args(&mut self) -> Option<Vec<Expr>> {
        let mut args = Vec::new();

        if self.peek.kind == TokenKind::RParen {
            self.advance_tokens();
            return Some(args);
        }

        self.advance_tokens();
        loop {
            if let Some(expression) = self.parse_expression(Precedence::Lowest) {
                args.push(expression);
            }
            if self.peek.kind == TokenKind::Comma {
                self.advance_tokens();
                self.advance_tokens();
            } else {
                break;
            }
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(args)
    }
}
