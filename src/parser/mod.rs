//! Parser for the Mica programming language.
//!
//! This module provides the [`Parser`] struct which transforms the token
//! stream into an Abstract Syntax Tree ([`Program`]).
//!
//! # Overview
//!
//! Statements are parsed by recursive descent; expressions use Pratt
//! parsing (precedence climbing) with prefix and infix dispatch keyed on
//! the token kind. The parser holds a two-token window (`current` and
//! `peek`) pulled on demand from the lexer.
//!
//! Parse errors never abort the parse: they accumulate as human-readable
//! strings on the parser, and constructs that cannot be recovered are
//! dropped from the statement list. A successful parse is one that leaves
//! [`Parser::errors`] empty.
//!
//! # Grammar
//!
//! ```text
//! program     → stmt* EOF
//! stmt        → let_stmt | return_stmt | expr_stmt
//! let_stmt    → ("let" | "var" | "const") IDENT "=" expr ";"?
//! return_stmt → "return" expr ";"?
//! expr_stmt   → expr ";"?
//! expr        → prefix (infix_op expr)*
//! prefix      → IDENT | INT | STRING | "true" | "false"
//!             | ("-" | "!") expr | "(" expr ")"
//!             | "if" "(" expr ")" block ("else" block)?
//!             | "function" IDENT? "(" params? ")" block
//! block       → "{" stmt* "}"
//! call        → expr "(" arguments? ")"
//! ```
//!
//! # Examples
//!
//! ```
//! use mica::lexer::Lexer;
//! use mica::parser::Parser;
//!
//! let lexer = Lexer::new("let answer = 6 * 7;");
//! let mut parser = Parser::new(lexer);
//! let program = parser.parse_program();
//!
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.statements.len(), 1);
//! ```
//!
//! # Module Structure
//!
//! - [`precedence`] - Operator precedence levels and lookup
//! - `helpers` - Token navigation and expectation
//! - `stmt` - Statement and block parsing
//! - `expr` - Pratt expression parsing
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::lexer`] - Produces the token stream consumed by the parser
//! * [`crate::ast`] - Defines the AST types produced by the parser

mod expr;
mod helpers;
mod precedence;
mod stmt;

#[cfg(test)]
mod tests;

pub use precedence::Precedence;

use crate::ast::Program;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// A Pratt parser over the pull-driven token stream.
///
/// Create a parser with [`Parser::new`], call [`Parser::parse_program`],
/// then check [`Parser::errors`] before using the result.
pub struct Parser<'a> {
    /// The token source.
    lexer: Lexer<'a>,
    /// The token being parsed.
    current: Token,
    /// One-token look-ahead.
    peek: Token,
    /// Accumulated parse error messages.
    errors: Vec<String>,
}

impl<'a> Parser<'a> {
    /// Creates a new parser and primes the two-token window.
    pub fn new(lexer: Lexer<'a>) -> Self {
        let mut parser = Parser {
            lexer,
            current: Token::eof(),
            peek: Token::eof(),
            errors: Vec::new(),
        };
        parser.advance_tokens();
        parser.advance_tokens();
        parser
    }

    /// Returns the accumulated parse error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Consumes the token stream to `Eof` and returns the program.
    ///
    /// Statements that fail to parse are omitted; their diagnostics are
    /// available from [`Parser::errors`] afterwards.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        while self.current.kind != TokenKind::Eof {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.advance_tokens();
        }

        Program { statements }
    }
}
