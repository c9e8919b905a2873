//! Statement nodes, blocks, and the program root for the Mica AST.

use std::fmt;

use super::expr::{Expr, Ident};
use crate::token::Token;

/// The kind of a statement.
#[derive(Debug, Clone)]
pub enum StmtKind {
    /// A binding statement introduced by `let`, `var`, or `const`.
    ///
    /// The three keywords are semantically identical; the originating
    /// keyword survives in the statement token for rendering. The name and
    /// value are always present: parse failures drop the whole statement.
    Let {
        /// The bound name.
        name: Ident,
        /// The bound value expression.
        value: Expr,
    },

    /// A `return` statement.
    Return(Expr),

    /// A bare expression in statement position.
    Expression(Expr),
}

/// A statement with its originating token.
#[derive(Debug, Clone)]
pub struct Stmt {
    /// The token that began this statement.
    pub token: Token,
    /// The statement shape.
    pub kind: StmtKind,
}

impl Stmt {
    /// Creates a new statement node.
    pub fn new(token: Token, kind: StmtKind) -> Self {
        Stmt { token, kind }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StmtKind::Let { name, value } => {
                write!(f, "{} {name} = {value};", self.token.literal)
            }
            StmtKind::Return(value) => write!(f, "{} {value}", self.token.literal),
            StmtKind::Expression(value) => write!(f, "{value}"),
        }
    }
}

/// A braced sequence of statements.
///
/// Blocks appear as `if` consequences/alternatives and function bodies.
/// They render as the concatenation of their statements.
#[derive(Debug, Clone)]
pub struct Block {
    /// The `{` token that opened the block.
    pub token: Token,
    /// The statements in source order.
    pub statements: Vec<Stmt>,
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// The root of a parsed program: an ordered sequence of statements.
#[derive(Debug, Clone, Default)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Stmt>,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
