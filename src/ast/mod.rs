//! Abstract Syntax Tree definitions for the Mica programming language.
//!
//! This module defines the data structures that represent parsed Mica
//! programs. The AST is produced by the [`crate::parser`] and walked by the
//! [`crate::evaluator`].
//!
//! # Structure
//!
//! - [`Program`] - The root node: an ordered sequence of statements
//! - [`Stmt`] / [`StmtKind`] - Statements (`let`, `return`, expression)
//! - [`Expr`] / [`ExprKind`] - Expressions (literals, identifiers, prefix
//!   and infix operations, conditionals, function literals, calls)
//! - [`Block`] - A braced statement sequence used by `if` and functions
//! - [`Ident`] - An identifier node (binding names, parameters)
//!
//! Every node carries the token that produced it, for diagnostic display.
//! Nodes own their children by value; the tree has no cycles.
//!
//! The `Display` impls render nodes back to canonical source-like text;
//! this rendering is also used by the runtime inspect string of function
//! objects.
//!
//! # Module Structure
//!
//! - [`expr`] - Expression nodes and kinds
//! - [`stmt`] - Statement nodes, blocks, and the program root
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::evaluator`] - Walks the AST to produce runtime objects

mod expr;
mod stmt;


pub use expr::{Expr, ExprKind, Ident};
pub use stmt::{Block, Program, Stmt, StmtKind};
