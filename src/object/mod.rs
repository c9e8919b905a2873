//! Runtime object model for the Mica evaluator.
//!
//! This module defines the values Mica programs evaluate to, plus the
//! [`Environment`] chain that models lexical scope.
//!
//! # Overview
//!
//! Values are handled as `Rc<Object>` throughout the evaluator, which makes
//! the shared `TRUE`/`FALSE`/`NULL` sentinels cheap to hand out and makes
//! object identity (`Rc::ptr_eq`) observable where the language compares
//! non-integer, non-string values with `==` / `!=`.
//!
//! Two variants never reach user code as values: [`Object::Return`] is a
//! transient wrapper that carries non-local exits out of nested blocks, and
//! [`Object::Error`] terminates evaluation of the enclosing program while
//! still rendering as an ordinary inspect string.
//!
//! # Module Structure
//!
//! - [`environment`] - Name-to-value frames forming the scope chain
//!
//! # See Also
//!
//! * [`crate::evaluator`] - Produces and consumes these objects

mod environment;


pub use environment::Environment;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::ast::{Block, Ident};

/// The signature of a native built-in function.
pub type BuiltinFn = fn(&[Rc<Object>]) -> Rc<Object>;

/// The kind of a runtime object.
///
/// Kind names render uppercase and appear verbatim in evaluation error
/// messages (`Type mismatch: INTEGER + BOOLEAN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Integer,
    Boolean,
    String,
    Null,
    Return,
    Error,
    Function,
    Builtin,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectKind::Integer => "INTEGER",
            ObjectKind::Boolean => "BOOLEAN",
            ObjectKind::String => "STRING",
            ObjectKind::Null => "NULL",
            ObjectKind::Return => "RETURN",
            ObjectKind::Error => "ERROR",
            ObjectKind::Function => "FUNCTION",
            ObjectKind::Builtin => "BUILTIN",
        };
        f.write_str(name)
    }
}

/// A user-defined function value.
///
/// The function closes over the environment it was defined in; calls
/// evaluate the body in a fresh child of that environment.
#[derive(Debug, Clone)]
pub struct FunctionObj {
    /// The declaration name, if any; anonymous functions inspect with an
    /// empty name.
    pub name: Option<Ident>,
    /// The ordered parameter list.
    pub params: Vec<Ident>,
    /// The function body.
    pub body: Block,
    /// The captured defining environment.
    pub env: Rc<RefCell<Environment>>,
}

/// A runtime value.
#[derive(Debug, Clone)]
pub enum Object {
    /// A 64-bit signed integer.
    Integer(i64),

    /// A boolean; always one of the evaluator's two shared sentinels.
    Boolean(bool),

    /// An owned string value.
    Str(String),

    /// The null sentinel.
    Null,

    /// A transient wrapper propagating a `return` out of nested blocks.
    ///
    /// Unwrapped at the program boundary and at function-call return;
    /// never exposed to user code as a value.
    Return(Rc<Object>),

    /// A runtime error; terminates evaluation of the enclosing program.
    Error {
        /// The diagnostic message.
        message: String,
        /// Reserved for per-token source tracking; currently always `1`.
        line: usize,
    },

    /// A user-defined function with its captured environment.
    Function(FunctionObj),

    /// A native built-in function.
    Builtin(BuiltinFn),
}

impl Object {
    /// Returns the kind of this object.
    pub fn kind(&self) -> ObjectKind {
        match self {
            Object::Integer(_) => ObjectKind::Integer,
            Object::Boolean(_) => ObjectKind::Boolean,
            Object::Str(_) => ObjectKind::String,
            Object::Null => ObjectKind::Null,
            Object::Return(_) => ObjectKind::Return,
            Object::Error { .. } => ObjectKind::Error,
            Object::Function(_) => ObjectKind::Function,
            Object::Builtin(_) => ObjectKind::Builtin,
        }
    }

    /// Returns `true` for [`Object::Error`].
    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error { .. })
    }

    /// Renders the human-readable inspect string shown by the REPL.
    pub fn inspect(&self) -> String {
        match self {
            Object::Integer(value) => value.to_string(),
            Object::Boolean(value) => value.to_string(),
            Object::Str(value) => value.clone(),
            Object::Null => "null".to_string(),
            Object::Return(value) => value.inspect(),
            Object::Error { message, line } => {
                format!("[Error] in line {line}:\n  {message}")
            }
            Object::Function(function) => {
                let name = function
                    .name
                    .as_ref()
                    .map(|n| n.name.as_str())
                    .unwrap_or_default();
                let params = function
                    .params
                    .iter()
                    .map(|p| p.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("function {name}({params}) {{\n    {}\n}}", function.body)
            }
            Object::Builtin(_) => "builtin function".to_string(),
        }
    }
}
