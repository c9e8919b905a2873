//! Expression nodes for the Mica AST.

use std::fmt;

use super::stmt::Block;
use crate::token::Token;

/// An identifier node.
///
/// Used both as an expression building block and structurally where the
/// grammar demands a name: `let` targets, function parameters, and named
/// function declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    /// The identifier token.
    pub token: Token,
    /// The name as written in the source.
    pub name: String,
}

impl Ident {
    /// Creates an identifier node from its token.
    ///
    /// The name is taken from the token literal.
    pub fn new(token: Token) -> Self {
        let name = token.literal.clone();
        Ident { token, name }
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The kind of an expression.
///
/// This enum represents the different expression shapes without the
/// originating token. Use [`Expr`] for the full AST node.
#[derive(Debug, Clone)]
pub enum ExprKind {
    /// A variable reference by name.
    Identifier(String),

    /// An integer literal, already converted to its value.
    Integer(i64),

    /// A boolean literal.
    Boolean(bool),

    /// A string literal holding the raw inner text.
    StringLit(String),

    /// A prefix operation such as `-x` or `!ok`.
    Prefix {
        /// The operator as written (`-` or `!`).
        operator: String,
        /// The operand expression.
        right: Box<Expr>,
    },

    /// A binary operation such as `a + b`.
    Infix {
        /// The left operand.
        left: Box<Expr>,
        /// The operator as written (`+`, `==`, `&&`, …).
        operator: String,
        /// The right operand.
        right: Box<Expr>,
    },

    /// A conditional expression with an optional alternative.
    If {
        /// The condition expression.
        condition: Box<Expr>,
        /// The block evaluated when the condition is truthy.
        consequence: Block,
        /// The optional `else` block.
        alternative: Option<Block>,
    },

    /// A function literal, optionally named.
    ///
    /// The name is present only for named declarations
    /// (`function add(x, y) { … }`); anonymous literals leave it absent.
    /// Duplicate parameters are accepted and shadow each other lexically.
    Function {
        /// The declaration name, if any.
        name: Option<Ident>,
        /// The ordered, possibly empty parameter list.
        params: Vec<Ident>,
        /// The function body.
        body: Block,
    },

    /// A call expression: callee followed by parenthesised arguments.
    Call {
        /// The expression being called.
        function: Box<Expr>,
        /// The arguments, evaluated left to right.
        args: Vec<Expr>,
    },
}

/// An expression with its originating token.
#[derive(Debug, Clone)]
pub struct Expr {
    /// The token that began this expression.
    pub token: Token,
    /// The expression shape.
    pub kind: ExprKind,
}

impl Expr {
    /// Creates a new expression node.
    pub fn new(token: Token, kind: ExprKind) -> Self {
        Expr { token, kind }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Identifier(name) => f.write_str(name),
            ExprKind::Integer(value) => write!(f, "{value}"),
            ExprKind::Boolean(_) | ExprKind::StringLit(_) => f.write_str(&self.token.literal),
            ExprKind::Prefix { operator, right } => write!(f, "({operator} {right})"),
            ExprKind::Infix {
                left,
                operator,
                right,
            } => write!(f, "({left} {operator} {right})"),
            ExprKind::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if {condition} {{{consequence}}}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {{{alternative}}}")?;
                }
                Ok(())
            }
            ExprKind::Function { name, params, body } => {
                write!(f, "function ")?;
                if let Some(name) = name {
                    write!(f, "{name} ")?;
                }
                let params = params
                    .iter()
                    .map(|p| p.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "({params}) {{\n    {body}\n}}")
            }
            ExprKind::Call { function, args } => {
                let args = args
                    .iter()
                    .map(Expr::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{function}({args})")
            }
        }
    }
}
