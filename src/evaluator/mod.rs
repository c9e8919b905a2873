//! Tree-walking evaluator for the Mica programming language.
//!
//! This module provides the [`Evaluator`], which walks a parsed
//! [`Program`] and reduces it to a runtime [`Object`], threading an
//! [`Environment`] chain that models lexical scope.
//!
//! # Overview
//!
//! The evaluator is total over well-formed ASTs: ill-typed operations
//! produce [`Object::Error`] values instead of native failures, and errors
//! propagate upward exactly like `return` does — any statement producing
//! one short-circuits the enclosing block and program. There is no
//! exception machinery anywhere in the evaluation path.
//!
//! Booleans and null are shared sentinels owned by the evaluator, so `==`
//! on them (which falls through to identity comparison) behaves like value
//! equality. Functions capture the environment they were defined in and
//! evaluate their bodies in a fresh child of it.
//!
//! `&&`, `||` and `^` parse as ordinary infix operators but have no
//! evaluation rule: both operands are always evaluated, then the operator
//! falls through to the invalid-operation error path. This is observable
//! and deliberate.
//!
//! # Examples
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use mica::evaluator::Evaluator;
//! use mica::lexer::Lexer;
//! use mica::object::Environment;
//! use mica::parser::Parser;
//!
//! let mut parser = Parser::new(Lexer::new("50 / 2 * 3 - 5"));
//! let program = parser.parse_program();
//!
//! let evaluator = Evaluator::new();
//! let env = Rc::new(RefCell::new(Environment::new()));
//! let result = evaluator.eval_program(&program, &env).expect("a value");
//! assert_eq!(result.inspect(), "70");
//! ```
//!
//! # Module Structure
//!
//! - [`builtins`] - The native built-in function table
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::ast`] - The tree being walked
//! * [`crate::object`] - The values being produced

mod builtins;

#[cfg(test)]
mod tests;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::ast::{Block, Expr, ExprKind, Program, Stmt, StmtKind};
use crate::object::{Environment, FunctionObj, Object};

/// Creates an error object with the default line.
fn new_error(message: String) -> Rc<Object> {
    Rc::new(Object::Error { message, line: 1 })
}

/// The tree-walking evaluator.
///
/// Owns the `TRUE`/`FALSE`/`NULL` sentinels and the built-ins table; both
/// are stable for the evaluator's lifetime, which keeps object identity
/// meaningful across evaluations in the same session.
pub struct Evaluator {
    true_obj: Rc<Object>,
    false_obj: Rc<Object>,
    null: Rc<Object>,
    builtins: HashMap<&'static str, Rc<Object>>,
}

impl Evaluator {
    /// Creates an evaluator with fresh sentinels and built-ins.
    pub fn new() -> Self {
        Evaluator {
            true_obj: Rc::new(Object::Boolean(true)),
            false_obj: Rc::new(Object::Boolean(false)),
            null: Rc::new(Object::Null),
            builtins: builtins::all(),
        }
    }

    /// Returns the shared null sentinel.
    pub fn null(&self) -> Rc<Object> {
        Rc::clone(&self.null)
    }

    /// Evaluates a program, returning the last produced value.
    ///
    /// A `Return` produced by a top-level statement is unwrapped and ends
    /// the program; an `Error` ends it unwrapped. An empty program (or one
    /// whose last statement produces nothing) yields `None`.
    pub fn eval_program(
        &self,
        program: &Program,
        env: &Rc<RefCell<Environment>>,
    ) -> Option<Rc<Object>> {
        let mut result = None;

        for statement in &program.statements {
            match self.eval_statement(statement, env) {
                Some(value) => match &*value {
                    Object::Return(inner) => return Some(Rc::clone(inner)),
                    Object::Error { .. } => return Some(value),
                    _ => result = Some(value),
                },
                None => result = None,
            }
        }

        result
    }

    /// Evaluates a block, propagating `Return` and `Error` unwrapped.
    ///
    /// Unlike [`Evaluator::eval_program`], a `Return` passes through intact
    /// so enclosing blocks can observe and re-propagate it; unwrapping
    /// happens only at the program boundary and at function-call return.
    fn eval_block(&self, block: &Block, env: &Rc<RefCell<Environment>>) -> Option<Rc<Object>> {
        let mut result = None;

        for statement in &block.statements {
            match self.eval_statement(statement, env) {
                Some(value) => {
                    if matches!(&*value, Object::Return(_) | Object::Error { .. }) {
                        return Some(value);
                    }
                    result = Some(value);
                }
                None => result = None,
            }
        }

        result
    }

    fn eval_statement(&self, statement: &Stmt, env: &Rc<RefCell<Environment>>) -> Option<Rc<Object>> {
        match &statement.kind {
            StmtKind::Expression(expression) => self.eval_expression(expression, env),
            StmtKind::Let { name, value } => {
                let value = self.eval_expression_or_null(value, env);
                env.borrow_mut().set(name.name.clone(), Rc::clone(&value));
                Some(value)
            }
            StmtKind::Return(value) => {
                let value = self.eval_expression_or_null(value, env);
                Some(Rc::new(Object::Return(value)))
            }
        }
    }

    fn eval_expression(&self, expression: &Expr, env: &Rc<RefCell<Environment>>) -> Option<Rc<Object>> {
        match &expression.kind {
            ExprKind::Integer(value) => Some(Rc::new(Object::Integer(*value))),
            ExprKind::Boolean(value) => Some(self.bool_object(*value)),
            ExprKind::StringLit(value) => Some(Rc::new(Object::Str(value.clone()))),
            ExprKind::Identifier(name) => Some(self.eval_identifier(name, env)),
            ExprKind::Prefix { operator, right } => {
                let right = self.eval_expression_or_null(right, env);
                Some(self.eval_prefix(operator, &right))
            }
            ExprKind::Infix {
                left,
                operator,
                right,
            } => {
                // Both operands always evaluate, left first; there is no
                // short-circuiting for any operator.
                let left = self.eval_expression_or_null(left, env);
                let right = self.eval_expression_or_null(right, env);
                Some(self.eval_infix(operator, left, right))
            }
            ExprKind::If {
                condition,
                consequence,
                alternative,
            } => {
                let condition = self.eval_expression_or_null(condition, env);
                if self.is_truthy(&condition) {
                    self.eval_block(consequence, env)
                } else if let Some(alternative) = alternative {
                    self.eval_block(alternative, env)
                } else {
                    Some(self.null())
                }
            }
            ExprKind::Function { name, params, body } => {
                let function = Rc::new(Object::Function(FunctionObj {
                    name: name.clone(),
                    params: params.clone(),
                    body: body.clone(),
                    env: Rc::clone(env),
                }));
                if let Some(name) = name {
                    env.borrow_mut().set(name.name.clone(), Rc::clone(&function));
                }
                Some(function)
            }
            ExprKind::Call { function, args } => {
                let callee = self.eval_expression_or_null(function, env);
                let args: Vec<Rc<Object>> = args
                    .iter()
                    .map(|arg| self.eval_expression_or_null(arg, env))
                    .collect();
                Some(self.apply_function(callee, args))
            }
        }
    }

    /// Evaluates an expression in operand position, coercing the rare
    /// valueless case (an `if` with an empty branch) to null.
    fn eval_expression_or_null(&self, expression: &Expr, env: &Rc<RefCell<Environment>>) -> Rc<Object> {
        self.eval_expression(expression, env)
            .unwrap_or_else(|| self.null())
    }

    fn eval_identifier(&self, name: &str, env: &Rc<RefCell<Environment>>) -> Rc<Object> {
        if let Some(value) = env.borrow().get(name) {
            return value;
        }
        match self.builtins.get(name) {
            Some(builtin) => Rc::clone(builtin),
            None => new_error(format!("Identifier not found: {name}")),
        }
    }

    fn eval_prefix(&self, operator: &str, right: &Rc<Object>) -> Rc<Object> {
        match operator {
            "!" => self.eval_bang(right),
            "+" => match &**right {
                Object::Integer(value) => Rc::new(Object::Integer(*value)),
                other => new_error(format!("Invalid operator (+) for type: {}", other.kind())),
            },
            "-" => match &**right {
                Object::Integer(value) => Rc::new(Object::Integer(value.wrapping_neg())),
                other => new_error(format!("Invalid operator (-) for type: {}", other.kind())),
            },
            _ => new_error(format!(
                "Invalid operator ({operator}) for type: {}",
                right.kind()
            )),
        }
    }

    /// `!` special-cases integers (zero is "false"); everything else
    /// negates ordinary truthiness.
    fn eval_bang(&self, right: &Rc<Object>) -> Rc<Object> {
        match &**right {
            Object::Integer(value) => self.bool_object(*value == 0),
            _ => self.bool_object(!self.is_truthy(right)),
        }
    }

    /// Dispatches an infix operation on the operand types.
    ///
    /// The dispatch order is significant: integer pairs first, then
    /// string-led pairs, then identity for `==`/`!=`, then the two error
    /// shapes (mismatched types vs unsupported operator).
    fn eval_infix(&self, operator: &str, left: Rc<Object>, right: Rc<Object>) -> Rc<Object> {
        match (&*left, &*right) {
            (Object::Integer(l), Object::Integer(r)) => {
                self.eval_integer_infix(operator, *l, *r)
            }
            (Object::Str(l), Object::Str(r)) => self.eval_string_infix(operator, l, r),
            (Object::Str(l), Object::Integer(times)) => {
                if operator == "*" {
                    let times = usize::try_from(*times).unwrap_or(0);
                    Rc::new(Object::Str(l.repeat(times)))
                } else {
                    new_error(format!("Type mismatch: STRING {operator} INTEGER"))
                }
            }
            _ if operator == "==" => self.bool_object(Rc::ptr_eq(&left, &right)),
            _ if operator == "!=" => self.bool_object(!Rc::ptr_eq(&left, &right)),
            _ if left.kind() != right.kind() => new_error(format!(
                "Type mismatch: {} {operator} {}",
                left.kind(),
                right.kind()
            )),
            _ => new_error(format!(
                "Invalid operation: {} {operator} {}",
                left.kind(),
                right.kind()
            )),
        }
    }

    fn eval_integer_infix(&self, operator: &str, left: i64, right: i64) -> Rc<Object> {
        match operator {
            "+" => Rc::new(Object::Integer(left.wrapping_add(right))),
            "-" => Rc::new(Object::Integer(left.wrapping_sub(right))),
            "*" => Rc::new(Object::Integer(left.wrapping_mul(right))),
            "/" => {
                if right == 0 {
                    new_error("Division by zero: INTEGER / INTEGER".to_string())
                } else {
                    Rc::new(Object::Integer(floor_div(left, right)))
                }
            }
            "<" => self.bool_object(left < right),
            ">" => self.bool_object(left > right),
            "<=" => self.bool_object(left <= right),
            ">=" => self.bool_object(left >= right),
            "==" => self.bool_object(left == right),
            "!=" => self.bool_object(left != right),
            _ => new_error(format!("Invalid operation: INTEGER {operator} INTEGER")),
        }
    }

    fn eval_string_infix(&self, operator: &str, left: &str, right: &str) -> Rc<Object> {
        match operator {
            "+" => Rc::new(Object::Str(format!("{left}{right}"))),
            "==" => self.bool_object(left == right),
            "!=" => self.bool_object(left != right),
            _ => new_error(format!("Invalid operation: STRING {operator} STRING")),
        }
    }

    /// Applies a callee to already-evaluated arguments.
    fn apply_function(&self, callee: Rc<Object>, args: Vec<Rc<Object>>) -> Rc<Object> {
        match &*callee {
            Object::Function(function) => {
                if args.len() < function.params.len() {
                    return new_error(format!(
                        "Wrong number of arguments: expected {} (given {})",
                        function.params.len(),
                        args.len()
                    ));
                }

                // Parameters bind positionally in a fresh frame whose outer
                // is the captured environment; excess arguments are ignored.
                let mut call_env = Environment::new_enclosed(Rc::clone(&function.env));
                for (param, arg) in function.params.iter().zip(&args) {
                    call_env.set(param.name.clone(), Rc::clone(arg));
                }
                let call_env = Rc::new(RefCell::new(call_env));

                match self.eval_block(&function.body, &call_env) {
                    Some(result) => match &*result {
                        Object::Return(inner) => Rc::clone(inner),
                        _ => result,
                    },
                    None => self.null(),
                }
            }
            Object::Builtin(builtin) => builtin(&args),
            other => new_error(format!("Not a function: {}", other.kind())),
        }
    }

    /// Maps a native bool onto the shared sentinels.
    fn bool_object(&self, value: bool) -> Rc<Object> {
        if value {
            Rc::clone(&self.true_obj)
        } else {
            Rc::clone(&self.false_obj)
        }
    }

    /// Only `NULL` and `FALSE` are falsy; everything else (including zero
    /// and the empty string) is truthy.
    fn is_truthy(&self, object: &Rc<Object>) -> bool {
        !(Rc::ptr_eq(object, &self.null) || Rc::ptr_eq(object, &self.false_obj))
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::new()
    }
}

/// Floor division: the quotient is rounded toward negative infinity, so
/// `-7 / 2 == -4` and `7 / -2 == -4`.
fn floor_div(left: i64, right: i64) -> i64 {
    let quotient = left.wrapping_div(right);
    let remainder = left.wrapping_rem(right);
    if remainder != 0 && (remainder < 0) != (right < 0) {
        quotient - 1
    } else {
        quotient
    }
}
