//! Unit tests for parsing.
//!
//! Tests are organized by parser component:
//! - [`stmt`]: Statement parsing (let/var/const, return, semicolons)
//! - [`expr`]: Expression parsing (literals, prefix, infix, grouping)
//! - [`precedence`]: Operator precedence via print-parse round trips
//! - [`functions`]: Function literals, parameters, and calls
//! - [`errors`]: Error accumulation and message templates

use super::*;
use crate::ast::{Expr, StmtKind};

mod functions;

/// Parses input and returns the program, panicking on any parse error.
pub(super) fn parse(input: &str) -> Program {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();
    assert!(
        parser.errors().is_empty(),
        "Parse errors for input {:?}: {:?}",
        input,
        parser.errors()
    );
    program
}

/// Parses input expected to fail and returns the recorded errors.
pub(super) fn parse_errors(input: &str) -> Vec<String> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    parser.parse_program();
    let errors = parser.errors().to_vec();
    assert!(
        !errors.is_empty(),
        "Expected parse errors for input {:?}, got none",
        input
    );
    errors
}

/// Extracts the single expression statement from a one-statement program.
pub(super) fn parse_single_expr(input: &str) -> Expr {
    let program = parse(input);
    assert_eq!(
        program.statements.len(),
        1,
        "Expected one statement for input {:?}",
        input
    );
    match &program.statements[0].kind {
        StmtKind::Expression(expression) => expression.clone(),
        other => panic!("Expected expression statement, got {:?}", other),
    }
}
