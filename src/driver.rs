//! Script-file execution for `mica run`.

use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

use mica::evaluator::Evaluator;
use mica::lexer::Lexer;
use mica::object::{Environment, Object};
use mica::parser::Parser;

use crate::diagnostics;

/// Runs the given script file and returns the process exit code.
///
/// Parse errors and runtime error objects are rendered through the
/// diagnostics module and yield exit code 1. A final value other than
/// null prints its inspect string.
pub(crate) fn run(path: &str) -> i32 {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: failed to read '{path}': {error}");
            return 1;
        }
    };

    let lexer = Lexer::new(&source);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        diagnostics::report_parse_errors(path, &source, parser.errors());
        return 1;
    }

    let evaluator = Evaluator::new();
    let env = Rc::new(RefCell::new(Environment::new()));

    match evaluator.eval_program(&program, &env) {
        Some(result) => match &*result {
            Object::Error { message, line } => {
                diagnostics::report_runtime_error(path, &source, message, *line);
                1
            }
            Object::Null => 0,
            _ => {
                println!("{}", result.inspect());
                0
            }
        },
        None => 0,
    }
}
