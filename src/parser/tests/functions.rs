//! Function literal and call parsing tests.

use super::*;
use crate::ast::ExprKind;

#[test]
fn test_anonymous_function() {
    let expression = parse_single_expr("function (x) { return x + 2; }");
    match expression.kind {
        ExprKind::Function { name, params, body } => {
            assert!(name.is_none());
            assert_eq!(params.len(), 1);
            assert_eq!(params[0].name, "x");
            assert_eq!(body.to_string(), "return (x + 2)");
        }
        other => panic!("Expected function literal, got {:?}", other),
    }
}

#[test]
fn test_named_function() {
    let expression = parse_single_expr("function add(x, y) { return x + y; }");
    match expression.kind {
        ExprKind::Function { name, params, .. } => {
            assert_eq!(name.expect("function name").name, "add");
            let params: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
            assert_eq!(params, vec!["x", "y"]);
        }
        other => panic!("Expected function literal, got {:?}", other),
    }
}

#[test]
fn test_empty_parameter_list() {
    let expression = parse_single_expr("function () { 1; }");
    match expression.kind {
        ExprKind::Function { params, .. } => assert!(params.is_empty()),
        other => panic!("Expected function literal, got {:?}", other),
    }
}

#[test]
fn test_duplicate_parameters_are_accepted() {
    let expression = parse_single_expr("function (x, x) { x; }");
    match expression.kind {
        ExprKind::Function { params, .. } => {
            assert_eq!(params.len(), 2);
            assert_eq!(params[0].name, params[1].name);
        }
        other => panic!("Expected function literal, got {:?}", other),
    }
}

#[test]
fn test_call_expression() {
    let expression = parse_single_expr("sum(1, 2 * 3, other);");
    match expression.kind {
        ExprKind::Call { function, args } => {
            assert!(matches!(function.kind, ExprKind::Identifier(ref n) if n == "sum"));
            assert_eq!(args.len(), 3);
            assert_eq!(args[1].to_string(), "(2 * 3)");
        }
        other => panic!("Expected call expression, got {:?}", other),
    }
}

#[test]
fn test_call_without_arguments() {
    let expression = parse_single_expr("ping();");
    match expression.kind {
        ExprKind::Call { args, .. } => assert!(args.is_empty()),
        other => panic!("Expected call expression, got {:?}", other),
    }
}

#[test]
fn test_nested_calls() {
    let expression = parse_single_expr("s(1 + 2, s(3, 4));");
    assert_eq!(expression.to_string(), "s((1 + 2), s(3, 4))");
}

#[test]
fn test_immediate_call_of_function_literal() {
    let expression = parse_single_expr("function (x) {x;}(15)");
    match expression.kind {
        ExprKind::Call { function, args } => {
            assert!(matches!(function.kind, ExprKind::Function { .. }));
            assert_eq!(args.len(), 1);
        }
        other => panic!("Expected call expression, got {:?}", other),
    }
}

#[test]
fn test_let_bound_function_rendering() {
    let program = parse("let a = function (x) { x; };");
    assert_eq!(program.to_string(), "let a = function (x) {\n    x\n};");
}
