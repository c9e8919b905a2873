//! Function literal, closure, and call tests.

use super::*;

#[test]
fn test_function_literal_evaluates_to_a_function() {
    let result = eval("function (x) {return x + 2;}");
    match &*result {
        Object::Function(function) => {
            assert!(function.name.is_none());
            assert_eq!(function.params.len(), 1);
            assert_eq!(function.params[0].name, "x");
            assert_eq!(function.body.to_string(), "return (x + 2)");
        }
        other => panic!("Expected function, got {:?}", other),
    }
}

#[test]
fn test_function_inspect() {
    let result = eval("function (x) {return x + 2;}");
    assert_eq!(result.inspect(), "function (x) {\n    return (x + 2)\n}");
}

#[test]
fn test_calls() {
    assert_integer("let a = function (x) {x;}; a(1);", 1);
    assert_integer("let b = function (y) {return y;}; b(2);", 2);
    assert_integer("let c = function (x, y) {return x + y;}; c(3, 4);", 7);
    assert_integer("let d = function (z) {return z * 2;}; d(5);", 10);
}

#[test]
fn test_arguments_evaluate_left_to_right_before_the_call() {
    assert_integer(
        "let s = function (x, y) {return x + y;}; s(1 + 2, s(3, 4));",
        10,
    );
}

#[test]
fn test_immediate_call_of_function_literal() {
    assert_integer("function (x) {x;}(15)", 15);
    assert_string("function (){return \"foo\";}()", "foo");
}

#[test]
fn test_named_declaration_binds_itself() {
    assert_integer("function add(x, y) { return x + y; }; add(1, 2)", 3);
}

#[test]
fn test_named_functions_can_recurse() {
    assert_integer(
        "function fact(n) { if (n < 2) { return 1; } return n * fact(n - 1); }; fact(5)",
        120,
    );
}

#[test]
fn test_closures_capture_their_defining_environment() {
    assert_integer(
        "let adder = function (x) { return function (y) { return x + y; }; };
         let add_two = adder(2);
         add_two(3)",
        5,
    );
}

#[test]
fn test_closures_do_not_leak_parameters() {
    assert_error(
        "let f = function (x) { x; }; f(1); x",
        "Identifier not found: x",
    );
}

#[test]
fn test_parameters_shadow_outer_bindings() {
    assert_integer("let x = 1; let f = function (x) { return x; }; f(9)", 9);
}

#[test]
fn test_missing_arguments_are_an_error() {
    assert_error(
        "let c = function (x, y) {return x + y;}; c(3);",
        "Wrong number of arguments: expected 2 (given 1)",
    );
    assert_error(
        "let f = function (x) {x;}; f();",
        "Wrong number of arguments: expected 1 (given 0)",
    );
}

#[test]
fn test_excess_arguments_are_ignored() {
    assert_integer("let f = function (x) {return x;}; f(1, 2, 3);", 1);
}

#[test]
fn test_calling_a_non_function() {
    assert_error("let a = 5; a(1);", "Not a function: INTEGER");
    assert_error("true();", "Not a function: BOOLEAN");
}

#[test]
fn test_function_identity() {
    assert_boolean("let f = function (x) {x;}; f == f", true);
    assert_boolean(
        "let f = function (x) {x;}; let g = function (x) {x;}; f == g",
        false,
    );
}

#[test]
fn test_empty_body_call_yields_nothing_observable() {
    // The body produces no value; the call is coerced to null, which is
    // falsy in a condition.
    assert_integer("let f = function () {}; if (f()) { 1 } else { 2 }", 2);
}
