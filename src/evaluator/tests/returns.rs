//! Return propagation tests.

use super::*;

#[test]
fn test_top_level_return() {
    assert_integer("return 3 * 4", 12);
    assert_integer("return 8 + 2", 10);
    assert_integer("return 12 - 7", 5);
}

#[test]
fn test_return_stops_the_program() {
    assert_integer("9; return 9 * 10; 10", 90);
}

#[test]
fn test_return_propagates_through_nested_blocks() {
    assert_integer(
        "if (5 < 6) {
            if (8 > 3) {
                return 20;
            }
            return 0;
        }",
        20,
    );
}

#[test]
fn test_return_unwraps_only_at_the_boundary() {
    // The inner block forwards the wrapper; the program unwraps it, so the
    // statement after the conditional never runs.
    assert_integer("if (true) { return 1; } 2", 1);
}

#[test]
fn test_returned_value_is_never_a_wrapper() {
    let result = eval("return 5;");
    assert!(matches!(&*result, Object::Integer(5)));
}
