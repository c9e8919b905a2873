//! Binding and identifier lookup tests.

use super::*;

#[test]
fn test_let_binds_and_yields_its_value() {
    assert_integer("var a = 1;", 1);
    assert_integer("let b = 2;", 2);
    assert_integer("const c = 0;", 0);
}

#[test]
fn test_bound_names_resolve() {
    assert_integer("var a = 1; a;", 1);
    assert_integer("let b = 2; b;", 2);
    assert_integer("let a = 0; let b = a; b", 0);
    assert_integer("let a = 3; let b = a; let c = a + b + 3; c", 9);
}

#[test]
fn test_rebinding_shadows() {
    assert_integer("let a = 1; let a = 2; a", 2);
}

#[test]
fn test_unknown_identifier() {
    assert_error("foobar;", "Identifier not found: foobar");
}

#[test]
fn test_binding_keywords_share_semantics() {
    assert_integer("let a = 1; var b = a + 1; const c = b + 1; c", 3);
}

#[test]
fn test_environments_are_isolated_between_programs() {
    assert_integer("let a = 1; a", 1);
    // A fresh environment knows nothing about earlier programs.
    assert_error("a", "Identifier not found: a");
}
