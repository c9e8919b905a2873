//! Tests for identifier recognition.

use super::*;

#[test]
fn test_identifier_simple() {
    let tokens = tokenize("greet");
    assert_eq!(tokens[0], Token::new(TokenKind::Ident, "greet"));
}

#[test]
fn test_identifier_with_underscore() {
    let tokens = tokenize("my_func");
    assert_eq!(tokens[0], Token::new(TokenKind::Ident, "my_func"));
}

#[test]
fn test_identifier_starts_with_underscore() {
    let tokens = tokenize("_private");
    assert_eq!(tokens[0], Token::new(TokenKind::Ident, "_private"));
}

#[test]
fn test_identifier_with_digits_after_first() {
    let tokens = tokenize("value2");
    assert_eq!(tokens[0], Token::new(TokenKind::Ident, "value2"));
}

#[test]
fn test_digit_does_not_start_identifier() {
    // `2value` splits into an integer and an identifier.
    assert_eq!(
        tokenize_kinds("2value"),
        vec![TokenKind::Int, TokenKind::Ident, TokenKind::Eof]
    );
    assert_eq!(tokenize_literals("2value"), vec!["2", "value"]);
}

#[test]
fn test_multiple_identifiers() {
    assert_eq!(tokenize_literals("foo bar"), vec!["foo", "bar"]);
}

#[test]
fn test_keyword_prefix_stays_identifier() {
    let tokens = tokenize("letter");
    assert_eq!(tokens[0], Token::new(TokenKind::Ident, "letter"));
}
