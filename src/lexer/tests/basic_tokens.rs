//! Tests for single-character operators and delimiters.

use super::*;

#[test]
fn test_empty_input() {
    assert_eq!(tokenize_kinds(""), vec![TokenKind::Eof]);
}

#[test]
fn test_whitespace_only() {
    assert_eq!(tokenize_kinds("   \t\n  "), vec![TokenKind::Eof]);
}

#[test]
fn test_single_char_operators() {
    assert_eq!(
        tokenize_kinds("+-*/^"),
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Multiplication,
            TokenKind::Division,
            TokenKind::Xor,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_delimiters() {
    assert_eq!(
        tokenize_kinds("(){},;"),
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_delimiters_with_spaces() {
    assert_eq!(
        tokenize_kinds("( , )"),
        vec![
            TokenKind::LParen,
            TokenKind::Comma,
            TokenKind::RParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_literals_match_source() {
    let tokens = tokenize("(+;");
    assert_eq!(tokens[0], Token::new(TokenKind::LParen, "("));
    assert_eq!(tokens[1], Token::new(TokenKind::Plus, "+"));
    assert_eq!(tokens[2], Token::new(TokenKind::Semicolon, ";"));
}
