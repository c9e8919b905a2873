//! Unit tests for the lexer module.

use super::*;
use crate::token::{Token, TokenKind};

/// Helper to pull every token up to and including the first `Eof`.
pub(super) fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }
    tokens
}

/// Helper to tokenize input and return only the kinds (including `Eof`).
pub(super) fn tokenize_kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input).into_iter().map(|t| t.kind).collect()
}

/// Helper to tokenize input and return only the literals, `Eof` excluded.
pub(super) fn tokenize_literals(input: &str) -> Vec<String> {
    let mut tokens = tokenize(input);
    tokens.pop(); // drop Eof
    tokens.into_iter().map(|t| t.literal).collect()
}

mod basic_tokens;
mod identifiers;
