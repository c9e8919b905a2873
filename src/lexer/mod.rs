//! Lexical analyzer for the Mica programming language.
//!
//! This module provides the [`Lexer`] struct which converts source code text
//! into a stream of [`Token`]s for parsing.
//!
//! # Overview
//!
//! The lexer is pull-driven: each call to [`Lexer::next_token`] classifies
//! and returns the next token, and once the input is exhausted every further
//! call returns an `Eof` token. It never fails; characters it cannot
//! classify become `Illegal` tokens and are surfaced by the parser when it
//! cannot place them.
//!
//! # Supported Tokens
//!
//! - **Keywords**: `let`, `var`, `const`, `function`, `if`, `else`,
//!   `return`, `true`, `false`, and the word operators `and`, `or`, `xor`
//! - **Identifiers**: an ASCII letter or underscore followed by ASCII
//!   alphanumerics and underscores
//! - **Integer literals**: maximal runs of ASCII digits
//! - **String literals**: enclosed in matching single or double quotes; the
//!   raw inner text is kept verbatim (no escape sequences)
//! - **Operators**: `+ - * / = ! < > ^ & |` and the two-character forms
//!   `== != <= >= && ||`, recognized greedily
//! - **Delimiters**: `( ) { } , ;`
//!
//! # Examples
//!
//! ```
//! use mica::lexer::Lexer;
//! use mica::token::TokenKind;
//!
//! let mut lexer = Lexer::new("let five = 5;");
//!
//! assert_eq!(lexer.next_token().kind, TokenKind::Let);
//! assert_eq!(lexer.next_token().literal, "five");
//! ```
//!
//! # Module Structure
//!
//! - [`cursor`] - Character navigation and whitespace skipping
//! - [`literals`] - Identifier, integer, and string literal reading
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

mod cursor;
mod literals;

#[cfg(test)]
mod tests;

use crate::token::{Token, TokenKind};

/// A lexical analyzer that tokenizes Mica source code on demand.
///
/// The lexer keeps a one-character look-ahead: `ch` is the current
/// character, `position` its byte offset, and `read_position` the offset of
/// the next unread byte. Construction advances once so the first character
/// is current.
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties the lexer to the input string slice,
/// ensuring the input remains valid while the lexer is in use.
pub struct Lexer<'a> {
    /// The input source code being tokenized.
    pub(super) input: &'a str,
    /// Byte position of the current character.
    pub(super) position: usize,
    /// Byte position of the next unread character.
    pub(super) read_position: usize,
    /// The current character, or `None` past the end of input.
    pub(super) ch: Option<char>,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` for the given input string.
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer {
            input,
            position: 0,
            read_position: 0,
            ch: None,
        };
        lexer.read_char();
        lexer
    }

    /// Returns the next token from the source.
    ///
    /// After the input is exhausted this keeps returning `Eof` tokens
    /// indefinitely, so callers can always pull one more token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            None => Token::eof(),
            Some(c @ '=') => self.two_char_or(c, '=', TokenKind::Equals, TokenKind::Assign),
            Some(c @ '!') => self.two_char_or(c, '=', TokenKind::NotEquals, TokenKind::Negation),
            Some(c @ '&') => self.two_char_or(c, '&', TokenKind::And, TokenKind::Intersection),
            Some(c @ '|') => self.two_char_or(c, '|', TokenKind::Or, TokenKind::Union),
            Some(c @ '<') => self.two_char_or(c, '=', TokenKind::Le, TokenKind::Lt),
            Some(c @ '>') => self.two_char_or(c, '=', TokenKind::Ge, TokenKind::Gt),
            Some('^') => Token::new(TokenKind::Xor, "^"),
            Some('+') => Token::new(TokenKind::Plus, "+"),
            Some('-') => Token::new(TokenKind::Minus, "-"),
            Some('*') => Token::new(TokenKind::Multiplication, "*"),
            Some('/') => Token::new(TokenKind::Division, "/"),
            Some('(') => Token::new(TokenKind::LParen, "("),
            Some(')') => Token::new(TokenKind::RParen, ")"),
            Some('{') => Token::new(TokenKind::LBrace, "{"),
            Some('}') => Token::new(TokenKind::RBrace, "}"),
            Some(',') => Token::new(TokenKind::Comma, ","),
            Some(';') => Token::new(TokenKind::Semicolon, ";"),
            Some(quote @ ('"' | '\'')) => return self.read_string(quote),
            Some(c) if Self::is_letter(c) => return self.read_identifier(),
            Some(c) if c.is_ascii_digit() => return self.read_number(),
            Some(c) => Token::new(TokenKind::Illegal, c.to_string()),
        };

        self.read_char();
        token
    }

    /// Emits a two-character token if the look-ahead matches `expected`,
    /// otherwise the single-character fallback.
    fn two_char_or(
        &mut self,
        first: char,
        expected: char,
        compound: TokenKind,
        single: TokenKind,
    ) -> Token {
        if self.peek_char() == Some(expected) {
            self.read_char();
            Token::new(compound, format!("{first}{expected}"))
        } else {
            Token::new(single, first.to_string())
        }
    }

    /// Returns `true` for characters that may start an identifier.
    ///
    /// Digits may appear after the first character but never start one.
    fn is_letter(c: char) -> bool {
        c.is_ascii_alphabetic() || c == '_'
    }
}
