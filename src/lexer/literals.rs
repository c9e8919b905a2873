//! Identifier, integer, and string literal reading for the lexer.
//!
//! Each reader consumes a maximal run of input and returns a finished
//! [`Token`], leaving the cursor on the first unconsumed character.

use super::Lexer;
use crate::token::{Token, TokenKind, lookup_keyword};

impl<'a> Lexer<'a> {
    /// Reads an identifier and reclassifies it against the keyword table.
    ///
    /// An identifier is a maximal run of ASCII alphanumerics and
    /// underscores starting at a letter or underscore; digits may appear
    /// after the first character.
    pub(super) fn read_identifier(&mut self) -> Token {
        let start = self.position;
        while self
            .ch
            .is_some_and(|c| Self::is_letter(c) || c.is_ascii_digit())
        {
            self.read_char();
        }
        let literal = &self.input[start..self.position];
        Token::new(lookup_keyword(literal), literal)
    }

    /// Reads an integer literal as a maximal run of ASCII digits.
    ///
    /// The digits are kept as the token literal; decimal conversion (and
    /// overflow detection) happens in the parser.
    pub(super) fn read_number(&mut self) -> Token {
        let start = self.position;
        while self.ch.is_some_and(|c| c.is_ascii_digit()) {
            self.read_char();
        }
        Token::new(TokenKind::Int, &self.input[start..self.position])
    }

    /// Reads a string literal delimited by the given quote character.
    ///
    /// The opening quote is at the current position. Characters are
    /// consumed verbatim until the matching quote or the end of input; the
    /// token literal is the raw inner text. No escape sequences are
    /// interpreted.
    pub(super) fn read_string(&mut self, quote: char) -> Token {
        self.read_char(); // past the opening quote
        let start = self.position;
        while self.ch.is_some_and(|c| c != quote) {
            self.read_char();
        }
        let literal = &self.input[start..self.position];
        let token = Token::new(TokenKind::String, literal);
        self.read_char(); // past the closing quote, if any
        token
    }
}
