//! Cursor position management for the lexer.
//!
//! This module provides methods for tracking and advancing the lexer's
//! position within the input source code.

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Advances the lexer by one character.
    ///
    /// The current position moves to `read_position` and the look-ahead is
    /// refilled. Past the end of input the current character becomes `None`
    /// and stays there. Multi-byte UTF-8 characters advance by their full
    /// encoded width.
    pub(super) fn read_char(&mut self) {
        self.position = self.read_position;
        match self.input[self.read_position..].chars().next() {
            Some(c) => {
                self.ch = Some(c);
                self.read_position += c.len_utf8();
            }
            None => self.ch = None,
        }
    }

    /// Returns the next character without consuming it.
    ///
    /// Returns `None` if the current character is the last one.
    pub(super) fn peek_char(&self) -> Option<char> {
        self.input[self.read_position..].chars().next()
    }

    /// Skips consecutive whitespace and tab characters.
    pub(super) fn skip_whitespace(&mut self) {
        while self.ch.is_some_and(|c| c.is_whitespace()) {
            self.read_char();
        }
    }
}
