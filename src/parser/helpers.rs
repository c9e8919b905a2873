//! Parser helper methods for token navigation and expectation.

use super::{Parser, precedence};
use super::precedence::Precedence;
use crate::token::TokenKind;

impl<'a> Parser<'a> {
    /// Slides the two-token window one token forward.
    pub(super) fn advance_tokens(&mut self) {
        self.current = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    /// Advances when the look-ahead has the expected kind.
    ///
    /// Records `Expected token: <KIND> but the token inserted is: <Token>`
    /// and leaves the window untouched otherwise; the caller aborts the
    /// construct it was building.
    pub(super) fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek.kind == kind {
            self.advance_tokens();
            true
        } else {
            self.errors.push(format!(
                "Expected token: {} but the token inserted is: {}",
                kind, self.peek
            ));
            false
        }
    }

    /// Returns the precedence of the look-ahead token.
    pub(super) fn peek_precedence(&self) -> Precedence {
        precedence::of(self.peek.kind)
    }

    /// Returns the precedence of the current token.
    pub(super) fn current_precedence(&self) -> Precedence {
        precedence::of(self.current.kind)
    }
}
