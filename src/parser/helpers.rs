//! Parser helper methods for token navigation and error recovery.

use std::mem;

use super::Parser;
use super::error::ParseError;
use crate::ast::Identifier;
use crate::token::TokenKind;

impl<'a> Parser<'a> {
    /// Advances the two-token window by one token.
    pub(super) fn advance_tokens(&mut self) {
        self.cur_token = mem::replace(
            &mut self.peek_token,
            Self::next_meaningful_token(&mut self.lexer),
        );
    }

    /// Returns `true` if the current token has the given kind.
    ///
    /// Intended for payload-free kinds; payload-carrying kinds compare
    /// their payloads too.
    pub(super) fn cur_token_is(&self, kind: &TokenKind) -> bool {
        self.cur_token.kind == *kind
    }

    /// Returns `true` if the lookahead token has the given kind.
    pub(super) fn peek_token_is(&self, kind: &TokenKind) -> bool {
        self.peek_token.kind == *kind
    }

    /// Checks that the lookahead token has the given kind and advances
    /// onto it.
    ///
    /// On mismatch, records an [`ParseError::unexpected_token`] error and
    /// leaves the window untouched.
    pub(super) fn expect_peek(&mut self, kind: &TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.advance_tokens();
            true
        } else {
            let error = ParseError::unexpected_token(
                &kind.to_string(),
                &self.peek_token.kind.to_string(),
                self.peek_token.span,
            );
            self.errors.push(error);
            false
        }
    }

    /// Checks that the lookahead token is an identifier, advances onto
    /// it, and returns the corresponding AST node.
    ///
    /// On mismatch, records an error and returns `None`.
    pub(super) fn expect_peek_identifier(&mut self) -> Option<Identifier> {
        if let TokenKind::Identifier(name) = &self.peek_token.kind {
            let name = name.clone();
            self.advance_tokens();
            Some(Identifier {
                token: self.cur_token.clone(),
                name,
            })
        } else {
            let error = ParseError::expected_identifier(
                &self.peek_token.kind.to_string(),
                self.peek_token.span,
            );
            self.errors.push(error);
            None
        }
    }

    /// Discards tokens until the parser is back at a statement boundary.
    ///
    /// Called after a statement fails to parse. Stops when the current
    /// token is a semicolon (the caller's advance then lands on the next
    /// statement), or when the lookahead starts a statement
    /// (`let`/`return`/`for`) or is end of input. This keeps one syntax
    /// error from cascading into a spurious error for every token that
    /// follows it.
    pub(super) fn synchronize(&mut self) {
        loop {
            if self.cur_token_is(&TokenKind::Eof) || self.cur_token_is(&TokenKind::Semicolon) {
                return;
            }
            if matches!(
                self.peek_token.kind,
                TokenKind::Let | TokenKind::Return | TokenKind::For | TokenKind::Eof
            ) {
                return;
            }
            self.advance_tokens();
        }
    }
}
