//! Lexical analyzer for the vih language.
//!
//! This module provides the [`Lexer`] struct which converts source text
//! into a stream of [`Token`]s for parsing.
//!
//! # Overview
//!
//! The lexer scans the input character by character, recognizing
//! identifiers, keywords, integer and string literals, punctuation, and
//! operators, while tracking source positions for error reporting.
//! Whitespace is skipped; line comments are surfaced as
//! [`TokenKind::Comment`] tokens (the parser discards them, the `lexer`
//! CLI mode prints them).
//!
//! The lexer is infallible: a character it does not recognize becomes a
//! [`TokenKind::Illegal`] token, which the parser reports as an error.
//!
//! # Supported Tokens
//!
//! - **Keywords**: `if`, `else`, `for`, `func`, `let`, `return`, `true`, `false`
//! - **Identifiers**: `[A-Za-z_][A-Za-z0-9_]*` (ASCII only)
//! - **Integer literals**: runs of ASCII digits, kept as their raw digit string
//! - **String literals**: text enclosed in double quotes, no escape processing
//! - **Punctuation**: `(`, `)`, `[`, `]`, `{`, `}`, `;`, `,`
//! - **Operators**: `+`, `-`, `*`, `/`, `=`, `==`, `!=`, `<`, `>`, `<=`, `>=`, `!`
//! - **Comments**: line comments starting with `//`
//!
//! # Examples
//!
//! ```
//! use vih::lexer::Lexer;
//! use vih::token::TokenKind;
//!
//! let mut lexer = Lexer::new("let x = 5;");
//! assert_eq!(lexer.next_token().kind, TokenKind::Let);
//! assert_eq!(
//!     lexer.next_token().kind,
//!     TokenKind::Identifier("x".to_string())
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`cursor`] - Position tracking and character navigation
//! - [`tokens`] - Token recognition and reading
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

mod cursor;
mod tokens;

#[cfg(test)]
mod tests;

use crate::token::{Token, TokenKind};

/// A lexical analyzer that tokenizes vih source code.
///
/// The `Lexer` maintains its position within the input and tracks
/// line/column numbers for error reporting. Tokens are pulled one at a
/// time with [`Lexer::next_token`]; after the input is exhausted every
/// further call returns an [`TokenKind::Eof`] token.
///
/// The `'a` lifetime parameter ties the lexer to the input string slice,
/// ensuring the input remains valid while the lexer is in use.
pub struct Lexer<'a> {
    /// The input source code being tokenized.
    pub(super) input: &'a str,
    /// Current byte position in the input.
    pub(super) pos: usize,
    /// Current line number (1-indexed).
    pub(super) line: usize,
    /// Current column number (1-indexed).
    pub(super) column: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` for the given input string.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenizes the remaining input and returns a vector of tokens.
    ///
    /// The returned vector always ends with exactly one
    /// [`TokenKind::Eof`] token.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }

        tokens
    }
}
