//! Token definitions for the vih lexer.
//!
//! This module provides the fundamental token types used throughout the
//! interpreter. It defines [`Span`] for source location tracking,
//! [`TokenKind`] for token types, and [`Token`] for representing lexical
//! units with their positions.
//!
//! # Overview
//!
//! The lexer produces a stream of [`Token`]s, each containing:
//! - A [`TokenKind`] describing what type of token it is
//! - A [`Span`] indicating where in the source code it appears
//!
//! Every AST node keeps the token that anchored its creation, so spans stay
//! available for diagnostics all the way through evaluation.
//!
//! # See Also
//!
//! * [`crate::lexer`] - The lexer that produces these tokens
//! * [`crate::parser`] - The parser that consumes these tokens

mod kind;
mod span;

pub use kind::TokenKind;
pub use span::Span;

/// A token with its kind and source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of this token.
    pub kind: TokenKind,
    /// The source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new `Token` with the given kind and span.
    ///
    /// This is a simple constructor that performs no validation; the caller
    /// is responsible for ensuring the span corresponds to the token's
    /// position in the source.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}
