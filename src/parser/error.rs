//! Parse error types.

use crate::token::Span;

/// The kind of parse error.
///
/// This enum allows error handling code and tests to match on error types
/// structurally rather than relying on string matching, which is fragile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The token after the current one was not what the grammar required.
    UnexpectedToken,
    /// An identifier was required (after `let`, in a parameter list, ...).
    ExpectedIdentifier,
    /// No expression can start with the current token.
    NoPrefixParseFn,
    /// An integer literal does not fit in an `i64`.
    InvalidIntegerLiteral,
}

/// An error that occurred during parsing.
///
/// `ParseError` contains a human-readable message and the source location
/// where the error occurred. The parser does not stop at the first error:
/// it records the error, resynchronizes at the next statement boundary,
/// and keeps going, so a single run can report several of these.
#[derive(Debug, Clone)]
pub struct ParseError {
    /// The kind of error, for structured error handling.
    kind: ParseErrorKind,
    /// A human-readable description of the error.
    message: String,
    /// The source location where the error occurred.
    span: Span,
}

impl ParseError {
    /// Creates an "Expected next token to be X, got Y." error.
    pub fn unexpected_token(expected: &str, got: &str, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedToken,
            message: format!("Expected next token to be {}, got {}.", expected, got),
            span,
        }
    }

    /// Creates an "Expected next token to be identifier, got Y." error.
    pub fn expected_identifier(got: &str, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::ExpectedIdentifier,
            message: format!("Expected next token to be identifier, got {}.", got),
            span,
        }
    }

    /// Creates a "No prefix parser function for TOKEN" error.
    pub fn no_prefix_parse_fn(token: &str, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::NoPrefixParseFn,
            message: format!("No prefix parser function for {}", token),
            span,
        }
    }

    /// Creates an error for an integer literal that does not fit in `i64`.
    pub fn invalid_integer_literal(literal: &str, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::InvalidIntegerLiteral,
            message: format!("could not parse '{}' as integer", literal),
            span,
        }
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the source location where the error occurred.
    pub fn span(&self) -> Span {
        self.span
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}
