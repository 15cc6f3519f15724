//! Unit tests for the lexer module.

use super::*;

/// Helper function to tokenize input and return only the kinds,
/// including the trailing `Eof`.
pub(super) fn tokenize_kinds(input: &str) -> Vec<TokenKind> {
    Lexer::new(input).tokenize().into_iter().map(|t| t.kind).collect()
}

/// Helper function to tokenize input and return the full tokens.
pub(super) fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}

/// Shorthand for an identifier kind.
pub(super) fn ident(name: &str) -> TokenKind {
    TokenKind::Identifier(name.to_string())
}

/// Shorthand for an integer kind.
pub(super) fn int(digits: &str) -> TokenKind {
    TokenKind::Int(digits.to_string())
}

mod whitespace;
