//! Tests for whitespace handling and end-of-input behavior.

use super::*;

#[test]
fn test_empty_input() {
    assert_eq!(tokenize_kinds(""), vec![TokenKind::Eof]);
}

#[test]
fn test_whitespace_only_input() {
    assert_eq!(tokenize_kinds("  \t\n  \n"), vec![TokenKind::Eof]);
}

#[test]
fn test_whitespace_between_tokens_is_insignificant() {
    assert_eq!(
        tokenize_kinds("let\tx\n=\n\n5"),
        vec![
            TokenKind::Let,
            ident("x"),
            TokenKind::Equals,
            int("5"),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_no_whitespace_needed_around_punctuation() {
    assert_eq!(
        tokenize_kinds("f(x,y)"),
        vec![
            ident("f"),
            TokenKind::LeftParen,
            ident("x"),
            TokenKind::Comma,
            ident("y"),
            TokenKind::RightParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_eof_is_sticky() {
    let mut lexer = Lexer::new("x");
    assert_eq!(lexer.next_token().kind, ident("x"));
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_emits_exactly_one_eof() {
    let tokens = tokenize("1 2 3");
    let eof_count = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Eof)
        .count();
    assert_eq!(eof_count, 1);
    assert_eq!(tokens.last().map(|t| t.kind.clone()), Some(TokenKind::Eof));
}
