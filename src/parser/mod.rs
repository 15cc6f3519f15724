//! Parser for the vih language.
//!
//! This module provides the [`Parser`] struct which transforms the token
//! stream produced by the [`crate::lexer`] into an Abstract Syntax Tree
//! ([`Program`]).
//!
//! # Overview
//!
//! The parser is a Pratt parser (top-down operator precedence): each token
//! kind has a prefix rule, infix-capable tokens additionally have an infix
//! rule and a precedence, and [`parse_expression`](Parser::parse_expression)
//! threads a minimum precedence through the recursion to resolve
//! precedence and left-associativity. Calls (`(` as an infix token) and
//! index operations (`[` as an infix token) bind tightest of all.
//!
//! # Grammar
//!
//! ```text
//! program     → statement*
//! statement   → "let" IDENT "=" expr ";"?
//!             | "return" expr? ";"?
//!             | "for" "(" IDENT "=" expr ";" expr ";" let_stmt ")" block
//!             | expr ";"?
//! block       → "{" statement* "}"
//! expr        → Pratt over: prefix ("!", "-"), infix ("+", "-", "*", "/",
//!               "<", ">", "<=", ">=", "==", "!="), call, index, grouping,
//!               literals, identifiers, "if", "func"
//! ```
//!
//! # Error handling
//!
//! The parser never aborts: every mismatch records a [`ParseError`] and
//! parsing resynchronizes at the next statement boundary. Callers must
//! check [`Parser::errors`] before evaluating the returned [`Program`];
//! the tree is only guaranteed to be complete when the error list is
//! empty.
//!
//! # Examples
//!
//! ```
//! use vih::lexer::Lexer;
//! use vih::parser::Parser;
//!
//! let lexer = Lexer::new("let x = 1 + 2 * 3;");
//! let mut parser = Parser::new(lexer);
//! let program = parser.parse_program();
//!
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Parse error types
//! - `helpers` - Token navigation and resynchronization
//! - `stmt` - Statement parsing
//! - `expr` - Pratt expression parsing
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::lexer`] - Produces the token stream consumed by the parser
//! * [`crate::ast`] - Defines the AST types produced by the parser
//! * [`crate::eval`] - Consumes the AST

mod error;
mod expr;
mod helpers;
mod stmt;

#[cfg(test)]
mod tests;

pub use error::{ParseError, ParseErrorKind};

use crate::ast::Program;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// A Pratt parser for the vih language.
///
/// The parser pulls tokens from the lexer one at a time, maintaining a
/// two-token window (`cur_token`, `peek_token`). Comment tokens are
/// discarded as they are pulled, so parse rules never see them.
pub struct Parser<'a> {
    /// The token source.
    lexer: Lexer<'a>,
    /// The token currently being parsed.
    cur_token: Token,
    /// The one-token lookahead.
    peek_token: Token,
    /// Errors accumulated so far, in source order.
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Creates a new parser, priming the two-token lookahead window.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let cur_token = Self::next_meaningful_token(&mut lexer);
        let peek_token = Self::next_meaningful_token(&mut lexer);
        Parser {
            lexer,
            cur_token,
            peek_token,
            errors: Vec::new(),
        }
    }

    /// Pulls the next non-comment token from the lexer.
    fn next_meaningful_token(lexer: &mut Lexer<'a>) -> Token {
        loop {
            let token = lexer.next_token();
            if !matches!(token.kind, TokenKind::Comment(_)) {
                return token;
            }
        }
    }

    /// Parses the entire token stream into a [`Program`].
    ///
    /// This is the main entry point for parsing. It consumes tokens
    /// through end of input and never fails: syntax errors are recorded in
    /// [`Parser::errors`] and parsing resumes at the next statement
    /// boundary. The returned tree is complete only if the error list is
    /// empty.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        while !self.cur_token_is(&TokenKind::Eof) {
            match self.parse_statement() {
                Some(stmt) => statements.push(stmt),
                None => self.synchronize(),
            }
            self.advance_tokens();
        }

        Program { statements }
    }

    /// Returns the errors accumulated so far, in source order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser, returning its accumulated errors.
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }
}
