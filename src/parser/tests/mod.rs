//! Unit tests for parsing.
//!
//! Tests are organized by parser component:
//! - `stmt`: Statement parsing (let, return, for, blocks)
//! - `expr`: Expression parsing (literals, operators, calls, indexing)
//! - `precedence`: Operator precedence via canonical pretty-printing
//! - `errors`: Error detection, messages, and resynchronization

use super::*;
use crate::ast::{Expression, Statement};
use crate::lexer::Lexer;

mod precedence;

/// Helper function to parse input, asserting the absence of errors.
pub(super) fn parse(input: &str) -> Program {
    let mut parser = Parser::new(Lexer::new(input));
    let program = parser.parse_program();
    let messages: Vec<&str> = parser.errors().iter().map(|e| e.message()).collect();
    assert!(
        messages.is_empty(),
        "Parser errors for input {:?}: {:?}",
        input,
        messages
    );
    program
}

/// Helper function to parse input that must fail, returning the errors.
pub(super) fn parse_errors(input: &str) -> Vec<ParseError> {
    let mut parser = Parser::new(Lexer::new(input));
    parser.parse_program();
    let errors = parser.into_errors();
    assert!(
        !errors.is_empty(),
        "Expected parsing to fail for input {:?}, but it succeeded",
        input
    );
    errors
}

/// Helper function to parse a single expression statement and return its
/// expression.
pub(super) fn parse_single_expression(input: &str) -> Expression {
    let program = parse(input);
    assert_eq!(
        program.statements.len(),
        1,
        "Input {:?} produced {} statements, expected 1",
        input,
        program.statements.len()
    );
    match program.statements.into_iter().next() {
        Some(Statement::Expression(stmt)) => stmt.expression,
        other => panic!("Expected expression statement, got {:?}", other),
    }
}
