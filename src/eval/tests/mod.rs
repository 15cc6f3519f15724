//! Unit tests for the evaluator.
//!
//! Tests are organized by language feature:
//! - `integers`, `booleans`, `strings`: literal and operator evaluation
//! - `conditionals`: if/else and truthiness
//! - `returns`: return propagation across blocks
//! - `bindings`: let statements and identifier resolution
//! - `loops`: for statements
//! - `functions`: application, closures, recursion
//! - `lists`: literals, indexing, aliasing
//! - `builtins`: the host function library
//! - `errors`: runtime error production and propagation

use super::*;
use crate::lexer::Lexer;
use crate::parser::Parser;

mod errors;
mod integers;
mod lists;
mod loops;

/// Helper function to parse and evaluate input against a fresh
/// environment, asserting the absence of parse errors.
pub(super) fn eval_input(input: &str) -> Object {
    let mut parser = Parser::new(Lexer::new(input));
    let program = parser.parse_program();
    let messages: Vec<&str> = parser.errors().iter().map(|e| e.message()).collect();
    assert!(
        messages.is_empty(),
        "Parser errors for input {:?}: {:?}",
        input,
        messages
    );

    let env = Environment::new();
    eval_program(&program, &env)
}

/// Asserts that a value is the expected integer.
pub(super) fn check_integer(evaluated: &Object, expected: i64) {
    match evaluated {
        Object::Integer(value) => assert_eq!(*value, expected),
        other => panic!("Expected INTEGER {}, got {:?}", expected, other),
    }
}

/// Asserts that a value is the expected boolean.
pub(super) fn check_boolean(evaluated: &Object, expected: bool) {
    match evaluated {
        Object::Boolean(value) => assert_eq!(*value, expected),
        other => panic!("Expected BOOLEAN {}, got {:?}", expected, other),
    }
}

/// Asserts that a value is the expected string.
pub(super) fn check_string(evaluated: &Object, expected: &str) {
    match evaluated {
        Object::Str(value) => assert_eq!(value, expected),
        other => panic!("Expected STRING {:?}, got {:?}", expected, other),
    }
}

/// Asserts that a value is null.
pub(super) fn check_null(evaluated: &Object) {
    match evaluated {
        Object::Null => {}
        other => panic!("Expected NULL, got {:?}", other),
    }
}

/// Asserts that a value is an error with the expected message.
pub(super) fn check_error(evaluated: &Object, expected_message: &str) {
    match evaluated {
        Object::Error(message) => assert_eq!(message, expected_message),
        other => panic!("Expected ERROR {:?}, got {:?}", expected_message, other),
    }
}
