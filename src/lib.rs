//! The vih interpreter library.
//!
//! vih is a small dynamically-typed, C-like expression language. Source
//! text flows through a three-stage pipeline: lexical analysis, Pratt
//! parsing into an AST, and tree-walking evaluation with lexically scoped
//! environments, first-class functions (closures), mutable lists, and a
//! small builtin library.
//!
//! # Modules
//!
//! - [`token`] - Token types and source location tracking
//! - [`lexer`] - Lexical analysis (tokenization)
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`parser`] - Pratt parser with error accumulation
//! - [`object`] - Runtime values and environments
//! - [`eval`] - The tree-walking evaluator
//!
//! # Example
//!
//! ```
//! use vih::eval::eval_program;
//! use vih::lexer::Lexer;
//! use vih::object::{Environment, Object};
//! use vih::parser::Parser;
//!
//! let source = "let add = func(x, y) { x + y; }; add(5 + 5, add(5, 5));";
//!
//! let mut parser = Parser::new(Lexer::new(source));
//! let program = parser.parse_program();
//! assert!(parser.errors().is_empty());
//!
//! let env = Environment::new();
//! assert_eq!(eval_program(&program, &env), Object::Integer(20));
//! ```

pub mod ast;
pub mod eval;
pub mod lexer;
pub mod object;
pub mod parser;
pub mod token;
