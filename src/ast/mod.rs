//! Abstract Syntax Tree definitions for the vih language.
//!
//! This module defines the data structures that represent parsed vih
//! programs. The AST is produced by the [`crate::parser`] and consumed by
//! the [`crate::eval`] tree-walking evaluator.
//!
//! # Structure
//!
//! - [`Program`] - The root node, an ordered sequence of statements
//! - [`Statement`] - `let`, `return`, `for`, and expression statements;
//!   [`BlockStatement`] groups statements for `if`/`func`/`for` bodies
//! - [`Expression`] - literals, identifiers, prefix/infix operations,
//!   `if` expressions, function literals, calls, and index expressions
//!
//! Every node keeps the [`Token`](crate::token::Token) that anchored its
//! creation, so source spans are available for diagnostics at any stage.
//!
//! All nodes implement `Display`, producing a canonical parenthesized form
//! (`(a + (b * c))`) that makes operator precedence explicit and re-parses
//! to an equivalent tree.
//!
//! # Module Structure
//!
//! - [`program`] - Top-level [`Program`] node
//! - [`stmt`] - Statement nodes
//! - [`expr`] - Expression nodes and operator enums
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::eval`] - Evaluates the AST

mod expr;
mod program;
mod stmt;


pub use expr::{
    BooleanLiteral, CallExpression, Expression, FunctionLiteral, Identifier, IfExpression,
    IndexExpression, InfixExpression, InfixOperator, IntegerLiteral, ListLiteral,
    PrefixExpression, PrefixOperator, StringLiteral,
};
pub use program::Program;
pub use stmt::{
    BlockStatement, ExpressionStatement, ForStatement, LetStatement, ReturnStatement, Statement,
};
