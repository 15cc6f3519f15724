//! Statement nodes for the vih AST.

use std::fmt;

use crate::token::Token;

use super::expr::{Expression, Identifier};

/// A statement in the vih language.
#[derive(Debug, Clone)]
pub enum Statement {
    /// A `let` binding.
    Let(LetStatement),
    /// A `return` statement.
    Return(ReturnStatement),
    /// An expression evaluated for its value.
    Expression(ExpressionStatement),
    /// A C-style three-clause `for` loop.
    For(ForStatement),
}

/// A variable binding: `let NAME = EXPR;`.
///
/// Bindings always target the innermost environment frame; rebinding an
/// existing name overwrites it.
#[derive(Debug, Clone)]
pub struct LetStatement {
    /// The `let` keyword token.
    pub token: Token,
    /// The name being bound.
    pub name: Identifier,
    /// The bound value.
    pub value: Expression,
}

/// A `return` statement: `return EXPR?;`.
///
/// `return` without a value is represented as `None` and evaluates to
/// null.
#[derive(Debug, Clone)]
pub struct ReturnStatement {
    /// The `return` keyword token.
    pub token: Token,
    /// The returned expression, if any.
    pub return_value: Option<Expression>,
}

/// An expression in statement position; its value is the statement's
/// value.
#[derive(Debug, Clone)]
pub struct ExpressionStatement {
    /// The first token of the expression.
    pub token: Token,
    /// The expression itself.
    pub expression: Expression,
}

/// A three-clause loop: `for (ID = EXPR; EXPR; LET_STMT) BLOCK`.
///
/// The counter is bound in the *enclosing* environment frame; the body
/// runs in that same frame, so bindings made inside the loop remain
/// visible after it.
#[derive(Debug, Clone)]
pub struct ForStatement {
    /// The `for` keyword token.
    pub token: Token,
    /// The loop counter name.
    pub counter: Identifier,
    /// The counter's initial value, evaluated once.
    pub initial_value: Expression,
    /// The loop condition, re-evaluated before each iteration.
    pub condition: Expression,
    /// The update rule, a `let` statement rebinding the counter.
    pub update_rule: Box<LetStatement>,
    /// The loop body.
    pub body: BlockStatement,
}

/// A brace-delimited sequence of statements.
///
/// Blocks do not introduce an environment frame of their own; only
/// function calls do.
#[derive(Debug, Clone)]
pub struct BlockStatement {
    /// The `{` token that opened the block.
    pub token: Token,
    /// The statements of the block, in source order.
    pub statements: Vec<Statement>,
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(stmt) => stmt.fmt(f),
            Statement::Return(stmt) => stmt.fmt(f),
            Statement::Expression(stmt) => stmt.fmt(f),
            Statement::For(stmt) => stmt.fmt(f),
        }
    }
}

impl fmt::Display for LetStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "let {} = {};", self.name, self.value)
    }
}

impl fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.return_value {
            Some(value) => write!(f, "return {};", value),
            None => write!(f, "return;"),
        }
    }
}

impl fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};", self.expression)
    }
}

impl fmt::Display for ForStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "for ({} = {}; {}; {}) {{ {} }}",
            self.counter, self.initial_value, self.condition, self.update_rule, self.body
        )
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.statements.iter().map(ToString::to_string).collect();
        write!(f, "{}", rendered.join(" "))
    }
}
