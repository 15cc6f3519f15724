//! Statement evaluation.

use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::{BlockStatement, ForStatement, LetStatement, ReturnStatement, Statement};
use crate::object::{Environment, Object};

use super::expr::eval_expression;
use super::is_truthy;

/// Evaluates a single statement.
pub(super) fn eval_statement(stmt: &Statement, env: &Rc<RefCell<Environment>>) -> Object {
    match stmt {
        Statement::Expression(stmt) => eval_expression(&stmt.expression, env),
        Statement::Let(stmt) => eval_let_statement(stmt, env),
        Statement::Return(stmt) => eval_return_statement(stmt, env),
        Statement::For(stmt) => eval_for_statement(stmt, env),
    }
}

/// Evaluates a block: the value of its last statement, unless an earlier
/// statement produced a `return` or an error, which short-circuits.
///
/// Blocks do not open an environment frame; bindings land in the frame the
/// block appears in.
pub(super) fn eval_block_statement(block: &BlockStatement, env: &Rc<RefCell<Environment>>) -> Object {
    let mut result = Object::Null;

    for stmt in &block.statements {
        result = eval_statement(stmt, env);
        if matches!(result, Object::Return(_) | Object::Error(_)) {
            return result;
        }
    }

    result
}

/// Evaluates a let binding into the innermost frame. Yields null.
fn eval_let_statement(stmt: &LetStatement, env: &Rc<RefCell<Environment>>) -> Object {
    let value = eval_expression(&stmt.value, env);
    if value.is_error() {
        return value;
    }

    env.borrow_mut().set(stmt.name.name.clone(), value);
    Object::Null
}

/// Evaluates a return statement, wrapping its value so enclosing blocks
/// short-circuit. A value-less `return` carries null. Errors are returned
/// as-is, never wrapped.
fn eval_return_statement(stmt: &ReturnStatement, env: &Rc<RefCell<Environment>>) -> Object {
    let value = match &stmt.return_value {
        Some(expression) => eval_expression(expression, env),
        None => Object::Null,
    };
    if value.is_error() {
        return value;
    }

    Object::Return(Box::new(value))
}

/// Evaluates a three-clause for loop.
///
/// The initial value is evaluated once and bound in the current frame;
/// the condition is re-evaluated before each iteration; the update rule
/// (a let statement) runs after each iteration. The body runs in the
/// current frame, so its bindings persist across iterations and after the
/// loop. A `return` inside the body propagates out like any block result.
/// The statement itself yields null.
fn eval_for_statement(stmt: &ForStatement, env: &Rc<RefCell<Environment>>) -> Object {
    let initial_value = eval_expression(&stmt.initial_value, env);
    if initial_value.is_error() {
        return initial_value;
    }
    env.borrow_mut().set(stmt.counter.name.clone(), initial_value);

    loop {
        let condition = eval_expression(&stmt.condition, env);
        if condition.is_error() {
            return condition;
        }
        if !is_truthy(&condition) {
            break;
        }

        let evaluated = eval_block_statement(&stmt.body, env);
        if matches!(evaluated, Object::Return(_) | Object::Error(_)) {
            return evaluated;
        }

        let update = eval_let_statement(&stmt.update_rule, env);
        if update.is_error() {
            return update;
        }
    }

    Object::Null
}
