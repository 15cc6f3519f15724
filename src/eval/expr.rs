//! Expression evaluation: operators, conditionals, calls, and indexing.

use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::{
    Expression, Identifier, IfExpression, InfixOperator, PrefixOperator,
};
use crate::object::{Environment, FALSE, Function, NULL, Object, TRUE};

use super::builtins;
use super::is_truthy;
use super::stmt::eval_block_statement;

/// Evaluates an expression.
pub(super) fn eval_expression(expression: &Expression, env: &Rc<RefCell<Environment>>) -> Object {
    match expression {
        Expression::Integer(literal) => Object::Integer(literal.value),
        Expression::Str(literal) => Object::Str(literal.value.clone()),
        Expression::Boolean(literal) => Object::from_bool(literal.value),
        Expression::Identifier(identifier) => eval_identifier(identifier, env),
        Expression::List(literal) => match eval_expressions(&literal.elements, env) {
            Ok(elements) => Object::list(elements),
            Err(error) => error,
        },
        Expression::Function(literal) => Object::Function(Rc::new(Function {
            parameters: literal.parameters.clone(),
            body: literal.body.clone(),
            env: Rc::clone(env),
        })),
        Expression::Prefix(expression) => {
            let right = eval_expression(&expression.right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix_expression(expression.operator, right)
        }
        Expression::Infix(expression) => {
            let left = eval_expression(&expression.left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(&expression.right, env);
            if right.is_error() {
                return right;
            }
            eval_infix_expression(expression.operator, left, right)
        }
        Expression::If(expression) => eval_if_expression(expression, env),
        Expression::Call(expression) => {
            let function = eval_expression(&expression.function, env);
            if function.is_error() {
                return function;
            }
            let arguments = match eval_expressions(&expression.arguments, env) {
                Ok(arguments) => arguments,
                Err(error) => return error,
            };
            apply_function(function, arguments)
        }
        Expression::Index(expression) => {
            let collection = eval_expression(&expression.collection, env);
            if collection.is_error() {
                return collection;
            }
            let index = eval_expression(&expression.index, env);
            if index.is_error() {
                return index;
            }
            eval_index_expression(collection, index)
        }
    }
}

/// Resolves an identifier: the user environment chain first, then the
/// builtins table.
fn eval_identifier(identifier: &Identifier, env: &Rc<RefCell<Environment>>) -> Object {
    if let Some(value) = env.borrow().get(&identifier.name) {
        return value;
    }
    if let Some(builtin) = builtins::lookup(&identifier.name) {
        return builtin;
    }

    Object::Error(format!("identifier not found: {}", identifier.name))
}

/// Evaluates a sequence of expressions left to right, stopping at the
/// first error.
fn eval_expressions(
    expressions: &[Expression],
    env: &Rc<RefCell<Environment>>,
) -> Result<Vec<Object>, Object> {
    let mut results = Vec::with_capacity(expressions.len());

    for expression in expressions {
        let evaluated = eval_expression(expression, env);
        if evaluated.is_error() {
            return Err(evaluated);
        }
        results.push(evaluated);
    }

    Ok(results)
}

fn eval_prefix_expression(operator: PrefixOperator, right: Object) -> Object {
    match operator {
        PrefixOperator::Not => eval_not_expression(right),
        PrefixOperator::Neg => eval_neg_expression(right),
    }
}

/// `!x` inverts truthiness: true for exactly `false` and `null`, false
/// for everything else.
fn eval_not_expression(right: Object) -> Object {
    match right {
        Object::Boolean(false) | Object::Null => TRUE,
        _ => FALSE,
    }
}

/// `-x` is defined on integers only. Negation wraps at `i64::MIN`.
fn eval_neg_expression(right: Object) -> Object {
    match right {
        Object::Integer(value) => Object::Integer(value.wrapping_neg()),
        other => Object::Error(format!("unknown operator: -{}", other.type_name())),
    }
}

/// Evaluates a binary operation.
///
/// Integers support arithmetic and comparisons; strings support only `+`
/// (concatenation). Mixed operand types are a type mismatch. Booleans
/// compare by value, null equals itself; every remaining combination is
/// an unknown operator.
fn eval_infix_expression(operator: InfixOperator, left: Object, right: Object) -> Object {
    match (left, right) {
        (Object::Integer(l), Object::Integer(r)) => {
            eval_integer_infix_expression(operator, l, r)
        }
        (Object::Str(l), Object::Str(r)) => match operator {
            InfixOperator::Add => Object::Str(format!("{}{}", l, r)),
            _ => Object::Error(format!("unknown operator: STRING {} STRING", operator)),
        },
        (left, right) if left.type_name() != right.type_name() => Object::Error(format!(
            "type mismatch: {} {} {}",
            left.type_name(),
            operator,
            right.type_name()
        )),
        (Object::Boolean(l), Object::Boolean(r)) => match operator {
            InfixOperator::Equal => Object::from_bool(l == r),
            InfixOperator::NotEqual => Object::from_bool(l != r),
            InfixOperator::LessThan => Object::from_bool(l < r),
            InfixOperator::GreaterThan => Object::from_bool(l > r),
            InfixOperator::LessEqual => Object::from_bool(l <= r),
            InfixOperator::GreaterEqual => Object::from_bool(l >= r),
            _ => Object::Error(format!("unknown operator: BOOLEAN {} BOOLEAN", operator)),
        },
        (Object::Null, Object::Null) => match operator {
            InfixOperator::Equal => TRUE,
            InfixOperator::NotEqual => FALSE,
            _ => Object::Error(format!("unknown operator: NULL {} NULL", operator)),
        },
        (left, right) => Object::Error(format!(
            "unknown operator: {} {} {}",
            left.type_name(),
            operator,
            right.type_name()
        )),
    }
}

/// Integer arithmetic wraps; division truncates toward zero and reports
/// division by zero as a runtime error.
fn eval_integer_infix_expression(operator: InfixOperator, left: i64, right: i64) -> Object {
    match operator {
        InfixOperator::Add => Object::Integer(left.wrapping_add(right)),
        InfixOperator::Sub => Object::Integer(left.wrapping_sub(right)),
        InfixOperator::Mul => Object::Integer(left.wrapping_mul(right)),
        InfixOperator::Div => {
            if right == 0 {
                Object::Error("division by zero".to_string())
            } else {
                Object::Integer(left.wrapping_div(right))
            }
        }
        InfixOperator::LessThan => Object::from_bool(left < right),
        InfixOperator::GreaterThan => Object::from_bool(left > right),
        InfixOperator::LessEqual => Object::from_bool(left <= right),
        InfixOperator::GreaterEqual => Object::from_bool(left >= right),
        InfixOperator::Equal => Object::from_bool(left == right),
        InfixOperator::NotEqual => Object::from_bool(left != right),
    }
}

/// `if` is an expression: its value is the value of the chosen branch, or
/// null when the condition is falsy and there is no alternative.
fn eval_if_expression(expression: &IfExpression, env: &Rc<RefCell<Environment>>) -> Object {
    let condition = eval_expression(&expression.condition, env);
    if condition.is_error() {
        return condition;
    }

    if is_truthy(&condition) {
        eval_block_statement(&expression.consequence, env)
    } else if let Some(alternative) = &expression.alternative {
        eval_block_statement(alternative, env)
    } else {
        NULL
    }
}

/// Applies a callable to already-evaluated arguments.
///
/// User functions get a fresh frame enclosing their captured environment,
/// with parameters bound positionally; a `return` from the body is
/// unwrapped here, at the call boundary.
fn apply_function(function: Object, arguments: Vec<Object>) -> Object {
    match function {
        Object::Builtin(builtin) => builtin(arguments),
        Object::Function(function) => {
            if arguments.len() != function.parameters.len() {
                return Object::Error(format!(
                    "function requires {} parameters, got {}",
                    function.parameters.len(),
                    arguments.len()
                ));
            }

            let env = extend_function_env(&function, arguments);
            let evaluated = eval_block_statement(&function.body, &env);
            unwrap_return_value(evaluated)
        }
        other => Object::Error(format!("not a function: {}", other.type_name())),
    }
}

fn extend_function_env(function: &Function, arguments: Vec<Object>) -> Rc<RefCell<Environment>> {
    let env = Environment::new_enclosed(Rc::clone(&function.env));
    for (parameter, argument) in function.parameters.iter().zip(arguments) {
        env.borrow_mut().set(parameter.name.clone(), argument);
    }
    env
}

fn unwrap_return_value(value: Object) -> Object {
    match value {
        Object::Return(inner) => *inner,
        other => other,
    }
}

/// Indexing is defined for lists indexed by integers, with bounds
/// `[0, len)`. Everything else is an error naming the collection's type.
fn eval_index_expression(collection: Object, index: Object) -> Object {
    match (&collection, &index) {
        (Object::List(elements), Object::Integer(idx)) => {
            let elements = elements.borrow();
            let idx = *idx;
            if idx < 0 || idx >= elements.len() as i64 {
                return Object::Error(format!(
                    "Index {} out of bounds for collection of len {}",
                    idx,
                    elements.len()
                ));
            }
            elements[idx as usize].clone()
        }
        _ => Object::Error(format!(
            "Exprected collection for indexing, got ObjectType.{}",
            collection.type_name()
        )),
    }
}
