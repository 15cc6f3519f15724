//! Host-provided builtin functions.
//!
//! Builtins live in a fixed table consulted by identifier resolution only
//! after the user environment chain misses, so a user binding can shadow
//! any of them. All builtins are strict on arity and return `Error`
//! values with fixed messages on misuse; none has side effects on error
//! paths.

use crate::object::{BuiltinFunction, Object};

/// Resolves a builtin by name.
pub(super) fn lookup(name: &str) -> Option<Object> {
    let builtin: BuiltinFunction = match name {
        "len" => builtin_len,
        "first" => builtin_first,
        "last" => builtin_last,
        "rest" => builtin_rest,
        "push" => builtin_push,
        "puts" => builtin_puts,
        _ => return None,
    };

    Some(Object::Builtin(builtin))
}

/// `len(x)`: codepoint length of a string, or element count of a list.
fn builtin_len(args: Vec<Object>) -> Object {
    if args.len() != 1 {
        return Object::Error("Builtin function len expected one argument".to_string());
    }

    match &args[0] {
        Object::Str(value) => Object::Integer(value.chars().count() as i64),
        Object::List(elements) => Object::Integer(elements.borrow().len() as i64),
        _ => Object::Error("Builtin function len expected type String or List".to_string()),
    }
}

/// `first(L)`: the first element of a non-empty list.
fn builtin_first(args: Vec<Object>) -> Object {
    if args.len() != 1 {
        return Object::Error("Builtin function first expected one argument".to_string());
    }

    match &args[0] {
        Object::List(elements) => match elements.borrow().first() {
            Some(first) => first.clone(),
            None => Object::Error("List is empty".to_string()),
        },
        _ => Object::Error("Builtin function first expected type List".to_string()),
    }
}

/// `last(L)`: the last element of a non-empty list.
fn builtin_last(args: Vec<Object>) -> Object {
    if args.len() != 1 {
        return Object::Error("Builtin function last expected one argument".to_string());
    }

    match &args[0] {
        Object::List(elements) => match elements.borrow().last() {
            Some(last) => last.clone(),
            None => Object::Error("List is empty".to_string()),
        },
        _ => Object::Error("Builtin function last expected type List".to_string()),
    }
}

/// `rest(L)`: a new list of all but the first element. An empty or
/// singleton list yields an empty list.
fn builtin_rest(args: Vec<Object>) -> Object {
    if args.len() != 1 {
        return Object::Error("Builtin function rest expected one argument".to_string());
    }

    match &args[0] {
        Object::List(elements) => {
            let elements = elements.borrow();
            if elements.len() <= 1 {
                Object::list(Vec::new())
            } else {
                Object::list(elements[1..].to_vec())
            }
        }
        _ => Object::Error("Builtin function rest expected type List".to_string()),
    }
}

/// `push(v, L)`: appends `v` to `L` in place and returns `L`. Every alias
/// of the list observes the mutation.
fn builtin_push(args: Vec<Object>) -> Object {
    if args.len() != 2 {
        return Object::Error("Builtin function push expected two arguments".to_string());
    }

    let mut args = args.into_iter();
    let (Some(value), Some(list)) = (args.next(), args.next()) else {
        return Object::Error("Builtin function push expected two arguments".to_string());
    };

    match list {
        Object::List(elements) => {
            elements.borrow_mut().push(value);
            Object::List(elements)
        }
        _ => Object::Error(
            "Builtin function push expected first argument of type List".to_string(),
        ),
    }
}

/// `puts(...)`: prints each argument's display form on its own line.
/// Yields null.
fn builtin_puts(args: Vec<Object>) -> Object {
    for arg in &args {
        println!("{}", arg);
    }

    Object::Null
}
