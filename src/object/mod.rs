//! Runtime values for the vih evaluator.
//!
//! This module defines [`Object`], the tagged union of every value a vih
//! program can produce, and the [`Environment`] that maps names to values.
//!
//! # Value semantics
//!
//! - Integers, booleans, strings, and null are plain values.
//! - Lists are shared, interiorly mutable containers
//!   (`Rc<RefCell<Vec<Object>>>`): binding a list to a second name aliases
//!   it, and `push` mutates it in place for every alias.
//! - Functions are closures: the function literal's parameters and body
//!   paired with the environment captured at its creation.
//! - `Return` and `Error` are control-flow carriers: `Return` propagates a
//!   value up to the nearest call boundary, `Error` short-circuits
//!   everything.
//!
//! The canonical `TRUE`, `FALSE`, and [`NULL`](Object::Null) values
//! compare structurally, which for these payload-free values coincides
//! with the identity semantics the language requires: `!` and `==` treat
//! exactly `false` and `null` as falsy/equal-to-themselves, and every
//! other value (including `0`, `""`, and `[]`) as truthy.
//!
//! # See Also
//!
//! * [`crate::eval`] - Produces and consumes these values
//! * [`environment`] - Name-to-value frames with lexical nesting

mod environment;

pub use environment::Environment;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::ast::{BlockStatement, Identifier};

/// The canonical `true` value.
pub const TRUE: Object = Object::Boolean(true);
/// The canonical `false` value.
pub const FALSE: Object = Object::Boolean(false);
/// The canonical `null` value.
pub const NULL: Object = Object::Null;

/// The signature of a host-provided builtin function.
pub type BuiltinFunction = fn(Vec<Object>) -> Object;

/// A runtime value.
#[derive(Debug, Clone)]
pub enum Object {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean.
    Boolean(bool),
    /// A UTF-8 string.
    Str(String),
    /// A mutable, shareable list of values.
    List(Rc<RefCell<Vec<Object>>>),
    /// A user-defined function together with its captured environment.
    Function(Rc<Function>),
    /// A host-provided builtin function.
    Builtin(BuiltinFunction),
    /// A value being carried out of a `return` statement.
    Return(Box<Object>),
    /// A runtime error carrying its message.
    Error(String),
    /// The null value.
    Null,
}

/// A user-defined function value: a closure.
///
/// The parameters and body are cloned out of the AST at evaluation time;
/// the environment is the one that was active when the function literal
/// was evaluated, shared so that later bindings in it remain visible
/// (this is what makes `let`-bound recursion work).
#[derive(Clone)]
pub struct Function {
    /// The parameter names, in declaration order.
    pub parameters: Vec<Identifier>,
    /// The function body.
    pub body: BlockStatement,
    /// The environment captured at creation.
    pub env: Rc<RefCell<Environment>>,
}

impl Object {
    /// Returns the uppercase type tag used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::Boolean(_) => "BOOLEAN",
            Object::Str(_) => "STRING",
            Object::List(_) => "LIST",
            Object::Function(_) => "FUNCTION",
            Object::Builtin(_) => "BUILTIN",
            Object::Return(_) => "RETURN_VALUE",
            Object::Error(_) => "ERROR",
            Object::Null => "NULL",
        }
    }

    /// Returns `true` if this value is an [`Object::Error`].
    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    /// Creates a new list value from the given elements.
    pub fn list(elements: Vec<Object>) -> Object {
        Object::List(Rc::new(RefCell::new(elements)))
    }

    /// Returns the canonical boolean value for a host boolean.
    pub fn from_bool(value: bool) -> Object {
        if value { TRUE } else { FALSE }
    }
}

impl PartialEq for Object {
    /// Value equality for plain values; reference identity for functions.
    ///
    /// Lists first compare by identity (so a cyclic list equals itself
    /// without recursing) and otherwise element-wise.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Object::Integer(l), Object::Integer(r)) => l == r,
            (Object::Boolean(l), Object::Boolean(r)) => l == r,
            (Object::Str(l), Object::Str(r)) => l == r,
            (Object::List(l), Object::List(r)) => {
                Rc::ptr_eq(l, r) || *l.borrow() == *r.borrow()
            }
            (Object::Function(l), Object::Function(r)) => Rc::ptr_eq(l, r),
            (Object::Builtin(l), Object::Builtin(r)) => std::ptr::fn_addr_eq(*l, *r),
            (Object::Return(l), Object::Return(r)) => l == r,
            (Object::Error(l), Object::Error(r)) => l == r,
            (Object::Null, Object::Null) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(value) => write!(f, "{}", value),
            Object::Boolean(value) => write!(f, "{}", value),
            Object::Str(value) => write!(f, "{}", value),
            Object::List(elements) => {
                let rendered: Vec<String> =
                    elements.borrow().iter().map(ToString::to_string).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
            Object::Function(function) => {
                let params: Vec<String> =
                    function.parameters.iter().map(ToString::to_string).collect();
                write!(f, "func({}) {{\n{}\n}}", params.join(", "), function.body)
            }
            Object::Builtin(_) => write!(f, "builtin function"),
            Object::Return(inner) => inner.fmt(f),
            Object::Error(message) => write!(f, "ERROR: {}", message),
            Object::Null => write!(f, "null"),
        }
    }
}

/// Debug stops at the closure boundary: printing the captured environment
/// would chase reference cycles created by self-referential bindings.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<String> = self.parameters.iter().map(ToString::to_string).collect();
        write!(f, "Function(func({}))", params.join(", "))
    }
}
