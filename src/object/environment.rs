//! Lexically nested name-to-value frames.
//!
//! An [`Environment`] is a single frame: a map from names to values plus
//! an optional reference to the enclosing frame. Lookup walks the outer
//! chain; writes always target the frame they are made in. Frames are
//! shared behind `Rc<RefCell<_>>` because closures capture them and can
//! outlive the call that created them.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::Object;

/// A single environment frame.
///
/// The top-level program gets one frame; every function call gets a fresh
/// frame enclosing the function's captured environment. Blocks and `for`
/// bodies do not open frames of their own.
///
/// Self-referential bindings (`let f = func(...) { ... f(...) ... }`)
/// create reference cycles through the captured environment; the
/// interpreter accepts the leak, which is bounded by its own short
/// lifetime.
pub struct Environment {
    store: HashMap<String, Object>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    /// Creates a new top-level frame.
    pub fn new() -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: None,
        }))
    }

    /// Creates a new frame enclosing `outer`.
    ///
    /// Used at function call boundaries: parameters are bound in the new
    /// frame, and lookups fall through to the function's captured
    /// environment.
    pub fn new_enclosed(outer: Rc<RefCell<Environment>>) -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: Some(outer),
        }))
    }

    /// Looks up a name, walking the outer chain until found or exhausted.
    ///
    /// Returns a clone of the stored value; for lists and functions the
    /// clone shares the underlying data.
    pub fn get(&self, name: &str) -> Option<Object> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self
                .outer
                .as_ref()
                .and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds a name in this frame, overwriting any previous binding here.
    ///
    /// Never writes to an outer frame.
    pub fn set(&mut self, name: impl Into<String>, value: Object) {
        self.store.insert(name.into(), value);
    }
}
