//! Name-to-value frames forming the lexical scope chain.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::Object;

/// A mapping from names to objects with an optional outer frame.
///
/// Lookup walks the chain outward; the first binding found wins. Writes
/// always land in the innermost frame, so rebinding a name shadows outer
/// bindings instead of mutating them.
///
/// Closures hold a strong reference to their defining frame, so a frame
/// outlives the call that created it for as long as any closure needs it.
pub struct Environment {
    store: HashMap<String, Rc<Object>>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    /// Creates an empty top-level environment.
    pub fn new() -> Self {
        Environment {
            store: HashMap::new(),
            outer: None,
        }
    }

    /// Creates an empty environment enclosed by `outer`.
    ///
    /// Used for function-call frames: parameters bind here while lookups
    /// fall through to the captured environment.
    pub fn new_enclosed(outer: Rc<RefCell<Environment>>) -> Self {
        Environment {
            store: HashMap::new(),
            outer: Some(outer),
        }
    }

    /// Looks up a name, walking the chain outward.
    pub fn get(&self, name: &str) -> Option<Rc<Object>> {
        match self.store.get(name) {
            Some(value) => Some(Rc::clone(value)),
            None => self
                .outer
                .as_ref()
                .and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds a name in this frame, shadowing any outer binding.
    pub fn set(&mut self, name: impl Into<String>, value: Rc<Object>) {
        self.store.insert(name.into(), value);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new()
    }
}

// Closures can make the chain cyclic, so Debug deliberately prints only
// this frame's binding names.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.store.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Environment")
            .field("names", &names)
            .field("has_outer", &self.outer.is_some())
            .finish()
    }
}
