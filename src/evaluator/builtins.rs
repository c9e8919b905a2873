//! The native built-in function table.
//!
//! Built-ins are consulted by identifier lookup after the environment
//! chain, so a user binding with the same name shadows them.

use std::collections::HashMap;
use std::rc::Rc;

use crate::object::Object;

/// Builds the built-ins table handed to a fresh [`Evaluator`](super::Evaluator).
///
/// One shared object per built-in keeps identity comparison on repeated
/// lookups of the same name stable.
pub(super) fn all() -> HashMap<&'static str, Rc<Object>> {
    HashMap::from([("length", Rc::new(Object::Builtin(length)))])
}

/// `length(s)`: the number of characters in a string.
fn length(args: &[Rc<Object>]) -> Rc<Object> {
    if args.len() != 1 {
        return Rc::new(Object::Error {
            message: format!("Wrong number of arguments: expected 1 (given {})", args.len()),
            line: 1,
        });
    }
    match &*args[0] {
        Object::Str(value) => Rc::new(Object::Integer(value.chars().count() as i64)),
        other => Rc::new(Object::Error {
            message: format!("Invalid {} type argument", other.kind()),
            line: 1,
        }),
    }
}
