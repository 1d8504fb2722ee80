use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::object::Object;

/// A chained name-to-value scope. Closures hold the defining environment by
/// `Rc`, so bindings created after capture are still visible through the
/// chain.
#[derive(Debug, PartialEq, Clone)]
pub struct Environment {
    store: HashMap<String, Object>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            store: HashMap::new(),
            outer: None,
        }
    }

    pub fn new_enclosed(outer: Rc<RefCell<Environment>>) -> Self {
        Environment {
            store: HashMap::new(),
            outer: Some(outer),
        }
    }

    pub fn get(&self, name: &str) -> Option<Object> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => match &self.outer {
                Some(outer) => outer.borrow().get(name),
                None => None,
            },
        }
    }

    pub fn set(&mut self, name: &str, value: Object) {
        self.store.insert(name.to_string(), value);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set() {
        let mut env = Environment::new();
        assert_eq!(env.get("x"), None);
        env.set("x", Object::Integer(5));
        assert_eq!(env.get("x"), Some(Object::Integer(5)));
        env.set("x", Object::Integer(10));
        assert_eq!(env.get("x"), Some(Object::Integer(10)));
    }

    #[test]
    fn test_outer_lookup() {
        let outer = Rc::new(RefCell::new(Environment::new()));
        outer.borrow_mut().set("x", Object::Integer(5));

        let mut inner = Environment::new_enclosed(outer.clone());
        assert_eq!(inner.get("x"), Some(Object::Integer(5)));

        // a local binding shadows without touching the outer frame
        inner.set("x", Object::Integer(10));
        assert_eq!(inner.get("x"), Some(Object::Integer(10)));
        assert_eq!(outer.borrow().get("x"), Some(Object::Integer(5)));
    }

    #[test]
    fn test_bindings_after_capture_are_visible() {
        let outer = Rc::new(RefCell::new(Environment::new()));
        let inner = Environment::new_enclosed(outer.clone());

        outer.borrow_mut().set("y", Object::Integer(7));
        assert_eq!(inner.get("y"), Some(Object::Integer(7)));
    }
}
