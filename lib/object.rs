use core::fmt;
use std::{cell::RefCell, rc::Rc};

use crate::{ast::Statement, environment::Environment};

#[derive(Debug, PartialEq, Clone)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    Null,
    ReturnValue(Box<Object>),
    Error(String),
    Function {
        parameters: Vec<String>,
        body: Box<Statement>,
        env: Rc<RefCell<Environment>>,
    },
}

impl Object {
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::Boolean(_) => "BOOLEAN",
            Object::Null => "NULL",
            Object::ReturnValue(_) => "RETURN_VALUE",
            Object::Error(_) => "ERROR",
            Object::Function { .. } => "FUNCTION",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Object::Integer(value) => write!(f, "{}", value),
            Object::Boolean(true) => write!(f, "verdadero"),
            Object::Boolean(false) => write!(f, "falso"),
            Object::Null => write!(f, "nulo"),
            Object::ReturnValue(value) => write!(f, "regresa {}", value),
            Object::Error(message) => write!(f, "ERROR: {}", message),
            Object::Function {
                parameters,
                body,
                env: _,
            } => write!(f, "funcion({}) {{ {} }}", parameters.join(", "), body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect() {
        let cases = vec![
            (Object::Integer(5), "5"),
            (Object::Boolean(true), "verdadero"),
            (Object::Boolean(false), "falso"),
            (Object::Null, "nulo"),
            (
                Object::Error("identifier not found: x".to_string()),
                "ERROR: identifier not found: x",
            ),
        ];
        for (object, expected) in cases {
            assert_eq!(object.to_string(), expected);
        }
    }

    #[test]
    fn test_type_name() {
        let cases = vec![
            (Object::Integer(5), "INTEGER"),
            (Object::Boolean(true), "BOOLEAN"),
            (Object::Null, "NULL"),
            (Object::Error("".to_string()), "ERROR"),
        ];
        for (object, expected) in cases {
            assert_eq!(object.type_name(), expected);
        }
    }
}
