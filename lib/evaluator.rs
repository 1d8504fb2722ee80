use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::{Expression, Program, Statement},
    environment::Environment,
    object::Object,
    token::Token,
};

const TRUE: Object = Object::Boolean(true);
const FALSE: Object = Object::Boolean(false);
const NULL: Object = Object::Null;

pub struct Evaluator {
    env: Rc<RefCell<Environment>>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            env: Rc::new(RefCell::new(Environment::new())),
        }
    }

    /// Evaluates a program against the evaluator's environment. A
    /// `ReturnValue` is unwrapped at this boundary; an `Error` is returned
    /// as-is for the caller to display.
    pub fn eval(&mut self, program: Program) -> Object {
        let mut result = NULL;
        for statement in program.statements {
            match self.eval_statement(Box::new(statement)) {
                Object::ReturnValue(value) => return *value,
                error @ Object::Error(_) => return error,
                object => result = object,
            }
        }
        result
    }

    fn eval_statement(&mut self, statement: Box<Statement>) -> Object {
        match *statement {
            Statement::Expression(expression) => self.eval_expression(Box::new(expression)),
            Statement::Block(statements) => self.eval_block_statement(statements),
            Statement::Return(expression) => {
                let value = self.eval_expression(Box::new(expression));
                if value.is_error() {
                    return value;
                }
                Object::ReturnValue(Box::new(value))
            }
            Statement::Let { name, value } => {
                self.eval_let_statement(Box::new(value), Box::new(name))
            }
        }
    }

    fn eval_let_statement(&mut self, value: Box<Expression>, name: Box<Expression>) -> Object {
        let value = self.eval_expression(value);
        if value.is_error() {
            return value;
        }
        let str_name = match *name {
            Expression::Identifier(name) => name,
            // the parser only ever produces an identifier here
            _ => return Object::Error(format!("expected identifier, found {}", name)),
        };
        self.env.borrow_mut().set(&str_name, value);
        NULL
    }

    // Return and error signals bubble out of nested blocks untouched;
    // only a function boundary or the top level unwraps a ReturnValue.
    fn eval_block_statement(&mut self, statements: Vec<Statement>) -> Object {
        let mut result = NULL;
        for statement in statements {
            result = self.eval_statement(Box::new(statement));
            if let Object::ReturnValue(_) | Object::Error(_) = result {
                return result;
            }
        }
        result
    }

    fn eval_expression(&mut self, expression: Box<Expression>) -> Object {
        match *expression {
            Expression::IntegerLiteral(value) => Object::Integer(value),
            Expression::BooleanLiteral(value) => self.native_bool_to_boolean_object(value),
            Expression::Prefix { operator, right } => {
                let right = self.eval_expression(right);
                if right.is_error() {
                    return right;
                }
                self.eval_prefix_expression(operator, right)
            }
            Expression::Infix {
                left,
                operator,
                right,
            } => {
                let left = self.eval_expression(left);
                if left.is_error() {
                    return left;
                }
                let right = self.eval_expression(right);
                if right.is_error() {
                    return right;
                }
                self.eval_infix_expression(left, operator, right)
            }
            Expression::If {
                condition,
                consequence,
                alternative,
            } => self.eval_if_expression(condition, consequence, alternative),
            Expression::Identifier(name) => self.eval_identifier_expression(name),
            Expression::FunctionLiteral { parameters, body } => {
                self.eval_function_literal(parameters, body)
            }
            Expression::Call {
                function,
                arguments,
            } => self.eval_call_function(function, arguments),
        }
    }

    fn eval_function_literal(
        &mut self,
        parameters: Vec<Expression>,
        body: Box<Statement>,
    ) -> Object {
        let mut names = Vec::with_capacity(parameters.len());
        for parameter in parameters {
            match parameter {
                Expression::Identifier(name) => names.push(name),
                _ => return Object::Error(format!("expected identifier, found {}", parameter)),
            }
        }
        Object::Function {
            parameters: names,
            body,
            env: self.env.clone(),
        }
    }

    fn eval_call_function(
        &mut self,
        function: Box<Expression>,
        arguments: Vec<Expression>,
    ) -> Object {
        let function = self.eval_expression(function);
        if function.is_error() {
            return function;
        }
        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            let arg = self.eval_expression(Box::new(argument));
            if arg.is_error() {
                return arg;
            }
            args.push(arg);
        }
        self.apply_function(function, args)
    }

    fn apply_function(&mut self, function: Object, args: Vec<Object>) -> Object {
        match function {
            Object::Function {
                parameters,
                body,
                env,
            } => {
                if parameters.len() != args.len() {
                    return Object::Error(format!(
                        "wrong number of arguments: want={}, got={}",
                        parameters.len(),
                        args.len()
                    ));
                }
                let mut call_env = Environment::new_enclosed(env.clone());
                parameters.into_iter().zip(args).for_each(|(param, arg)| {
                    call_env.set(&param, arg);
                });
                let old_env = self.env.clone();
                self.env = Rc::new(RefCell::new(call_env));
                let result = self.eval_statement(body);
                self.env = old_env;
                match result {
                    Object::ReturnValue(value) => *value,
                    object => object,
                }
            }
            _ => Object::Error(format!("not a function: {}", function.type_name())),
        }
    }

    fn eval_prefix_expression(&mut self, operator: Token, right: Object) -> Object {
        match operator {
            Token::Bang => self.eval_bang_operator_expression(right),
            Token::Minus => self.eval_minus_prefix_operator_expression(right),
            _ => Object::Error(format!(
                "unknown operator: {}{}",
                operator,
                right.type_name()
            )),
        }
    }

    fn eval_bang_operator_expression(&mut self, right: Object) -> Object {
        match right {
            Object::Boolean(true) => FALSE,
            Object::Boolean(false) => TRUE,
            Object::Null => TRUE,
            _ => FALSE,
        }
    }

    fn eval_minus_prefix_operator_expression(&mut self, right: Object) -> Object {
        match right {
            Object::Integer(value) => self.integer_result(value.checked_neg()),
            _ => Object::Error(format!("unknown operator: -{}", right.type_name())),
        }
    }

    fn eval_infix_expression(&mut self, left: Object, operator: Token, right: Object) -> Object {
        match (left, right) {
            (Object::Integer(left), Object::Integer(right)) => {
                self.eval_integer_infix_expression(left, operator, right)
            }
            (Object::Boolean(left), Object::Boolean(right)) => {
                self.eval_boolean_infix_expression(left, operator, right)
            }
            (Object::Null, Object::Null) => self.eval_null_infix_expression(operator),
            (left, right) if left.type_name() != right.type_name() => Object::Error(format!(
                "type mismatch: {} {} {}",
                left.type_name(),
                operator,
                right.type_name()
            )),
            (left, right) => Object::Error(format!(
                "unknown operator: {} {} {}",
                left.type_name(),
                operator,
                right.type_name()
            )),
        }
    }

    fn eval_integer_infix_expression(&mut self, left: i64, operator: Token, right: i64) -> Object {
        match operator {
            Token::Plus => self.integer_result(left.checked_add(right)),
            Token::Minus => self.integer_result(left.checked_sub(right)),
            Token::Asterisk => self.integer_result(left.checked_mul(right)),
            Token::Slash if right == 0 => Object::Error("division by zero".to_string()),
            // checked_div also catches MIN / -1
            Token::Slash => self.integer_result(left.checked_div(right)),
            Token::Lt => self.native_bool_to_boolean_object(left < right),
            Token::Gt => self.native_bool_to_boolean_object(left > right),
            Token::Lte => self.native_bool_to_boolean_object(left <= right),
            Token::Gte => self.native_bool_to_boolean_object(left >= right),
            Token::Eq => self.native_bool_to_boolean_object(left == right),
            Token::NotEq => self.native_bool_to_boolean_object(left != right),
            _ => Object::Error(format!(
                "unknown operator: INTEGER {} INTEGER",
                operator
            )),
        }
    }

    // Non-integer operands only support identity comparison against the
    // singleton booleans and null.
    fn eval_boolean_infix_expression(
        &mut self,
        left: bool,
        operator: Token,
        right: bool,
    ) -> Object {
        match operator {
            Token::Eq => self.native_bool_to_boolean_object(left == right),
            Token::NotEq => self.native_bool_to_boolean_object(left != right),
            _ => Object::Error(format!(
                "unknown operator: BOOLEAN {} BOOLEAN",
                operator
            )),
        }
    }

    fn eval_null_infix_expression(&mut self, operator: Token) -> Object {
        match operator {
            Token::Eq => TRUE,
            Token::NotEq => FALSE,
            _ => Object::Error(format!("unknown operator: NULL {} NULL", operator)),
        }
    }

    fn integer_result(&mut self, value: Option<i64>) -> Object {
        match value {
            Some(value) => Object::Integer(value),
            None => Object::Error("integer overflow".to_string()),
        }
    }

    fn native_bool_to_boolean_object(&mut self, input: bool) -> Object {
        if input {
            TRUE
        } else {
            FALSE
        }
    }

    fn eval_if_expression(
        &mut self,
        condition: Box<Expression>,
        consequence: Box<Statement>,
        alternative: Option<Box<Statement>>,
    ) -> Object {
        let condition = self.eval_expression(condition);
        if condition.is_error() {
            return condition;
        }
        if self.is_truthy(condition) {
            self.eval_statement(consequence)
        } else if let Some(alternative) = alternative {
            self.eval_statement(alternative)
        } else {
            NULL
        }
    }

    // falso and nulo are the only falsy values; zero is truthy
    fn is_truthy(&mut self, object: Object) -> bool {
        match object {
            Object::Null => false,
            Object::Boolean(true) => true,
            Object::Boolean(false) => false,
            _ => true,
        }
    }

    fn eval_identifier_expression(&mut self, name: String) -> Object {
        match self.env.borrow().get(&name) {
            Some(value) => value,
            None => Object::Error(format!("identifier not found: {}", name)),
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
