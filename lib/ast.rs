use std::fmt;

use crate::token::Token;

#[derive(Debug, PartialEq, Clone)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn token_literal(&self) -> String {
        match self.statements.first() {
            Some(statement) => statement.token_literal(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Let { name: Expression, value: Expression },
    Return(Expression),
    Expression(Expression),
    Block(Vec<Statement>),
}

impl Statement {
    /// The token this node was built from, for diagnostics.
    pub fn token_literal(&self) -> String {
        match self {
            Statement::Let { .. } => Token::Let.to_string(),
            Statement::Return(_) => Token::Return.to_string(),
            Statement::Expression(expression) => expression.token_literal(),
            Statement::Block(_) => Token::Lbrace.to_string(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Statement::Let { name, value } => write!(f, "variable {} = {};", name, value),
            Statement::Return(value) => write!(f, "regresa {};", value),
            // the terminator keeps adjacent statements from fusing into a
            // call or infix expression on re-parse
            Statement::Expression(expression) => write!(f, "{};", expression),
            Statement::Block(statements) => {
                let statements: Vec<String> = statements.iter().map(|s| s.to_string()).collect();
                write!(f, "{}", statements.join(" "))
            }
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Identifier(String),
    IntegerLiteral(i64),
    BooleanLiteral(bool),
    Prefix {
        operator: Token,
        right: Box<Expression>,
    },
    Infix {
        left: Box<Expression>,
        operator: Token,
        right: Box<Expression>,
    },
    If {
        condition: Box<Expression>,
        consequence: Box<Statement>,
        alternative: Option<Box<Statement>>,
    },
    FunctionLiteral {
        parameters: Vec<Expression>,
        body: Box<Statement>,
    },
    Call {
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },
}

impl Expression {
    pub fn token_literal(&self) -> String {
        match self {
            Expression::Identifier(value) => value.clone(),
            Expression::IntegerLiteral(value) => value.to_string(),
            Expression::BooleanLiteral(true) => Token::True.to_string(),
            Expression::BooleanLiteral(false) => Token::False.to_string(),
            Expression::Prefix { operator, .. } => operator.to_string(),
            Expression::Infix { operator, .. } => operator.to_string(),
            Expression::If { .. } => Token::If.to_string(),
            Expression::FunctionLiteral { .. } => Token::Function.to_string(),
            Expression::Call { .. } => Token::Lparen.to_string(),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Identifier(value) => write!(f, "{}", value),
            Expression::IntegerLiteral(value) => write!(f, "{}", value),
            Expression::BooleanLiteral(true) => write!(f, "verdadero"),
            Expression::BooleanLiteral(false) => write!(f, "falso"),
            Expression::Prefix { operator, right } => write!(f, "({}{})", operator, right),
            Expression::Infix {
                left,
                operator,
                right,
            } => write!(f, "({} {} {})", left, operator, right),
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "si ({}) {{ {} }}", condition, consequence)?;
                if let Some(alternative) = alternative {
                    write!(f, " si_no {{ {} }}", alternative)?;
                }
                Ok(())
            }
            Expression::FunctionLiteral { parameters, body } => {
                let parameters: Vec<String> = parameters.iter().map(|p| p.to_string()).collect();
                write!(f, "funcion({}) {{ {} }}", parameters.join(", "), body)
            }
            Expression::Call {
                function,
                arguments,
            } => {
                let arguments: Vec<String> = arguments.iter().map(|a| a.to_string()).collect();
                write!(f, "{}({})", function, arguments.join(", "))
            }
        }
    }
}
