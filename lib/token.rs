use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Ident(String),
    Int(String),
    Illegal(String),

    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,

    Lt,
    Gt,
    Lte,
    Gte,
    Eq,
    NotEq,

    Comma,
    Semicolon,

    Lparen,
    Rparen,
    Lbrace,
    Rbrace,

    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, Token> = {
        let mut keywords = HashMap::new();
        keywords.insert("variable", Token::Let);
        keywords.insert("funcion", Token::Function);
        keywords.insert("procedimiento", Token::Function);
        keywords.insert("regresa", Token::Return);
        keywords.insert("si", Token::If);
        keywords.insert("si_no", Token::Else);
        keywords.insert("verdadero", Token::True);
        keywords.insert("falso", Token::False);
        keywords
    };
}

impl Token {
    pub fn variant_eq(&self, other: Token) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(&other)
    }

    pub fn lookup_ident(literal: String) -> Token {
        match KEYWORDS.get(literal.as_str()) {
            Some(token) => token.clone(),
            None => Token::Ident(literal),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Ident(ident) => write!(f, "{}", ident),
            Token::Int(value) => write!(f, "{}", value),
            Token::Illegal(value) => write!(f, "{}", value),

            Token::Assign => write!(f, "="),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Bang => write!(f, "!"),
            Token::Asterisk => write!(f, "*"),
            Token::Slash => write!(f, "/"),

            Token::Lt => write!(f, "<"),
            Token::Gt => write!(f, ">"),
            Token::Lte => write!(f, "<="),
            Token::Gte => write!(f, ">="),
            Token::Eq => write!(f, "=="),
            Token::NotEq => write!(f, "!="),

            Token::Comma => write!(f, ","),
            Token::Semicolon => write!(f, ";"),

            Token::Lparen => write!(f, "("),
            Token::Rparen => write!(f, ")"),
            Token::Lbrace => write!(f, "{{"),
            Token::Rbrace => write!(f, "}}"),

            Token::Function => write!(f, "funcion"),
            Token::Let => write!(f, "variable"),
            Token::True => write!(f, "verdadero"),
            Token::False => write!(f, "falso"),
            Token::If => write!(f, "si"),
            Token::Else => write!(f, "si_no"),
            Token::Return => write!(f, "regresa"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        let cases = vec![
            ("variable", Token::Let),
            ("funcion", Token::Function),
            ("procedimiento", Token::Function),
            ("regresa", Token::Return),
            ("si", Token::If),
            ("si_no", Token::Else),
            ("verdadero", Token::True),
            ("falso", Token::False),
            ("suma", Token::Ident("suma".to_string())),
            ("año", Token::Ident("año".to_string())),
        ];
        for (literal, expected) in cases {
            assert_eq!(Token::lookup_ident(literal.to_string()), expected);
        }
    }

    #[test]
    fn test_variant_eq() {
        assert!(Token::Ident("a".to_string()).variant_eq(Token::Ident("b".to_string())));
        assert!(!Token::Ident("a".to_string()).variant_eq(Token::Int("1".to_string())));
        assert!(Token::Lte.variant_eq(Token::Lte));
    }
}
