use crate::token::Token;

fn is_letter(char: char) -> bool {
    // identifiers may carry accented Spanish letters, e.g. `año`
    char.is_alphabetic() || char == '_'
}

pub struct Lexer {
    chars: Vec<char>,
    position: usize,
    char: Option<char>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let char = chars.first().copied();
        Self {
            chars,
            position: 0,
            char,
        }
    }

    pub fn next_token(&mut self) -> Option<Token> {
        while self.char.is_some_and(|char| char.is_whitespace()) {
            self.read_char();
        }

        let token = match self.char {
            Some(char) => match char {
                '=' if self.is_next_char('=') => {
                    self.read_char();
                    Some(Token::Eq)
                }
                '=' => Some(Token::Assign),
                '!' if self.is_next_char('=') => {
                    self.read_char();
                    Some(Token::NotEq)
                }
                '!' => Some(Token::Bang),
                '<' if self.is_next_char('=') => {
                    self.read_char();
                    Some(Token::Lte)
                }
                '<' => Some(Token::Lt),
                '>' if self.is_next_char('=') => {
                    self.read_char();
                    Some(Token::Gte)
                }
                '>' => Some(Token::Gt),
                '+' => Some(Token::Plus),
                '-' => Some(Token::Minus),
                '*' => Some(Token::Asterisk),
                '/' => Some(Token::Slash),
                ';' => Some(Token::Semicolon),
                ',' => Some(Token::Comma),
                '(' => Some(Token::Lparen),
                ')' => Some(Token::Rparen),
                '{' => Some(Token::Lbrace),
                '}' => Some(Token::Rbrace),
                _ if char.is_ascii_digit() => {
                    let literal = self.read_until(|char| !char.is_ascii_digit());
                    Some(Token::Int(literal))
                }
                _ if is_letter(char) => {
                    let literal =
                        self.read_until(|char| !is_letter(char) && !char.is_ascii_digit());
                    Some(Token::lookup_ident(literal))
                }
                _ => Some(Token::Illegal(char.to_string())),
            },
            None => None,
        };

        self.read_char();

        token
    }

    fn read_char(&mut self) {
        self.position += 1;
        self.char = self.chars.get(self.position).copied();
    }

    fn is_next_char(&self, ch: char) -> bool {
        self.chars.get(self.position + 1).eq(&Some(&ch))
    }

    fn read_until(&mut self, condition: impl Fn(char) -> bool) -> String {
        let mut literal = String::new();
        while let Some(char) = self.char {
            if condition(char) {
                self.position -= 1;
                break;
            }
            literal.push(char);
            self.read_char();
        }
        literal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexer() {
        let input = r#"
                    variable cinco = 5;
                    variable diez = 10;
                    variable suma = funcion(x, y) {
                        x + y;
                    };
                    variable resultado = suma(cinco, diez);
                    !-/*5;
                    5 < 10 > 5;
                    si (5 < 10) {
                        regresa verdadero;
                    } si_no {
                        regresa falso;
                    }
                    10 == 10;
                    10 != 9;
                    5 <= 10;
                    10 >= 5;
                    "#;

        let mut lexer = Lexer::new(input);

        let mut expected = vec![
            Token::Let,
            Token::Ident("cinco".to_string()),
            Token::Assign,
            Token::Int("5".to_string()),
            Token::Semicolon,
            Token::Let,
            Token::Ident("diez".to_string()),
            Token::Assign,
            Token::Int("10".to_string()),
            Token::Semicolon,
            Token::Let,
            Token::Ident("suma".to_string()),
            Token::Assign,
            Token::Function,
            Token::Lparen,
            Token::Ident("x".to_string()),
            Token::Comma,
            Token::Ident("y".to_string()),
            Token::Rparen,
            Token::Lbrace,
            Token::Ident("x".to_string()),
            Token::Plus,
            Token::Ident("y".to_string()),
            Token::Semicolon,
            Token::Rbrace,
            Token::Semicolon,
            Token::Let,
            Token::Ident("resultado".to_string()),
            Token::Assign,
            Token::Ident("suma".to_string()),
            Token::Lparen,
            Token::Ident("cinco".to_string()),
            Token::Comma,
            Token::Ident("diez".to_string()),
            Token::Rparen,
            Token::Semicolon,
            Token::Bang,
            Token::Minus,
            Token::Slash,
            Token::Asterisk,
            Token::Int("5".to_string()),
            Token::Semicolon,
            Token::Int("5".to_string()),
            Token::Lt,
            Token::Int("10".to_string()),
            Token::Gt,
            Token::Int("5".to_string()),
            Token::Semicolon,
            Token::If,
            Token::Lparen,
            Token::Int("5".to_string()),
            Token::Lt,
            Token::Int("10".to_string()),
            Token::Rparen,
            Token::Lbrace,
            Token::Return,
            Token::True,
            Token::Semicolon,
            Token::Rbrace,
            Token::Else,
            Token::Lbrace,
            Token::Return,
            Token::False,
            Token::Semicolon,
            Token::Rbrace,
            Token::Int("10".to_string()),
            Token::Eq,
            Token::Int("10".to_string()),
            Token::Semicolon,
            Token::Int("10".to_string()),
            Token::NotEq,
            Token::Int("9".to_string()),
            Token::Semicolon,
            Token::Int("5".to_string()),
            Token::Lte,
            Token::Int("10".to_string()),
            Token::Semicolon,
            Token::Int("10".to_string()),
            Token::Gte,
            Token::Int("5".to_string()),
            Token::Semicolon,
        ]
        .into_iter();

        while let Some(token) = lexer.next_token() {
            let expected_token = expected.next().unwrap();
            assert_eq!(token, expected_token);
        }
        assert_eq!(expected.next(), None);
    }

    #[test]
    fn test_accented_identifiers() {
        let mut lexer = Lexer::new("variable año = 5; ñu_2");

        let expected = vec![
            Token::Let,
            Token::Ident("año".to_string()),
            Token::Assign,
            Token::Int("5".to_string()),
            Token::Semicolon,
            Token::Ident("ñu_2".to_string()),
        ];

        for expected_token in expected {
            assert_eq!(lexer.next_token(), Some(expected_token));
        }
        assert_eq!(lexer.next_token(), None);
    }

    #[test]
    fn test_illegal_characters() {
        let mut lexer = Lexer::new("@");
        assert_eq!(lexer.next_token(), Some(Token::Illegal("@".to_string())));
        assert_eq!(lexer.next_token(), None);
    }
}
