use std::io::{self, Write};

use anyhow::Result;

use lpp::{evaluator::Evaluator, lexer::Lexer, object::Object, parser::Parser};

const EXIT_SENTINEL: &str = "salir()";

pub fn start() -> Result<()> {
    // one evaluator for the whole session, so bindings persist across lines
    let mut evaluator = Evaluator::new();

    loop {
        print!(">> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(());
        }

        if input.trim() == EXIT_SENTINEL {
            return Ok(());
        }

        let lexer = Lexer::new(&input);
        let mut parser = Parser::new(lexer);
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            for error in parser.errors() {
                println!("{}", error);
            }
            continue;
        }

        let evaluated = evaluator.eval(program);
        if evaluated != Object::Null {
            println!("{}", evaluated);
        }
    }
}
