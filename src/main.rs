mod repl;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use lpp::{evaluator::Evaluator, lexer::Lexer, object::Object};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// run a file
    Run {
        #[arg(name = "FILE")]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Run { file }) => run_file(file),
        None => repl::start(),
    }
}

fn run_file(file: PathBuf) -> Result<()> {
    let source = std::fs::read_to_string(&file)?;

    let lexer = Lexer::new(&source);
    let mut parser = lpp::parser::Parser::new(lexer);
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        for error in parser.errors() {
            eprintln!("{}", error);
        }
        bail!("{} contains {} parse errors", file.display(), parser.errors().len());
    }

    let mut evaluator = Evaluator::new();
    let evaluated = evaluator.eval(program);
    match evaluated {
        Object::Null => {}
        Object::Error(message) => bail!("{}", message),
        object => println!("{}", object),
    }

    Ok(())
}
