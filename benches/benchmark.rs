use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lpp::{evaluator::Evaluator, lexer::Lexer, object::Object, parser::Parser};

const INPUT: &str = r#"
variable fibonacci = funcion(x) {
  si (x == 0) {
    0
  } si_no {
    si (x == 1) {
      regresa 1;
    } si_no {
      fibonacci(x - 1) + fibonacci(x - 2);
    }
  }
};

fibonacci(20);
"#;

fn run(input: &str) -> Object {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();
    assert!(parser.errors().is_empty());
    let mut evaluator = Evaluator::new();
    evaluator.eval(program)
}

fn fib_benchmark(c: &mut Criterion) {
    c.bench_function("interpreter", |b| {
        b.iter(|| {
            run(black_box(INPUT));
        })
    });
}

criterion_group!(benches, fib_benchmark);
criterion_main!(benches);
