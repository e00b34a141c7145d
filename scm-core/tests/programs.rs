//! Whole programs run through `lex`, `parse` and `Interpreter::evaluate`.

use pretty_assertions::assert_eq;
use scm_core::{
    environment::prelude::{builtins, Value},
    eval::prelude::{EvalError, Interpreter},
    lexer::prelude::lex,
    parser::prelude::parse,
    utils::prelude::Error,
};

struct Run {
    result: Result<Option<Value>, Error>,
    output: String,
}

fn run(src: &str) -> Run {
    let path = std::path::PathBuf::from("program.scm");
    let mut interpreter = Interpreter::new(builtins(), Vec::new());

    let result = lex(src)
        .map_err(|error| Error::Lex { path: path.clone(), src: src.into(), error })
        .and_then(|tokens| parse(tokens)
            .map_err(|error| Error::Parse { path: path.clone(), src: src.into(), error }))
        .and_then(|root| interpreter.evaluate(&root)
            .map_err(|error| Error::Eval { path: path.clone(), src: src.into(), error }));

    Run {
        result,
        output: String::from_utf8_lossy(&interpreter.into_output()).into_owned(),
    }
}

#[test]
fn test_square() {
    let run = run("
        ; squares its argument
        (define (square x) (* x x))
        (displayln (square 4))
        (square 4)
    ");

    assert_eq!(run.output, "16\n");
    assert_eq!(run.result, Ok(Some(Value::int(16))));
}

#[test]
fn test_area_of_circle() {
    let run = run("
        (define (area r)
            (define pi 3.14)
            (* pi r r))
        (display \"area: \")
        (displayln (area 5))
    ");

    assert_eq!(run.output, format!("area: {}\n", 3.14 * 5.0 * 5.0));
    assert_eq!(run.result, Ok(None));
}

#[test]
fn test_greeting() {
    let run = run("
        (define greeting \"Hello, world!\")
        (define (greet) (displayln greeting))
        (greet)
        (greet)
    ");

    assert_eq!(run.output, "Hello, world!\nHello, world!\n");
}

#[test]
fn test_higher_order() {
    let run = run("
        (define (compose f g x) (f (g x)))
        (define (inc x) (+ x 1))
        (define (double x) (* x 2))
        (display (compose inc double 5))
        (newline)
        (display (compose double inc 5))
    ");

    assert_eq!(run.output, "11\n12");
}

#[test]
fn test_mixed_arithmetic() {
    let run = run("(display (/ (+ 1 2 3) 4)) (display \" \") (display (/ (+ 1 2 3) 4.0))");

    assert_eq!(run.output, "1 1.5");
}

#[test]
fn test_display_values() {
    let run = run("
        (define (f) 1)
        (displayln f)
        (displayln +)
        (displayln \"text\")
        (displayln -7)
    ");

    assert_eq!(run.output, "#<lambda f>\n#<primitive +>\ntext\n-7\n");
}

#[test]
fn test_output_before_failure_is_kept() {
    let run = run("(displayln 1) (displayln (+ 1 unknown)) (displayln 2)");

    assert_eq!(run.output, "1\n");
    assert!(matches!(
        run.result,
        Err(Error::Eval { error: EvalError::NotDefined { ref name, .. }, .. }) if name == "unknown"
    ));
}

#[test]
fn test_lexical_failure_stops_everything() {
    let run = run("(displayln 1) (displayln \"unterminated)");

    assert_eq!(run.output, "");
    assert!(matches!(run.result, Err(Error::Lex { .. })));

    let report = match run.result {
        Err(err) => err.pretty_string(),
        Ok(_) => unreachable!(),
    };

    assert!(report.contains("program.scm"), "{report}");
}

#[test]
fn test_definitions_do_not_leak_from_calls() {
    let run = run("
        (define (f x) (define y (* x 2)) y)
        (f 3)
        y
    ");

    assert!(matches!(
        run.result,
        Err(Error::Eval { error: EvalError::NotDefined { ref name, .. }, .. }) if name == "y"
    ));
}
