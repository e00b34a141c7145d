use pretty_assertions::assert_eq;

use super::prelude::{lex, LexicalError, LexicalErrorType, Position, TokenKind};

fn kinds_and_texts(input: &str) -> Result<Vec<(TokenKind, String)>, LexicalError> {
    Ok(lex(input)?
        .into_iter()
        .map(|token| (token.kind, token.text))
        .collect())
}

fn expected(tokens: &[(TokenKind, &str)]) -> Vec<(TokenKind, String)> {
    tokens.iter()
        .map(|(kind, text)| (*kind, text.to_string()))
        .collect()
}

fn lex_error(input: &str) -> LexicalErrorType {
    match lex(input) {
        Err(err) => err.error,
        Ok(tokens) => panic!("Expected Err for {input:?} but got Ok({tokens:?})"),
    }
}

#[test]
fn test_id_with_a_few_ints() -> Result<(), LexicalError> {
    assert_eq!(
        kinds_and_texts("(+ 1 2)")?,
        expected(&[
            (TokenKind::Syntax, "("),
            (TokenKind::Identifier, "+"),
            (TokenKind::Integer, "1"),
            (TokenKind::Integer, "2"),
            (TokenKind::Syntax, ")"),
        ])
    );

    Ok(())
}

#[test]
fn test_negative_numbers() -> Result<(), LexicalError> {
    assert_eq!(
        kinds_and_texts("(+ -1 2 -3 -1.342 20.576 -3.0)")?,
        expected(&[
            (TokenKind::Syntax, "("),
            (TokenKind::Identifier, "+"),
            (TokenKind::Integer, "-1"),
            (TokenKind::Integer, "2"),
            (TokenKind::Integer, "-3"),
            (TokenKind::Float, "-1.342"),
            (TokenKind::Float, "20.576"),
            (TokenKind::Float, "-3.0"),
            (TokenKind::Syntax, ")"),
        ])
    );

    Ok(())
}

#[test]
fn test_minus_as_identifier() -> Result<(), LexicalError> {
    assert_eq!(
        kinds_and_texts("(- 5 3) (-foo) -")?,
        expected(&[
            (TokenKind::Syntax, "("),
            (TokenKind::Identifier, "-"),
            (TokenKind::Integer, "5"),
            (TokenKind::Integer, "3"),
            (TokenKind::Syntax, ")"),
            (TokenKind::Syntax, "("),
            (TokenKind::Identifier, "-foo"),
            (TokenKind::Syntax, ")"),
            (TokenKind::Identifier, "-"),
        ])
    );

    Ok(())
}

#[test]
fn test_strings() -> Result<(), LexicalError> {
    assert_eq!(
        kinds_and_texts(r#"(display "Hello, world")"#)?,
        expected(&[
            (TokenKind::Syntax, "("),
            (TokenKind::Identifier, "display"),
            (TokenKind::String, "Hello, world"),
            (TokenKind::Syntax, ")"),
        ])
    );

    Ok(())
}

#[test]
fn test_nested_parentheses() -> Result<(), LexicalError> {
    let tokens = lex("(cons 1 (cons 2 (cons 3 nil)))")?;

    let opening = tokens.iter().filter(|token| token.is_open()).count();
    let closing = tokens.iter().filter(|token| token.is_close()).count();

    assert_eq!(tokens.len(), 13);
    assert_eq!(opening, 3);
    assert_eq!(closing, 3);

    Ok(())
}

#[test]
fn test_single_line_comments() -> Result<(), LexicalError> {
    let input = "
        ;; this is a comment
        (+ 1 ; comment
           2; comment again
           3) ; also a comment
    ";

    assert_eq!(
        kinds_and_texts(input)?,
        expected(&[
            (TokenKind::Syntax, "("),
            (TokenKind::Identifier, "+"),
            (TokenKind::Integer, "1"),
            (TokenKind::Integer, "2"),
            (TokenKind::Integer, "3"),
            (TokenKind::Syntax, ")"),
        ])
    );

    Ok(())
}

#[test]
fn test_quote_and_identifier_chars() -> Result<(), LexicalError> {
    assert_eq!(
        kinds_and_texts("'(null? set! a_b2 */)")?,
        expected(&[
            (TokenKind::Quote, "'"),
            (TokenKind::Syntax, "("),
            (TokenKind::Identifier, "null?"),
            (TokenKind::Identifier, "set!"),
            (TokenKind::Identifier, "a_b2"),
            (TokenKind::Identifier, "*/"),
            (TokenKind::Syntax, ")"),
        ])
    );

    Ok(())
}

#[test]
fn test_tokens_at_end_of_input() -> Result<(), LexicalError> {
    assert_eq!(
        kinds_and_texts("42")?,
        expected(&[(TokenKind::Integer, "42")])
    );
    assert_eq!(
        kinds_and_texts("pi")?,
        expected(&[(TokenKind::Identifier, "pi")])
    );
    assert_eq!(kinds_and_texts("   ; nothing but a comment")?, expected(&[]));

    Ok(())
}

#[test]
fn test_positions() -> Result<(), LexicalError> {
    let tokens = lex("(define x\n  10)")?;

    let positions = tokens.iter()
        .map(|token| token.position)
        .collect::<Vec<Position>>();

    assert_eq!(
        positions,
        vec![
            Position { line: 1, column: 0 },
            Position { line: 1, column: 1 },
            Position { line: 1, column: 8 },
            Position { line: 2, column: 2 },
            Position { line: 2, column: 4 },
        ]
    );

    Ok(())
}

#[test]
fn test_parenthesis_mismatch() {
    assert_eq!(lex_error("(+ 1 2 3"), LexicalErrorType::MissingClosingParenthesis);
    assert_eq!(lex_error("(+ 1 2 3))"), LexicalErrorType::FreeClosingParenthesis);
    assert_eq!(lex_error("((+ 1 2 3)"), LexicalErrorType::MissingClosingParenthesis);
    assert_eq!(lex_error(")("), LexicalErrorType::FreeClosingParenthesis);
}

#[test]
fn test_invalid_input() {
    let fails = vec![
        (r#"(display "Hel
        lo")"#, LexicalErrorType::UnexpectedLineBreak),
        (r#"(display "Hello)"#, LexicalErrorType::MissingMatchingDoubleQuotes),
        (r#"(+ 1 -"2")"#, LexicalErrorType::NaN),
        ("(+ 1.2.3 4)", LexicalErrorType::UnexpectedDotSymbol),
        ("(+ 12abc 4)", LexicalErrorType::InvalidNumericLiteral),
        ("(+ 1(2))", LexicalErrorType::InvalidNumericLiteral),
        ("(+ 1 #t)", LexicalErrorType::InvalidSymbol),
    ];

    for (idx, (input, fail)) in fails.into_iter().enumerate() {
        let err = lex_error(input);

        assert_eq!(fail, err, "Unexpected lexical error for input #{idx}: {input:?}");
    }
}

#[test]
fn test_error_location() {
    let err = match lex("(+ 1\n   #)") {
        Err(err) => err,
        Ok(tokens) => panic!("Expected Err but got Ok({tokens:?})"),
    };

    assert_eq!(err.error, LexicalErrorType::InvalidSymbol);
    assert_eq!(err.position, Position { line: 2, column: 3 });
    assert_eq!((err.location.start, err.location.end), (8, 9));
    assert_eq!(
        err.to_string(),
        "Syntax error at line 2, position 3: invalid symbol"
    );
}

#[test]
fn test_trailing_quote_is_end_of_input() {
    assert_eq!(lex_error("(display 1) '"), LexicalErrorType::EndOfInput);
}
