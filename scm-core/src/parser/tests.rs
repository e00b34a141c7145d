use pretty_assertions::assert_eq;

use crate::lexer::prelude::{lex, Token, TokenKind};

use super::prelude::{parse, Node, NodeKind, ParseError, ParseErrorType};

fn parse_source(input: &str) -> Node {
    let tokens = match lex(input) {
        Ok(tokens) => tokens,
        Err(err) => panic!("{err}"),
    };

    match parse(tokens) {
        Ok(root) => root,
        Err(err) => panic!("{err}"),
    }
}

fn kinds(node: &Node) -> Vec<NodeKind> {
    node.children.iter().map(|child| child.kind).collect()
}

#[test]
fn test_call() {
    let root = parse_source("(+ 1 2.5 \"three\")");

    assert_eq!(root.kind, NodeKind::Root);
    assert_eq!(kinds(&root), vec![NodeKind::Call]);

    let call = &root.children[0];

    assert_eq!(
        kinds(call),
        vec![NodeKind::VariableRef, NodeKind::Literal, NodeKind::Literal, NodeKind::Literal]
    );
    assert_eq!(call.children[0].identifier(), Some("+"));
    assert_eq!(call.token.as_ref().map(|token| token.text.as_str()), Some("("));
    assert_eq!((call.location.start, call.location.end), (0, 17));
}

#[test]
fn test_define_forms() {
    let root = parse_source("(define pi 3) (define (square x) (* x x))");

    assert_eq!(kinds(&root), vec![NodeKind::Define, NodeKind::Define]);

    let value = &root.children[0];
    assert_eq!(kinds(value), vec![NodeKind::VariableRef, NodeKind::Literal]);
    assert_eq!(value.token.as_ref().map(|token| token.text.as_str()), Some("define"));

    let function = &root.children[1];
    assert_eq!(kinds(function), vec![NodeKind::Call, NodeKind::Call]);
    assert_eq!(kinds(&function.children[0]), vec![NodeKind::VariableRef, NodeKind::VariableRef]);
}

#[test]
fn test_define_only_at_head() {
    let root = parse_source("(display define)");

    assert_eq!(kinds(&root.children[0]), vec![NodeKind::VariableRef, NodeKind::VariableRef]);
    assert_eq!(root.children[0].kind, NodeKind::Call);
}

#[test]
fn test_nested_forms_and_top_level_leaves() {
    let root = parse_source("(f (g 1) (h (k 2))) 42 x");

    assert_eq!(kinds(&root), vec![NodeKind::Call, NodeKind::Literal, NodeKind::VariableRef]);
    assert_eq!(
        kinds(&root.children[0]),
        vec![NodeKind::VariableRef, NodeKind::Call, NodeKind::Call]
    );
    assert_eq!(kinds(&root.children[0].children[2].children[1]), vec![NodeKind::VariableRef, NodeKind::Literal]);
}

#[test]
fn test_display_round_trip() {
    let input = "(define (area r)\n  (define pi 3.14)\n  (* pi r r))\n(display \"area:\")\n(area 5)";
    let root = parse_source(input);

    assert_eq!(
        root.to_string(),
        "(define (area r) (define pi 3.14) (* pi r r))\n(display \"area:\")\n(area 5)"
    );
    assert_eq!(parse_source(&root.to_string()).to_string(), root.to_string());
}

#[test]
fn test_empty_form() {
    let tokens = lex("(+ 1 ())").unwrap_or_default();

    assert_eq!(
        parse(tokens).map_err(|err| err.error),
        Err(ParseErrorType::EmptyForm)
    );
}

#[test]
fn test_quote_is_rejected() {
    let tokens = lex("'(1 2)").unwrap_or_default();

    assert_eq!(
        parse(tokens).map_err(|err| err.error),
        Err(ParseErrorType::UnsupportedQuote)
    );
}

#[test]
fn test_unbalanced_stream() -> Result<(), ParseError> {
    let open = || Token::new(TokenKind::Syntax, "(");
    let close = || Token::new(TokenKind::Syntax, ")");
    let ident = || Token::new(TokenKind::Identifier, "f");

    assert_eq!(
        parse(vec![open(), ident()]).map_err(|err| err.error),
        Err(ParseErrorType::MissingClosingParenthesis)
    );
    assert_eq!(
        parse(vec![open(), ident(), close(), close()]).map_err(|err| err.error),
        Err(ParseErrorType::FreeClosingParenthesis)
    );
    assert_eq!(
        parse(vec![open()]).map_err(|err| err.error),
        Err(ParseErrorType::MissingClosingParenthesis)
    );

    let root = parse(vec![open(), ident(), close()])?;
    assert_eq!(kinds(&root), vec![NodeKind::Call]);

    Ok(())
}

#[test]
fn test_empty_program() -> Result<(), ParseError> {
    let root = parse(vec![])?;

    assert_eq!(root, Node::root());

    Ok(())
}
