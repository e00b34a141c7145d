use crate::{lexer::prelude::{Token, TokenKind, TokenStream}, utils::prelude::SrcSpan};
use super::error::{parse_error, ParseError, ParseErrorType};
use super::ast::{Node, NodeKind};

/// Builds the tree for a whole token stream.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: TokenStream) -> Result<Node, ParseError> {
    Parser::new(tokens.into_iter()).parse()
}

pub struct Parser<T: Iterator<Item = Token>> {
    pub current_token: Option<Token>,
    // end of the last consumed token, used to place end-of-input errors
    last_end: u32,

    tokens: T,
}

impl<T: Iterator<Item = Token>> Parser<T> {
    pub fn new(input: T) -> Self {
        let mut parser = Self {
            current_token: None,
            last_end: 0,

            tokens: input,
        };

        parser.step();

        parser
    }

    pub fn step(&mut self) {
        let _ = self.next_token();
    }

    pub fn next_token(&mut self) -> Option<Token> {
        let t = self.current_token.take();

        if let Some(token) = &t {
            self.last_end = token.location.end;
        }

        self.current_token = self.tokens.next();

        t
    }

    pub fn parse(&mut self) -> Result<Node, ParseError> {
        let mut root = Node::root();

        self.parse_forms(&mut root)?;

        if let Some(token) = &self.current_token {
            return parse_error(ParseErrorType::FreeClosingParenthesis, token.location);
        }

        if let (Some(first), Some(last)) = (root.children.first(), root.children.last()) {
            root.location = first.location.merge(last.location);
        }

        Ok(root)
    }

    /// Appends forms to `parent` until a closing parenthesis or the end of
    /// the stream; neither is consumed.
    fn parse_forms(&mut self, parent: &mut Node) -> Result<(), ParseError> {
        loop {
            let token = match &self.current_token {
                None => return Ok(()),
                Some(token) if token.is_close() => return Ok(()),
                Some(token) if token.kind == TokenKind::Quote => {
                    return parse_error(ParseErrorType::UnsupportedQuote, token.location);
                },
                Some(_) => match self.next_token() {
                    Some(token) => token,
                    None => return Ok(()),
                },
            };

            let node = if token.is_open() {
                self.parse_form(token)?
            } else {
                Node::leaf(token)
            };

            parent.push(node);
        }
    }

    // cursor is right past `open`
    fn parse_form(&mut self, open: Token) -> Result<Node, ParseError> {
        let start = open.location;

        let mut node = match &self.current_token {
            Some(head) if head.is_identifier("define") => match self.next_token() {
                Some(head) => Node::new(NodeKind::Define, head),
                None => return parse_error(ParseErrorType::MissingClosingParenthesis, start),
            },
            Some(head) if head.is_close() => {
                return parse_error(ParseErrorType::EmptyForm, start.merge(head.location));
            },
            Some(_) => Node::new(NodeKind::Call, open),
            None => return parse_error(ParseErrorType::MissingClosingParenthesis, start),
        };

        self.parse_forms(&mut node)?;

        match self.next_token() {
            Some(close) if close.is_close() => {
                node.location = start.merge(close.location);

                Ok(node)
            },
            _ => parse_error(
                ParseErrorType::MissingClosingParenthesis,
                SrcSpan::from(start.start, self.last_end.max(start.end))
            ),
        }
    }
}
