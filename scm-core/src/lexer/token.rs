use std::fmt::Display;

use serde::Serialize;

use crate::utils::prelude::SrcSpan;

pub type TokenStream = Vec<Token>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    // `(` and `)`
    Syntax,
    Identifier,
    Integer,
    Float,
    // "text", stored without the quotes
    String,
    // `'`
    Quote,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Syntax => "Syntax",
            TokenKind::Identifier => "Identifier",
            TokenKind::Integer => "Integer",
            TokenKind::Float => "Float",
            TokenKind::String => "String",
            TokenKind::Quote => "Quote",
        };

        write!(f, "{name}")
    }
}

/// Line is 1-based, column is a 0-based character count within the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 0 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    pub position: Position,
    pub location: SrcSpan,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            position: Position::default(),
            location: SrcSpan::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.kind == TokenKind::Syntax && self.text == "("
    }

    pub fn is_close(&self) -> bool {
        self.kind == TokenKind::Syntax && self.text == ")"
    }

    pub fn is_identifier(&self, name: &str) -> bool {
        self.kind == TokenKind::Identifier && self.text == name
    }

    /// Source form of the token; strings get their quotes back.
    pub fn as_literal(&self) -> String {
        match self.kind {
            TokenKind::String => format!("\"{}\"", self.text),
            _ => self.text.clone(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_literal())
    }
}
