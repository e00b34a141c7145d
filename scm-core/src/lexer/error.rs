use thiserror::Error;

use crate::utils::prelude::SrcSpan;
use super::token::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexicalErrorType {
    #[error("cursor is out of range")]
    EndOfInput,
    #[error("missing matching double quotes")]
    MissingMatchingDoubleQuotes,
    #[error("invalid numeric literal")]
    InvalidNumericLiteral,
    #[error("invalid symbol")]
    InvalidSymbol,
    #[error("free closing parenthesis")]
    FreeClosingParenthesis,
    #[error("missing matching closing parenthesis")]
    MissingClosingParenthesis,
    #[error("NaN")]
    NaN,
    #[error("unexpected line break")]
    UnexpectedLineBreak,
    #[error("unexpected dot symbol")]
    UnexpectedDotSymbol,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Syntax error at line {}, position {}: {error}", .position.line, .position.column)]
pub struct LexicalError {
    pub error: LexicalErrorType,
    pub location: SrcSpan,
    pub position: Position,
}

impl LexicalError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match self.error {
            LexicalErrorType::EndOfInput => {
                ("Unexpected end of input", vec!["A quote must be followed by a form".into()])
            },
            LexicalErrorType::MissingMatchingDoubleQuotes => {
                ("String literal is never closed", vec![])
            },
            LexicalErrorType::InvalidNumericLiteral => {
                ("Invalid numeric literal", vec!["A number must end with whitespace, `)` or a comment".into()])
            },
            LexicalErrorType::InvalidSymbol => {
                ("Don't know what to do with this symbol", vec![])
            },
            LexicalErrorType::FreeClosingParenthesis => {
                ("Closing parenthesis has no matching opening one", vec![])
            },
            LexicalErrorType::MissingClosingParenthesis => {
                ("Missing matching closing parenthesis", vec![])
            },
            LexicalErrorType::NaN => {
                ("Expected a digit after `-`", vec![])
            },
            LexicalErrorType::UnexpectedLineBreak => {
                ("Line break inside a string literal", vec!["Escape sequences are not supported".into()])
            },
            LexicalErrorType::UnexpectedDotSymbol => {
                ("Found several dots in a numeric literal", vec![])
            },
        }
    }
}
