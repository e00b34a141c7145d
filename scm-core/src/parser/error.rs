use thiserror::Error;

use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorType {
    #[error("free closing parenthesis")]
    FreeClosingParenthesis,
    #[error("missing matching closing parenthesis")]
    MissingClosingParenthesis,
    #[error("empty form")]
    EmptyForm,
    #[error("quoted forms are not supported")]
    UnsupportedQuote,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Parse error at {location}: {error}")]
pub struct ParseError {
    pub error: ParseErrorType,
    pub location: SrcSpan
}

impl ParseError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            ParseErrorType::FreeClosingParenthesis => ("Closing parenthesis has no matching opening one", vec![]),
            ParseErrorType::MissingClosingParenthesis => ("Missing matching closing parenthesis", vec![]),
            ParseErrorType::EmptyForm => (
                "Empty form",
                vec!["A form must start with a function or `define`".into()]
            ),
            ParseErrorType::UnsupportedQuote => ("Quoted forms are not supported yet", vec![]),
        }
    }
}

pub fn parse_error<T>(error: ParseErrorType, location: SrcSpan) -> Result<T, ParseError> {
    Err(ParseError { error, location })
}
