use std::fmt::Display;

use thiserror::Error;

use crate::{
    environment::prelude::ValueType,
    lexer::prelude::TokenKind,
    parser::prelude::NodeKind,
    utils::prelude::SrcSpan,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arity::Exactly(count) => write!(f, "{count}"),
            Arity::AtLeast(count) => write!(f, "at least {count}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("\"{name}\" is not defined")]
    NotDefined {
        name: String,
        location: SrcSpan,
    },
    #[error("\"{name}\" is not a function")]
    NotCallable {
        name: String,
        location: SrcSpan,
    },
    #[error("{name}: unexpected number of arguments, expected {expected}, got {got}")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
        location: SrcSpan,
    },
    #[error("{name}: unexpected number of arguments, expected {expected}, got {got}")]
    PrimitiveArity {
        name: &'static str,
        expected: Arity,
        got: usize,
        location: SrcSpan,
    },
    #[error("{name}: argument {index} is {found}, not a number")]
    NotANumber {
        name: &'static str,
        index: usize,
        found: ValueType,
        location: SrcSpan,
    },
    #[error("{name}: division by zero")]
    DivisionByZero {
        name: &'static str,
        location: SrcSpan,
    },
    #[error("{name}: integer overflow")]
    IntegerOverflow {
        name: &'static str,
        location: SrcSpan,
    },
    #[error("{found} is not a valid identifier")]
    InvalidParameter {
        found: String,
        location: SrcSpan,
    },
    #[error("malformed define: {reason}")]
    MalformedDefine {
        reason: &'static str,
        location: SrcSpan,
    },
    #[error("{expression} has no value")]
    NoValue {
        expression: String,
        location: SrcSpan,
    },
    #[error("invalid {kind} literal `{text}`")]
    InvalidLiteral {
        text: String,
        kind: TokenKind,
        location: SrcSpan,
    },
    #[error("failed to write output: {message}")]
    Io {
        message: String,
    },
    #[error("available for root node only, got {kind}")]
    NotRoot {
        kind: NodeKind,
    },
}

impl EvalError {
    pub fn location(&self) -> Option<SrcSpan> {
        match self {
            EvalError::NotDefined { location, .. }
            | EvalError::NotCallable { location, .. }
            | EvalError::ArityMismatch { location, .. }
            | EvalError::PrimitiveArity { location, .. }
            | EvalError::NotANumber { location, .. }
            | EvalError::DivisionByZero { location, .. }
            | EvalError::IntegerOverflow { location, .. }
            | EvalError::InvalidParameter { location, .. }
            | EvalError::MalformedDefine { location, .. }
            | EvalError::NoValue { location, .. }
            | EvalError::InvalidLiteral { location, .. } => Some(*location),
            EvalError::Io { .. } | EvalError::NotRoot { .. } => None,
        }
    }

    pub fn details(&self) -> (&'static str, Vec<String>) {
        match self {
            EvalError::NotDefined { name, .. } => {
                ("Not defined", vec![format!("`{name}` is not defined in this scope")])
            },
            EvalError::NotCallable { name, .. } => {
                ("Not a function", vec![format!("`{name}` cannot be called")])
            },
            EvalError::ArityMismatch { name, expected, got, .. } => (
                "Unexpected number of arguments",
                vec![format!("`{name}` takes {expected} arguments, but {got} were given")]
            ),
            EvalError::PrimitiveArity { name, expected, got, .. } => (
                "Unexpected number of arguments",
                vec![format!("`{name}` takes {expected} arguments, but {got} were given")]
            ),
            EvalError::NotANumber { name, index, found, .. } => (
                "Not a number",
                vec![format!("`{name}` expects numbers, argument {index} is {found}")]
            ),
            EvalError::DivisionByZero { .. } => ("Division by zero", vec![]),
            EvalError::IntegerOverflow { name, .. } => {
                ("Integer overflow", vec![format!("`{name}` overflowed a 64-bit integer")])
            },
            EvalError::InvalidParameter { found, .. } => {
                ("Invalid parameter", vec![format!("`{found}` is not a valid identifier")])
            },
            EvalError::MalformedDefine { reason, .. } => ("Malformed define", vec![reason.to_string()]),
            EvalError::NoValue { expression, .. } => {
                ("Expression has no value", vec![format!("`{expression}` does not produce a value")])
            },
            EvalError::InvalidLiteral { text, kind, .. } => {
                ("Invalid literal", vec![format!("`{text}` is not a valid {kind}")])
            },
            EvalError::Io { message } => ("Output error", vec![message.clone()]),
            EvalError::NotRoot { kind } => {
                ("Not a program", vec![format!("only a Root node can be evaluated, got {kind}")])
            },
        }
    }
}

impl From<std::io::Error> for EvalError {
    fn from(err: std::io::Error) -> Self {
        EvalError::Io { message: err.to_string() }
    }
}
