use std::path::{Path, PathBuf};

use termcolor::Buffer;
use thiserror::Error;

use crate::{
    eval::prelude::EvalError,
    lexer::prelude::{LexicalError, LexicalErrorType},
    parser::prelude::ParseError,
    utils::prelude::SrcSpan,
};
use super::diagnostic::{Diagnostic, Location};

/// A failed stage together with the source it failed on, ready for rendering.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("failed to tokenize {}: {error}", .path.display())]
    Lex {
        path: PathBuf,
        src: String,
        error: LexicalError,
    },
    #[error("failed to parse {}: {error}", .path.display())]
    Parse {
        path: PathBuf,
        src: String,
        error: ParseError,
    },
    #[error("failed to evaluate {}: {error}", .path.display())]
    Eval {
        path: PathBuf,
        src: String,
        error: EvalError,
    },
    #[error("IO operation failed: {err}")]
    StdIo {
        err: std::io::ErrorKind,
    },
}

impl Error {
    pub fn pretty_string(&self) -> String {
        let mut nocolor = Buffer::no_color();
        // a failed render still leaves whatever was written so far
        let _ = self.pretty(&mut nocolor);
        String::from_utf8_lossy(&nocolor.into_inner()).into_owned()
    }

    pub fn pretty(&self, buf: &mut Buffer) -> std::io::Result<()> {
        self.to_diagnostic().write(buf)
    }

    pub fn to_diagnostic(&self) -> Diagnostic<'_> {
        match self {
            Error::Lex { path, src, error } => {
                let (label, notes) = error.details();

                // errors found at end of input point there, not at the last character read
                let span = match error.error {
                    LexicalErrorType::MissingClosingParenthesis
                    | LexicalErrorType::EndOfInput => SrcSpan::point(src.len() as u32),
                    _ => error.location,
                };

                Diagnostic {
                    title: format!("Syntax error: {}", error.error),
                    notes: std::iter::once(error.to_string()).chain(notes).collect(),
                    location: Some(located(path, src, span, label)),
                }
            },
            Error::Parse { path, src, error } => {
                let (label, notes) = error.details();

                Diagnostic {
                    title: format!("Parse error: {}", error.error),
                    notes,
                    location: Some(located(path, src, error.location, label)),
                }
            },
            Error::Eval { path, src, error } => {
                let (title, notes) = error.details();

                Diagnostic {
                    title: title.into(),
                    notes,
                    location: error.location().map(|span| located(path, src, span, &error.to_string())),
                }
            },
            Error::StdIo { err } => Diagnostic {
                title: "Standard IO error".into(),
                notes: vec![err.to_string()],
                location: None,
            },
        }
    }
}

fn located<'a>(path: &Path, src: &'a str, span: SrcSpan, message: &str) -> Location<'a> {
    Location {
        src,
        path: path.to_path_buf(),
        span,
        message: message.to_string(),
    }
}
