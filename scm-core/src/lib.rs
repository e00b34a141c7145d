//! Front-to-back interpreter for a small Scheme dialect.
//!
//! The pipeline is `lex` → `parse` → `Interpreter::evaluate`:
//!
//! ```
//! use scm_core::{environment::prelude::{builtins, Value}, eval::prelude::Interpreter};
//!
//! let tokens = scm_core::lexer::prelude::lex("(define (square x) (* x x)) (square 4)").unwrap();
//! let root = scm_core::parser::prelude::parse(tokens).unwrap();
//!
//! let mut interpreter = Interpreter::new(builtins(), std::io::sink());
//! assert_eq!(interpreter.evaluate(&root).unwrap(), Some(Value::int(16)));
//! ```
pub mod lexer;
pub mod parser;
pub mod environment;
pub mod eval;
pub mod utils;
