use std::path::PathBuf;

use scm_core::{lexer::prelude::lex, utils::prelude::Error};

use crate::cli::{read_line, report};

const PROMPT: &str = "lex> ";

/// Read-lex-print loop: shows the token stream of every line.
pub fn start() -> std::io::Result<()> {
	while let Some(input) = read_line(PROMPT)? {
		match input.as_str() {
			"" => {},
			".exit" => break,
			_ => match lex(&input) {
				Ok(tokens) => {
					for token in tokens {
						println!("{: <10} {: <8} {}", token.kind.to_string(), token.position.to_string(), token.as_literal());
					}
				},
				Err(error) => report(&Error::Lex {
					path: PathBuf::from("<stdin>"),
					src: input,
					error,
				}),
			},
		}
	}

	Ok(())
}
