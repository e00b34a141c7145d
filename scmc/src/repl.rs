use std::path::PathBuf;

use scm_core::{
	environment::prelude::builtins,
	eval::prelude::Interpreter,
	lexer::prelude::{lex, LexicalErrorType},
	parser::prelude::parse,
	utils::prelude::Error,
};

use crate::cli::{read_line, report};

const PROMPT: &str = "scm> ";
const CONTINUATION: &str = "...> ";

/// Read-eval-print loop. Global definitions survive from one entry to the next
/// and a form left open at the end of a line continues on the following one.
pub fn start() -> std::io::Result<()> {
	let mut interpreter = Interpreter::new(builtins(), std::io::stdout());
	let mut pending = String::new();

	loop {
		let prompt = if pending.is_empty() { PROMPT } else { CONTINUATION };

		let Some(line) = read_line(prompt)? else {
			break;
		};

		if pending.is_empty() {
			match line.trim() {
				"" => continue,
				".exit" => break,
				_ => {}
			}
		}

		pending.push_str(&line);
		pending.push('\n');

		let path = PathBuf::from("<stdin>");

		let tokens = match lex(&pending) {
			Ok(tokens) => tokens,
			Err(error) if error.error == LexicalErrorType::MissingClosingParenthesis => continue,
			Err(error) => {
				report(&Error::Lex { path, src: std::mem::take(&mut pending), error });
				continue;
			}
		};

		let src = std::mem::take(&mut pending);

		let root = match parse(tokens) {
			Ok(root) => root,
			Err(error) => {
				report(&Error::Parse { path, src, error });
				continue;
			}
		};

		match interpreter.evaluate(&root) {
			Ok(Some(value)) => println!("{value}"),
			Ok(None) => {},
			Err(error) => report(&Error::Eval { path, src, error }),
		}
	}

	Ok(())
}
