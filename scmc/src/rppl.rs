use std::path::PathBuf;

use scm_core::{
	lexer::prelude::lex,
	parser::prelude::{parse, Node},
	utils::prelude::Error,
};

use crate::cli::{read_line, report};

const PROMPT: &str = "parse> ";

/// Read-parse-print loop: shows the tree of every line, one node per row.
pub fn start() -> std::io::Result<()> {
	while let Some(input) = read_line(PROMPT)? {
		match input.as_str() {
			"" => {},
			".exit" => break,
			_ => {
				let path = PathBuf::from("<stdin>");

				let tokens = match lex(&input) {
					Ok(tokens) => tokens,
					Err(error) => {
						report(&Error::Lex { path, src: input, error });
						continue;
					}
				};

				match parse(tokens) {
					Ok(root) => print_tree(&root, 0),
					Err(error) => report(&Error::Parse { path, src: input, error }),
				}
			}
		}
	}

	Ok(())
}

fn print_tree(node: &Node, depth: usize) {
	let text = node.token.as_ref().map(|token| token.as_literal()).unwrap_or_default();

	println!("{:indent$}{} {}", "", node.kind, text, indent = depth * 2);

	for child in &node.children {
		print_tree(child, depth + 1);
	}
}
