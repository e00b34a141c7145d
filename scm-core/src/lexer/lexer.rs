use super::error::{LexicalError, LexicalErrorType};
use super::token::{Position, Token, TokenKind, TokenStream};
use std::fmt::Display;
use crate::utils::prelude::SrcSpan;

pub type LexResult = std::result::Result<Option<Token>, LexicalError>;

pub fn is_identifier_start(ch: char) -> bool {
	ch.is_alphabetic() || matches!(ch, '?' | '!' | '-' | '_' | '+' | '*' | '/')
}

pub fn is_identifier_char(ch: char) -> bool {
	is_identifier_start(ch) || ch.is_ascii_digit()
}

fn is_delimiter(ch: char) -> bool {
	ch.is_whitespace() || matches!(ch, '(' | ')' | ';')
}

/// Scans the whole source, stopping at the first lexical error.
#[tracing::instrument(level = "debug", skip_all, fields(len = src.len()))]
pub fn lex(src: &str) -> Result<TokenStream, LexicalError> {
	let tokens = Lexer::new(src.char_indices().map(|(i, c)| (i as u32, c)))
		.collect::<Result<TokenStream, LexicalError>>()?;

	tracing::trace!(count = tokens.len(), "lexed");

	Ok(tokens)
}

#[derive(Debug)]
pub struct Lexer<T: Iterator<Item = (u32, char)>> {
	position: u32,
	next_position: u32,
	ch: Option<char>,
	next_ch: Option<char>,
	input: T,

	line: u32,
	column: u32,
	depth: u32,
	finished: bool,
}

impl<T: Iterator<Item = (u32, char)>> Display for Lexer<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f,
			"Lexer {{\n\tposition: {},\n\tline: {}, column: {},\n\tch: {:?}, next_ch: {:?}\n}}",
			self.position, self.line, self.column, self.ch, self.next_ch
		)
	}
}

impl<T: Iterator<Item = (u32, char)>> Lexer<T> {
	pub fn new(input: T) -> Self {
		let mut lexer = Self {
			position: 0,
			next_position: 0,
			ch: None,
			next_ch: None,
			input,

			line: 1,
			column: 0,
			depth: 0,
			finished: false,
		};

		lexer.next_char();
		lexer.next_char();

		lexer
	}

	/// Returns `Ok(None)` once the input is exhausted with balanced parentheses.
	pub fn next_token(&mut self) -> LexResult {
		loop {
			let token = match self.ch {
				Some(';') => {
					self.skip_comment();
					continue;
				},
				Some(ch) if ch.is_whitespace() => {
					self.next_char();
					continue;
				},
				Some('(') => {
					self.depth += 1;
					self.eat_one_char(TokenKind::Syntax)
				},
				Some(')') => {
					if self.depth == 0 {
						return Err(self.error_here(LexicalErrorType::FreeClosingParenthesis));
					}

					self.depth -= 1;
					self.eat_one_char(TokenKind::Syntax)
				},
				Some('\'') => {
					if self.next_ch.is_none() {
						return Err(self.error_here(LexicalErrorType::EndOfInput));
					}

					self.eat_one_char(TokenKind::Quote)
				},
				Some('"') => self.lex_string()?,
				Some(ch) if ch.is_ascii_digit() => self.lex_number()?,
				Some('-') => match self.next_ch {
					Some(next) if next.is_ascii_digit() => self.lex_number()?,
					Some(next) if is_delimiter(next) || is_identifier_char(next) => self.lex_ident(),
					None => self.lex_ident(),
					Some(_) => return Err(self.error_here(LexicalErrorType::NaN)),
				},
				Some(ch) if is_identifier_start(ch) => self.lex_ident(),
				Some(_) => return Err(self.error_here(LexicalErrorType::InvalidSymbol)),
				None => return self.finish(),
			};

			return Ok(Some(token));
		}
	}

	fn finish(&mut self) -> LexResult {
		if self.depth > 0 {
			return Err(self.error_here(LexicalErrorType::MissingClosingParenthesis));
		}

		Ok(None)
	}

	fn next_char(&mut self) -> Option<char> {
		let ch = self.ch;

		match ch {
			Some('\n') => {
				self.line += 1;
				self.column = 0;
			},
			Some(_) => self.column += 1,
			None => {}
		}

		let next = self.input.next();

		self.position = self.next_position;
		self.next_position = match next {
			Some((pos, _)) => pos,
			None => self.position + self.next_ch.map_or(0, |c| c.len_utf8() as u32),
		};

		self.ch = self.next_ch;
		self.next_ch = next.map(|(_, c)| c);

		ch
	}

	fn here(&self) -> Position {
		Position { line: self.line, column: self.column }
	}

	fn error_here(&self, error: LexicalErrorType) -> LexicalError {
		LexicalError {
			error,
			location: SrcSpan::from(self.position, self.next_position.max(self.position)),
			position: self.here(),
		}
	}

	fn eat_one_char(&mut self, kind: TokenKind) -> Token {
		let position = self.here();
		let start_pos = self.position;
		let text = self.next_char().map(String::from).unwrap_or_default();
		let end_pos = self.position;

		Token { text, kind, position, location: SrcSpan::from(start_pos, end_pos) }
	}

	fn skip_comment(&mut self) {
		// the terminating newline belongs to the comment
		while let Some(ch) = self.next_char() {
			if ch == '\n' {
				break;
			}
		}
	}

	fn lex_ident(&mut self) -> Token {
		let position = self.here();
		let start_pos = self.position;
		let mut ident = String::new();

		while let Some(ch) = self.ch {
			if !is_identifier_char(ch) {
				break;
			}

			ident.push(ch);
			self.next_char();
		}

		let end_pos = self.position;

		Token {
			text: ident,
			kind: TokenKind::Identifier,
			position,
			location: SrcSpan::from(start_pos, end_pos),
		}
	}

	fn lex_number(&mut self) -> Result<Token, LexicalError> {
		let position = self.here();
		let start_pos = self.position;
		let mut value = String::new();
		let mut has_period = false;

		if let Some('-') = self.ch {
			value.push('-');
			self.next_char();
		}

		loop {
			match self.ch {
				Some(ch) if ch.is_ascii_digit() => {
					value.push(ch);
					self.next_char();
				},
				Some('.') => {
					if has_period {
						return Err(self.error_here(LexicalErrorType::UnexpectedDotSymbol));
					}

					has_period = true;
					value.push('.');
					self.next_char();
				},
				Some(ch) if ch.is_whitespace() || ch == ')' || ch == ';' => break,
				None => break,
				Some(_) => {
					let mut error = self.error_here(LexicalErrorType::InvalidNumericLiteral);
					error.location = SrcSpan::from(start_pos, error.location.end);

					return Err(error);
				}
			}
		}

		let end_pos = self.position;
		let kind = if has_period { TokenKind::Float } else { TokenKind::Integer };

		Ok(Token { text: value, kind, position, location: SrcSpan::from(start_pos, end_pos) })
	}

	fn lex_string(&mut self) -> Result<Token, LexicalError> {
		let position = self.here();
		let start_pos = self.position;
		let mut value = String::new();

		self.next_char(); // skip opening quote

		loop {
			match self.ch {
				Some('"') => break,
				Some('\n') => return Err(self.error_here(LexicalErrorType::UnexpectedLineBreak)),
				Some(ch) => {
					value.push(ch);
					self.next_char();
				},
				None => {
					return Err(LexicalError {
						error: LexicalErrorType::MissingMatchingDoubleQuotes,
						location: SrcSpan::from(start_pos, self.position),
						position,
					});
				}
			}
		}

		self.next_char(); // skip closing quote

		let end_pos = self.position;

		Ok(Token {
			text: value,
			kind: TokenKind::String,
			position,
			location: SrcSpan::from(start_pos, end_pos),
		})
	}
}

impl<T: Iterator<Item = (u32, char)>> Iterator for Lexer<T> {
	type Item = Result<Token, LexicalError>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.finished {
			return None;
		}

		match self.next_token() {
			Ok(Some(token)) => Some(Ok(token)),
			Ok(None) => {
				self.finished = true;
				None
			},
			Err(err) => {
				self.finished = true;
				Some(Err(err))
			}
		}
	}
}
