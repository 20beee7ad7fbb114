use super::error::{LexicalError, LexicalErrorType};
use super::token::Token;
use crate::utils::prelude::SrcSpan;

/// `(start, token, end)`, byte offsets into the source, end exclusive.
pub type Spanned = (u32, Token, u32);

#[derive(Debug, Clone)]
pub struct Lexer<'a> {
	src: &'a [u8],
	position: usize,

	line_start: bool,
	operand_allowed: bool,
	finished: bool,

	error: Option<LexicalError>,
}

impl<'a> Lexer<'a> {
	pub fn new(src: &'a [u8]) -> Self {
		Self {
			src,
			position: 0,

			line_start: true,
			operand_allowed: true,
			finished: false,

			error: None,
		}
	}

	/// First lexical error met so far. Later ones are never recorded.
	pub fn error(&self) -> Option<&LexicalError> {
		self.error.as_ref()
	}

	pub fn next_token(&mut self) -> Spanned {
		self.skip_trivia();

		let start = self.position;

		let spanned = match self.peek(0) {
			None => (src_offset(start), Token::End, src_offset(start)),
			Some(ch) => match ch {
				b'0'..=b'9' | b'.' => self.lex_number(),
				b'+' | b'-' if self.operand_allowed && self.starts_number(1) => self.lex_number(),
				b'+' => self.eat_chars(1, Token::Plus),
				b'-' => self.eat_chars(1, Token::Minus),
				b'*' if self.peek(1) == Some(b'*') => self.eat_chars(2, Token::Pow),
				b'*' => self.eat_chars(1, Token::Star),
				b'/' => self.eat_chars(1, Token::Slash),
				b'(' => self.eat_chars(1, Token::LParen),
				b')' => self.eat_chars(1, Token::RParen),
				_ => {
					let end = (start + utf8_width(ch)).min(self.src.len());
					let ch = std::str::from_utf8(&self.src[start..end])
						.ok()
						.and_then(|text| text.chars().next())
						.unwrap_or(char::REPLACEMENT_CHARACTER);

					self.invalid(LexicalErrorType::UnrecognizedCharacter { ch }, start, end)
				}
			}
		};

		self.operand_allowed = !spanned.1.can_end_operand();
		log::trace!("token {:?} at {}..{}", spanned.1, spanned.0, spanned.2);

		spanned
	}

	fn peek(&self, offset: usize) -> Option<u8> {
		self.src.get(self.position + offset).copied()
	}

	fn starts_number(&self, offset: usize) -> bool {
		matches!(self.peek(offset), Some(b'0'..=b'9' | b'.'))
	}

	fn skip_trivia(&mut self) {
		while let Some(ch) = self.peek(0) {
			match ch {
				b'\n' => {
					self.position += 1;
					self.line_start = true;
				},
				b' ' | b'\t' | b'\r' => self.position += 1,
				b'#' if self.line_start => self.skip_comment(),
				_ => break
			}
		}

		self.line_start = false;
	}

	// Comments only run to the end of their own line, newline included.
	fn skip_comment(&mut self) {
		while let Some(ch) = self.peek(0) {
			self.position += 1;

			if ch == b'\n' {
				break;
			}
		}

		self.line_start = true;
	}

	fn eat_chars(&mut self, count: usize, token: Token) -> Spanned {
		let start_pos = self.position;
		self.position += count;

		(src_offset(start_pos), token, src_offset(self.position))
	}

	fn skip_digits(&self, mut at: usize) -> usize {
		while let Some(b'0'..=b'9') = self.src.get(at) {
			at += 1;
		}

		at
	}

	fn lex_number(&mut self) -> Spanned {
		let start_pos = self.position;
		let mut end_pos = start_pos;

		if let Some(b'+' | b'-') = self.src.get(end_pos) {
			end_pos += 1;
		}

		end_pos = self.skip_digits(end_pos);

		if let Some(b'.') = self.src.get(end_pos) {
			end_pos = self.skip_digits(end_pos + 1);
		}

		if let Some(b'e' | b'E') = self.src.get(end_pos) {
			let mut exponent = end_pos + 1;

			if let Some(b'+' | b'-') = self.src.get(exponent) {
				exponent += 1;
			}

			// `1e` and `1e+` stop before the `e`
			if let Some(b'0'..=b'9') = self.src.get(exponent) {
				end_pos = self.skip_digits(exponent);
			}
		}

		let value = std::str::from_utf8(&self.src[start_pos..end_pos])
			.ok()
			.and_then(|text| text.parse::<f64>().ok());

		match value {
			Some(value) => {
				self.position = end_pos;

				(src_offset(start_pos), Token::Number(value), src_offset(end_pos))
			},
			None => self.invalid(LexicalErrorType::MalformedNumber, start_pos, end_pos)
		}
	}

	// The cursor stays on the offending character: nothing past it is ever scanned.
	fn invalid(&mut self, error: LexicalErrorType, start: usize, end: usize) -> Spanned {
		let end = end.max(start + 1);

		if self.error.is_none() {
			let location = SrcSpan::from(src_offset(start), src_offset(end));
			log::debug!("lexical error {:?} at {}", error, location.position());

			self.error = Some(LexicalError { error, location });
		}

		(src_offset(start), Token::Invalid, src_offset(end))
	}
}

/// Offsets past `u32::MAX` saturate instead of wrapping.
pub(crate) fn src_offset(position: usize) -> u32 {
	u32::try_from(position).unwrap_or(u32::MAX)
}

impl<'a> From<&'a str> for Lexer<'a> {
	fn from(src: &'a str) -> Self {
		Self::new(src.as_bytes())
	}
}

impl Iterator for Lexer<'_> {
	type Item = Spanned;

	fn next(&mut self) -> Option<Self::Item> {
		if self.finished {
			return None;
		}

		let spanned = self.next_token();

		if matches!(spanned.1, Token::End | Token::Invalid) {
			self.finished = true;
		}

		Some(spanned)
	}
}

fn utf8_width(lead: u8) -> usize {
	match lead {
		0xF0..=0xF7 => 4,
		0xE0..=0xEF => 3,
		0xC0..=0xDF => 2,
		_ => 1
	}
}
