use num_bigint::BigInt;

use crate::literal;

use super::{
	buffer::CharRead,
	error::Error,
	position::IndexSpan,
	token::{Number, TokenKind},
	PythonVersion,
	Token,
	Tokenizer,
};


impl<S: CharRead> Tokenizer<'_, S> {
	/// Scan a numeric literal starting from its first digit, already
	/// consumed.
	pub(super) fn read_number(&mut self, start: char) -> Token {
		let mut radix = 10;

		if start == '0' {
			if self.buffer.next_char_if('x') || self.buffer.next_char_if('X') {
				return self.read_hex_number();
			}

			if self.version >= PythonVersion::V26 {
				if self.buffer.next_char_if('b') || self.buffer.next_char_if('B') {
					return self.read_binary_number();
				}

				if self.buffer.next_char_if('o') || self.buffer.next_char_if('O') {
					return self.read_octal_number();
				}
			}

			// Legacy octal. Stray digits fail the parse below.
			radix = 8;
		}

		loop {
			match self.buffer.next_char() {
				Some('.') => return self.read_fraction(),

				Some('e') | Some('E') => return self.read_exponent(false),

				Some('j') | Some('J') => {
					self.buffer.mark_token_end();

					let text = self.buffer.token_text();
					let number = self.parse_imaginary_checked(&text);
					return self.make_token(TokenKind::Number(number));
				}

				Some('l') | Some('L') => {
					self.buffer.mark_token_end();

					let text = self.buffer.token_text();
					let number = self.parse_big_integer_checked(&text, radix);
					return self.make_token(TokenKind::Number(number));
				}

				Some('_') if self.version >= PythonVersion::V36 => (),

				Some('0' ..= '9') => (),

				_ => {
					self.buffer.seek_relative(-1);
					self.buffer.mark_token_end();

					let text = self.buffer.token_text();
					let number = self.parse_integer_checked(&text, radix);

					// 0-prefixed literals other than zero died in 3.0.
					let legacy_octal = radix == 8 && self.version.is_3x();
					if legacy_octal && !matches!(number, Number::Int(0)) {
						self.errors.report(Error::invalid_token(self.buffer.token_span()));
					}

					return self.make_token(TokenKind::Number(number));
				}
			}
		}
	}


	fn read_binary_number(&mut self) -> Token {
		loop {
			match self.buffer.next_char() {
				Some('0') | Some('1') => (),

				Some('l') | Some('L') => {
					self.buffer.mark_token_end();

					let text = self.buffer.token_sub_text(2);
					let number = self.parse_big_integer_checked(&text, 2);
					return self.make_token(TokenKind::Number(number));
				}

				Some('_') if self.version >= PythonVersion::V36 => (),

				_ => {
					self.buffer.seek_relative(-1);
					self.buffer.mark_token_end();

					let text = self.buffer.token_sub_text(2);

					// A bare prefix is scanned as zero, leaving the next
					// character to start its own token.
					let number = if text.is_empty() {
						Number::Int(0)
					} else {
						self.parse_integer_checked(&text, 2)
					};

					return self.make_token(TokenKind::Number(number));
				}
			}
		}
	}


	fn read_octal_number(&mut self) -> Token {
		loop {
			match self.buffer.next_char() {
				Some('0' ..= '7') => (),

				Some('l') | Some('L') => {
					self.buffer.mark_token_end();

					let text = self.buffer.token_sub_text(2);
					let number = self.parse_big_integer_checked(&text, 8);
					return self.make_token(TokenKind::Number(number));
				}

				Some('_') if self.version >= PythonVersion::V36 => (),

				_ => {
					self.buffer.seek_relative(-1);
					self.buffer.mark_token_end();

					let text = self.buffer.token_sub_text(2);
					let number = self.parse_integer_checked(&text, 8);
					return self.make_token(TokenKind::Number(number));
				}
			}
		}
	}


	fn read_hex_number(&mut self) -> Token {
		loop {
			match self.buffer.next_char() {
				Some('0' ..= '9') | Some('a' ..= 'f') | Some('A' ..= 'F') => (),

				Some('l') | Some('L') => {
					self.buffer.mark_token_end();

					let text = self.buffer.token_sub_text(2);
					let number = self.parse_big_integer_checked(&text, 16);
					return self.make_token(TokenKind::Number(number));
				}

				Some('_') if self.version >= PythonVersion::V36 => (),

				_ => {
					self.buffer.seek_relative(-1);
					self.buffer.mark_token_end();

					let text = self.buffer.token_sub_text(2);
					let number = self.parse_integer_checked(&text, 16);
					return self.make_token(TokenKind::Number(number));
				}
			}
		}
	}


	/// Scan past the decimal point, already consumed.
	pub(super) fn read_fraction(&mut self) -> Token {
		loop {
			match self.buffer.next_char() {
				Some('0' ..= '9') => (),

				Some('e') | Some('E') => return self.read_exponent(true),

				Some('j') | Some('J') => {
					self.buffer.mark_token_end();

					let text = self.buffer.token_text();
					let number = self.parse_imaginary_checked(&text);
					return self.make_token(TokenKind::Number(number));
				}

				Some('_') if self.version >= PythonVersion::V36 => (),

				_ => {
					self.buffer.seek_relative(-1);
					self.buffer.mark_token_end();

					let text = self.buffer.token_text();
					let number = self.parse_float_checked(&text);
					return self.make_token(TokenKind::Number(number));
				}
			}
		}
	}


	/// Scan past an `e`, already consumed. With no digits after it the
	/// `e` is given back and the mantissa stands alone.
	fn read_exponent(&mut self, left_is_float: bool) -> Token {
		let mut ch = self.buffer.next_char();

		if let Some('-') | Some('+') = ch {
			ch = self.buffer.next_char();
		}

		let mut iterations = 0;

		loop {
			match ch {
				Some('0' ..= '9') => ch = self.buffer.next_char(),

				Some('j') | Some('J') => {
					self.buffer.mark_token_end();

					let text = self.buffer.token_text();
					let number = self.parse_imaginary_checked(&text);
					return self.make_token(TokenKind::Number(number));
				}

				Some('_') if self.version >= PythonVersion::V36 => {
					ch = self.buffer.next_char();
				}

				_ => {
					if iterations == 0 {
						self.buffer.seek_relative(-2);
						self.buffer.mark_token_end();

						let text = self.buffer.token_text();
						let number = if left_is_float {
							self.parse_float_checked(&text)
						} else {
							self.parse_integer_checked(&text, 10)
						};
						return self.make_token(TokenKind::Number(number));
					}

					self.buffer.seek_relative(-1);
					self.buffer.mark_token_end();

					let text = self.buffer.token_text();
					let number = self.parse_float_checked(&text);
					return self.make_token(TokenKind::Number(number));
				}
			}

			iterations += 1;
		}
	}


	fn parse_integer_checked(&mut self, text: &str, radix: u32) -> Number {
		let reported = self.report_invalid_numeric(text, false, radix != 10);

		match literal::parse_integer(text, radix) {
			Ok(number) => number,

			Err(error) => {
				if !reported {
					self.errors.report(Error::literal(error, self.buffer.token_span()));
				}
				Number::Int(0)
			}
		}
	}


	fn parse_big_integer_checked(&mut self, text: &str, radix: u32) -> Number {
		let reported = self.report_invalid_numeric(text, false, radix != 10);

		match literal::parse_big_integer(text, radix) {
			Ok(number) => number,

			Err(error) => {
				if !reported {
					self.errors.report(Error::literal(error, self.buffer.token_span()));
				}
				Number::Big(BigInt::default())
			}
		}
	}


	fn parse_float_checked(&mut self, text: &str) -> Number {
		let reported = self.report_invalid_numeric(text, true, false);

		match literal::parse_float(text) {
			Ok(number) => number,

			Err(error) => {
				if !reported {
					self.errors.report(Error::literal(error, self.buffer.token_span()));
				}
				Number::Float(0.0)
			}
		}
	}


	fn parse_imaginary_checked(&mut self, text: &str) -> Number {
		let reported = self.report_invalid_numeric(text, true, false);

		match literal::parse_imaginary(text) {
			Ok(number) => number,

			Err(error) => {
				if !reported {
					self.errors.report(Error::literal(error, self.buffer.token_span()));
				}
				Number::Imaginary(0.0)
			}
		}
	}


	/// Validate digit group underscores and the long suffix, reporting
	/// over the token span. Returns whether anything was reported.
	fn report_invalid_numeric(
		&mut self,
		text: &str,
		e_is_for_exponent: bool,
		allow_leading_underscore: bool,
	) -> bool {
		if self.version >= PythonVersion::V36 && text.contains('_') {
			let misplaced = text.contains("__")
				|| (!allow_leading_underscore && text.starts_with('_'))
				|| text.ends_with('_')
				|| text.contains("._")
				|| text.contains("_.");

			if misplaced {
				self.errors.report(Error::invalid_token(self.buffer.token_span()));
				return true;
			}

			if e_is_for_exponent {
				let lower = text.to_ascii_lowercase();
				if lower.contains("e_") || lower.contains("_e") {
					self.errors.report(Error::invalid_token(self.buffer.token_span()));
					return true;
				}
			}
		}

		if self.version.is_3x() && (text.ends_with('l') || text.ends_with('L')) {
			let end = self.buffer.token_end_index();
			self.errors.report(Error::invalid_token(IndexSpan::new(end - 1, end)));
			return true;
		}

		false
	}
}
