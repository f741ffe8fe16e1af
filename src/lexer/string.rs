use super::{
	buffer::CharRead,
	error::Error,
	position::{IndexSpan, NewLineKind, NewLineRecord},
	state::IncompleteString,
	token::{StringLiteral, TokenKind},
	PythonVersion,
	Token,
	Tokenizer,
};


impl<S: CharRead> Tokenizer<'_, S> {
	/// Scan a string literal. The opening quote has been consumed; the
	/// prefix characters, if any, sit at the start of the current token.
	pub(super) fn read_string(
		&mut self,
		quote: char,
		is_raw: bool,
		is_unicode: bool,
		is_bytes: bool,
		is_formatted: bool,
	) -> Token {
		let mut start_add = 1;
		let mut is_triple = false;

		if self.buffer.next_char_if(quote) {
			if self.buffer.next_char_if(quote) {
				is_triple = true;
				start_add = 3;
			} else {
				// Leave the second quote to close an empty string.
				self.buffer.seek_relative(-1);
			}
		}

		if is_raw {
			start_add += 1;
		}
		if is_unicode {
			start_add += 1;
		}
		if is_bytes {
			start_add += 1;
		}
		if is_formatted {
			start_add += 1;
		}

		self.continue_string(quote, is_raw, is_unicode, is_bytes, is_triple, is_formatted, start_add)
	}


	/// Scan string contents up to the closing quote. Also the resume
	/// entry point, with `start_add` zero because the new chunk begins
	/// inside the contents.
	pub(super) fn continue_string(
		&mut self,
		quote: char,
		is_raw: bool,
		is_unicode: bool,
		is_bytes: bool,
		is_triple: bool,
		is_formatted: bool,
		start_add: usize,
	) -> Token {
		let mut end_add = 0;

		loop {
			match self.buffer.next_char() {
				None => {
					self.buffer.seek_relative(-1);
					self.buffer.mark_token_end();

					if is_triple {
						// Zero width span at the end of the input.
						let end = self.buffer.token_end_index();
						self.errors.report(Error::unterminated_string(
							true,
							true,
							IndexSpan::new(end, end),
						));
					}

					return self.incomplete_string_token(
						quote, is_raw, is_unicode, is_triple, is_formatted, is_triple,
					);
				}

				Some(ch) if ch == quote => {
					if is_triple {
						if self.buffer.next_char_if(quote) && self.buffer.next_char_if(quote) {
							end_add += 3;
							break;
						}
						// A lone or doubled quote is part of the contents.
					} else {
						end_add += 1;
						break;
					}
				}

				Some('\\') => match self.buffer.next_char() {
					None => {
						self.buffer.seek_relative(-1);
						self.buffer.mark_token_end();

						return self.incomplete_string_token(
							quote, is_raw, is_unicode, is_triple, is_formatted, is_triple,
						);
					}

					escaped => {
						let nl_kind = self.read_eoln_opt(escaped);

						if nl_kind != NewLineKind::None {
							self.lines.push(NewLineRecord {
								end_index: self.buffer.current_index(),
								kind: nl_kind,
							});

							if self.buffer.peek().is_none() {
								self.buffer.mark_token_end();

								return self.incomplete_string_token(
									quote, is_raw, is_unicode, is_triple, is_formatted, true,
								);
							}
						} else if let Some(escaped) = escaped {
							// Escaped quotes and backslashes stay consumed;
							// anything else is rescanned by the loop.
							if escaped != quote && escaped != '\\' {
								self.buffer.seek_relative(-1);
							}
						}
					}
				},

				ch => {
					let nl_kind = self.read_eoln_opt(ch);
					if nl_kind != NewLineKind::None {
						self.lines.push(NewLineRecord {
							end_index: self.buffer.current_index(),
							kind: nl_kind,
						});

						if !is_triple {
							// The line break ends the literal and stays
							// part of the token.
							self.buffer.mark_token_end();
							self.errors.report(Error::unterminated_string(
								false,
								false,
								self.buffer.token_span(),
							));

							let message = if quote == '"' {
								"NEWLINE in double-quoted string"
							} else {
								"NEWLINE in single-quoted string"
							};
							let contents = self.buffer.token_text();

							return self.make_token(TokenKind::IncompleteString {
								message: message.into(),
								contents: contents.into(),
							});
						}
					}
				}
			}
		}

		self.buffer.mark_token_end();
		self.make_string_token(
			quote, is_raw, is_unicode, is_bytes, is_triple, is_formatted, start_add, end_add,
		)
	}


	/// The input ended mid-string. Report, save the resumable state and
	/// produce the partial token.
	fn incomplete_string_token(
		&mut self,
		quote: char,
		is_raw: bool,
		is_unicode: bool,
		is_triple: bool,
		is_formatted: bool,
		incomplete: bool,
	) -> Token {
		self.errors.report(Error::unterminated_string(
			is_triple,
			incomplete,
			self.buffer.token_span(),
		));

		self.state.incomplete_string = Some(IncompleteString {
			single_quote: quote == '\'',
			raw: is_raw,
			unicode: is_unicode,
			triple: is_triple,
			formatted: is_formatted,
		});

		let contents = self.buffer.token_text();
		self.make_token(TokenKind::IncompleteString {
			message: "<eof> while reading string".into(),
			contents: contents.into(),
		})
	}


	fn make_string_token(
		&mut self,
		quote: char,
		is_raw: bool,
		is_unicode: bool,
		is_bytes: bool,
		is_triple: bool,
		is_formatted: bool,
		start_add: usize,
		end_add: usize,
	) -> Token {
		let chars = self.buffer.token_chars();
		let contents: String = chars[start_add .. chars.len() - end_add].iter().collect();

		// Plain literals are text unless a 2.x module without the
		// unicode_literals future makes them byte strings.
		let unicode = is_unicode
			|| (
				!is_bytes
					&& (
						self.version.is_3x()
							|| self.options.unicode_literals
							|| self.options.stub_file
					)
			);

		self.make_token(TokenKind::Str(StringLiteral {
			contents: contents.into(),
			quote,
			raw: is_raw,
			unicode,
			bytes: is_bytes,
			formatted: is_formatted,
			triple: is_triple,
		}))
	}


	/// A `u` or `U` has been consumed: either a unicode string prefix
	/// or the start of a name.
	pub(super) fn read_name_or_unicode_string(&mut self) -> Token {
		let is_raw = self.buffer.next_char_if('r') || self.buffer.next_char_if('R');

		if let Some(quote @ '"') | Some(quote @ '\'') = self.buffer.peek() {
			self.buffer.next_char();
			return self.read_string(quote, is_raw, true, false, false);
		}

		if is_raw {
			self.buffer.seek_relative(-1);
		}

		self.read_name()
	}


	/// A `b` or `B` has been consumed.
	pub(super) fn read_name_or_bytes(&mut self) -> Token {
		let is_raw = self.buffer.next_char_if('r') || self.buffer.next_char_if('R');

		if let Some(quote @ '"') | Some(quote @ '\'') = self.buffer.peek() {
			self.buffer.next_char();
			return self.read_string(quote, is_raw, false, true, false);
		}

		if is_raw {
			self.buffer.seek_relative(-1);
		}

		self.read_name()
	}


	/// An `r` or `R` has been consumed.
	pub(super) fn read_name_or_raw_string(&mut self) -> Token {
		let mut is_bytes = false;
		let mut is_formatted = false;

		if self.version >= PythonVersion::V33 {
			is_bytes = self.buffer.next_char_if('b') || self.buffer.next_char_if('B');
		}
		if self.version >= PythonVersion::V36 && !is_bytes {
			is_formatted = self.buffer.next_char_if('f') || self.buffer.next_char_if('F');
		}

		if let Some(quote @ '"') | Some(quote @ '\'') = self.buffer.peek() {
			self.buffer.next_char();
			return self.read_string(quote, true, false, is_bytes, is_formatted);
		}

		if is_bytes || is_formatted {
			self.buffer.seek_relative(-1);
		}

		self.read_name()
	}


	/// An `f` or `F` has been consumed.
	pub(super) fn read_name_or_formatted_string(&mut self) -> Token {
		let is_raw = self.buffer.next_char_if('r') || self.buffer.next_char_if('R');

		if let Some(quote @ '"') | Some(quote @ '\'') = self.buffer.peek() {
			self.buffer.next_char();
			return self.read_string(quote, is_raw, false, false, true);
		}

		if is_raw {
			self.buffer.seek_relative(-1);
		}

		self.read_name()
	}
}
