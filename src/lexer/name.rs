use super::{
	buffer::CharRead,
	token::{Keyword, TokenKind},
	PythonVersion,
	Token,
	Tokenizer,
};


pub(super) fn is_name_start(ch: char) -> bool {
	ch == '_' || unicode_ident::is_xid_start(ch)
}


pub(super) fn is_name_part(ch: char) -> bool {
	unicode_ident::is_xid_continue(ch)
}


enum KeywordClass {
	/// Keyword that may occur anywhere an expression can.
	Plain(Keyword),
	/// Keyword that can only begin a statement, making it a witness
	/// for grouping recovery.
	Statement(Keyword),
}


impl<S: CharRead> Tokenizer<'_, S> {
	/// Scan a name or keyword from the start of the current token,
	/// regardless of how many characters the caller consumed while
	/// ruling out a string prefix.
	pub(super) fn read_name(&mut self) -> Token {
		self.buffer.rewind_to_token_start();

		let mut scratch = std::mem::take(&mut self.name_scratch);
		scratch.clear();

		loop {
			match self.buffer.next_char() {
				Some(ch) if is_name_part(ch) => scratch.push(ch),
				_ => break,
			}
		}
		self.buffer.seek_relative(-1);

		let token = match self.classify_keyword(&scratch) {
			Some(KeywordClass::Plain(keyword)) => {
				self.buffer.mark_token_end();
				self.make_token(TokenKind::Keyword(keyword))
			}

			Some(KeywordClass::Statement(keyword)) => {
				self.transform_statement_token(TokenKind::Keyword(keyword))
			}

			None => {
				self.buffer.mark_token_end();
				let symbol = self.interner.get_or_intern(&scratch);
				self.make_token(TokenKind::Name(symbol))
			}
		};

		self.name_scratch = scratch;
		token
	}


	fn classify_keyword(&self, name: &str) -> Option<KeywordClass> {
		use KeywordClass::{Plain, Statement};

		let version = self.version;

		Some(
			match name {
				"and" => Plain(Keyword::And),
				"as" if version >= PythonVersion::V26 || self.options.with_statement =>
					Plain(Keyword::As),
				"assert" => Statement(Keyword::Assert),
				"async" if version >= PythonVersion::V35 => Plain(Keyword::Async),
				"await" if version >= PythonVersion::V35 => Plain(Keyword::Await),
				"break" => Statement(Keyword::Break),
				"class" => Statement(Keyword::Class),
				"continue" => Statement(Keyword::Continue),
				"def" => Statement(Keyword::Def),
				"del" => Statement(Keyword::Del),
				"elif" => Statement(Keyword::Elif),
				"else" => Plain(Keyword::Else),
				"except" => Statement(Keyword::Except),
				"exec" if version.is_2x() => Statement(Keyword::Exec),
				"False" if version.is_3x() || self.options.stub_file => Plain(Keyword::False),
				"finally" => Statement(Keyword::Finally),
				"for" => Plain(Keyword::For),
				"from" => Plain(Keyword::From),
				"global" => Statement(Keyword::Global),
				"if" => Plain(Keyword::If),
				"import" => Plain(Keyword::Import),
				"in" => Plain(Keyword::In),
				"is" => Plain(Keyword::Is),
				"lambda" => Plain(Keyword::Lambda),
				"None" => Plain(Keyword::None),
				"nonlocal" if version.is_3x() => Statement(Keyword::Nonlocal),
				"not" => Plain(Keyword::Not),
				"or" => Plain(Keyword::Or),
				"pass" => Statement(Keyword::Pass),
				"print" if !self.options.print_function
					&& !version.is_3x()
					&& !self.options.stub_file => Statement(Keyword::Print),
				"raise" => Statement(Keyword::Raise),
				"return" => Statement(Keyword::Return),
				"True" if version.is_3x() || self.options.stub_file => Plain(Keyword::True),
				"try" => Statement(Keyword::Try),
				"while" => Statement(Keyword::While),
				"with" if version >= PythonVersion::V26 || self.options.with_statement =>
					Statement(Keyword::With),
				"yield" => Plain(Keyword::Yield),
				_ => return None,
			}
		)
	}
}
