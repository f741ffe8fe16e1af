pub mod buffer;
pub mod error;
mod indent;
mod name;
mod number;
mod operator;
pub mod position;
pub mod state;
mod string;
pub mod token;

use std::io;

use crate::{symbol, version::PythonVersion};

use buffer::{Buffer, CharRead};
use error::{Error, ErrorSink, Severity};
use name::is_name_start;
use operator::OperatorScan;
use position::{LineMap, NewLineKind, NewLineRecord, SourceLocation};
use state::State;

pub use error::NullSink;
pub use position::IndexSpan;
pub use token::{NewLine, Token, TokenKind, Verbatim};


/// Scanning options. All default to off except the whitespace
/// inconsistency severity, which defaults to a warning.
#[derive(Debug, Copy, Clone)]
pub struct Options {
	/// Preserve leading trivia and exact images on every token, enough
	/// to reproduce the input.
	pub verbatim: bool,
	/// Produce comment and explicit-line-join tokens instead of
	/// discarding them as trivia.
	pub comment_tokens: bool,
	/// Rewind to the last newline inside an unclosed grouping when a
	/// statement keyword proves the grouping was never closed.
	pub grouping_recovery: bool,
	/// Typeshed stub source: ellipsis and 3.x names regardless of
	/// version.
	pub stub_file: bool,
	/// Scanning the expression hole of a formatted string literal.
	pub fstring_expression: bool,
	/// Interactive input: dedents at EOF go through the indent check
	/// instead of draining silently.
	pub interactive: bool,
	/// `from __future__ import print_function` is in effect.
	pub print_function: bool,
	/// `from __future__ import with_statement` is in effect.
	pub with_statement: bool,
	/// `from __future__ import unicode_literals` is in effect.
	pub unicode_literals: bool,
	pub indentation_severity: Severity,
}


impl Default for Options {
	fn default() -> Self {
		Self {
			verbatim: false,
			comment_tokens: false,
			grouping_recovery: false,
			stub_file: false,
			fstring_expression: false,
			interactive: false,
			print_function: false,
			with_statement: false,
			unicode_literals: false,
			indentation_severity: Severity::Warning,
		}
	}
}


/// Streaming tokenizer for Python source.
///
/// Characters are pulled on demand from the source, tokens are produced
/// one `read_token` call at a time, and diagnostics go to the error
/// sink while scanning always continues. The logical position survives
/// chunk boundaries: `current_state` yields a value that `resume` will
/// accept to continue scanning in a new tokenizer over the next chunk.
pub struct Tokenizer<'a, S> {
	buffer: Buffer<S>,
	state: State,
	version: PythonVersion,
	options: Options,
	interner: &'a mut symbol::Interner,
	errors: &'a mut dyn ErrorSink,
	lines: LineMap,
	comments: Vec<SourceLocation>,
	name_scratch: String,
	/// The input ended right after a line continuation.
	end_continues: bool,
	done: bool,
}


impl<'a, S: CharRead> Tokenizer<'a, S> {
	pub fn new(
		source: S,
		version: PythonVersion,
		options: Options,
		interner: &'a mut symbol::Interner,
		errors: &'a mut dyn ErrorSink,
	) -> Self {
		let state = State::new(options.fstring_expression);
		Self::resume(source, state, SourceLocation::FIRST, version, options, interner, errors)
	}


	/// Continue scanning from a saved state, with `start` naming the
	/// absolute location the new source chunk begins at. Any pending
	/// grouping rewind dies at the chunk boundary.
	pub fn resume(
		source: S,
		mut state: State,
		start: SourceLocation,
		version: PythonVersion,
		options: Options,
		interner: &'a mut symbol::Interner,
		errors: &'a mut dyn ErrorSink,
	) -> Self {
		state.grouping_recovery = None;
		state.fstring_expression = options.fstring_expression;

		Self {
			buffer: Buffer::new(source, start.index),
			state,
			version,
			options,
			interner,
			errors,
			lines: LineMap::new(start),
			comments: Vec::new(),
			name_scratch: String::new(),
			end_continues: false,
			done: false,
		}
	}


	/// Snapshot of the resumable state.
	pub fn current_state(&self) -> State {
		self.state.clone()
	}


	/// Absolute index one past the last consumed character.
	pub fn current_index(&self) -> usize {
		self.buffer.current_index()
	}


	pub fn current_position(&self) -> SourceLocation {
		self.lines.location_of(self.current_index())
	}


	/// Span of the most recent token.
	pub fn token_span(&self) -> IndexSpan {
		self.buffer.token_span()
	}


	pub fn is_end_of_file(&mut self) -> bool {
		self.buffer.peek().is_none()
	}


	/// True when the input ended in a line continuation, so more input
	/// is expected to complete the statement.
	pub fn end_continues(&self) -> bool {
		self.end_continues
	}


	pub fn index_to_location(&self, index: usize) -> SourceLocation {
		self.lines.location_of(index)
	}


	pub fn location_to_index(&self, line: u32, column: u32) -> usize {
		self.lines.index_of(line, column)
	}


	/// The line terminators seen so far, in source order.
	pub fn newline_records(&self) -> &[NewLineRecord] {
		self.lines.records()
	}


	/// Terminator record for a 0-based line, virtual for the line in
	/// progress.
	pub fn record_for_line(&self, line: usize) -> NewLineRecord {
		self.lines.record_for_line(line, self.current_index())
	}


	/// Start locations of every comment seen so far.
	pub fn comment_locations(&self) -> &[SourceLocation] {
		&self.comments
	}


	/// A source failure, if one interrupted scanning. The stream ends
	/// as if at EOF when this is set.
	pub fn take_io_error(&mut self) -> Option<io::Error> {
		self.buffer.take_error()
	}


	pub fn set_print_function(&mut self, enabled: bool) {
		self.options.print_function = enabled;
	}


	pub fn set_with_statement(&mut self, enabled: bool) {
		self.options.with_statement = enabled;
	}


	pub fn set_unicode_literals(&mut self, enabled: bool) {
		self.options.unicode_literals = enabled;
	}


	pub fn read_token(&mut self) -> Token {
		if self.options.verbatim {
			self.state.current_whitespace.clear();
			if !self.state.next_whitespace.is_empty() {
				std::mem::swap(
					&mut self.state.current_whitespace,
					&mut self.state.next_whitespace,
				);
			}
		}

		if self.state.pending_dedents != 0 {
			if self.state.pending_dedents == -1 {
				self.state.pending_dedents = 0;
				self.make_token(TokenKind::Indent)
			} else {
				self.state.pending_dedents -= 1;
				self.make_token(TokenKind::Dedent)
			}
		} else {
			self.next_token()
		}
	}


	/// Read tokens until at least `character_count` characters have
	/// been consumed, always finishing the token in progress. The
	/// end-of-file token is never included.
	pub fn read_tokens(&mut self, character_count: usize) -> Vec<Token> {
		let mut tokens = Vec::new();

		let start = self.current_index();

		while self.current_index() - start < character_count {
			let token = self.read_token();
			if let TokenKind::EndOfFile = token.kind {
				break;
			}
			tokens.push(token);
		}

		tokens
	}


	fn next_token(&mut self) -> Token {
		let at_beginning = self.buffer.at_beginning();

		if self.state.incomplete_string.is_some() && self.buffer.peek().is_some() {
			if let Some(previous) = self.state.incomplete_string.take() {
				let quote = if previous.single_quote { '\'' } else { '"' };
				return self.continue_string(
					quote,
					previous.raw,
					previous.unicode,
					false,
					previous.triple,
					previous.formatted,
					0,
				);
			}
		}

		self.buffer.discard_token();

		let mut ch = self.buffer.next_char();

		loop {
			match ch {
				None => return self.read_eof(),

				// Form feeds outside indentation are ignored.
				Some('\x0c') => {
					if self.options.verbatim {
						self.state.current_whitespace.push('\x0c');
					}
					self.buffer.discard_token();
					ch = self.buffer.next_char();
				}

				Some(space @ ' ') | Some(space @ '\t') => {
					ch = self.skip_white_space(space, at_beginning);
				}

				Some('#') => {
					let location = self.lines.location_of(self.buffer.current_index() - 1);
					self.comments.push(location);

					if self.options.comment_tokens || self.options.verbatim {
						let after = self.read_line();
						self.buffer.mark_token_end();

						if self.options.comment_tokens {
							let text = self.buffer.token_text();
							return self.make_token(TokenKind::Comment(text.into()));
						}

						// Verbatim mode folds the comment into the
						// preserved whitespace.
						let image = self.buffer.token_text();
						self.state.current_whitespace.push_str(&image);
						self.buffer.discard_token();
						self.buffer.seek_relative(1);
						ch = after;
					} else {
						ch = self.skip_single_line_comment();
					}
				}

				Some('\\') => {
					let next = self.buffer.next_char();
					let nl_kind = self.read_eoln_opt(next);

					if nl_kind != NewLineKind::None {
						self.lines.push(NewLineRecord {
							end_index: self.buffer.current_index(),
							kind: nl_kind,
						});

						if self.options.comment_tokens {
							self.buffer.mark_token_end();
							return self.make_token(TokenKind::ExplicitLineJoin);
						}

						self.buffer.discard_token();
						if self.options.verbatim {
							self.state.current_whitespace.push('\\');
							self.state.current_whitespace.push_str(nl_kind.as_str());
						}

						ch = self.buffer.next_char();
						if ch.is_none() {
							self.end_continues = true;
						}
					} else if next.is_none() {
						self.end_continues = true;
						self.buffer.mark_token_end();

						let span = self.buffer.token_span();
						let verbatim = self.make_verbatim_with_image("\\");
						return Token { kind: TokenKind::EndOfFile, span, verbatim };
					} else {
						self.buffer.seek_relative(-1);
						self.state.last_new_line = false;
						self.buffer.mark_token_end();
						return self.bad_char('\\');
					}
				}

				Some(quote @ '"') | Some(quote @ '\'') => {
					self.state.last_new_line = false;
					return self.read_string(quote, false, false, false, false);
				}

				// The u prefix came back to 3.x in 3.3.
				Some('u') | Some('U') => {
					self.state.last_new_line = false;
					return if self.version.is_2x() || self.version >= PythonVersion::V33 {
						self.read_name_or_unicode_string()
					} else {
						self.read_name()
					};
				}

				Some('r') | Some('R') => {
					self.state.last_new_line = false;
					return self.read_name_or_raw_string();
				}

				Some('b') | Some('B') => {
					self.state.last_new_line = false;
					return if self.version >= PythonVersion::V26 {
						self.read_name_or_bytes()
					} else {
						self.read_name()
					};
				}

				Some('f') | Some('F') => {
					self.state.last_new_line = false;
					return if self.version >= PythonVersion::V36 {
						self.read_name_or_formatted_string()
					} else {
						self.read_name()
					};
				}

				Some('_') => {
					self.state.last_new_line = false;
					return self.read_name();
				}

				Some('.') => {
					self.state.last_new_line = false;

					match self.buffer.peek() {
						Some('0' ..= '9') => return self.read_fraction(),

						Some('.') if self.options.stub_file || self.version.is_3x() => {
							self.buffer.next_char();
							if self.buffer.peek() == Some('.') {
								self.buffer.next_char();
								self.buffer.mark_token_end();
								return self.make_token(
									TokenKind::Operator(token::Operator::Ellipsis)
								);
							}
							self.buffer.seek_relative(-1);
						}

						_ => (),
					}

					self.buffer.mark_token_end();
					return self.make_token(TokenKind::Operator(token::Operator::Dot));
				}

				Some(digit @ '0' ..= '9') => {
					self.state.last_new_line = false;
					return self.read_number(digit);
				}

				Some(other) => {
					let nl_kind = self.read_eoln_opt(ch);
					if nl_kind != NewLineKind::None {
						self.lines.push(NewLineRecord {
							end_index: self.buffer.current_index(),
							kind: nl_kind,
						});

						// Token end is marked by the callee.
						if self.read_indentation_after_new_line(nl_kind) {
							let last_new_line = self.state.last_new_line;
							return self.newline_kind_to_token(nl_kind, last_new_line);
						}

						// Inside a grouping, line breaks are ignored.
						self.buffer.discard_token();
						ch = self.buffer.next_char();
						continue;
					}

					self.state.last_new_line = false;

					match self.next_operator(other) {
						OperatorScan::Operator(kind) => {
							self.buffer.mark_token_end();
							return self.make_token(kind);
						}
						OperatorScan::Statement(kind) => {
							return self.transform_statement_token(kind);
						}
						OperatorScan::Bad(bad) => {
							self.buffer.mark_token_end();
							return self.bad_char(bad);
						}
						OperatorScan::NotOperator => (),
					}

					if is_name_start(other) {
						return self.read_name();
					}

					self.buffer.mark_token_end();
					return self.bad_char(other);
				}
			}
		}
	}


	fn read_eof(&mut self) -> Token {
		self.buffer.mark_token_end();

		if self.state.indent_level > 0 && self.state.grouping_level() == 0 {
			// Make sure the dedents follow a line break.
			if !self.state.last_new_line {
				self.state.last_new_line = true;
				return self.make_token(TokenKind::NewLine(NewLine {
					kind: NewLineKind::None,
					significant: true,
				}));
			}

			let index = self.buffer.current_index();
			self.set_indent(0, None, Some(index));
			self.state.pending_dedents -= 1;
			return self.make_token(TokenKind::Dedent);
		}

		self.make_token(TokenKind::EndOfFile)
	}


	/// Rewind to the newline recorded inside an unclosed grouping and
	/// replay it as a statement boundary. Falls through to an ordinary
	/// token when no rewind is pending or the keyword is not the first
	/// token after that newline.
	fn transform_statement_token(&mut self, kind: TokenKind) -> Token {
		if self.state.grouping_level() > 0 && self.options.grouping_recovery {
			if let Some(recovery) = self.state.grouping_recovery.take() {
				if recovery.token_start == self.buffer.token_start_index() {
					// A statement keyword can't occur inside a grouping,
					// so the grouping was never closed.
					self.state.paren_level = 0;
					self.state.brace_level = 0;
					self.state.bracket_level = 0;

					self.buffer.rewind_to_token_start();
					self.set_indent(recovery.spaces, Some(&recovery.whitespace), None);
					self.buffer.retarget_token(
						recovery.newline_start,
						recovery.newline_start + recovery.newline_kind.len(),
					);

					if self.options.verbatim {
						// The newline keeps the whitespace before it as
						// leading trivia; the indentation after it moves
						// to the next token.
						let next_start =
							recovery.verbatim_whitespace_len + recovery.newline_kind.len();
						debug_assert!(next_start <= self.state.current_whitespace.len());

						let tail = self.state.current_whitespace.split_off(next_start);
						self.state.current_whitespace
							.truncate(recovery.verbatim_whitespace_len);
						self.state.next_whitespace.insert_str(0, &tail);
					}

					self.buffer.set_pin(None);
					return self.newline_kind_to_token(recovery.newline_kind, false);
				}

				self.state.grouping_recovery = Some(recovery);
			}
		}

		self.buffer.mark_token_end();
		self.make_token(kind)
	}


	fn newline_kind_to_token(&mut self, kind: NewLineKind, last_new_line: bool) -> Token {
		let significant = !last_new_line;
		if significant {
			self.state.last_new_line = true;
		}

		self.make_token(TokenKind::NewLine(NewLine { kind, significant }))
	}


	/// Skip a run of spaces and tabs, reporting stray indentation when
	/// it opens the document outside any grouping. Returns the first
	/// character past the run, consumed.
	fn skip_white_space(&mut self, first: char, at_beginning: bool) -> Option<char> {
		let mut ch = Some(first);

		loop {
			if self.options.verbatim {
				if let Some(space) = ch {
					self.state.current_whitespace.push(space);
				}
			}

			ch = self.buffer.next_char();
			match ch {
				Some(' ') | Some('\t') => continue,
				_ => break,
			}
		}

		self.buffer.seek_relative(-1);

		let harmless = matches!(ch, None | Some('#') | Some('\x0c') | Some('\n') | Some('\r'));
		if at_beginning && !self.state.fstring_expression && !harmless {
			self.buffer.mark_token_end();
			self.errors.report(Error::invalid_syntax(self.buffer.token_span()));
		}

		self.buffer.discard_token();
		self.buffer.seek_relative(1);
		ch
	}


	/// Consume to the end of the line, leaving the terminator
	/// unconsumed but returning it (or EOF).
	fn read_line(&mut self) -> Option<char> {
		let mut ch = self.buffer.next_char();

		while let Some(current) = ch {
			if current == '\n' || current == '\r' {
				break;
			}
			ch = self.buffer.next_char();
		}

		self.buffer.seek_relative(-1);
		ch
	}


	fn skip_single_line_comment(&mut self) -> Option<char> {
		let ch = self.read_line();
		self.buffer.mark_token_end();

		self.buffer.discard_token();
		self.buffer.seek_relative(1);

		ch
	}


	fn read_eoln_opt(&mut self, ch: Option<char>) -> NewLineKind {
		match ch {
			Some('\n') => NewLineKind::LineFeed,

			Some('\r') => {
				if self.buffer.next_char_if('\n') {
					NewLineKind::CarriageReturnLineFeed
				} else {
					NewLineKind::CarriageReturn
				}
			}

			_ => NewLineKind::None,
		}
	}


	fn bad_char(&mut self, ch: char) -> Token {
		self.errors.report(Error::bad_character(ch, self.buffer.token_span()));
		self.make_token(TokenKind::Error(error::add_slashes(ch).into()))
	}


	fn make_token(&self, kind: TokenKind) -> Token {
		let span = self.buffer.token_span();

		let verbatim = if self.options.verbatim {
			let image = match &kind {
				TokenKind::EndOfFile | TokenKind::Indent | TokenKind::Dedent => String::new(),
				TokenKind::NewLine(newline) => newline.kind.as_str().to_owned(),
				_ => self.buffer.token_text(),
			};

			Some(Verbatim {
				leading: self.state.current_whitespace.as_str().into(),
				image: image.into(),
			})
		} else {
			None
		};

		Token { kind, span, verbatim }
	}


	fn make_verbatim_with_image(&self, image: &str) -> Option<Verbatim> {
		if !self.options.verbatim {
			return None;
		}

		Some(Verbatim {
			leading: self.state.current_whitespace.as_str().into(),
			image: image.into(),
		})
	}
}


impl<S: CharRead> Iterator for Tokenizer<'_, S> {
	type Item = Token;

	fn next(&mut self) -> Option<Token> {
		if self.done {
			return None;
		}

		let token = self.read_token();
		if let TokenKind::EndOfFile = token.kind {
			self.done = true;
		}

		Some(token)
	}
}
