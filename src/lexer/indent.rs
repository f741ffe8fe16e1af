use super::{
	buffer::CharRead,
	error::{Error, Severity},
	position::{IndexSpan, NewLineKind},
	state::{GroupingRecovery, MAX_INDENT},
	Tokenizer,
};


impl<S: CharRead> Tokenizer<'_, S> {
	/// Measure the whitespace after a line break. Returns whether a
	/// newline token should be produced; inside a grouping it is
	/// swallowed instead, after noting where to rewind should the
	/// grouping turn out to be unclosed.
	pub(super) fn read_indentation_after_new_line(&mut self, starting_kind: NewLineKind) -> bool {
		let mut indent = String::new();
		let mut spaces: u32 = 0;
		let indent_start = self.buffer.current_index();

		loop {
			let ch = self.buffer.next_char();

			match ch {
				Some(' ') => {
					if self.options.verbatim {
						self.state.next_whitespace.push(' ');
					}
					spaces += 1;
					indent.push(' ');
				}

				Some('\t') => {
					if self.options.verbatim {
						self.state.next_whitespace.push('\t');
					}
					spaces += 8 - spaces % 8;
					indent.push('\t');
				}

				// Form feeds reset the column.
				Some('\x0c') => {
					if self.options.verbatim {
						self.state.next_whitespace.push('\x0c');
					}
					spaces = 0;
					indent.push('\x0c');
				}

				Some('#') => {
					let location = self.lines.location_of(self.buffer.current_index() - 1);
					self.comments.push(location);

					if self.options.comment_tokens {
						// Emit the newline now, the comment on the next
						// call.
						self.buffer.seek_relative(-1);
						self.buffer.mark_token_end();
						return true;
					}

					self.buffer.seek_relative(-1);
					self.buffer.discard_token();

					let _terminator = self.read_line();
					self.buffer.mark_token_end();
					if self.options.verbatim {
						let image = self.buffer.token_text();
						self.state.next_whitespace.push_str(&image);
					}
					self.buffer.discard_token();
				}

				other => {
					self.buffer.seek_relative(-1);

					if self.state.grouping_level() > 0 {
						let mut starting_white_space = 0;

						if self.options.verbatim {
							starting_white_space = self.state.current_whitespace.len();
							self.state.current_whitespace.push_str(starting_kind.as_str());

							let next = std::mem::take(&mut self.state.next_whitespace);
							self.state.current_whitespace.push_str(&next);
						}

						if self.options.grouping_recovery {
							let newline_start = self.buffer.token_start_index();
							self.state.grouping_recovery = Some(GroupingRecovery {
								newline_kind: starting_kind,
								spaces,
								whitespace: indent,
								newline_start,
								verbatim_whitespace_len: starting_white_space,
								token_start: self.buffer.current_index(),
							});
							self.buffer.set_pin(Some(newline_start));
						}

						return false;
					}

					self.state.grouping_recovery = None;
					self.buffer.set_pin(None);
					self.buffer.mark_token_end();

					if self.buffer.token_end_index() != self.buffer.token_start_index() {
						let after_newline =
							self.buffer.token_start_index() + starting_kind.len();
						self.check_indent(&indent, after_newline);
					}

					match other {
						None => {
							// Interactive input still checks the indent
							// stack; otherwise dedents drain at EOF.
							if spaces < self.state.indent[self.state.indent_level] {
								if self.options.interactive {
									self.set_indent(spaces, Some(&indent), Some(indent_start));
								} else {
									self.do_dedent(spaces);
								}
							}
						}

						Some('\n') | Some('\r') => (),

						Some(_) => self.set_indent(spaces, Some(&indent), Some(indent_start)),
					}

					return true;
				}
			}
		}
	}


	/// Compare this line's indentation characters against the ones
	/// that established the current level.
	fn check_indent(&mut self, indent: &str, indent_start: usize) {
		if self.state.indent[self.state.indent_level] == 0 {
			return;
		}

		if let Some(previous) = &self.state.indent_format[self.state.indent_level] {
			for (current, expected) in indent.chars().zip(previous.chars()) {
				if current != expected {
					if self.options.indentation_severity != Severity::Ignore {
						let span = IndexSpan::new(
							indent_start,
							self.buffer.token_end_index(),
						);
						self.errors.report(Error::inconsistent_whitespace(
							span,
							self.options.indentation_severity,
						));
					}
					break;
				}
			}
		}
	}


	pub(super) fn set_indent(
		&mut self,
		spaces: u32,
		format: Option<&str>,
		indent_start: Option<usize>,
	) {
		let current = self.state.indent[self.state.indent_level];

		if spaces == current {
			return;
		}

		if spaces > current {
			if self.state.indent_level + 1 >= MAX_INDENT {
				let start = indent_start.unwrap_or_else(|| self.buffer.token_start_index());
				self.errors.report(Error::too_deep_indentation(
					IndexSpan::new(start, self.buffer.token_end_index()),
				));
				return;
			}

			self.state.indent_level += 1;
			self.state.indent[self.state.indent_level] = spaces;
			self.state.indent_format[self.state.indent_level] = format.map(Into::into);
			self.state.pending_dedents = -1;
			return;
		}

		let current = self.do_dedent(spaces);

		if spaces != current {
			if let Some(start) = indent_start {
				self.errors.report(Error::indent_mismatch(
					IndexSpan::new(start, start + spaces as usize),
				));
			}
		}
	}


	fn do_dedent(&mut self, spaces: u32) -> u32 {
		let mut current = self.state.indent[self.state.indent_level];

		while spaces < current {
			self.state.indent_level -= 1;
			self.state.pending_dedents += 1;
			current = self.state.indent[self.state.indent_level];
		}

		current
	}
}
