use super::{
	buffer::CharRead,
	token::{Delimiter, GroupingKind, Operator, TokenKind},
	PythonVersion,
	Tokenizer,
};


pub(super) enum OperatorScan {
	Operator(TokenKind),
	/// Token that can only begin a statement; subject to grouping
	/// recovery.
	Statement(TokenKind),
	/// Character that only forms an operator with a follow-up that
	/// isn't there.
	Bad(char),
	NotOperator,
}


impl<S: CharRead> Tokenizer<'_, S> {
	/// Scan an operator, delimiter or grouping starting at `ch`,
	/// already consumed. Grouping levels are updated here.
	pub(super) fn next_operator(&mut self, ch: char) -> OperatorScan {
		fn op(operator: Operator) -> OperatorScan {
			OperatorScan::Operator(TokenKind::Operator(operator))
		}

		fn delimiter(delimiter: Delimiter) -> OperatorScan {
			OperatorScan::Operator(TokenKind::Delimiter(delimiter))
		}

		match ch {
			'+' => {
				if self.buffer.next_char_if('=') {
					op(Operator::AddAssign)
				} else {
					op(Operator::Add)
				}
			}

			'-' => {
				if self.buffer.next_char_if('=') {
					op(Operator::SubtractAssign)
				} else if self.buffer.next_char_if('>') {
					op(Operator::Arrow)
				} else {
					op(Operator::Subtract)
				}
			}

			'*' => {
				if self.buffer.next_char_if('=') {
					op(Operator::MultiplyAssign)
				} else if self.buffer.next_char_if('*') {
					if self.buffer.next_char_if('=') {
						op(Operator::PowerAssign)
					} else {
						op(Operator::Power)
					}
				} else {
					op(Operator::Multiply)
				}
			}

			'/' => {
				if self.buffer.next_char_if('=') {
					op(Operator::DivideAssign)
				} else if self.buffer.next_char_if('/') {
					if self.buffer.next_char_if('=') {
						op(Operator::FloorDivideAssign)
					} else {
						op(Operator::FloorDivide)
					}
				} else {
					op(Operator::Divide)
				}
			}

			'%' => {
				if self.buffer.next_char_if('=') {
					op(Operator::ModuloAssign)
				} else {
					op(Operator::Modulo)
				}
			}

			'<' => {
				if self.buffer.next_char_if('=') {
					op(Operator::LessEqual)
				} else if self.version.is_2x() && self.buffer.next_char_if('>') {
					op(Operator::LessGreater)
				} else if self.buffer.next_char_if('<') {
					if self.buffer.next_char_if('=') {
						op(Operator::LeftShiftAssign)
					} else {
						op(Operator::LeftShift)
					}
				} else {
					op(Operator::Less)
				}
			}

			'>' => {
				if self.buffer.next_char_if('=') {
					op(Operator::GreaterEqual)
				} else if self.buffer.next_char_if('>') {
					if self.buffer.next_char_if('=') {
						op(Operator::RightShiftAssign)
					} else {
						op(Operator::RightShift)
					}
				} else {
					op(Operator::Greater)
				}
			}

			'&' => {
				if self.buffer.next_char_if('=') {
					op(Operator::BitwiseAndAssign)
				} else {
					op(Operator::BitwiseAnd)
				}
			}

			'|' => {
				if self.buffer.next_char_if('=') {
					op(Operator::BitwiseOrAssign)
				} else {
					op(Operator::BitwiseOr)
				}
			}

			'^' => {
				if self.buffer.next_char_if('=') {
					op(Operator::BitwiseXorAssign)
				} else {
					op(Operator::BitwiseXor)
				}
			}

			'=' => {
				if self.buffer.next_char_if('=') {
					op(Operator::Equal)
				} else {
					op(Operator::Assign)
				}
			}

			'!' => {
				if self.buffer.next_char_if('=') {
					op(Operator::NotEqual)
				} else {
					OperatorScan::Bad(ch)
				}
			}

			'(' => {
				self.state.paren_level += 1;
				OperatorScan::Operator(TokenKind::Grouping {
					kind: GroupingKind::Paren,
					open: true,
				})
			}

			')' => {
				if self.state.paren_level != 0 {
					self.state.paren_level -= 1;
				}
				OperatorScan::Operator(TokenKind::Grouping {
					kind: GroupingKind::Paren,
					open: false,
				})
			}

			'[' => {
				self.state.bracket_level += 1;
				OperatorScan::Operator(TokenKind::Grouping {
					kind: GroupingKind::Bracket,
					open: true,
				})
			}

			']' => {
				if self.state.bracket_level != 0 {
					self.state.bracket_level -= 1;
				}
				OperatorScan::Operator(TokenKind::Grouping {
					kind: GroupingKind::Bracket,
					open: false,
				})
			}

			'{' => {
				self.state.brace_level += 1;
				OperatorScan::Operator(TokenKind::Grouping {
					kind: GroupingKind::Brace,
					open: true,
				})
			}

			'}' => {
				if self.state.brace_level != 0 {
					self.state.brace_level -= 1;
				}
				OperatorScan::Operator(TokenKind::Grouping {
					kind: GroupingKind::Brace,
					open: false,
				})
			}

			',' => delimiter(Delimiter::Comma),

			';' => delimiter(Delimiter::Semicolon),

			'~' => op(Operator::Invert),

			':' => {
				if self.version >= PythonVersion::V38 && self.buffer.next_char_if('=') {
					op(Operator::Walrus)
				} else {
					delimiter(Delimiter::Colon)
				}
			}

			'`' => {
				if self.version.is_2x() {
					op(Operator::Backquote)
				} else {
					OperatorScan::NotOperator
				}
			}

			'@' => {
				if self.version >= PythonVersion::V35 {
					if self.buffer.next_char_if('=') {
						return op(Operator::MatMulAssign);
					}

					// Inside a grouping this can't be a decorator.
					if self.state.grouping_level() > 0 {
						return op(Operator::MatMul);
					}
				}

				OperatorScan::Statement(TokenKind::Operator(Operator::At))
			}

			_ => OperatorScan::NotOperator,
		}
	}
}
