use std::fmt::{self, Display};

use super::{Delimiter, Keyword, Number, Operator, StringLiteral, Token, TokenKind};
use crate::{
	fmt::{self as cfmt, Show},
	symbol,
};


impl Display for Keyword {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.as_str().fmt(f)
	}
}


impl Display for Operator {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.as_str().fmt(f)
	}
}


impl Display for Delimiter {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.as_str().fmt(f)
	}
}


impl Display for Number {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Int(value) => value.fmt(f),
			Self::Big(value) => value.fmt(f),
			Self::Float(value) => value.fmt(f),
			Self::Imaginary(value) => write!(f, "{}j", value),
		}
	}
}


impl Display for StringLiteral {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		if self.bytes {
			"b".fmt(f)?;
		}

		if self.formatted {
			"f".fmt(f)?;
		}

		if self.raw {
			"r".fmt(f)?;
		}

		let quotes = if self.triple { 3 } else { 1 };
		for _ in 0 .. quotes {
			self.quote.fmt(f)?;
		}

		self.contents.fmt(f)?;

		for _ in 0 .. quotes {
			self.quote.fmt(f)?;
		}

		Ok(())
	}
}


impl<'a> cfmt::Display<'a> for TokenKind {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut fmt::Formatter, context: Self::Context) -> fmt::Result {
		match self {
			Self::EndOfFile => "<eof>".fmt(f),

			Self::NewLine(newline) if newline.significant => "<newline>".fmt(f),

			Self::NewLine(_) => "<nl>".fmt(f),

			Self::Indent => "<indent>".fmt(f),

			Self::Dedent => "<dedent>".fmt(f),

			Self::Name(symbol) => Show(symbol, context).fmt(f),

			Self::Keyword(keyword) => keyword.fmt(f),

			Self::Number(number) => number.fmt(f),

			Self::Str(literal) => literal.fmt(f),

			Self::Comment(text) => text.fmt(f),

			Self::Operator(operator) => operator.fmt(f),

			Self::Grouping { kind, open } => kind.as_str(*open).fmt(f),

			Self::Delimiter(delimiter) => delimiter.fmt(f),

			Self::ExplicitLineJoin => "<line join>".fmt(f),

			Self::Error(message) => write!(f, "<error: {}>", message),

			Self::IncompleteString { message, .. } => write!(f, "<error: {}>", message),
		}
	}
}


impl<'a> cfmt::Display<'a> for Token {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut fmt::Formatter, context: Self::Context) -> fmt::Result {
		self.kind.fmt(f, context)
	}
}
