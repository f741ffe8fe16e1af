use std::fmt::{self, Display};

use super::{Error, ErrorKind};


impl Display for ErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::BadCharacter(ch) => write!(f, "bad character '{}'", super::add_slashes(*ch)),

			Self::InvalidSyntax => write!(f, "invalid syntax"),

			Self::InvalidToken => write!(f, "invalid token"),

			Self::UnterminatedString { triple: true } => write!(
				f,
				"EOF while scanning triple-quoted string"
			),

			Self::UnterminatedString { triple: false } => write!(
				f,
				"EOL while scanning single-quoted string"
			),

			Self::IndentMismatch => write!(
				f,
				"unindent does not match any outer indentation level"
			),

			Self::InconsistentWhitespace => write!(f, "inconsistent whitespace"),

			Self::TooDeepIndentation => write!(f, "too many levels of indentation"),

			Self::Literal(error) => write!(f, "{}", error),
		}
	}
}


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "offset {} - {}", self.span.start, self.error)
	}
}
