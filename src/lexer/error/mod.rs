mod fmt;

use crate::literal;

use super::position::IndexSpan;


/// Classification reported alongside each diagnostic, mirroring the
/// distinctions CPython draws for syntax, indentation and tab errors.
/// Incomplete variants flag constructs that more input could complete.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorCode {
	Syntax,
	IncompleteSyntax,
	Indentation,
	Tab,
}


#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
	Ignore,
	Warning,
	Error,
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
	BadCharacter(char),
	InvalidSyntax,
	InvalidToken,
	UnterminatedString { triple: bool },
	IndentMismatch,
	InconsistentWhitespace,
	TooDeepIndentation,
	Literal(literal::Error),
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
	pub error: ErrorKind,
	pub span: IndexSpan,
	pub code: ErrorCode,
	pub severity: Severity,
}


impl Error {
	pub fn bad_character(ch: char, span: IndexSpan) -> Self {
		Self {
			error: ErrorKind::BadCharacter(ch),
			span,
			code: ErrorCode::Syntax,
			severity: Severity::Error,
		}
	}


	pub fn invalid_syntax(span: IndexSpan) -> Self {
		Self {
			error: ErrorKind::InvalidSyntax,
			span,
			code: ErrorCode::Syntax,
			severity: Severity::Error,
		}
	}


	pub fn invalid_token(span: IndexSpan) -> Self {
		Self {
			error: ErrorKind::InvalidToken,
			span,
			code: ErrorCode::Syntax,
			severity: Severity::Error,
		}
	}


	pub fn unterminated_string(triple: bool, incomplete: bool, span: IndexSpan) -> Self {
		Self {
			error: ErrorKind::UnterminatedString { triple },
			span,
			code: if incomplete { ErrorCode::IncompleteSyntax } else { ErrorCode::Syntax },
			severity: Severity::Error,
		}
	}


	pub fn indent_mismatch(span: IndexSpan) -> Self {
		Self {
			error: ErrorKind::IndentMismatch,
			span,
			code: ErrorCode::Indentation,
			severity: Severity::Error,
		}
	}


	pub fn inconsistent_whitespace(span: IndexSpan, severity: Severity) -> Self {
		Self {
			error: ErrorKind::InconsistentWhitespace,
			span,
			code: ErrorCode::Tab,
			severity,
		}
	}


	pub fn too_deep_indentation(span: IndexSpan) -> Self {
		Self {
			error: ErrorKind::TooDeepIndentation,
			span,
			code: ErrorCode::Indentation,
			severity: Severity::Error,
		}
	}


	pub fn literal(error: literal::Error, span: IndexSpan) -> Self {
		Self {
			error: ErrorKind::Literal(error),
			span,
			code: ErrorCode::Syntax,
			severity: Severity::Error,
		}
	}
}


impl std::error::Error for Error { }


/// Receiver for diagnostics produced while scanning. Reports arrive in
/// source order and scanning always proceeds past them.
pub trait ErrorSink {
	fn report(&mut self, error: Error);
}


/// Sink that drops every report.
pub struct NullSink;


impl ErrorSink for NullSink {
	fn report(&mut self, _error: Error) { }
}


impl ErrorSink for Vec<Error> {
	fn report(&mut self, error: Error) {
		self.push(error)
	}
}


/// Escape a character for display, as C escape sequences for the
/// common control characters and unchanged otherwise.
pub(crate) fn add_slashes(ch: char) -> String {
	match ch {
		'\x07' => "\\a".into(),
		'\x08' => "\\b".into(),
		'\x0c' => "\\f".into(),
		'\n' => "\\n".into(),
		'\r' => "\\r".into(),
		'\t' => "\\t".into(),
		'\x0b' => "\\v".into(),
		other => other.to_string(),
	}
}
