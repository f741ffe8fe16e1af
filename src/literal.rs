use std::fmt::{self, Display};

use num_bigint::BigInt;

use crate::lexer::token::Number;


#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
	InvalidInteger,
	MalformedFloat,
	MalformedComplex,
}


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::InvalidInteger => write!(f, "Invalid integer literal"),
			Self::MalformedFloat => write!(f, "invalid float literal"),
			Self::MalformedComplex => write!(f, "complex() arg is a malformed string"),
		}
	}
}


impl std::error::Error for Error { }


fn strip_underscores(text: &str) -> String {
	text.chars()
		.filter(|&ch| ch != '_')
		.collect()
}


/// Parse an integer literal in the given radix. Underscore placement is
/// validated by the caller, so separators are simply dropped here.
pub fn parse_integer(text: &str, radix: u32) -> Result<Number, Error> {
	let digits = strip_underscores(text);

	if digits.is_empty() {
		return Err(Error::InvalidInteger);
	}

	match i64::from_str_radix(&digits, radix) {
		Ok(value) => Ok(Number::Int(value)),
		Err(_) => BigInt::parse_bytes(digits.as_bytes(), radix)
			.map(Number::Big)
			.ok_or(Error::InvalidInteger),
	}
}


/// Parse an explicit long literal, dropping the trailing `l` or `L`.
/// The result is big even when the value would fit a machine word.
pub fn parse_big_integer(text: &str, radix: u32) -> Result<Number, Error> {
	let trimmed = text
		.strip_suffix(|ch| ch == 'l' || ch == 'L')
		.unwrap_or(text);

	let digits = strip_underscores(trimmed);

	if digits.is_empty() {
		return Err(Error::InvalidInteger);
	}

	BigInt::parse_bytes(digits.as_bytes(), radix)
		.map(Number::Big)
		.ok_or(Error::InvalidInteger)
}


/// Parse a float literal. Values too large for f64 round to infinity,
/// matching how CPython lexes oversized floats.
pub fn parse_float(text: &str) -> Result<Number, Error> {
	strip_underscores(text)
		.parse::<f64>()
		.map(Number::Float)
		.map_err(|_| Error::MalformedFloat)
}


/// Parse an imaginary literal, dropping the trailing `j` or `J`.
pub fn parse_imaginary(text: &str) -> Result<Number, Error> {
	let trimmed = text
		.strip_suffix(|ch| ch == 'j' || ch == 'J')
		.unwrap_or(text);

	strip_underscores(trimmed)
		.parse::<f64>()
		.map(Number::Imaginary)
		.map_err(|_| Error::MalformedComplex)
}
