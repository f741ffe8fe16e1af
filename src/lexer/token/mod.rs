mod fmt;

use num_bigint::BigInt;

use crate::symbol::Symbol;

use super::position::{IndexSpan, NewLineKind};


#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Keyword {
	And,
	As,
	Assert,
	Async,
	Await,
	Break,
	Class,
	Continue,
	Def,
	Del,
	Elif,
	Else,
	Except,
	Exec,
	False,
	Finally,
	For,
	From,
	Global,
	If,
	Import,
	In,
	Is,
	Lambda,
	None,
	Nonlocal,
	Not,
	Or,
	Pass,
	Print,
	Raise,
	Return,
	True,
	Try,
	While,
	With,
	Yield,
}


impl Keyword {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::And => "and",
			Self::As => "as",
			Self::Assert => "assert",
			Self::Async => "async",
			Self::Await => "await",
			Self::Break => "break",
			Self::Class => "class",
			Self::Continue => "continue",
			Self::Def => "def",
			Self::Del => "del",
			Self::Elif => "elif",
			Self::Else => "else",
			Self::Except => "except",
			Self::Exec => "exec",
			Self::False => "False",
			Self::Finally => "finally",
			Self::For => "for",
			Self::From => "from",
			Self::Global => "global",
			Self::If => "if",
			Self::Import => "import",
			Self::In => "in",
			Self::Is => "is",
			Self::Lambda => "lambda",
			Self::None => "None",
			Self::Nonlocal => "nonlocal",
			Self::Not => "not",
			Self::Or => "or",
			Self::Pass => "pass",
			Self::Print => "print",
			Self::Raise => "raise",
			Self::Return => "return",
			Self::True => "True",
			Self::Try => "try",
			Self::While => "while",
			Self::With => "with",
			Self::Yield => "yield",
		}
	}
}


#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
	Add,
	AddAssign,
	Subtract,
	SubtractAssign,
	Multiply,
	MultiplyAssign,
	Power,
	PowerAssign,
	Divide,
	DivideAssign,
	FloorDivide,
	FloorDivideAssign,
	Modulo,
	ModuloAssign,
	MatMul,
	MatMulAssign,
	LeftShift,
	LeftShiftAssign,
	RightShift,
	RightShiftAssign,
	BitwiseAnd,
	BitwiseAndAssign,
	BitwiseOr,
	BitwiseOrAssign,
	BitwiseXor,
	BitwiseXorAssign,
	Less,
	LessEqual,
	LessGreater,
	Greater,
	GreaterEqual,
	Equal,
	NotEqual,
	Assign,
	Walrus,
	Arrow,
	Invert,
	At,
	Backquote,
	Dot,
	Ellipsis,
}


impl Operator {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Add => "+",
			Self::AddAssign => "+=",
			Self::Subtract => "-",
			Self::SubtractAssign => "-=",
			Self::Multiply => "*",
			Self::MultiplyAssign => "*=",
			Self::Power => "**",
			Self::PowerAssign => "**=",
			Self::Divide => "/",
			Self::DivideAssign => "/=",
			Self::FloorDivide => "//",
			Self::FloorDivideAssign => "//=",
			Self::Modulo => "%",
			Self::ModuloAssign => "%=",
			Self::MatMul => "@",
			Self::MatMulAssign => "@=",
			Self::LeftShift => "<<",
			Self::LeftShiftAssign => "<<=",
			Self::RightShift => ">>",
			Self::RightShiftAssign => ">>=",
			Self::BitwiseAnd => "&",
			Self::BitwiseAndAssign => "&=",
			Self::BitwiseOr => "|",
			Self::BitwiseOrAssign => "|=",
			Self::BitwiseXor => "^",
			Self::BitwiseXorAssign => "^=",
			Self::Less => "<",
			Self::LessEqual => "<=",
			Self::LessGreater => "<>",
			Self::Greater => ">",
			Self::GreaterEqual => ">=",
			Self::Equal => "==",
			Self::NotEqual => "!=",
			Self::Assign => "=",
			Self::Walrus => ":=",
			Self::Arrow => "->",
			Self::Invert => "~",
			Self::At => "@",
			Self::Backquote => "`",
			Self::Dot => ".",
			Self::Ellipsis => "...",
		}
	}
}


#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Delimiter {
	Comma,
	Colon,
	Semicolon,
}


impl Delimiter {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Comma => ",",
			Self::Colon => ":",
			Self::Semicolon => ";",
		}
	}
}


#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GroupingKind {
	Paren,
	Bracket,
	Brace,
}


impl GroupingKind {
	pub fn as_str(self, open: bool) -> &'static str {
		match (self, open) {
			(Self::Paren, true) => "(",
			(Self::Paren, false) => ")",
			(Self::Bracket, true) => "[",
			(Self::Bracket, false) => "]",
			(Self::Brace, true) => "{",
			(Self::Brace, false) => "}",
		}
	}
}


/// A numeric literal value. Integers that fit a machine word stay
/// machine words; wider values and explicit long literals go big.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
	Int(i64),
	Big(BigInt),
	Float(f64),
	Imaginary(f64),
}


/// A finished string literal: the contents between the quotes plus the
/// prefix and quoting shape it was written with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
	pub contents: Box<str>,
	pub quote: char,
	pub raw: bool,
	pub unicode: bool,
	pub bytes: bool,
	pub formatted: bool,
	pub triple: bool,
}


/// A line break in statement position is significant; one that merely
/// follows another, or ends a blank line, is not. The implied break
/// before EOF has `NewLineKind::None`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NewLine {
	pub kind: NewLineKind,
	pub significant: bool,
}


#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
	EndOfFile,
	NewLine(NewLine),
	Indent,
	Dedent,
	Name(Symbol),
	Keyword(Keyword),
	Number(Number),
	Str(StringLiteral),
	Comment(Box<str>),
	Operator(Operator),
	Grouping { kind: GroupingKind, open: bool },
	Delimiter(Delimiter),
	ExplicitLineJoin,
	Error(Box<str>),
	IncompleteString { message: Box<str>, contents: Box<str> },
}


/// Leading trivia and exact source image, captured in verbatim mode.
/// Concatenating `leading` and `image` over a whole scan reproduces the
/// input byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verbatim {
	pub leading: Box<str>,
	pub image: Box<str>,
}


#[derive(Debug, Clone, PartialEq)]
pub struct Token {
	pub kind: TokenKind,
	pub span: IndexSpan,
	pub verbatim: Option<Verbatim>,
}
