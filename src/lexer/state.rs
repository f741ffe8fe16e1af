use super::position::NewLineKind;


/// Hard cap on indentation nesting. Deeper indents are reported and
/// clamped rather than tracked.
pub const MAX_INDENT: usize = 80;


/// Scanning context of a string literal cut short by the end of input,
/// carried across chunks so the literal can resume in the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncompleteString {
	pub single_quote: bool,
	pub raw: bool,
	pub unicode: bool,
	pub triple: bool,
	pub formatted: bool,
}


/// Everything recorded at the most recent newline inside an open
/// grouping, enough to rewind and replay it as a statement boundary if
/// a statement keyword follows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupingRecovery {
	pub newline_kind: NewLineKind,
	/// Tab-expanded width of the line's indentation.
	pub spaces: u32,
	/// The indentation characters themselves.
	pub whitespace: String,
	/// Absolute index of the newline.
	pub newline_start: usize,
	/// Length of the preserved-whitespace builder before the newline
	/// was folded into it.
	pub verbatim_whitespace_len: usize,
	/// Absolute index the next token must start at for the recovery to
	/// still apply.
	pub token_start: usize,
}


/// Resumable tokenizer state. A snapshot is an ordinary value: cheap to
/// clone, comparable, and accepted back to continue scanning from the
/// position it was taken at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
	/// Tab-expanded widths of the open indentation levels.
	pub indent: [u32; MAX_INDENT],
	/// The whitespace that produced each level, for consistency checks.
	pub indent_format: [Option<Box<str>>; MAX_INDENT],
	pub indent_level: usize,
	/// Dedents left to emit; -1 flags a pending indent.
	pub pending_dedents: i32,
	/// Whether the last significant line break was already emitted.
	pub last_new_line: bool,
	pub incomplete_string: Option<IncompleteString>,
	pub paren_level: u32,
	pub brace_level: u32,
	pub bracket_level: u32,
	/// Scanning the expression hole of a formatted string; counts as an
	/// open grouping.
	pub fstring_expression: bool,
	pub grouping_recovery: Option<GroupingRecovery>,
	/// Preserved leading trivia of the current and next token.
	pub current_whitespace: String,
	pub next_whitespace: String,
}


impl State {
	pub fn new(fstring_expression: bool) -> Self {
		Self {
			indent: [0; MAX_INDENT],
			indent_format: [(); MAX_INDENT].map(|_| None),
			indent_level: 0,
			pending_dedents: 0,
			last_new_line: true,
			incomplete_string: None,
			paren_level: 0,
			brace_level: 0,
			bracket_level: 0,
			fstring_expression,
			grouping_recovery: None,
			current_whitespace: String::new(),
			next_whitespace: String::new(),
		}
	}


	/// Open parens, brackets and braces, plus the formatted-string hole
	/// when scanning one. Newlines are insignificant above zero.
	pub fn grouping_level(&self) -> u32 {
		self.paren_level
			+ self.brace_level
			+ self.bracket_level
			+ self.fstring_expression as u32
	}
}
