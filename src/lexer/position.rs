use std::fmt::{self, Display};


/// A resolved position in the source: absolute character index plus
/// 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceLocation {
	pub index: usize,
	pub line: u32,
	pub column: u32,
}


impl SourceLocation {
	/// The start of a document.
	pub const FIRST: Self = Self { index: 0, line: 1, column: 1 };
}


impl Default for SourceLocation {
	fn default() -> Self {
		Self::FIRST
	}
}


impl Display for SourceLocation {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "line {}, column {}", self.line, self.column)
	}
}


/// The raw extent of a token, in absolute character indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexSpan {
	pub start: usize,
	pub end: usize,
}


impl IndexSpan {
	pub fn new(start: usize, end: usize) -> Self {
		Self { start, end }
	}


	pub fn len(&self) -> usize {
		self.end - self.start
	}


	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}
}


/// The normalized kinds of line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NewLineKind {
	/// No terminator; used for the virtual record of the last line.
	None,
	LineFeed,
	CarriageReturn,
	CarriageReturnLineFeed,
}


impl NewLineKind {
	/// Number of characters the terminator occupies in the source.
	pub fn len(self) -> usize {
		match self {
			Self::None => 0,
			Self::LineFeed | Self::CarriageReturn => 1,
			Self::CarriageReturnLineFeed => 2,
		}
	}


	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "",
			Self::LineFeed => "\n",
			Self::CarriageReturn => "\r",
			Self::CarriageReturnLineFeed => "\r\n",
		}
	}
}


/// One scanned line terminator: the absolute index just past it, and its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewLineRecord {
	pub end_index: usize,
	pub kind: NewLineKind,
}


/// The ordered newline table of a pass, supporting index <-> location
/// mapping by binary search. Records are appended as terminators are
/// consumed and are strictly increasing in end index.
#[derive(Debug, Clone)]
pub struct LineMap {
	initial: SourceLocation,
	records: Vec<NewLineRecord>,
}


impl LineMap {
	pub fn new(initial: SourceLocation) -> Self {
		Self { initial, records: Vec::new() }
	}


	pub fn push(&mut self, record: NewLineRecord) {
		debug_assert!(
			self.records
				.last()
				.map(|last| last.end_index < record.end_index)
				.unwrap_or(true)
		);

		self.records.push(record);
	}


	pub fn records(&self) -> &[NewLineRecord] {
		&self.records
	}


	/// The record for the given 0-based line, or a virtual terminator-less
	/// record ending at `current_index` for the line in progress.
	pub fn record_for_line(&self, line: usize, current_index: usize) -> NewLineRecord {
		match self.records.get(line) {
			Some(&record) => record,
			None => NewLineRecord { end_index: current_index, kind: NewLineKind::None },
		}
	}


	/// Map an absolute index to line and column.
	pub fn location_of(&self, index: usize) -> SourceLocation {
		debug_assert!(index >= self.initial.index);

		let line_offset = self
			.records
			.partition_point(|record| record.end_index <= index);

		let column = match line_offset.checked_sub(1) {
			// Still on the initial line, which may start at a column offset.
			None => self.initial.column as usize + (index - self.initial.index),
			Some(previous) => index - self.records[previous].end_index + 1,
		};

		SourceLocation {
			index,
			line: self.initial.line + line_offset as u32,
			column: column as u32,
		}
	}


	/// Map a line and column back to an absolute index. Exact inverse of
	/// `location_of` for locations that lie within the scanned region.
	pub fn index_of(&self, line: u32, column: u32) -> usize {
		debug_assert!(line >= self.initial.line);

		let line_offset = (line - self.initial.line) as usize;

		match line_offset.checked_sub(1) {
			None => self.initial.index + (column - self.initial.column) as usize,
			Some(previous) => self.records[previous].end_index + column as usize - 1,
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;


	fn map(terminators: &[(usize, NewLineKind)]) -> LineMap {
		let mut map = LineMap::new(SourceLocation::FIRST);

		for &(end_index, kind) in terminators {
			map.push(NewLineRecord { end_index, kind });
		}

		map
	}


	#[test]
	fn test_location_on_initial_line() {
		let map = map(&[]);

		let location = map.location_of(4);

		assert_eq!(location.line, 1);
		assert_eq!(location.column, 5);
	}


	#[test]
	fn test_location_after_terminators() {
		// "ab\ncd\r\ne"
		let map = map(&[
			(3, NewLineKind::LineFeed),
			(7, NewLineKind::CarriageReturnLineFeed),
		]);

		assert_eq!(map.location_of(2).line, 1);
		assert_eq!(map.location_of(3).line, 2);
		assert_eq!(map.location_of(3).column, 1);
		assert_eq!(map.location_of(5).line, 2);
		assert_eq!(map.location_of(5).column, 3);
		assert_eq!(map.location_of(7).line, 3);
		assert_eq!(map.location_of(7).column, 1);
	}


	#[test]
	fn test_mapping_is_invertible() {
		let map = map(&[
			(3, NewLineKind::LineFeed),
			(7, NewLineKind::CarriageReturnLineFeed),
			(9, NewLineKind::CarriageReturn),
		]);

		for index in 0 .. 12 {
			let location = map.location_of(index);
			assert_eq!(map.index_of(location.line, location.column), index);
		}
	}


	#[test]
	fn test_initial_offset() {
		let initial = SourceLocation { index: 10, line: 4, column: 3 };
		let mut map = LineMap::new(initial);
		map.push(NewLineRecord { end_index: 15, kind: NewLineKind::LineFeed });

		let location = map.location_of(12);
		assert_eq!(location.line, 4);
		assert_eq!(location.column, 5);

		let location = map.location_of(16);
		assert_eq!(location.line, 5);
		assert_eq!(location.column, 2);

		assert_eq!(map.index_of(4, 5), 12);
		assert_eq!(map.index_of(5, 2), 16);
	}
}
