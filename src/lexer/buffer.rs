use std::io;

use super::position::IndexSpan;


/// Initial capacity of the lookahead window, in characters.
pub const DEFAULT_CAPACITY: usize = 1024;


/// A pull-based character source. Implementors fill as much of `buf` as
/// they can, returning the number of characters written; 0 means the
/// source is exhausted.
pub trait CharRead {
	fn read_chars(&mut self, buf: &mut [char]) -> io::Result<usize>;
}


impl CharRead for std::str::Chars<'_> {
	fn read_chars(&mut self, buf: &mut [char]) -> io::Result<usize> {
		let mut count = 0;

		for slot in buf.iter_mut() {
			match self.next() {
				Some(ch) => {
					*slot = ch;
					count += 1;
				}
				None => break,
			}
		}

		Ok(count)
	}
}


/// Resizable lookahead window over a character source.
///
/// The window carries one token at a time: `start` is where the current
/// token begins, the cursor moves ahead of it, and `mark_token_end`
/// freezes the extent before `discard_token` begins the next one.
/// Absolute indices are maintained across refills, and the cursor may
/// overrun the end while reading EOFs (the mark clamps).
#[derive(Debug)]
pub struct Buffer<S> {
	source: S,
	chars: Vec<char>,
	/// Filled length of `chars`.
	end: usize,
	/// Offset of the current token's first character.
	start: usize,
	/// Read cursor, always >= `start`.
	position: usize,
	/// Frozen token end, if marked.
	token_end: Option<usize>,
	/// Absolute index of the character at `start`.
	token_start_index: usize,
	/// Absolute index of the marked token end.
	token_end_index: usize,
	/// Absolute index that must stay buffered across compaction.
	pin: Option<usize>,
	resized: bool,
	eof: bool,
	error: Option<io::Error>,
}


impl<S: CharRead> Buffer<S> {
	pub fn new(source: S, base_index: usize) -> Self {
		Self::with_capacity(source, DEFAULT_CAPACITY, base_index)
	}


	pub fn with_capacity(source: S, capacity: usize, base_index: usize) -> Self {
		Self {
			source,
			chars: vec!['\0'; capacity.max(1)],
			end: 0,
			start: 0,
			position: 0,
			token_end: None,
			token_start_index: base_index,
			token_end_index: base_index,
			pin: None,
			resized: false,
			eof: false,
			error: None,
		}
	}


	/// True only at the very first character of an unresumed document.
	pub fn at_beginning(&self) -> bool {
		self.position == 0 && !self.resized && self.token_start_index == 0
	}


	pub fn peek(&mut self) -> Option<char> {
		while self.position >= self.end {
			if self.eof {
				return None;
			}

			self.refill();
		}

		Some(self.chars[self.position])
	}


	/// Consume one character. The cursor advances even at EOF, so that
	/// EOF-terminated tokens keep their shape; `mark_token_end` clamps.
	pub fn next_char(&mut self) -> Option<char> {
		let ch = self.peek();
		self.position += 1;
		ch
	}


	/// Consume the next character only if it matches.
	pub fn next_char_if(&mut self, expected: char) -> bool {
		if self.peek() == Some(expected) {
			self.position += 1;
			true
		} else {
			false
		}
	}


	/// Move the cursor within the current token's window. Negative deltas
	/// un-read lookahead; the cursor can never back over the token start.
	pub fn seek_relative(&mut self, delta: isize) {
		let position = self.position as isize + delta;
		debug_assert!(position >= self.start as isize);

		self.position = position as usize;
	}


	pub fn mark_token_end(&mut self) {
		let end = self.position.min(self.end);
		self.token_end = Some(end);
		self.token_end_index = self.token_start_index + (end - self.start);
	}


	/// Begin the next token where the current one ends, marking first if
	/// no end was marked.
	pub fn discard_token(&mut self) {
		if self.token_end.is_none() {
			self.mark_token_end();
		}

		if let Some(end) = self.token_end.take() {
			self.start = end;
		}

		self.token_start_index = self.token_end_index;
	}


	/// The marked token's characters.
	pub fn token_chars(&self) -> &[char] {
		debug_assert!(self.token_end.is_some());

		let end = self.token_end.unwrap_or_else(|| self.position.min(self.end));
		&self.chars[self.start .. end]
	}


	pub fn token_text(&self) -> String {
		self.token_chars().iter().collect()
	}


	/// The marked token's text, skipping the first `skip` characters.
	pub fn token_sub_text(&self, skip: usize) -> String {
		self.token_chars()[skip ..].iter().collect()
	}


	pub fn token_len(&self) -> usize {
		self.token_chars().len()
	}


	pub fn token_span(&self) -> IndexSpan {
		IndexSpan::new(self.token_start_index, self.token_end_index)
	}


	pub fn token_start_index(&self) -> usize {
		self.token_start_index
	}


	pub fn token_end_index(&self) -> usize {
		self.token_end_index
	}


	/// Absolute index of the cursor, clamped to the filled window.
	pub fn current_index(&self) -> usize {
		self.token_start_index + self.position.min(self.end) - self.start
	}


	/// Keep everything from the given absolute index onwards buffered
	/// across compaction; used while a grouping-recovery newline window
	/// must stay addressable.
	pub fn set_pin(&mut self, index: Option<usize>) {
		self.pin = index;
	}


	/// Move the cursor back to the start of the current token.
	pub fn rewind_to_token_start(&mut self) {
		self.position = self.start;
	}


	/// Re-point the current token at an earlier, still-buffered window.
	/// The cursor must already be at the token start; it ends up ahead of
	/// the new start by the distance moved.
	pub fn retarget_token(&mut self, start_index: usize, end_index: usize) {
		debug_assert!(start_index <= self.token_start_index);
		debug_assert!(self.token_start_index - start_index <= self.start);

		self.start -= self.token_start_index - start_index;
		self.token_start_index = start_index;
		self.token_end_index = end_index;
		self.token_end = None;
	}


	/// Take a latched source failure, if any.
	pub fn take_error(&mut self) -> Option<io::Error> {
		self.error.take()
	}


	fn refill(&mut self) {
		if self.end == self.chars.len() {
			// Compact: the live window begins at the pin when one is set,
			// else at the token start.
			let pinned = match self.pin {
				Some(index) => {
					debug_assert!(index <= self.token_start_index);
					self.token_start_index.saturating_sub(index)
				}
				None => 0,
			};

			let new_start = self.start - pinned;
			let retained = self.end - new_start;
			let new_size = (retained * 2).max(self.chars.len()).max(self.position);

			if new_size > self.chars.len() {
				let mut grown = vec!['\0'; new_size];
				grown[.. retained].copy_from_slice(&self.chars[new_start .. self.end]);
				self.chars = grown;
			} else {
				self.chars.copy_within(new_start .. self.end, 0);
			}

			self.end = retained;
			self.position -= new_start;
			self.start = pinned;
			self.token_end = None;
			self.resized = true;
		}

		match self.source.read_chars(&mut self.chars[self.end ..]) {
			Ok(0) => self.eof = true,
			Ok(count) => self.end += count,
			Err(error) => {
				self.error = Some(error);
				self.eof = true;
			}
		}
	}
}
