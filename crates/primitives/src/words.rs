//! Word-boundary detection.

use ropey::RopeSlice;

use crate::position::ColIdx;

/// Returns whether a character is a word character (alphanumeric or underscore).
#[inline]
pub fn is_word_char(c: char) -> bool {
	c.is_alphanumeric() || c == '_'
}

/// Finds the word touching `col` on a line.
///
/// Matches the identifier-like token under the caret, or the token ending
/// immediately to the caret's left when the caret sits just past its final
/// character. Returns the half-open character range of the token, never empty.
///
/// `line` must not include a terminating line break.
pub fn word_range_at(line: RopeSlice, col: ColIdx) -> Option<(ColIdx, ColIdx)> {
	let len = line.len_chars();
	if len == 0 {
		return None;
	}
	let col = col.min(len);

	let seed = if col < len && is_word_char(line.char(col)) {
		col
	} else if col > 0 && is_word_char(line.char(col - 1)) {
		col - 1
	} else {
		return None;
	};

	let mut start = seed;
	while start > 0 && is_word_char(line.char(start - 1)) {
		start -= 1;
	}
	let mut end = seed + 1;
	while end < len && is_word_char(line.char(end)) {
		end += 1;
	}
	Some((start, end))
}
