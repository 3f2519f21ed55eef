/// A line index in a document, zero-based.
pub type LineIdx = usize;

/// A column within a line, measured in characters (not bytes).
pub type ColIdx = usize;

/// A position in a document, addressed by line and column.
///
/// Ordering is document order: by line, then by column within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
	/// Zero-based line.
	pub line: LineIdx,
	/// Character column within the line.
	pub col: ColIdx,
}

impl Position {
	/// Creates a position at the given line and column.
	pub fn new(line: LineIdx, col: ColIdx) -> Self {
		Self { line, col }
	}
}
