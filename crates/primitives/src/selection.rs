use crate::position::Position;

/// A selection defined by an anchor and an active end.
///
/// The anchor is the fixed end; the active end is where the caret sits and
/// moves during selection extension. Either end may come first in document
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
	/// The fixed end of the selection.
	pub anchor: Position,
	/// The moving end of the selection (caret position).
	pub active: Position,
}

impl Selection {
	/// Creates a selection from anchor to active.
	pub fn new(anchor: Position, active: Position) -> Self {
		Self { anchor, active }
	}

	/// Creates a collapsed selection (caret) at the given position.
	pub fn point(pos: Position) -> Self {
		Self::new(pos, pos)
	}

	/// Returns true if anchor equals active (a caret, covering no text).
	pub fn is_empty(&self) -> bool {
		self.anchor == self.active
	}

	/// Returns the earlier of the two ends in document order.
	pub fn start(&self) -> Position {
		self.anchor.min(self.active)
	}

	/// Returns the later of the two ends in document order.
	pub fn end(&self) -> Position {
		self.anchor.max(self.active)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn point_is_empty() {
		let sel = Selection::point(Position::new(3, 7));
		assert!(sel.is_empty());
		assert_eq!(sel.start(), sel.end());
	}

	#[test]
	fn forward_selection_orients() {
		let sel = Selection::new(Position::new(1, 2), Position::new(4, 0));
		assert!(!sel.is_empty());
		assert_eq!(sel.start(), Position::new(1, 2));
		assert_eq!(sel.end(), Position::new(4, 0));
	}

	#[test]
	fn backward_selection_orients() {
		let sel = Selection::new(Position::new(4, 0), Position::new(1, 2));
		assert_eq!(sel.start(), Position::new(1, 2));
		assert_eq!(sel.end(), Position::new(4, 0));
	}

	#[test]
	fn same_line_backward() {
		let sel = Selection::new(Position::new(2, 8), Position::new(2, 3));
		assert_eq!(sel.start(), Position::new(2, 3));
		assert_eq!(sel.end(), Position::new(2, 8));
	}
}
