//! In-memory, rope-backed host.

use logmoji_primitives::{
	BoxFutureLocal, ColIdx, EditRejected, LineIdx, Position, Rope, RopeSlice, Selection, words,
};

use crate::capabilities::{DocumentAccess, EditAccess, EditorOps, Host, SelectionAccess};
use crate::notifications::Notification;

/// A single-document host holding its content in a [`Rope`].
///
/// Edits resolve immediately. [`MemoryHost::reject_edits`] flips the host into
/// a mode where every edit reports [`EditRejected`] without touching the
/// document, mirroring a host-side rejection such as a stale document version.
/// Notifications are collected for inspection instead of being displayed.
pub struct MemoryHost {
	content: Rope,
	selection: Selection,
	focused: bool,
	reject_edits: bool,
	notices: Vec<Notification>,
}

impl MemoryHost {
	/// Creates a focused host over the given document text.
	pub fn new(text: &str) -> Self {
		Self {
			content: Rope::from_str(text),
			selection: Selection::default(),
			focused: true,
			reject_edits: false,
			notices: Vec::new(),
		}
	}

	/// Creates a host with no focused editor.
	pub fn unfocused() -> Self {
		let mut host = Self::new("");
		host.focused = false;
		host
	}

	/// Collapses the selection to a caret at (line, col).
	pub fn set_caret(&mut self, line: LineIdx, col: ColIdx) {
		self.selection = Selection::point(Position::new(line, col));
	}

	/// Selects from anchor to active, each given as (line, col).
	pub fn select(&mut self, anchor: (LineIdx, ColIdx), active: (LineIdx, ColIdx)) {
		self.selection = Selection::new(
			Position::new(anchor.0, anchor.1),
			Position::new(active.0, active.1),
		);
	}

	/// Makes subsequent edits fail without applying.
	pub fn reject_edits(&mut self, reject: bool) {
		self.reject_edits = reject;
	}

	/// The full document text.
	pub fn text(&self) -> String {
		self.content.to_string()
	}

	/// Notifications emitted so far.
	pub fn notices(&self) -> &[Notification] {
		&self.notices
	}

	/// Char index for a position, clamped to document bounds.
	fn char_idx(&self, pos: Position) -> usize {
		let line = pos.line.min(self.content.len_lines().saturating_sub(1));
		let line_len = self.line(line).len_chars();
		self.content.line_to_char(line) + pos.col.min(line_len)
	}
}

impl DocumentAccess for MemoryHost {
	fn line_count(&self) -> usize {
		self.content.len_lines()
	}

	fn line(&self, line: LineIdx) -> RopeSlice<'_> {
		let line = line.min(self.content.len_lines().saturating_sub(1));
		let slice = self.content.line(line);
		let mut end = slice.len_chars();
		while end > 0 && matches!(slice.char(end - 1), '\n' | '\r') {
			end -= 1;
		}
		slice.slice(..end)
	}

	fn text_in(&self, selection: Selection) -> String {
		let start = self.char_idx(selection.start());
		let end = self.char_idx(selection.end());
		self.content.slice(start..end).to_string()
	}

	fn word_range_at(&self, pos: Position) -> Option<Selection> {
		if pos.line >= self.content.len_lines() {
			return None;
		}
		let (start, end) = words::word_range_at(self.line(pos.line), pos.col)?;
		Some(Selection::new(
			Position::new(pos.line, start),
			Position::new(pos.line, end),
		))
	}
}

impl SelectionAccess for MemoryHost {
	fn selection(&self) -> Selection {
		self.selection
	}

	fn set_selection(&mut self, selection: Selection) {
		self.selection = selection;
	}
}

impl EditAccess for MemoryHost {
	fn insert(
		&mut self,
		at: Position,
		text: &str,
	) -> BoxFutureLocal<'_, Result<(), EditRejected>> {
		if self.reject_edits {
			tracing::trace!(line = at.line, col = at.col, "edit rejected");
			return Box::pin(std::future::ready(Err(EditRejected)));
		}
		let idx = self.char_idx(at);
		self.content.insert(idx, text);
		Box::pin(std::future::ready(Ok(())))
	}
}

impl Host for MemoryHost {
	fn active_editor(&mut self) -> Option<&mut dyn EditorOps> {
		if self.focused { Some(self) } else { None }
	}

	fn emit(&mut self, notification: Notification) {
		tracing::debug!(id = notification.def.id, "notification emitted");
		self.notices.push(notification);
	}
}
