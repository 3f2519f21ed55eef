//! Capability traits a host editor provides to commands.
//!
//! The traits are split by concern and aggregated by [`EditorOps`]; [`Host`]
//! is the outermost surface a command receives. A host with no focused editor
//! returns `None` from [`Host::active_editor`], which commands treat as a
//! terminal, non-error condition.

use logmoji_primitives::{BoxFutureLocal, EditRejected, LineIdx, Position, RopeSlice, Selection};

use crate::notifications::Notification;

/// Read access to the focused document's text.
pub trait DocumentAccess {
	/// Number of lines in the document, counting the empty line after a
	/// trailing newline.
	fn line_count(&self) -> usize;

	/// Text of one line, without its terminating line break.
	fn line(&self, line: LineIdx) -> RopeSlice<'_>;

	/// Text covered by a selection, possibly spanning lines. Positions outside
	/// the document are clamped, never an error.
	fn text_in(&self, selection: Selection) -> String;

	/// The word touching a position, per the host's word-boundary rules.
	fn word_range_at(&self, pos: Position) -> Option<Selection>;
}

/// Read/write access to the focused view's selection.
pub trait SelectionAccess {
	/// The current selection (collapsed for a bare caret).
	fn selection(&self) -> Selection;

	/// Replaces the current selection.
	fn set_selection(&mut self, selection: Selection);
}

/// Text mutation on the focused document.
pub trait EditAccess {
	/// Inserts `text` at `at`, completing at some later point.
	///
	/// Resolves to [`EditRejected`] when the host declines the edit (e.g. a
	/// stale document version); the document is untouched in that case.
	fn insert(&mut self, at: Position, text: &str) -> BoxFutureLocal<'_, Result<(), EditRejected>>;
}

/// Everything a command needs from one focused editor.
pub trait EditorOps: DocumentAccess + SelectionAccess + EditAccess {}

impl<T: DocumentAccess + SelectionAccess + EditAccess> EditorOps for T {}

/// The host surface handed to a command invocation.
pub trait Host {
	/// The focused editor, or `None` when no editor has focus.
	fn active_editor(&mut self) -> Option<&mut dyn EditorOps>;

	/// Shows a notification to the user.
	fn emit(&mut self, notification: Notification);
}
