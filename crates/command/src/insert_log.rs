//! The log-insertion command.
//!
//! One invocation reads the focused document and selection, decides what
//! expression (if any) to log, inserts a new statement line after the anchor
//! line, and repositions the caret inside the inserted call.
//!
//! The only await point is edit application. A second trigger arriving before
//! a first edit resolves is not guarded against; hosts whose event loops can
//! interleave triggers inherit that race.

use logmoji_host::{EditorOps, Host, keys};
use logmoji_primitives::{LineIdx, Position, Selection, indent_prefix};

use crate::markers::MarkerRotation;
use crate::statement;

/// Static command metadata, for hosts that index commands by name.
#[derive(Debug, Clone, Copy)]
pub struct CommandDef {
	/// Identifier exposed to the host's palette and keybinding system.
	pub name: &'static str,
	/// Human-readable description.
	pub description: &'static str,
}

/// The one command this crate defines. It takes no arguments and returns
/// nothing to the host.
pub const INSERT_LOG: CommandDef = CommandDef {
	name: "console-log-emoji.log",
	description: "Insert a console.log with a rotating emoji marker",
};

/// What a single invocation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
	/// Statement inserted and caret repositioned.
	Applied,
	/// No editor focused; an informational notice was shown instead.
	NoActiveEditor,
	/// The host rejected the edit. The rotation has already advanced; the
	/// document and selection are untouched and nothing is surfaced.
	EditRejected,
}

/// The command plus the rotation it draws markers from.
///
/// Construct one at registration time and route every trigger through it; the
/// rotation is shared across all documents the host opens.
#[derive(Debug, Default)]
pub struct InsertLogCommand {
	rotation: MarkerRotation,
}

impl InsertLogCommand {
	/// Creates the command with a fresh rotation.
	pub fn new() -> Self {
		tracing::info!(command = INSERT_LOG.name, "log-insertion command active");
		Self {
			rotation: MarkerRotation::new(),
		}
	}

	/// Runs one invocation against `host`.
	pub async fn run(&self, host: &mut dyn Host) -> CommandOutcome {
		// Two lookups: the first borrow of `host` must end before `emit`
		// can take it.
		if host.active_editor().is_none() {
			host.emit(keys::NO_ACTIVE_EDITOR.into());
			return CommandOutcome::NoActiveEditor;
		}
		let Some(editor) = host.active_editor() else {
			return CommandOutcome::NoActiveEditor;
		};

		let selection = editor.selection();
		let (text_to_log, anchor) = choose_target(&*editor, selection);
		let indent = insertion_indent(&*editor, anchor);

		// The rotation advances exactly once per invocation past the editor
		// gate, even if the edit below fails.
		let marker = self.rotation.advance();
		let statement = statement::build(marker, text_to_log.as_deref());
		tracing::debug!(
			line = anchor,
			expr = text_to_log.as_deref().unwrap_or_default(),
			marker,
			"inserting log statement"
		);

		let line_end = Position::new(anchor, editor.line(anchor).len_chars());
		let inserted = format!("\n{indent}{statement}");
		if let Err(rejected) = editor.insert(line_end, &inserted).await {
			tracing::warn!(line = anchor, error = %rejected, "log insertion not applied");
			return CommandOutcome::EditRejected;
		}

		let caret = Position::new(anchor + 1, statement::caret_col(&indent, &statement));
		editor.set_selection(Selection::point(caret));
		CommandOutcome::Applied
	}
}

/// Picks the expression to log and the line to insert after.
///
/// A non-empty selection with non-whitespace content wins: its trimmed text is
/// logged and its end line anchors the insertion. Otherwise (bare caret, or a
/// selection covering only whitespace) the caret line anchors, and the word
/// touching the caret is logged when one exists.
fn choose_target(editor: &dyn EditorOps, selection: Selection) -> (Option<String>, LineIdx) {
	if !selection.is_empty() {
		let trimmed = editor.text_in(selection).trim().to_string();
		if !trimmed.is_empty() {
			return (Some(trimmed), selection.end().line);
		}
	}
	let caret = selection.active;
	let word = editor
		.word_range_at(caret)
		.map(|range| editor.text_in(range));
	(word, caret.line)
}

/// Indentation for the inserted line.
///
/// The anchor line's leading whitespace, unless the line below it is indented
/// strictly deeper. A deeper next line means the anchor opens a block, so the
/// statement belongs at the block's nesting.
fn insertion_indent(editor: &dyn EditorOps, anchor: LineIdx) -> String {
	let indent = indent_prefix(editor.line(anchor));
	let below = anchor + 1;
	if below < editor.line_count() {
		let below_indent = indent_prefix(editor.line(below));
		if below_indent.chars().count() > indent.chars().count() {
			return below_indent;
		}
	}
	indent
}
