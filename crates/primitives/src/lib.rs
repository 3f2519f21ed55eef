//! Core types for editor commands: positions, selections, and line-text
//! helpers.
//!
//! Coordinates throughout this crate are (line, column) pairs measured in
//! Unicode scalar values, never bytes. Caret arithmetic in downstream crates
//! relies on that.

/// Edit application errors.
pub mod edit;
/// Async future aliases.
pub mod future;
/// Leading-whitespace helpers for insertion indentation.
pub mod indent;
/// Line/column positions in character space.
pub mod position;
/// Selections as anchor/active position pairs.
pub mod selection;
/// Word-boundary detection for the token touching a caret.
pub mod words;

pub use edit::EditRejected;
pub use future::BoxFutureLocal;
pub use indent::indent_prefix;
pub use position::{ColIdx, LineIdx, Position};
pub use ropey::{Rope, RopeSlice};
pub use selection::Selection;
pub use words::{is_word_char, word_range_at};
