#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Log-insertion command.
//!
//! One invocable action: insert a `console.log` statement annotated with the
//! next glyph from a fixed emoji rotation, on a new line after the user's
//! selection or caret, indented to match the surrounding block.

/// The command procedure and its registration metadata.
pub mod insert_log;
/// Marker glyphs and their rotation counter.
pub mod markers;
/// Statement rendering and caret arithmetic.
pub mod statement;

pub use insert_log::{CommandDef, CommandOutcome, INSERT_LOG, InsertLogCommand};
pub use markers::{MARKERS, MarkerRotation};
