//! Marker glyphs and their rotation counter.

use std::sync::atomic::{AtomicUsize, Ordering};

/// The fixed, ordered marker list. Each generated statement embeds the next
/// glyph in this sequence, cycling forever.
pub const MARKERS: &[&str] = &[
	"😀", "😂", "😊", "😎", "🤔", "👍", "✨", "🚀", "🐞", "👀", "🐘", "✅", "❌", "⚠️", "➡️",
	"💡", "🔧", "🪵", "🌲", "🧊", "🔥", "💧", "🌍",
];

/// Cyclic counter over [`MARKERS`].
///
/// One rotation is shared by every invocation of the command it is handed to,
/// across all documents. A fresh rotation sits one position before the first
/// glyph, so its first advance yields `MARKERS[0]`. An advance is permanent:
/// a later failure of the edit it was drawn for does not rewind it.
#[derive(Debug, Default)]
pub struct MarkerRotation {
	/// Number of advances so far.
	count: AtomicUsize,
}

impl MarkerRotation {
	/// Creates a rotation positioned one before the first glyph.
	pub const fn new() -> Self {
		Self {
			count: AtomicUsize::new(0),
		}
	}

	/// Advances the rotation by one position and returns the glyph it landed on.
	pub fn advance(&self) -> &'static str {
		let n = self.count.fetch_add(1, Ordering::Relaxed);
		MARKERS[n % MARKERS.len()]
	}
}
