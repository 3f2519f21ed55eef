//! User-facing notifications.
//!
//! Definitions are static and referenced by typed keys, so call sites cannot
//! emit an unregistered notification id.

/// Severity level for notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
	/// Informational message (default).
	#[default]
	Info,
	/// Warning message.
	Warn,
	/// Error message.
	Error,
}

/// Static notification definition.
#[derive(Debug)]
pub struct NotificationDef {
	/// Unique identifier for this notification type.
	pub id: &'static str,
	/// Severity level.
	pub level: Level,
}

impl NotificationDef {
	/// Creates a new notification definition.
	pub const fn new(id: &'static str, level: Level) -> Self {
		Self { id, level }
	}
}

/// Runtime notification instance ready to display.
#[derive(Debug, Clone)]
pub struct Notification {
	/// Reference to the static definition.
	pub def: &'static NotificationDef,
	/// The message content.
	pub message: String,
}

impl Notification {
	/// Creates a new notification instance.
	pub fn new(def: &'static NotificationDef, message: impl Into<String>) -> Self {
		Self {
			def,
			message: message.into(),
		}
	}

	/// Returns the notification level.
	pub fn level(&self) -> Level {
		self.def.level
	}
}

/// Typed key referencing a notification definition with a static message.
#[derive(Debug, Clone, Copy)]
pub struct NotificationKey {
	def: &'static NotificationDef,
	message: &'static str,
}

impl NotificationKey {
	/// Creates a new notification key with a static message.
	pub const fn new(def: &'static NotificationDef, message: &'static str) -> Self {
		Self { def, message }
	}

	/// Creates a notification instance from this key.
	pub fn emit(self) -> Notification {
		Notification::new(self.def, self.message)
	}
}

impl From<NotificationKey> for Notification {
	fn from(key: NotificationKey) -> Self {
		key.emit()
	}
}

/// Built-in notification keys.
pub mod keys {
	use super::{Level, NotificationDef, NotificationKey};

	static NO_ACTIVE_EDITOR_DEF: NotificationDef =
		NotificationDef::new("logmoji::no_active_editor", Level::Info);

	/// Shown when a command fires without a focused editor.
	pub const NO_ACTIVE_EDITOR: NotificationKey =
		NotificationKey::new(&NO_ACTIVE_EDITOR_DEF, "No active editor found.");
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn key_carries_definition() {
		let notification = keys::NO_ACTIVE_EDITOR.emit();
		assert_eq!(notification.level(), Level::Info);
		assert_eq!(notification.def.id, "logmoji::no_active_editor");
		assert_eq!(notification.message, "No active editor found.");
	}
}
