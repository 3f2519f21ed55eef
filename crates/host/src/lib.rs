//! Host editor abstraction.
//!
//! Commands talk to whatever editor embeds them through the narrow capability
//! traits in [`capabilities`], so the command logic stays host-agnostic and
//! testable. [`MemoryHost`] is the in-memory reference implementation used by
//! tests and headless embedding.

/// Capability traits a host editor provides to commands.
pub mod capabilities;
/// In-memory, rope-backed host.
pub mod memory;
/// User-facing notifications.
pub mod notifications;

pub use capabilities::{DocumentAccess, EditAccess, EditorOps, Host, SelectionAccess};
pub use memory::MemoryHost;
pub use notifications::{Level, Notification, NotificationDef, NotificationKey, keys};
