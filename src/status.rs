//! The shared "now playing" status slot.
//!
//! A single snapshot, overwritten whole on every publish: the player writes
//! it, widget processes read it with no lock and no live connection. Readers
//! must treat whatever they get as last-known, possibly arbitrarily old.

mod file;
mod snapshot;
mod store;

pub use file::FileStore;
pub use snapshot::{PLACEHOLDER_TITLE, StatusSnapshot};
pub use store::{MemoryStore, StatusStore};

#[cfg(test)]
mod tests;
