use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::snapshot::StatusSnapshot;

/// One-slot status store: last-writer-wins, readers tolerate staleness.
///
/// `publish` is fire-and-forget: implementations must not fail the caller and
/// must not block it on reader activity. `read_latest` never panics; with
/// nothing ever published it returns the placeholder snapshot.
pub trait StatusStore {
    fn publish(&self, snapshot: &StatusSnapshot);
    fn read_latest(&self) -> StatusSnapshot;
}

impl<S: StatusStore> StatusStore for std::sync::Arc<S> {
    fn publish(&self, snapshot: &StatusSnapshot) {
        (**self).publish(snapshot);
    }

    fn read_latest(&self) -> StatusSnapshot {
        (**self).read_latest()
    }
}

/// In-memory store standing in for the cross-process slot in tests.
///
/// Keeps a publish counter so tests can pin down the "exactly one publish
/// per operation" contract.
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<StatusSnapshot>>,
    publishes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `publish` calls seen so far.
    pub fn publish_count(&self) -> usize {
        self.publishes.load(Ordering::SeqCst)
    }
}

impl StatusStore for MemoryStore {
    fn publish(&self, snapshot: &StatusSnapshot) {
        self.publishes.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(snapshot.clone());
        }
    }

    fn read_latest(&self) -> StatusSnapshot {
        self.slot
            .lock()
            .ok()
            .and_then(|slot| slot.clone())
            .unwrap_or_default()
    }
}
