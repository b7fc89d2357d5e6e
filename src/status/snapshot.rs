use std::time::Duration;

/// Title shown by readers when nothing has ever been published.
pub const PLACEHOLDER_TITLE: &str = "Nothing playing";

/// A denormalized projection of the player's current state.
///
/// This is what crosses the process boundary: whatever the widget renders
/// comes from here and nowhere else. The snapshot is lossy on purpose
/// (paused and stopped both read as "not playing").
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSnapshot {
    pub title: String,
    pub artist: String,
    pub artwork: Option<Vec<u8>>,
    pub playing: bool,
    pub elapsed: Duration,
    pub duration: Option<Duration>,
}

impl StatusSnapshot {
    /// The snapshot readers fall back to on an empty or unreadable store.
    pub fn placeholder() -> Self {
        Self {
            title: PLACEHOLDER_TITLE.to_string(),
            artist: String::new(),
            artwork: None,
            playing: false,
            elapsed: Duration::ZERO,
            duration: None,
        }
    }
}

impl Default for StatusSnapshot {
    fn default() -> Self {
        Self::placeholder()
    }
}
