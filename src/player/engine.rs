use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

/// Failures surfaced by a playback engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine could not load the given locator into a playable session.
    #[error("failed to load {path}: {reason}")]
    Load { path: PathBuf, reason: String },

    /// A transport operation on an existing session failed.
    #[error("playback operation failed: {0}")]
    Operation(String),
}

/// The audio backend capability.
///
/// A session is one loaded track; `stop` consumes it and releases whatever
/// the engine holds for it. The engine's playback timeline advances on its
/// own threads; callers only observe it through `current_time`.
pub trait PlaybackEngine {
    type Session;

    fn load(&mut self, locator: &Path) -> Result<Self::Session, EngineError>;
    fn start(&mut self, session: &Self::Session) -> Result<(), EngineError>;
    fn pause(&mut self, session: &Self::Session) -> Result<(), EngineError>;
    fn stop(&mut self, session: Self::Session);
    fn seek(&mut self, session: &Self::Session, to: Duration) -> Result<(), EngineError>;
    fn current_time(&self, session: &Self::Session) -> Duration;
}
