//! Playback: the engine capability and the controller that drives it.
//!
//! The controller is the single owner of playlist, current-track pointer and
//! transport state. Every externally observable transport change it makes is
//! followed, in the same call, by exactly one status publish.

mod controller;
mod engine;
mod output;

pub use controller::{PlaybackController, Transport};
pub use engine::{EngineError, PlaybackEngine};
pub use output::RodioEngine;
