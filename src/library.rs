//! Track model and library scanning.
//!
//! `probe` turns a single file into a `Track` (tag extraction never fails a
//! track as a whole); `scan` walks a directory and builds the playlist.

mod model;
mod scan;

pub use model::Track;
pub use scan::{probe, scan};
