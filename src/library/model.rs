use std::path::PathBuf;
use std::time::Duration;

/// A single playable track, immutable once probed.
///
/// The `path` is the track's identity: playlist navigation compares tracks
/// by locator equality, never by title.
#[derive(Clone)]
pub struct Track {
    pub path: PathBuf,
    pub title: String,
    pub artist: Option<String>,
    /// Embedded cover art, if the file carries one.
    pub artwork: Option<Vec<u8>>,
    pub duration: Option<Duration>,
}
