use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::snapshot::StatusSnapshot;
use super::store::StatusStore;

/// File-backed status slot, visible across process boundaries.
///
/// The whole snapshot is serialized to TOML and renamed over the slot path,
/// so a concurrent reader always sees either the previous record or the new
/// one, never a torn write. Write failures are logged and swallowed: the
/// mirror degrades silently, the player keeps going.
pub struct FileStore {
    path: PathBuf,
}

/// On-disk record. Every key is optional on read: a reader must accept a
/// record written by an older or newer player and fill gaps with defaults.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StatusRecord {
    #[serde(rename = "nowPlayingTitle", default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(rename = "nowPlayingArtist", default, skip_serializing_if = "Option::is_none")]
    artist: Option<String>,
    /// Base64-encoded image bytes.
    #[serde(rename = "nowPlayingArtwork", default, skip_serializing_if = "Option::is_none")]
    artwork: Option<String>,
    #[serde(rename = "nowPlayingIsPlaying", default, skip_serializing_if = "Option::is_none")]
    is_playing: Option<bool>,
    #[serde(rename = "nowPlayingElapsedSecs", default, skip_serializing_if = "Option::is_none")]
    elapsed_secs: Option<f64>,
    #[serde(rename = "nowPlayingDurationSecs", default, skip_serializing_if = "Option::is_none")]
    duration_secs: Option<f64>,
}

impl StatusRecord {
    fn from_snapshot(snapshot: &StatusSnapshot) -> Self {
        Self {
            title: Some(snapshot.title.clone()),
            artist: Some(snapshot.artist.clone()),
            artwork: snapshot.artwork.as_deref().map(|bytes| BASE64.encode(bytes)),
            is_playing: Some(snapshot.playing),
            elapsed_secs: Some(snapshot.elapsed.as_secs_f64()),
            duration_secs: snapshot.duration.map(|d| d.as_secs_f64()),
        }
    }

    fn into_snapshot(self) -> StatusSnapshot {
        let placeholder = StatusSnapshot::placeholder();
        let artwork = self.artwork.and_then(|encoded| {
            BASE64
                .decode(encoded.as_bytes())
                .map_err(|e| warn!("discarding undecodable artwork: {e}"))
                .ok()
        });
        StatusSnapshot {
            title: self.title.unwrap_or(placeholder.title),
            artist: self.artist.unwrap_or(placeholder.artist),
            artwork,
            playing: self.is_playing.unwrap_or(false),
            elapsed: self
                .elapsed_secs
                .filter(|s| s.is_finite() && *s >= 0.0)
                .map(Duration::from_secs_f64)
                .unwrap_or(Duration::ZERO),
            duration: self
                .duration_secs
                .filter(|s| s.is_finite() && *s >= 0.0)
                .map(Duration::from_secs_f64),
        }
    }
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn write_record(&self, record: &StatusRecord) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let body = toml::to_string(record).map_err(io::Error::other)?;

        // Temp file in the same directory, so the rename is an atomic
        // whole-value replace.
        let tmp = self.path.with_extension("toml.tmp");
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &self.path)
    }
}

impl StatusStore for FileStore {
    fn publish(&self, snapshot: &StatusSnapshot) {
        let record = StatusRecord::from_snapshot(snapshot);
        if let Err(e) = self.write_record(&record) {
            warn!("status publish to {} failed: {e}", self.path.display());
        }
    }

    fn read_latest(&self) -> StatusSnapshot {
        let Ok(body) = fs::read_to_string(&self.path) else {
            return StatusSnapshot::placeholder();
        };
        match toml::from_str::<StatusRecord>(&body) {
            Ok(record) => record.into_snapshot(),
            Err(e) => {
                debug!("unreadable status record at {}: {e}", self.path.display());
                StatusSnapshot::placeholder()
            }
        }
    }
}
