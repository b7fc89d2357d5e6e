use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::command::RemoteCommand;

/// One-slot command file between widget and player.
///
/// The widget writes the slot (atomic replace, same mechanics as the status
/// file), the player drains it on its next loop tick. Last writer wins: two
/// taps before a drain collapse into the newer command, which is fine for an
/// idempotent transport vocabulary. Delivery is at-least-once from the
/// widget's point of view: it re-issues on the next key press if nothing
/// happened.
pub struct CommandRelay {
    path: PathBuf,
}

#[derive(Debug, Serialize, Deserialize)]
struct RelayRecord {
    command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position_secs: Option<f64>,
}

impl RelayRecord {
    fn from_command(command: RemoteCommand) -> Self {
        let (name, position_secs) = match command {
            RemoteCommand::Play => ("play", None),
            RemoteCommand::Pause => ("pause", None),
            RemoteCommand::Next => ("next", None),
            RemoteCommand::Previous => ("previous", None),
            RemoteCommand::Seek(to) => ("seek", Some(to.as_secs_f64())),
        };
        Self {
            command: name.to_string(),
            position_secs,
        }
    }

    fn into_command(self) -> Option<RemoteCommand> {
        match self.command.as_str() {
            "play" => Some(RemoteCommand::Play),
            "pause" => Some(RemoteCommand::Pause),
            "next" => Some(RemoteCommand::Next),
            "previous" => Some(RemoteCommand::Previous),
            "seek" => self
                .position_secs
                .filter(|s| s.is_finite() && *s >= 0.0)
                .map(|s| RemoteCommand::Seek(Duration::from_secs_f64(s))),
            other => {
                warn!("ignoring unknown relay command {other:?}");
                None
            }
        }
    }
}

impl CommandRelay {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Write `command` into the slot. Best-effort: a failed write is logged
    /// and dropped, the issuer may simply press the key again.
    pub fn send(&self, command: RemoteCommand) {
        if let Err(e) = self.write_record(&RelayRecord::from_command(command)) {
            warn!("relay write to {} failed: {e}", self.path.display());
        }
    }

    /// Take the pending command out of the slot, if any.
    pub fn take(&self) -> Option<RemoteCommand> {
        let body = fs::read_to_string(&self.path).ok()?;
        if let Err(e) = fs::remove_file(&self.path) {
            debug!("could not clear relay slot {}: {e}", self.path.display());
        }
        match toml::from_str::<RelayRecord>(&body) {
            Ok(record) => record.into_command(),
            Err(e) => {
                warn!("discarding unreadable relay record: {e}");
                None
            }
        }
    }

    fn write_record(&self, record: &RelayRecord) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let body = toml::to_string(record).map_err(io::Error::other)?;
        let tmp = self.path.with_extension("toml.tmp");
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &self.path)
    }
}
