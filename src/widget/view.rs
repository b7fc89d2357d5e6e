use std::time::Duration;

use crate::remote::RemoteCommand;
use crate::status::StatusSnapshot;

/// What one render pass shows, derived from a single snapshot.
pub struct WidgetView {
    pub title: String,
    pub artist: String,
    pub status: String,
    pub has_artwork: bool,
}

impl WidgetView {
    pub fn from_snapshot(snapshot: &StatusSnapshot) -> Self {
        let glyph = if snapshot.playing { "▶" } else { "⏸" };
        let status = match snapshot.duration {
            Some(total) => format!(
                "{glyph} {} / {}",
                format_mmss(snapshot.elapsed),
                format_mmss(total)
            ),
            None => format!("{glyph} {}", format_mmss(snapshot.elapsed)),
        };
        Self {
            title: snapshot.title.clone(),
            artist: snapshot.artist.clone(),
            status,
            has_artwork: snapshot.artwork.is_some(),
        }
    }
}

/// Format a `Duration` as `MM:SS`.
pub(crate) fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Pick play or pause from the last rendered snapshot's playing flag. The
/// flag may lag the real transport by one refresh cycle; the command is safe
/// to repeat either way.
pub fn toggle_command(snapshot: &StatusSnapshot) -> RemoteCommand {
    if snapshot.playing {
        RemoteCommand::Pause
    } else {
        RemoteCommand::Play
    }
}

/// Absolute scrub target computed from the last rendered elapsed time,
/// clamped to the track bounds.
pub fn scrub_target(snapshot: &StatusSnapshot, delta_secs: i64) -> Duration {
    let elapsed = snapshot.elapsed.as_secs() as i64;
    let mut target = (elapsed + delta_secs).max(0) as u64;
    if let Some(total) = snapshot.duration {
        target = target.min(total.as_secs());
    }
    Duration::from_secs(target)
}
