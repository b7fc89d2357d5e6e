use std::time::Duration;

use crate::remote::RemoteCommand;
use crate::status::{PLACEHOLDER_TITLE, StatusSnapshot};

use super::view::format_mmss;
use super::*;

fn playing_snapshot() -> StatusSnapshot {
    StatusSnapshot {
        title: "Gymnopédie No.1".to_string(),
        artist: "Satie".to_string(),
        artwork: Some(vec![1, 2, 3]),
        playing: true,
        elapsed: Duration::from_secs(90),
        duration: Some(Duration::from_secs(200)),
    }
}

#[test]
fn format_mmss_pads_minutes_and_seconds() {
    assert_eq!(format_mmss(Duration::ZERO), "00:00");
    assert_eq!(format_mmss(Duration::from_secs(65)), "01:05");
    assert_eq!(format_mmss(Duration::from_secs(600)), "10:00");
}

#[test]
fn view_from_placeholder_shows_placeholder_strings() {
    let view = WidgetView::from_snapshot(&StatusSnapshot::placeholder());
    assert_eq!(view.title, PLACEHOLDER_TITLE);
    assert_eq!(view.artist, "");
    assert_eq!(view.status, "⏸ 00:00");
    assert!(!view.has_artwork);
}

#[test]
fn view_formats_elapsed_and_duration_when_playing() {
    let view = WidgetView::from_snapshot(&playing_snapshot());
    assert_eq!(view.status, "▶ 01:30 / 03:20");
    assert!(view.has_artwork);
}

#[test]
fn toggle_command_follows_the_rendered_playing_flag() {
    let mut snapshot = playing_snapshot();
    assert_eq!(toggle_command(&snapshot), RemoteCommand::Pause);

    snapshot.playing = false;
    assert_eq!(toggle_command(&snapshot), RemoteCommand::Play);
}

#[test]
fn scrub_target_moves_relative_to_rendered_elapsed() {
    let snapshot = playing_snapshot();
    assert_eq!(scrub_target(&snapshot, 5), Duration::from_secs(95));
    assert_eq!(scrub_target(&snapshot, -5), Duration::from_secs(85));
}

#[test]
fn scrub_target_clamps_to_track_bounds() {
    let snapshot = playing_snapshot();
    assert_eq!(scrub_target(&snapshot, -120), Duration::ZERO);
    assert_eq!(scrub_target(&snapshot, 1000), Duration::from_secs(200));

    // Unknown duration: only the lower bound applies.
    let mut unbounded = playing_snapshot();
    unbounded.duration = None;
    assert_eq!(scrub_target(&unbounded, 1000), Duration::from_secs(1090));
}
