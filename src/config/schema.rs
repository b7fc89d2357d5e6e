use std::path::PathBuf;

use serde::Deserialize;

use super::load::default_status_dir;

const STATUS_FILE: &str = "nowplaying.toml";
const COMMAND_FILE: &str = "command.toml";

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/segno/config.toml` or
/// `~/.config/segno/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SEGNO__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub player: PlayerSettings,
    pub status: StatusSettings,
    pub widget: WidgetSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
            recursive: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Start playing the first scanned track on launch.
    pub autoplay: bool,
    /// Player loop tick in milliseconds; bounds how quickly widget-relayed
    /// commands are picked up.
    pub tick_ms: u64,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            autoplay: true,
            tick_ms: 200,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatusSettings {
    /// Directory holding the shared status and command slots. When unset,
    /// `$XDG_RUNTIME_DIR/segno` (or `/tmp/segno`) is used, so both binaries
    /// agree without any configuration.
    pub dir: Option<String>,
}

impl StatusSettings {
    pub fn resolve_dir(&self) -> PathBuf {
        match &self.dir {
            Some(dir) => PathBuf::from(dir),
            None => default_status_dir(),
        }
    }

    /// Path of the now-playing status slot.
    pub fn status_path(&self) -> PathBuf {
        self.resolve_dir().join(STATUS_FILE)
    }

    /// Path of the widget-to-player command slot.
    pub fn command_path(&self) -> PathBuf {
        self.resolve_dir().join(COMMAND_FILE)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    /// Widget refresh cadence in milliseconds.
    pub refresh_ms: u64,
    /// Number of seconds the widget scrubs per arrow key press.
    pub scrub_seconds: u64,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            refresh_ms: 1000,
            scrub_seconds: 5,
        }
    }
}
