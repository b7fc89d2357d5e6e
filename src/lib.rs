//! segno: a small local music player with an out-of-process now-playing widget.
//!
//! The player binary owns the playlist and the audio engine, takes transport
//! commands from the OS (MPRIS) and from the widget, and mirrors the current
//! track into a shared on-disk status slot. The widget binary renders that
//! slot without any live connection to the player.

pub mod config;
pub mod library;
pub mod player;
pub mod remote;
pub mod runtime;
pub mod status;
pub mod widget;
