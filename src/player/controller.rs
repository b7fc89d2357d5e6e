use std::time::Duration;

use crate::library::Track;
use crate::status::{StatusSnapshot, StatusStore};

use super::engine::{EngineError, PlaybackEngine};

/// Transport state of the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Transport {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// The playback mediator.
///
/// Owns the playlist and the current-track pointer, drives the engine, and
/// mirrors every transport change into the status store. The publish is a
/// strict postcondition of the state change: it happens after the engine
/// call succeeded, once per operation, and not at all on failure. A failed
/// operation leaves the previously published snapshot untouched.
pub struct PlaybackController<E: PlaybackEngine, S: StatusStore> {
    engine: E,
    store: S,
    playlist: Vec<Track>,
    current: Option<Track>,
    transport: Transport,
    session: Option<E::Session>,
}

impl<E: PlaybackEngine, S: StatusStore> PlaybackController<E, S> {
    pub fn new(engine: E, store: S) -> Self {
        Self {
            engine,
            store,
            playlist: Vec::new(),
            current: None,
            transport: Transport::Stopped,
            session: None,
        }
    }

    /// Replace playlist and current pointer wholesale.
    ///
    /// Membership is not validated: a `current` that is not in `tracks`
    /// simply makes `next`/`previous` no-ops until something else plays.
    pub fn set_playlist(&mut self, tracks: Vec<Track>, current: Track) {
        self.playlist = tracks;
        self.current = Some(current);
    }

    pub fn transport(&self) -> Transport {
        self.transport
    }

    pub fn current(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    pub fn elapsed(&self) -> Duration {
        self.session
            .as_ref()
            .map(|s| self.engine.current_time(s))
            .unwrap_or(Duration::ZERO)
    }

    /// Load and start `track`, replacing whatever was playing.
    ///
    /// On engine failure the transport ends up `Stopped` and the error
    /// propagates; the current pointer and the published snapshot keep their
    /// previous values (no half-loaded track leaks out).
    pub fn play_track(&mut self, track: &Track) -> Result<(), EngineError> {
        if let Some(old) = self.session.take() {
            self.engine.stop(old);
        }

        let session = match self.engine.load(&track.path) {
            Ok(session) => session,
            Err(e) => {
                self.transport = Transport::Stopped;
                return Err(e);
            }
        };
        if let Err(e) = self.engine.start(&session) {
            self.engine.stop(session);
            self.transport = Transport::Stopped;
            return Err(e);
        }

        self.session = Some(session);
        self.current = Some(track.clone());
        self.transport = Transport::Playing;
        self.publish();
        Ok(())
    }

    /// Resume the current session. No session: silent no-op.
    pub fn play(&mut self) -> Result<(), EngineError> {
        if self.session.is_none() {
            return Ok(());
        }
        match self.with_session(|engine, session| engine.start(session)) {
            Ok(()) => {
                self.transport = Transport::Playing;
                self.publish();
                Ok(())
            }
            Err(e) => {
                self.release_stopped();
                Err(e)
            }
        }
    }

    /// Suspend the current session. No session: silent no-op.
    pub fn pause(&mut self) -> Result<(), EngineError> {
        if self.session.is_none() {
            return Ok(());
        }
        match self.with_session(|engine, session| engine.pause(session)) {
            Ok(()) => {
                self.transport = Transport::Paused;
                self.publish();
                Ok(())
            }
            Err(e) => {
                self.release_stopped();
                Err(e)
            }
        }
    }

    /// Terminate playback and release the engine session entirely.
    ///
    /// Resets the playback state (current pointer included) and publishes
    /// the placeholder snapshot so readers see the slot go quiet.
    pub fn stop(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        self.engine.stop(session);
        self.current = None;
        self.transport = Transport::Stopped;
        self.publish();
    }

    /// Seek the current session to an absolute position.
    ///
    /// Republishes immediately on success so external observers see the new
    /// elapsed time without waiting for anything else to happen. Without an
    /// active session, seeking is a command failure.
    pub fn seek(&mut self, to: Duration) -> Result<(), EngineError> {
        if self.session.is_none() {
            return Err(EngineError::Operation(
                "no active playback session".to_string(),
            ));
        }
        match self.with_session(|engine, session| engine.seek(session, to)) {
            Ok(()) => {
                self.publish();
                Ok(())
            }
            Err(e) => {
                self.release_stopped();
                Err(e)
            }
        }
    }

    /// Play the track after the current one. Silent no-op on the last track
    /// or when the current track is not in the playlist.
    pub fn next(&mut self) -> Result<(), EngineError> {
        let Some(idx) = self.current_position() else {
            return Ok(());
        };
        if idx + 1 >= self.playlist.len() {
            return Ok(());
        }
        let track = self.playlist[idx + 1].clone();
        self.play_track(&track)
    }

    /// Play the track before the current one. Silent no-op on the first
    /// track or when the current track is not in the playlist.
    pub fn previous(&mut self) -> Result<(), EngineError> {
        let Some(idx) = self.current_position() else {
            return Ok(());
        };
        if idx == 0 {
            return Ok(());
        }
        let track = self.playlist[idx - 1].clone();
        self.play_track(&track)
    }

    fn current_position(&self) -> Option<usize> {
        let current = self.current.as_ref()?;
        self.playlist.iter().position(|t| t.path == current.path)
    }

    fn with_session<T>(
        &mut self,
        op: impl FnOnce(&mut E, &E::Session) -> Result<T, EngineError>,
    ) -> Result<T, EngineError> {
        match self.session.as_ref() {
            Some(session) => op(&mut self.engine, session),
            None => Err(EngineError::Operation(
                "no active playback session".to_string(),
            )),
        }
    }

    fn release_stopped(&mut self) {
        if let Some(session) = self.session.take() {
            self.engine.stop(session);
        }
        self.transport = Transport::Stopped;
    }

    fn publish(&mut self) {
        let snapshot = self.snapshot();
        self.store.publish(&snapshot);
    }

    fn snapshot(&self) -> StatusSnapshot {
        match &self.current {
            Some(track) => StatusSnapshot {
                title: track.title.clone(),
                artist: track.artist.clone().unwrap_or_default(),
                artwork: track.artwork.clone(),
                playing: self.transport == Transport::Playing,
                elapsed: self.elapsed(),
                duration: track.duration,
            },
            None => StatusSnapshot::placeholder(),
        }
    }
}
