use std::collections::HashMap;
use std::sync::{Arc, Mutex, mpsc::Sender};
use std::time::Duration;

use async_io::{Timer, block_on};
use tracing::warn;
use zbus::{Connection, interface};
use zvariant::{ObjectPath, OwnedValue, Value};

use crate::player::Transport;

use super::command::RemoteCommand;

/// Messages flowing from external surfaces into the player loop.
#[derive(Debug, Clone)]
pub enum ControlMsg {
    Command(RemoteCommand),
    Quit,
}

/// Fixed track object path; segno exposes a single logical slot, not a
/// track list.
const TRACK_ID: &str = "/org/mpris/MediaPlayer2/segno/track/0";

#[derive(Debug, Default)]
struct SharedState {
    transport: Transport,
    title: Option<String>,
    artist: Option<String>,
}

/// Handle used by the player loop to mirror state into the MPRIS properties.
pub struct MprisHandle {
    state: Arc<Mutex<SharedState>>,
}

impl MprisHandle {
    pub fn set_playback(&self, transport: Transport) {
        if let Ok(mut s) = self.state.lock() {
            s.transport = transport;
        }
    }

    pub fn set_track(&self, title: Option<String>, artist: Option<String>) {
        if let Ok(mut s) = self.state.lock() {
            s.title = title;
            s.artist = artist;
        }
    }
}

struct RootIface {
    tx: Sender<ControlMsg>,
}

#[interface(name = "org.mpris.MediaPlayer2")]
impl RootIface {
    fn raise(&self) {
        // No-op for a headless player.
    }

    fn quit(&self) {
        let _ = self.tx.send(ControlMsg::Quit);
    }

    #[zbus(property)]
    fn can_quit(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_raise(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn has_track_list(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn identity(&self) -> &str {
        "segno"
    }

    #[zbus(property)]
    fn supported_uri_schemes(&self) -> Vec<String> {
        vec![]
    }

    #[zbus(property)]
    fn supported_mime_types(&self) -> Vec<String> {
        vec![]
    }
}

struct PlayerIface {
    tx: Sender<ControlMsg>,
    state: Arc<Mutex<SharedState>>,
}

impl PlayerIface {
    fn send(&self, command: RemoteCommand) {
        let _ = self.tx.send(ControlMsg::Command(command));
    }

    fn mirrored_transport(&self) -> Transport {
        self.state.lock().map(|s| s.transport).unwrap_or_default()
    }
}

#[interface(name = "org.mpris.MediaPlayer2.Player")]
impl PlayerIface {
    fn next(&self) {
        self.send(RemoteCommand::Next);
    }

    fn previous(&self) {
        self.send(RemoteCommand::Previous);
    }

    fn play(&self) {
        self.send(RemoteCommand::Play);
    }

    fn pause(&self) {
        self.send(RemoteCommand::Pause);
    }

    fn play_pause(&self) {
        let command = match self.mirrored_transport() {
            Transport::Playing => RemoteCommand::Pause,
            Transport::Paused | Transport::Stopped => RemoteCommand::Play,
        };
        self.send(command);
    }

    fn stop(&self) {
        // Stop is not part of the shared transport vocabulary; the nearest
        // command is a pause.
        self.send(RemoteCommand::Pause);
    }

    fn set_position(&self, _track_id: ObjectPath<'_>, position: i64) {
        let micros = position.max(0) as u64;
        self.send(RemoteCommand::Seek(Duration::from_micros(micros)));
    }

    #[zbus(property)]
    fn playback_status(&self) -> &str {
        match self.mirrored_transport() {
            Transport::Stopped => "Stopped",
            Transport::Playing => "Playing",
            Transport::Paused => "Paused",
        }
    }

    #[zbus(property)]
    fn can_control(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_play(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_pause(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_go_next(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_go_previous(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_seek(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn metadata(&self) -> HashMap<String, OwnedValue> {
        let mut map = HashMap::new();

        let (title, artist) = self
            .state
            .lock()
            .map(|s| (s.title.clone(), s.artist.clone()))
            .unwrap_or((None, None));

        if let Ok(track_id) = ObjectPath::try_from(TRACK_ID) {
            if let Ok(value) = OwnedValue::try_from(Value::from(track_id)) {
                map.insert("mpris:trackid".to_string(), value);
            }
        }
        if let Ok(value) = OwnedValue::try_from(Value::from(title.unwrap_or_default())) {
            map.insert("xesam:title".to_string(), value);
        }
        let artists: Vec<String> = artist.into_iter().collect();
        if let Ok(value) = OwnedValue::try_from(Value::from(artists)) {
            map.insert("xesam:artist".to_string(), value);
        }
        map
    }
}

/// Register segno on the session bus and keep serving until the process
/// exits. Returns a handle the player loop uses to mirror its state.
pub fn spawn_mpris(tx: Sender<ControlMsg>) -> MprisHandle {
    let state = Arc::new(Mutex::new(SharedState::default()));

    let state_for_thread = state.clone();
    std::thread::spawn(move || {
        block_on(async move {
            let path = "/org/mpris/MediaPlayer2";

            let connection = match Connection::session().await {
                Ok(c) => c,
                Err(e) => {
                    warn!("MPRIS: failed to connect to session bus: {e}");
                    return;
                }
            };

            if let Err(e) = connection.request_name("org.mpris.MediaPlayer2.segno").await {
                warn!("MPRIS: failed to acquire name: {e}");
                return;
            }

            let object_server = connection.object_server();

            if let Err(e) = object_server.at(path, RootIface { tx: tx.clone() }).await {
                warn!("MPRIS: failed to register root iface: {e}");
                return;
            }

            if let Err(e) = object_server
                .at(
                    path,
                    PlayerIface {
                        tx,
                        state: state_for_thread,
                    },
                )
                .await
            {
                warn!("MPRIS: failed to register player iface: {e}");
                return;
            }

            // Keep the service alive.
            loop {
                Timer::after(Duration::from_secs(3600)).await;
            }
        });
    });

    MprisHandle { state }
}

#[cfg(test)]
mod tests;
