use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::Settings;
use crate::player::{PlaybackController, PlaybackEngine, Transport};
use crate::remote::{CommandRelay, CommandSurface, ControlMsg, MprisHandle};
use crate::status::StatusStore;

/// Drive the player until a quit arrives.
///
/// Commands come in on two paths: the MPRIS thread pushes into the control
/// channel, the widget leaves its command in the relay slot, drained once
/// per tick. Rejected commands are logged; the ack goes to whoever issued
/// them, never retried here.
pub fn run<E, S>(
    settings: &Settings,
    player: &Rc<RefCell<PlaybackController<E, S>>>,
    surface: &mut CommandSurface,
    relay: &CommandRelay,
    mpris: &MprisHandle,
    control_rx: &Receiver<ControlMsg>,
) where
    E: PlaybackEngine,
    S: StatusStore,
{
    let tick = Duration::from_millis(settings.player.tick_ms.max(1));
    let mut last_mirrored: Option<(Transport, Option<String>)> = None;

    sync_mpris(mpris, player, &mut last_mirrored);

    loop {
        match control_rx.recv_timeout(tick) {
            Ok(ControlMsg::Command(cmd)) => {
                if let Err(e) = surface.dispatch(cmd) {
                    warn!("remote command failed: {e}");
                }
                sync_mpris(mpris, player, &mut last_mirrored);
            }
            Ok(ControlMsg::Quit) => break,
            Err(RecvTimeoutError::Timeout) => {
                if let Some(cmd) = relay.take() {
                    debug!("widget command: {cmd:?}");
                    if let Err(e) = surface.dispatch(cmd) {
                        warn!("widget command failed: {e}");
                    }
                }
                sync_mpris(mpris, player, &mut last_mirrored);
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}

/// Mirror transport and current track into the MPRIS properties, but only
/// when something changed since the last push.
fn sync_mpris<E, S>(
    mpris: &MprisHandle,
    player: &Rc<RefCell<PlaybackController<E, S>>>,
    last: &mut Option<(Transport, Option<String>)>,
) where
    E: PlaybackEngine,
    S: StatusStore,
{
    let (transport, title, artist) = {
        let p = player.borrow();
        (
            p.transport(),
            p.current().map(|t| t.title.clone()),
            p.current().and_then(|t| t.artist.clone()),
        )
    };

    let state = (transport, title.clone());
    if last.as_ref() == Some(&state) {
        return;
    }
    mpris.set_playback(transport);
    mpris.set_track(title, artist);
    *last = Some(state);
}
