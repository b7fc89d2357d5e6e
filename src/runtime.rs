//! Player composition root.
//!
//! Everything is constructed and wired here and handed down explicitly: the
//! engine, the status store, the controller, the command surface and the
//! control channel. Nothing reaches for a global.

use std::cell::RefCell;
use std::env;
use std::path::Path;
use std::rc::Rc;
use std::sync::mpsc;

use tracing::{info, warn};

use crate::config::Settings;
use crate::library;
use crate::player::{PlaybackController, PlaybackEngine, RodioEngine};
use crate::remote::{
    CommandKind, CommandRelay, CommandSurface, ControlMsg, RemoteCommand, spawn_mpris,
};
use crate::status::{FileStore, StatusStore};

mod command_loop;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let settings = Settings::load_or_default();
    let dir = env::args().nth(1).unwrap_or_else(|| {
        env::current_dir()
            .ok()
            .and_then(|p| p.to_str().map(|s| s.to_string()))
            .unwrap_or_else(|| "Music".to_string())
    });

    let tracks = library::scan(Path::new(&dir), &settings.library);
    info!("scanned {} tracks under {dir}", tracks.len());

    let engine = RodioEngine::new()?;
    let store = FileStore::new(settings.status.status_path());
    let mut controller = PlaybackController::new(engine, store);

    if let Some(first) = tracks.first().cloned() {
        controller.set_playlist(tracks, first.clone());
        if settings.player.autoplay {
            if let Err(e) = controller.play_track(&first) {
                warn!("autoplay failed: {e}");
            }
        }
    } else {
        warn!("no tracks found under {dir}");
    }

    let player = Rc::new(RefCell::new(controller));
    let mut surface = CommandSurface::new();
    register_transport(&mut surface, &player);

    let (control_tx, control_rx) = mpsc::channel::<ControlMsg>();
    let mpris = spawn_mpris(control_tx.clone());

    let quit_tx = control_tx.clone();
    ctrlc::set_handler(move || {
        let _ = quit_tx.send(ControlMsg::Quit);
    })?;

    let relay = CommandRelay::new(settings.status.command_path());

    command_loop::run(&settings, &player, &mut surface, &relay, &mpris, &control_rx);

    // Leave the shared slot reset rather than frozen mid-track.
    player.borrow_mut().stop();
    Ok(())
}

/// Wire the command vocabulary to the controller's matching operations.
fn register_transport<E, S>(
    surface: &mut CommandSurface,
    player: &Rc<RefCell<PlaybackController<E, S>>>,
) where
    E: PlaybackEngine + 'static,
    E::Session: 'static,
    S: StatusStore + 'static,
{
    let p = player.clone();
    surface.register(CommandKind::Play, move |_| p.borrow_mut().play());
    let p = player.clone();
    surface.register(CommandKind::Pause, move |_| p.borrow_mut().pause());
    let p = player.clone();
    surface.register(CommandKind::Next, move |_| p.borrow_mut().next());
    let p = player.clone();
    surface.register(CommandKind::Previous, move |_| p.borrow_mut().previous());
    let p = player.clone();
    surface.register(CommandKind::Seek, move |cmd| match cmd {
        RemoteCommand::Seek(to) => p.borrow_mut().seek(to),
        _ => Ok(()),
    });
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("segno=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
