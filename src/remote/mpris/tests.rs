use std::sync::mpsc;

use super::*;

fn iface() -> (PlayerIface, mpsc::Receiver<ControlMsg>) {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let (tx, rx) = mpsc::channel::<ControlMsg>();
    (PlayerIface { tx, state }, rx)
}

#[test]
fn playback_status_maps_transport_to_spec_strings() {
    let (iface, _rx) = iface();

    {
        let mut s = iface.state.lock().unwrap();
        s.transport = Transport::Stopped;
    }
    assert_eq!(iface.playback_status(), "Stopped");

    {
        let mut s = iface.state.lock().unwrap();
        s.transport = Transport::Playing;
    }
    assert_eq!(iface.playback_status(), "Playing");

    {
        let mut s = iface.state.lock().unwrap();
        s.transport = Transport::Paused;
    }
    assert_eq!(iface.playback_status(), "Paused");
}

#[test]
fn play_pause_picks_the_command_from_the_mirrored_transport() {
    let (iface, rx) = iface();

    iface.play_pause();
    assert!(matches!(
        rx.recv().unwrap(),
        ControlMsg::Command(RemoteCommand::Play)
    ));

    {
        let mut s = iface.state.lock().unwrap();
        s.transport = Transport::Playing;
    }
    iface.play_pause();
    assert!(matches!(
        rx.recv().unwrap(),
        ControlMsg::Command(RemoteCommand::Pause)
    ));
}

#[test]
fn set_position_forwards_an_absolute_seek() {
    let (iface, rx) = iface();

    let track_id = ObjectPath::try_from(TRACK_ID).unwrap();
    iface.set_position(track_id, 90_000_000);

    match rx.recv().unwrap() {
        ControlMsg::Command(RemoteCommand::Seek(to)) => {
            assert_eq!(to, Duration::from_secs(90));
        }
        other => panic!("unexpected message: {other:?}"),
    }
}

#[test]
fn set_position_clamps_negative_positions_to_zero() {
    let (iface, rx) = iface();

    let track_id = ObjectPath::try_from(TRACK_ID).unwrap();
    iface.set_position(track_id, -5);

    match rx.recv().unwrap() {
        ControlMsg::Command(RemoteCommand::Seek(to)) => assert_eq!(to, Duration::ZERO),
        other => panic!("unexpected message: {other:?}"),
    }
}

#[test]
fn metadata_includes_expected_keys() {
    let (iface, _rx) = iface();
    {
        let mut s = iface.state.lock().unwrap();
        s.title = Some("Title".to_string());
        s.artist = Some("Artist".to_string());
    }

    let map = iface.metadata();
    for k in ["mpris:trackid", "xesam:title", "xesam:artist"] {
        assert!(map.contains_key(k), "missing key: {k}");
    }
}
