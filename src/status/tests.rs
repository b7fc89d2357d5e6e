use std::time::Duration;

use tempfile::tempdir;

use super::*;

fn sample_snapshot() -> StatusSnapshot {
    StatusSnapshot {
        title: "Clair de Lune".to_string(),
        artist: "Debussy".to_string(),
        artwork: Some(vec![0x89, 0x50, 0x4e, 0x47, 0x00, 0xff, 0x7f]),
        playing: true,
        elapsed: Duration::from_secs(90),
        duration: Some(Duration::from_secs(200)),
    }
}

#[test]
fn memory_store_returns_placeholder_when_untouched() {
    let store = MemoryStore::new();
    let snap = store.read_latest();
    assert_eq!(snap.title, PLACEHOLDER_TITLE);
    assert_eq!(snap.artist, "");
    assert!(snap.artwork.is_none());
    assert!(!snap.playing);
    assert_eq!(store.publish_count(), 0);
}

#[test]
fn memory_store_is_last_writer_wins() {
    let store = MemoryStore::new();

    let mut first = sample_snapshot();
    first.title = "First".to_string();
    store.publish(&first);

    let mut second = sample_snapshot();
    second.title = "Second".to_string();
    second.artwork = None;
    store.publish(&second);

    let latest = store.read_latest();
    assert_eq!(latest.title, "Second");
    assert!(latest.artwork.is_none());
    assert_eq!(store.publish_count(), 2);
}

#[test]
fn file_store_round_trips_snapshot_with_artwork() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path().join("nowplaying.toml"));

    let published = sample_snapshot();
    store.publish(&published);

    let read_back = store.read_latest();
    assert_eq!(read_back.title, "Clair de Lune");
    assert_eq!(read_back.artist, "Debussy");
    assert_eq!(read_back.artwork, published.artwork);
    assert!(read_back.playing);
    assert_eq!(read_back.elapsed, Duration::from_secs(90));
    assert_eq!(read_back.duration, Some(Duration::from_secs(200)));
}

#[test]
fn file_store_returns_placeholder_when_file_missing() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path().join("nowplaying.toml"));

    assert_eq!(store.read_latest(), StatusSnapshot::placeholder());
}

#[test]
fn file_store_returns_placeholder_on_corrupt_record() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nowplaying.toml");
    std::fs::write(&path, "not = [valid {{{ toml").unwrap();

    let store = FileStore::new(&path);
    assert_eq!(store.read_latest(), StatusSnapshot::placeholder());
}

#[test]
fn file_store_fills_missing_keys_with_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nowplaying.toml");
    std::fs::write(&path, "nowPlayingTitle = \"Only a title\"\n").unwrap();

    let snap = FileStore::new(&path).read_latest();
    assert_eq!(snap.title, "Only a title");
    assert_eq!(snap.artist, "");
    assert!(snap.artwork.is_none());
    assert!(!snap.playing);
    assert_eq!(snap.elapsed, Duration::ZERO);
    assert!(snap.duration.is_none());
}

#[test]
fn file_store_publish_replaces_the_whole_record() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path().join("nowplaying.toml"));

    store.publish(&sample_snapshot());

    let mut bare = StatusSnapshot::placeholder();
    bare.title = "Next track".to_string();
    store.publish(&bare);

    // The second publish carried no artwork; none may survive from the first.
    let latest = store.read_latest();
    assert_eq!(latest.title, "Next track");
    assert!(latest.artwork.is_none());
    assert!(!latest.playing);
}

#[test]
fn file_store_publish_never_fails_the_caller() {
    // Unwritable destination: publish must swallow the error.
    let store = FileStore::new("/proc/segno-definitely-not-writable/nowplaying.toml");
    store.publish(&sample_snapshot());
    assert_eq!(store.read_latest(), StatusSnapshot::placeholder());
}
