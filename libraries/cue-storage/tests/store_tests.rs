//! Integration tests for the player store
//!
//! Exercises the adapter against the file backend the way a host uses it:
//! save in one session, load in the next.

use cue_core::{CueError, KeyValueStore};
use cue_storage::{CuePoints, JsonFileStore, MemoryStore, PlayerStore, StorageError, TrackPositions};
use std::sync::Once;

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Backend whose writes always fail
struct ReadOnlyStore(MemoryStore);

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> cue_core::Result<Option<String>> {
        self.0.get(key)
    }

    fn set(&mut self, _key: &str, _value: &str) -> cue_core::Result<()> {
        Err(CueError::storage("quota exceeded"))
    }
}

#[test]
fn state_survives_a_reload() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();

    let mut cues = CuePoints::new();
    cues.insert(0, vec![5.0, 10.0]);
    cues.insert(3, vec![61.5]);
    let mut positions = TrackPositions::new();
    positions.insert(0, 12.0);
    positions.insert(2, 45.0);

    {
        let mut store = PlayerStore::new(JsonFileStore::new(dir.path()));
        store.save(&cues, &positions).unwrap();
    }

    let reloaded = PlayerStore::new(JsonFileStore::new(dir.path())).load();
    assert_eq!(reloaded.cue_points, cues);
    assert_eq!(reloaded.positions, positions);
}

#[test]
fn truncated_cue_file_loads_as_empty() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cuePoints.json"), r#"{"1":[3.0,"#).unwrap();
    std::fs::write(dir.path().join("trackPositions.json"), r#"{"1":8.5}"#).unwrap();

    let state = PlayerStore::new(JsonFileStore::new(dir.path())).load();

    assert!(state.cue_points.is_empty());
    assert_eq!(state.positions.get(&1), Some(&8.5));
}

#[test]
fn last_save_wins() {
    init_logging();
    let mut store = PlayerStore::new(MemoryStore::new());

    let mut positions = TrackPositions::new();
    positions.insert(1, 10.0);
    store.save(&CuePoints::new(), &positions).unwrap();
    positions.insert(1, 20.0);
    store.save(&CuePoints::new(), &positions).unwrap();

    assert_eq!(store.load().positions.get(&1), Some(&20.0));
}

#[test]
fn write_failures_propagate() {
    init_logging();
    let mut store = PlayerStore::new(ReadOnlyStore(MemoryStore::new()));

    let err = store
        .save(&CuePoints::new(), &TrackPositions::new())
        .unwrap_err();

    assert!(matches!(err, StorageError::Backend(CueError::Storage(_))));
    let core: CueError = err.into();
    assert_eq!(core.to_string(), "Storage error: quota exceeded");
}

#[test]
fn file_errors_surface_as_backend_io() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();
    let mut store = PlayerStore::new(JsonFileStore::new(blocker.join("records")));

    let err = store
        .save(&CuePoints::new(), &TrackPositions::new())
        .unwrap_err();

    assert!(matches!(err, StorageError::Backend(CueError::Io(_))));
    assert!(matches!(CueError::from(err), CueError::Io(_)));
}
