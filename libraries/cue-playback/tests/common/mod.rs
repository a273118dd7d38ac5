//! Shared test helpers: a scripted media element and player builders

#![allow(dead_code)]

use cue_core::{CueError, KeyValueStore, MediaHandle, TrackDescriptor};
use cue_playback::{Player, Playlist};
use cue_storage::{MemoryStore, PlayerStore};
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Media element stand-in
///
/// Mirrors an `<audio>` element's observable behavior: a new source starts
/// at 0 with an unknown duration until `load_metadata` is called.
#[derive(Debug, Default)]
pub struct FakeMedia {
    pub sources: Vec<String>,
    pub time: Option<f64>,
    pub duration: Option<f64>,
    pub playing: bool,
    pub play_calls: usize,
    pub pause_calls: usize,
}

impl FakeMedia {
    pub fn new() -> Self {
        Self::default()
    }

    /// Metadata arrives for the current source
    pub fn load_metadata(&mut self, duration: f64) {
        self.duration = Some(duration);
    }

    /// Move the playback clock
    pub fn advance_to(&mut self, seconds: f64) {
        self.time = Some(seconds);
    }

    /// Make the clock report NaN
    pub fn lose_time(&mut self) {
        self.time = None;
    }

    pub fn current_source(&self) -> Option<&str> {
        self.sources.last().map(String::as_str)
    }
}

impl MediaHandle for FakeMedia {
    fn set_source(&mut self, url: &str) {
        self.sources.push(url.to_string());
        self.time = Some(0.0);
        self.duration = None;
    }

    fn play(&mut self) {
        self.playing = true;
        self.play_calls += 1;
    }

    fn pause(&mut self) {
        self.playing = false;
        self.pause_calls += 1;
    }

    fn current_time(&self) -> Option<f64> {
        self.time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.time = Some(seconds);
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }
}

/// Backend whose writes always fail
#[derive(Debug, Default)]
pub struct FullStore;

impl KeyValueStore for FullStore {
    fn get(&self, _key: &str) -> cue_core::Result<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> cue_core::Result<()> {
        Err(CueError::storage("quota exceeded"))
    }
}

pub fn test_playlist() -> Playlist {
    Playlist::new(
        (0..5)
            .map(|i| TrackDescriptor::new(format!("https://cdn.test/{i}.mp3"), format!("Track {i}")))
            .collect(),
    )
    .unwrap()
}

pub fn player_with(backend: MemoryStore) -> Player<FakeMedia, MemoryStore> {
    init_logging();
    Player::new(test_playlist(), FakeMedia::new(), PlayerStore::new(backend))
}

pub fn new_player() -> Player<FakeMedia, MemoryStore> {
    player_with(MemoryStore::new())
}

/// Simulate a page reload: same saved records, fresh session
pub fn reload(player: &Player<FakeMedia, MemoryStore>) -> Player<FakeMedia, MemoryStore> {
    player_with(player.store().backend().clone())
}
