//! Playlist registry
//!
//! The fixed, ordered list of tracks the player offers. Built once from
//! configuration and never mutated; a track is addressed by its index.

use cue_core::TrackDescriptor;

use crate::error::{PlaybackError, Result};

/// Read-only ordered track list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    tracks: Vec<TrackDescriptor>,
}

impl Playlist {
    /// Build a playlist
    ///
    /// # Errors
    /// Returns `EmptyPlaylist` if `tracks` is empty; the player needs a first
    /// track to start from.
    pub fn new(tracks: Vec<TrackDescriptor>) -> Result<Self> {
        if tracks.is_empty() {
            return Err(PlaybackError::EmptyPlaylist);
        }
        Ok(Self { tracks })
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Always false for a constructed playlist
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Track at `index`
    pub fn get(&self, index: usize) -> Option<&TrackDescriptor> {
        self.tracks.get(index)
    }

    /// Whether `index` addresses a track
    pub fn contains(&self, index: usize) -> bool {
        index < self.tracks.len()
    }

    /// Tracks in order
    pub fn iter(&self) -> impl Iterator<Item = &TrackDescriptor> {
        self.tracks.iter()
    }

    /// Tracks as a slice
    pub fn tracks(&self) -> &[TrackDescriptor] {
        &self.tracks
    }

    pub(crate) fn check(&self, index: usize) -> Result<&TrackDescriptor> {
        self.get(index).ok_or(PlaybackError::TrackOutOfRange {
            index,
            len: self.len(),
        })
    }
}

impl Default for Playlist {
    fn default() -> Self {
        Self {
            tracks: default_tracks(),
        }
    }
}

/// Built-in playlist used when no configuration is supplied
pub fn default_tracks() -> Vec<TrackDescriptor> {
    const BASE: &str = "https://storage.yandexcloud.net/snatcher";
    [
        ("Swamp81020715.mp3", "Swamp81020715"),
        ("Swamp81160715.mp3", "Swamp81160715"),
        (
            "RA483_150831_Sassy-J-residentadvisor.net.mp3",
            "RA483 Sassy-J",
        ),
        (
            "Soulful_Smooth_Jazzy_Deep_House_Vinyl_Studio_Session_with_Noah_Coinflip.mp3",
            "Soulful Smooth Jazzy Deep House",
        ),
        (
            "Jazzy_Soulful_Deep_House_Mix_-_Vinyl_Studio_Session_with_Noah_Coinflip.mp3",
            "Jazzy Soulful Deep House Mix",
        ),
    ]
    .into_iter()
    .map(|(file, name)| TrackDescriptor::new(format!("{BASE}/{file}"), name))
    .collect()
}
