//! Presentation projections
//!
//! Pure functions from player state to what each screen region shows.
//! Nothing here is cached: projecting twice from the same state gives the
//! same result.

use cue_core::{format_time, KeyValueStore, MediaHandle};
use serde::Serialize;

use crate::{cues::CueList, player::Player};

/// One entry of the track list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRow {
    /// Playlist index (what a click loads)
    pub index: usize,
    /// Display name
    pub name: String,
    /// Whether this is the loaded track
    pub active: bool,
}

/// Progress bar fill and elapsed label
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressView {
    /// Fill fraction, 0.0 while the duration is unknown
    pub fraction: f64,
    /// Elapsed time as `m:ss`
    pub elapsed: String,
}

impl ProgressView {
    /// Fill width as a CSS percentage
    pub fn percent(&self) -> String {
        format!("{}%", self.fraction * 100.0)
    }
}

/// Full projection of the player for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    /// Track list rows, in playlist order
    pub tracks: Vec<TrackRow>,
    /// Cue list of the loaded track
    pub cues: CueList,
    /// Text shown when `cues` is empty
    pub cue_placeholder: String,
    /// Name of the loaded track (empty when unloaded)
    pub track_name: String,
    /// Play/pause control text
    pub play_label: String,
    /// Progress bar state
    pub progress: ProgressView,
    /// Duration as `m:ss`
    pub duration: String,
}

impl PlayerView {
    /// Project every region
    pub fn project<M: MediaHandle, S: KeyValueStore>(player: &Player<M, S>) -> Self {
        Self {
            tracks: track_rows(player),
            cues: player.cue_list(),
            cue_placeholder: player.labels().no_cues.clone(),
            track_name: track_name(player),
            play_label: play_label(player),
            progress: progress(player),
            duration: duration(player),
        }
    }
}

/// Track list rows, highlighting the loaded track
pub fn track_rows<M: MediaHandle, S: KeyValueStore>(player: &Player<M, S>) -> Vec<TrackRow> {
    player
        .playlist()
        .iter()
        .enumerate()
        .map(|(index, track)| TrackRow {
            index,
            name: track.name.clone(),
            active: player.current_track() == Some(index),
        })
        .collect()
}

/// Name of the loaded track
pub fn track_name<M: MediaHandle, S: KeyValueStore>(player: &Player<M, S>) -> String {
    player
        .current_descriptor()
        .map(|t| t.name.clone())
        .unwrap_or_default()
}

/// Play/pause control text
pub fn play_label<M: MediaHandle, S: KeyValueStore>(player: &Player<M, S>) -> String {
    player.labels().text(player.play_label()).to_string()
}

/// Progress bar state
pub fn progress<M: MediaHandle, S: KeyValueStore>(player: &Player<M, S>) -> ProgressView {
    ProgressView {
        fraction: player.progress_fraction().unwrap_or(0.0),
        elapsed: format_time(player.current_time()),
    }
}

/// Duration label
pub fn duration<M: MediaHandle, S: KeyValueStore>(player: &Player<M, S>) -> String {
    format_time(player.duration())
}
