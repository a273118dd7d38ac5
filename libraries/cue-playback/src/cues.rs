//! Cue point bookkeeping
//!
//! Keeps every track's cue timestamps sorted ascending and never stores an
//! empty list, so the persisted record only names tracks that have cues.

use cue_core::format_time;
use cue_storage::CuePoints;
use serde::Serialize;

/// Per-track cue timestamps
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CueBook {
    points: CuePoints,
}

impl CueBook {
    /// Create an empty book
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt loaded cue points, restoring the sort and no-empty-list rules
    ///
    /// Entries are kept whatever their track index; readers range-check.
    pub fn from_points(mut points: CuePoints) -> Self {
        points.retain(|_, cues| {
            cues.retain(|t| t.is_finite());
            cues.sort_by(f64::total_cmp);
            !cues.is_empty()
        });
        Self { points }
    }

    /// Add a cue, keeping the track's list ascending
    ///
    /// Duplicate timestamps are kept.
    pub fn insert(&mut self, track: usize, seconds: f64) {
        let cues = self.points.entry(track).or_default();
        cues.push(seconds);
        cues.sort_by(f64::total_cmp);
    }

    /// Remove the cue at `ordinal`
    ///
    /// Drops the track's entry when its last cue goes. Returns the removed
    /// timestamp, or `None` if there was no cue at that ordinal.
    pub fn remove(&mut self, track: usize, ordinal: usize) -> Option<f64> {
        let cues = self.points.get_mut(&track)?;
        if ordinal >= cues.len() {
            return None;
        }
        let removed = cues.remove(ordinal);
        if cues.is_empty() {
            self.points.remove(&track);
        }
        Some(removed)
    }

    /// Cue at `ordinal`
    pub fn get(&self, track: usize, ordinal: usize) -> Option<f64> {
        self.cues(track).get(ordinal).copied()
    }

    /// A track's cues, ascending (empty if it has none)
    pub fn cues(&self, track: usize) -> &[f64] {
        self.points.get(&track).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of tracks at or beyond `len` that have cues
    pub fn tracks_beyond(&self, len: usize) -> usize {
        self.points.range(len..).count()
    }

    /// Number of tracks with at least one cue
    pub fn track_count(&self) -> usize {
        self.points.len()
    }

    /// Underlying map, as persisted
    pub fn as_points(&self) -> &CuePoints {
        &self.points
    }

    /// Display projection for a track (`None` = nothing loaded)
    pub fn list(&self, track: Option<usize>) -> CueList {
        let cues = track.map(|t| self.cues(t)).unwrap_or(&[]);
        if cues.is_empty() {
            return CueList::Empty;
        }
        CueList::Entries(
            cues.iter()
                .enumerate()
                .map(|(ordinal, &seconds)| CueRow {
                    ordinal,
                    seconds,
                    label: format_time(Some(seconds)),
                })
                .collect(),
        )
    }
}

/// Rendered cue list of the loaded track
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "rows", rename_all = "camelCase")]
pub enum CueList {
    /// No track loaded, or the track has no cues
    Empty,

    /// Cues in ascending time order
    Entries(Vec<CueRow>),
}

impl CueList {
    /// Whether there is nothing to list
    pub fn is_empty(&self) -> bool {
        matches!(self, CueList::Empty)
    }

    /// Row labels in display order
    pub fn labels(&self) -> Vec<&str> {
        match self {
            CueList::Empty => Vec::new(),
            CueList::Entries(rows) => rows.iter().map(|r| r.label.as_str()).collect(),
        }
    }
}

/// One clickable, removable cue entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CueRow {
    /// Position in the sorted list, used to jump or delete
    pub ordinal: usize,
    /// Timestamp in seconds
    pub seconds: f64,
    /// Formatted `m:ss`
    pub label: String,
}
