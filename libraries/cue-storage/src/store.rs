//! Persistent Store Adapter
//!
//! Wraps a `KeyValueStore` and (de)serializes the cue point and track
//! position records.

use std::collections::BTreeMap;

use cue_core::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;

/// Record name for cue points
pub const DEFAULT_CUE_POINTS_KEY: &str = "cuePoints";

/// Record name for track positions
pub const DEFAULT_TRACK_POSITIONS_KEY: &str = "trackPositions";

/// Track index -> cue timestamps in seconds
///
/// Serialized as a JSON object with decimal-string keys.
pub type CuePoints = BTreeMap<usize, Vec<f64>>;

/// Track index -> last playback offset in seconds
pub type TrackPositions = BTreeMap<usize, f64>;

/// Record names used in the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreKeys {
    /// Key of the cue point record
    pub cue_points: String,
    /// Key of the track position record
    pub track_positions: String,
}

impl Default for StoreKeys {
    fn default() -> Self {
        Self {
            cue_points: DEFAULT_CUE_POINTS_KEY.to_string(),
            track_positions: DEFAULT_TRACK_POSITIONS_KEY.to_string(),
        }
    }
}

/// Both records as loaded at startup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistedState {
    /// Cue points per track
    pub cue_points: CuePoints,
    /// Saved offset per track
    pub positions: TrackPositions,
}

/// Reads and writes the player's two persisted records
#[derive(Debug)]
pub struct PlayerStore<S> {
    backend: S,
    keys: StoreKeys,
}

impl<S: KeyValueStore> PlayerStore<S> {
    /// Create a store using the default record names
    pub fn new(backend: S) -> Self {
        Self::with_keys(backend, StoreKeys::default())
    }

    /// Create a store with custom record names
    pub fn with_keys(backend: S, keys: StoreKeys) -> Self {
        Self { backend, keys }
    }

    /// Record names in use
    pub fn keys(&self) -> &StoreKeys {
        &self.keys
    }

    /// Load both records
    ///
    /// Never fails: each record falls back to an empty map on its own when it
    /// is missing, unreadable, or not valid JSON of the expected shape.
    pub fn load(&self) -> PersistedState {
        PersistedState {
            cue_points: self.load_record(&self.keys.cue_points),
            positions: self.load_record(&self.keys.track_positions),
        }
    }

    /// Overwrite both records
    ///
    /// # Errors
    /// Returns an error if encoding fails or the backend rejects a write.
    /// A failure on the first record leaves the second untouched.
    pub fn save(&mut self, cue_points: &CuePoints, positions: &TrackPositions) -> Result<()> {
        let cues_json = serde_json::to_string(cue_points)?;
        let positions_json = serde_json::to_string(positions)?;

        self.backend.set(&self.keys.cue_points, &cues_json)?;
        self.backend.set(&self.keys.track_positions, &positions_json)?;

        debug!(
            cue_tracks = cue_points.len(),
            positions = positions.len(),
            "Saved player records"
        );
        Ok(())
    }

    /// Borrow the backend
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Mutably borrow the backend
    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    /// Consume the store, returning the backend
    pub fn into_inner(self) -> S {
        self.backend
    }

    fn load_record<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return T::default(),
            Err(e) => {
                warn!(key, error = %e, "Failed to read record, starting empty");
                return T::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Discarding malformed record");
                T::default()
            }
        }
    }
}
