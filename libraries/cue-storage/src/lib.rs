//! Cue Player Storage
//!
//! Persistence for the two records Cue Player keeps between sessions:
//!
//! - **cuePoints**: track index -> ascending list of cue timestamps (seconds)
//! - **trackPositions**: track index -> last playback offset (seconds)
//!
//! Records are JSON objects keyed by the decimal track index, stored in any
//! `KeyValueStore` backend. A record that is missing or fails to decode is
//! replaced by an empty map; the other record is unaffected.
//!
//! # Example
//!
//! ```rust
//! use cue_storage::{CuePoints, MemoryStore, PlayerStore, TrackPositions};
//!
//! let mut store = PlayerStore::new(MemoryStore::new());
//!
//! let mut positions = TrackPositions::new();
//! positions.insert(2, 45.0);
//! store.save(&CuePoints::new(), &positions).unwrap();
//!
//! let state = store.load();
//! assert_eq!(state.positions.get(&2), Some(&45.0));
//! assert!(state.cue_points.is_empty());
//! ```

mod error;
mod store;

// Backends
pub mod json_file;
pub mod memory;

pub use error::{Result, StorageError};
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use store::{
    CuePoints, PersistedState, PlayerStore, StoreKeys, TrackPositions, DEFAULT_CUE_POINTS_KEY,
    DEFAULT_TRACK_POSITIONS_KEY,
};
