//! Player configuration
//!
//! Layers, later sources overriding earlier ones:
//! 1. Built-in defaults (the stock playlist, `cuePoints`/`trackPositions`
//!    record names, English labels)
//! 2. An optional TOML file
//! 3. `CUE_`-prefixed environment variables, `__` between nested keys
//!    (e.g. `CUE_LABELS__NO_CUES`)

use std::path::Path;

use cue_core::TrackDescriptor;
use cue_storage::StoreKeys;
use serde::{Deserialize, Serialize};

use crate::error::{PlaybackError, Result};
use crate::registry::default_tracks;
use crate::types::Labels;

/// Everything needed to build a `Player`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Tracks offered, in display order
    pub playlist: Vec<TrackDescriptor>,

    /// Record names in the key-value store
    pub store_keys: StoreKeys,

    /// User-visible texts
    pub labels: Labels,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            playlist: default_tracks(),
            store_keys: StoreKeys::default(),
            labels: Labels::default(),
        }
    }
}

impl PlayerConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// # Errors
    /// Returns `Config` if the file is missing or malformed, a value has the
    /// wrong type, or the result fails [`validate`](Self::validate).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            settings = settings.add_source(config::File::from(path).required(true));
        }

        settings = settings.add_source(
            config::Environment::with_prefix("CUE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;

        tracing::info!(tracks = config.playlist.len(), "Loaded player configuration");
        Ok(config)
    }

    /// Validate configuration
    ///
    /// # Errors
    /// Returns `Config` for an empty playlist, a track without a URL, or an
    /// empty or shared record name.
    pub fn validate(&self) -> Result<()> {
        if self.playlist.is_empty() {
            return Err(PlaybackError::Config(
                "playlist must contain at least one track".to_string(),
            ));
        }

        if let Some(index) = self.playlist.iter().position(|t| t.url.trim().is_empty()) {
            return Err(PlaybackError::Config(format!(
                "playlist track {index} has no url"
            )));
        }

        let keys = &self.store_keys;
        if keys.cue_points.is_empty() || keys.track_positions.is_empty() {
            return Err(PlaybackError::Config(
                "store record names must not be empty".to_string(),
            ));
        }
        if keys.cue_points == keys.track_positions {
            return Err(PlaybackError::Config(format!(
                "cue points and track positions share the record name {:?}",
                keys.cue_points
            )));
        }

        Ok(())
    }
}
