//! Error types for playback management

use cue_storage::StorageError;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Track index outside the playlist
    #[error("Track index {index} out of range (playlist has {len} tracks)")]
    TrackOutOfRange { index: usize, len: usize },

    /// Playlist has no tracks
    #[error("Playlist is empty")]
    EmptyPlaylist,

    /// Persisting player state failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Invalid or unreadable configuration
    #[error("Config error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for PlaybackError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<PlaybackError> for cue_core::CueError {
    fn from(err: PlaybackError) -> Self {
        match err {
            PlaybackError::Storage(inner) => inner.into(),
            PlaybackError::Config(msg) => cue_core::CueError::config(msg),
            other => cue_core::CueError::invalid_input(other.to_string()),
        }
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;

#[cfg(test)]
mod tests {
    use super::*;
    use cue_core::CueError;

    #[test]
    fn storage_failures_keep_their_kind() {
        let err = PlaybackError::from(StorageError::from(CueError::storage("quota exceeded")));
        assert!(matches!(CueError::from(err), CueError::Storage(_)));
    }

    #[test]
    fn range_errors_become_invalid_input() {
        let err = PlaybackError::TrackOutOfRange { index: 7, len: 5 };
        assert!(matches!(CueError::from(err), CueError::InvalidInput(_)));
    }
}
