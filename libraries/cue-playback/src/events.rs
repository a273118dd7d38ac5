//! Player Events
//!
//! Two directions of event traffic:
//! - `MediaEvent`: notifications raised by the host's media element, fed in
//!   through `Player::handle_media_event`
//! - `PlayerEvent`: state changes queued by the player for the UI binder,
//!   drained with `Player::drain_events`

use serde::{Deserialize, Serialize};

/// Notifications raised by the media element's playback clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaEvent {
    /// Playback time progressed
    TimeUpdate,
    /// Duration became known
    MetadataLoaded,
    /// Playback paused (by the user or the host)
    Paused,
    /// Playback reached the end of the track
    Ended,
}

impl MediaEvent {
    /// All notifications, in registration order
    pub const ALL: [MediaEvent; 4] = [
        MediaEvent::TimeUpdate,
        MediaEvent::MetadataLoaded,
        MediaEvent::Paused,
        MediaEvent::Ended,
    ];

    /// DOM event type name for this notification
    pub fn dom_type(self) -> &'static str {
        match self {
            MediaEvent::TimeUpdate => "timeupdate",
            MediaEvent::MetadataLoaded => "loadedmetadata",
            MediaEvent::Paused => "pause",
            MediaEvent::Ended => "ended",
        }
    }

    /// Parse a DOM event type name
    pub fn from_dom_type(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|event| event.dom_type() == name)
    }
}

/// Events emitted by the player for UI synchronization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// A different track was loaded
    TrackChanged {
        /// Index of the new (current) track
        index: usize,
        /// Index of the previous track (if any)
        previous: Option<usize>,
    },

    /// Intended play/pause state flipped
    PlayStateChanged {
        /// Whether the player now intends to play
        playing: bool,
    },

    /// The cue list of a track changed
    CuesChanged {
        /// Track whose cues changed
        track: usize,
    },

    /// Playback progressed (only emitted while the duration is known)
    Progress {
        /// Elapsed fraction of the track, 0.0 to 1.0
        fraction: f64,
        /// Elapsed seconds
        elapsed_secs: f64,
    },

    /// Track metadata loaded
    DurationChanged {
        /// Duration in seconds, `None` if the host still reports NaN
        duration_secs: Option<f64>,
    },

    /// A track's resume position was written to storage
    PositionSaved {
        /// Track index
        track: usize,
        /// Saved offset in seconds
        position_secs: f64,
    },
}
