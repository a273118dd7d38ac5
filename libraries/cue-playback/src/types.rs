//! Core types for playback management

use serde::{Deserialize, Serialize};

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No track loaded yet
    Unloaded,

    /// Track loaded, not playing
    Paused,

    /// Track loaded and playing
    Playing,
}

/// Which affordance the play/pause control should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayLabel {
    /// Offer to start playback (currently paused or unloaded)
    Play,

    /// Offer to pause (currently playing)
    Pause,
}

impl PlayLabel {
    /// Label for an intended play state
    pub fn for_playing(playing: bool) -> Self {
        if playing {
            PlayLabel::Pause
        } else {
            PlayLabel::Play
        }
    }
}

/// User-visible texts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Play affordance (default: "▶️ Play")
    pub play: String,

    /// Pause affordance (default: "⏸️ Pause")
    pub pause: String,

    /// Shown in place of the cue list when the track has none
    pub no_cues: String,
}

impl Labels {
    /// Text for a play affordance
    pub fn text(&self, label: PlayLabel) -> &str {
        match label {
            PlayLabel::Play => &self.play,
            PlayLabel::Pause => &self.pause,
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            play: "▶️ Play".to_string(),
            pause: "⏸️ Pause".to_string(),
            no_cues: "No saved cue points".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_follows_intended_state() {
        let labels = Labels::default();
        assert_eq!(labels.text(PlayLabel::for_playing(true)), "⏸️ Pause");
        assert_eq!(labels.text(PlayLabel::for_playing(false)), "▶️ Play");
    }
}
