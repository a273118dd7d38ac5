use serde::{Deserialize, Serialize};

/// A playable track: where to stream it from and what to call it
///
/// Descriptors carry no id; a track's identity is its position in the
/// playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackDescriptor {
    /// Streamable URL handed to the media element
    pub url: String,
    /// Display name
    pub name: String,
}

impl TrackDescriptor {
    /// Create a new descriptor
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
        }
    }
}
