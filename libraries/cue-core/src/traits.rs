/// Collaborator traits for Cue Player
use crate::error::Result;

/// The host's media playback capability
///
/// In a browser this is an `<audio>` element; tests use a scripted fake.
/// Notifications (time update, metadata loaded, pause, ended) are delivered
/// by the host to `Player::handle_media_event` rather than through this trait.
pub trait MediaHandle {
    /// Bind the element to a new source URL
    ///
    /// Any in-flight load for the previous source becomes irrelevant.
    fn set_source(&mut self, url: &str);

    /// Begin or resume playback
    fn play(&mut self);

    /// Pause playback
    fn pause(&mut self);

    /// Current playback offset in seconds
    ///
    /// Returns `None` while the time is not a number (before metadata loads).
    fn current_time(&self) -> Option<f64>;

    /// Seek to an offset in seconds
    fn set_current_time(&mut self, seconds: f64);

    /// Track duration in seconds
    ///
    /// Returns `None` until metadata has loaded.
    fn duration(&self) -> Option<f64>;
}

/// The host's local key-value persistence
///
/// Values are structured text (JSON). Both operations are synchronous.
pub trait KeyValueStore {
    /// Read a record
    ///
    /// Returns `Ok(None)` when the record has never been written.
    ///
    /// # Errors
    /// Returns an error if the backend cannot be read
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a record
    ///
    /// # Errors
    /// Returns an error if the backend rejects the write
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
