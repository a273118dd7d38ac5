//! `window.localStorage` as a `KeyValueStore`

use cue_core::{CueError, KeyValueStore, Result};

use super::describe;

/// Key-value store backed by the page's `localStorage`
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Open the window's local storage
    ///
    /// # Errors
    /// Fails outside a window context or when storage is disabled.
    pub fn open() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| CueError::storage("no window"))?;
        let storage = window
            .local_storage()
            .map_err(|e| CueError::storage(describe(&e)))?
            .ok_or_else(|| CueError::storage("localStorage is unavailable"))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| CueError::storage(describe(&e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| CueError::storage(describe(&e)))
    }
}
