//! In-memory key-value backend
//!
//! Holds records for the lifetime of the value. Used by tests and by hosts
//! that persist elsewhere.

use std::collections::HashMap;

use cue_core::{KeyValueStore, Result};

/// `HashMap`-backed `KeyValueStore`
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record (builder style)
    #[must_use]
    pub fn with_record(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.records.insert(key.into(), value.into());
        self
    }

    /// Raw text of a record
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.records.get(key).map(String::as_str)
    }

    /// Number of records held
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no record has been written
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.records.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
