use std::collections::HashMap;

use thiserror::Error;

/// A read or write the key/value backend refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct StorageError {
    reason: String,
}

impl StorageError {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        StorageError { reason: reason.into() }
    }
}

/// A flat string key/value store, shaped like the browser's `localStorage`.
pub trait KeyValueStore {
    /// Returns `Ok(None)` when the key has never been written.
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrites any previous value.
    ///
    /// # Errors
    /// Returns an error if the backing store rejects the write (quota, privacy mode).
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store used by tests and by callers without a browser.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
