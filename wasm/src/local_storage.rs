use minigolf_core::storage::{KeyValueStore, StorageError};

use crate::web_document::web_window;
use crate::web_error_handling::js_error_message;

/// `window.localStorage`, or nothing when the browser denies it (privacy mode,
/// sandboxed frames). Without it reads find nothing and writes fail.
pub struct LocalStore(Option<web_sys::Storage>);

impl LocalStore {
    pub fn open() -> Self {
        let storage = web_window()
            .and_then(|window| window.local_storage())
            .unwrap_or_else(|e| {
                log::warn!("local storage unavailable: {}", js_error_message(&e));
                None
            });
        LocalStore(storage)
    }
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match &self.0 {
            Some(storage) => storage
                .get_item(key)
                .map_err(|e| StorageError::new(js_error_message(&e))),
            None => Ok(None),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        match &self.0 {
            Some(storage) => storage
                .set_item(key, value)
                .map_err(|e| StorageError::new(js_error_message(&e))),
            None => Err(StorageError::new("local storage unavailable")),
        }
    }
}
