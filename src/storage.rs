//! Browser Storage Backend
//!
//! `window.localStorage` behind the roster's key-value trait.

use log::warn;
use roster_core::KeyValueStore;

/// Handle to `window.localStorage`; resolved on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = Self::local_storage() else {
            warn!("[STORAGE] localStorage unavailable, '{}' not saved", key);
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            warn!("[STORAGE] Failed to save '{}': {:?}", key, e);
        }
    }
}
