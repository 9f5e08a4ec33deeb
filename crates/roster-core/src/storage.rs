//! Storage Backend Trait
//!
//! The persistent key-value blob store the roster is loaded from and
//! written back to. Implementations: `MemoryStorage` here, browser
//! `localStorage` in the UI crate.

use std::collections::HashMap;

/// String key-value store.
///
/// Writes are fire-and-forget: a backend that cannot write logs the
/// failure itself and does not report it back.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory backend
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a value
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites() {
        let mut storage = MemoryStorage::new();
        storage.set("k", "1");
        storage.set("k", "2");
        assert_eq!(storage.get("k").as_deref(), Some("2"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_missing_key() {
        let storage = MemoryStorage::new().with_entry("a", "b");
        assert!(storage.get("missing").is_none());
    }
}
