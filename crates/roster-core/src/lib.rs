//! Roster Core
//!
//! State and logic behind the student roster page: the persisted store,
//! the search/group filter and the add/edit draft editor.
//! No browser dependencies; the storage backend is injected.

mod config;
mod editor;
mod error;
mod filter;
mod manager;
mod models;
mod storage;
mod store;

#[cfg(test)]
mod tests;

pub use config::{RosterConfig, StorageKeys};
pub use editor::{DraftField, Editor, EditorMode};
pub use error::{RosterError, RosterResult};
pub use filter::{visible, visible_rows, VisibleRow};
pub use manager::RosterManager;
pub use models::{Group, GroupFilter, StudentRecord};
pub use storage::{KeyValueStore, MemoryStorage};
pub use store::RosterStore;
