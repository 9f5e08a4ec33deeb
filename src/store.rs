//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use log::warn;
use reactive_stores::Store;
use roster_core::{RosterConfig, RosterManager, RosterResult};

use crate::storage::BrowserStorage;

/// Page state with field-level reactivity
#[derive(Debug, Store)]
pub struct AppState {
    /// Roster, group filter and the open draft
    pub manager: RosterManager<BrowserStorage>,
    /// Search box text (not persisted)
    pub search: String,
    /// Last error shown above the table
    pub notice: Notice,
}

/// Error message shown above the table.
///
/// Every `show` bumps `seq`; a delayed `expire` only clears the message
/// it was scheduled for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notice {
    message: Option<String>,
    seq: u64,
}

impl Notice {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Replace the current message; returns its sequence number
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.seq += 1;
        self.message = Some(message.into());
        self.seq
    }

    /// Clear the message if it is still the one numbered `seq`
    pub fn expire(&mut self, seq: u64) {
        if self.seq == seq {
            self.message = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }
}

impl AppState {
    pub fn load(config: &RosterConfig) -> Self {
        Self {
            manager: RosterManager::load_with_config(BrowserStorage, config),
            search: String::new(),
            notice: Notice::default(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Run a roster operation; a failure is logged and shown in the notice bar
pub fn store_apply<T>(
    store: &AppStore,
    op: impl FnOnce(&mut RosterManager<BrowserStorage>) -> RosterResult<T>,
) -> Option<T> {
    let binding = store.manager();
    let mut manager = binding.write();
    let result = op(&mut *manager);
    drop(manager);

    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("[APP] {}", e);
            store.notice().write().show(e.to_string());
            None
        }
    }
}
