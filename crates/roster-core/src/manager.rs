//! Roster Manager
//!
//! Owns the store and the editor and exposes the operations the page
//! calls on user actions.

use crate::config::RosterConfig;
use crate::editor::{DraftField, Editor};
use crate::error::RosterResult;
use crate::filter::{self, VisibleRow};
use crate::models::{GroupFilter, StudentRecord};
use crate::storage::KeyValueStore;
use crate::store::RosterStore;

#[derive(Debug, Clone)]
pub struct RosterManager<S: KeyValueStore> {
    store: RosterStore<S>,
    editor: Editor,
}

impl<S: KeyValueStore> RosterManager<S> {
    /// Load state from `backend` with default configuration
    pub fn load(backend: S) -> Self {
        Self::load_with_config(backend, &RosterConfig::default())
    }

    pub fn load_with_config(backend: S, config: &RosterConfig) -> Self {
        Self {
            store: RosterStore::load_with_keys(backend, config.storage_keys.clone()),
            editor: Editor::new(),
        }
    }

    pub fn store(&self) -> &RosterStore<S> {
        &self.store
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn records(&self) -> &[StudentRecord] {
        self.store.records()
    }

    pub fn group_filter(&self) -> GroupFilter {
        self.store.group_filter()
    }

    /// Rows matching `search_text` and the stored group filter
    pub fn visible(&self, search_text: &str) -> Vec<VisibleRow> {
        filter::visible_rows(self.store.records(), search_text, self.store.group_filter())
    }

    pub fn set_group_filter(&mut self, filter: GroupFilter) {
        self.store.set_group_filter(filter);
    }

    pub fn begin_create(&mut self) -> RosterResult<()> {
        self.editor.begin_create()
    }

    pub fn begin_edit(&mut self, index: usize) -> RosterResult<()> {
        self.editor.begin_edit(&self.store, index)
    }

    pub fn update_field(&mut self, field: DraftField) -> RosterResult<()> {
        self.editor.update_field(field)
    }

    pub fn commit(&mut self) -> RosterResult<usize> {
        self.editor.commit(&mut self.store)
    }

    pub fn cancel(&mut self) {
        self.editor.cancel();
    }

    /// Delete the record at roster position `index` (already confirmed)
    pub fn remove_at(&mut self, index: usize) -> RosterResult<StudentRecord> {
        self.store.remove_at(index)
    }
}
