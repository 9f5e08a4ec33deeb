//! Draft Editor
//!
//! Holds the single in-flight draft for the add/edit dialog and commits it
//! to the store. States: Idle, Creating, Editing(index). Only Idle may open
//! a draft, and only an open draft may be updated or committed.

use log::debug;

use crate::error::{RosterError, RosterResult};
use crate::models::{Group, StudentRecord};
use crate::storage::KeyValueStore;
use crate::store::RosterStore;

/// Editor state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Idle,
    /// Draft will be appended on commit
    Creating,
    /// Draft will overwrite the record at this roster position
    Editing(usize),
}

/// A single field change coming from the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    FirstName(String),
    LastName(String),
    Group(Group),
    DoesWork(bool),
}

impl DraftField {
    /// Build from a form control's `name` and `value`.
    ///
    /// Checkbox values are `"true"`/`"on"` when checked.
    pub fn from_input(name: &str, value: &str) -> RosterResult<Self> {
        match name {
            "firstName" => Ok(DraftField::FirstName(value.to_string())),
            "lastName" => Ok(DraftField::LastName(value.to_string())),
            "group" => value.parse().map(DraftField::Group),
            "doesWork" => Ok(DraftField::DoesWork(matches!(value, "true" | "on"))),
            other => Err(RosterError::UnknownField(other.to_string())),
        }
    }

    fn apply(self, draft: &mut StudentRecord) {
        match self {
            DraftField::FirstName(v) => draft.first_name = v,
            DraftField::LastName(v) => draft.last_name = v,
            DraftField::Group(v) => draft.group = v,
            DraftField::DoesWork(v) => draft.does_work = v,
        }
    }
}

/// Add/edit draft state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Editor {
    mode: EditorMode,
    draft: StudentRecord,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn draft(&self) -> &StudentRecord {
        &self.draft
    }

    /// Roster position being edited, `None` when creating or idle
    pub fn selected_index(&self) -> Option<usize> {
        match self.mode {
            EditorMode::Editing(index) => Some(index),
            _ => None,
        }
    }

    /// Whether a draft is open (the dialog is shown)
    pub fn is_open(&self) -> bool {
        self.mode != EditorMode::Idle
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            EditorMode::Editing(_) => "Editing student",
            _ => "Adding student",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            EditorMode::Editing(_) => "Save",
            _ => "Add",
        }
    }

    /// Open a blank draft
    pub fn begin_create(&mut self) -> RosterResult<()> {
        self.ensure_idle()?;
        self.draft = StudentRecord::blank();
        self.mode = EditorMode::Creating;
        debug!("[EDITOR] Creating new student");
        Ok(())
    }

    /// Open a copy of the record at `index`
    pub fn begin_edit<S: KeyValueStore>(&mut self, store: &RosterStore<S>, index: usize) -> RosterResult<()> {
        self.ensure_idle()?;
        self.draft = store.get(index)?.clone();
        self.mode = EditorMode::Editing(index);
        debug!("[EDITOR] Editing student #{}", index);
        Ok(())
    }

    /// Change one field of the open draft; the roster is not touched
    pub fn update_field(&mut self, field: DraftField) -> RosterResult<()> {
        if !self.is_open() {
            return Err(RosterError::EditorIdle);
        }
        field.apply(&mut self.draft);
        Ok(())
    }

    /// Write the draft to the store and return to Idle.
    ///
    /// Returns the roster position of the committed record. On error the
    /// draft stays open so it can still be cancelled.
    pub fn commit<S: KeyValueStore>(&mut self, store: &mut RosterStore<S>) -> RosterResult<usize> {
        let index = match self.mode {
            EditorMode::Idle => return Err(RosterError::EditorIdle),
            EditorMode::Creating => {
                store.append(self.draft.clone());
                store.len() - 1
            }
            EditorMode::Editing(index) => {
                store.replace_at(index, self.draft.clone())?;
                index
            }
        };
        debug!("[EDITOR] Committed student #{}", index);
        self.reset();
        Ok(index)
    }

    /// Discard the draft. No-op when idle.
    pub fn cancel(&mut self) {
        if self.is_open() {
            debug!("[EDITOR] Draft discarded");
        }
        self.reset();
    }

    fn ensure_idle(&self) -> RosterResult<()> {
        if self.is_open() {
            Err(RosterError::EditorBusy)
        } else {
            Ok(())
        }
    }

    fn reset(&mut self) {
        self.mode = EditorMode::Idle;
        self.draft = StudentRecord::blank();
    }
}
