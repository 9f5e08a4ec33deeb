//! Roster Errors

use thiserror::Error;

/// Common result type for roster operations
pub type RosterResult<T> = Result<T, RosterError>;

/// Errors surfaced to the presentation layer.
///
/// None of them are fatal: the requested operation is aborted and the
/// roster is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// A positional index that does not address a record (stale or invalid)
    #[error("index {index} is out of range for a roster of {len} students")]
    IndexOutOfRange { index: usize, len: usize },
    /// A create/edit was requested while another draft is still open
    #[error("a student is already being edited")]
    EditorBusy,
    /// A draft operation was requested while no draft is open
    #[error("no student is being edited")]
    EditorIdle,
    /// Form field name not known to the draft
    #[error("unknown field: {0}")]
    UnknownField(String),
    /// Group label outside the fixed set
    #[error("unknown group: {0}")]
    InvalidGroup(String),
    /// Configuration override that is not valid JSON for `RosterConfig`
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
