//! Roster Models
//!
//! Student record and the fixed set of groups.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// Study group a student belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Group {
    #[default]
    #[serde(rename = "REACT 1")]
    React1,
    #[serde(rename = "REACT 11")]
    React11,
    #[serde(rename = "REACT 13")]
    React13,
    #[serde(rename = "REACT 15")]
    React15,
}

impl Group {
    /// All groups in display order
    pub const ALL: [Group; 4] = [Group::React1, Group::React11, Group::React13, Group::React15];

    pub fn as_str(&self) -> &'static str {
        match self {
            Group::React1 => "REACT 1",
            Group::React11 => "REACT 11",
            Group::React13 => "REACT 13",
            Group::React15 => "REACT 15",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Group {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Group::ALL
            .into_iter()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| RosterError::InvalidGroup(s.to_string()))
    }
}

/// Group selection constraining the visible rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupFilter {
    #[default]
    All,
    Only(Group),
}

impl GroupFilter {
    const ALL_LABEL: &'static str = "all";

    /// Every selectable filter, "all" first
    pub fn options() -> impl Iterator<Item = GroupFilter> {
        std::iter::once(GroupFilter::All).chain(Group::ALL.into_iter().map(GroupFilter::Only))
    }

    /// Stored/select value ("all" or the group label)
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupFilter::All => Self::ALL_LABEL,
            GroupFilter::Only(group) => group.as_str(),
        }
    }

    /// Human label for the select option
    pub fn label(&self) -> &'static str {
        match self {
            GroupFilter::All => "All",
            GroupFilter::Only(group) => group.as_str(),
        }
    }

    pub fn matches(&self, group: Group) -> bool {
        match self {
            GroupFilter::All => true,
            GroupFilter::Only(only) => *only == group,
        }
    }
}

impl fmt::Display for GroupFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupFilter {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_LABEL {
            Ok(GroupFilter::All)
        } else {
            s.parse().map(GroupFilter::Only)
        }
    }
}

/// One row of the roster.
///
/// Has no id: a record is addressed by its position in the roster.
/// Keys are camelCase to stay compatible with already stored data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub first_name: String,
    pub last_name: String,
    pub group: Group,
    pub does_work: bool,
}

impl StudentRecord {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, group: Group, does_work: bool) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            group,
            does_work,
        }
    }

    /// Blank draft used when adding a student
    pub fn blank() -> Self {
        Self::default()
    }

    /// Both names filled in, as the dialog's `required` inputs demand.
    /// Whitespace counts as filled.
    pub fn has_names(&self) -> bool {
        !self.first_name.is_empty() && !self.last_name.is_empty()
    }

    /// "Ha"/"Yo'q" cell text for the does-work column
    pub fn does_work_label(&self) -> &'static str {
        if self.does_work { "Ha" } else { "Yo'q" }
    }
}
