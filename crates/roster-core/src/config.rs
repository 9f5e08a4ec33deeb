//! Roster Configuration

use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};

/// Keys under which the roster and the group filter are persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    /// JSON array of student records
    pub students: String,
    /// Last selected group filter
    pub group: String,
}

impl StorageKeys {
    /// Where an unreadable roster value is copied before it can be overwritten
    pub fn students_backup(&self) -> String {
        format!("{}.bak", self.students)
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            students: "students".to_string(),
            group: "student_group".to_string(),
        }
    }
}

/// Runtime configuration for the roster page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub storage_keys: StorageKeys,
    /// Max level for the console logger ("error" .. "trace")
    pub log_level: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            storage_keys: StorageKeys::default(),
            log_level: "info".to_string(),
        }
    }
}

impl RosterConfig {
    /// Parse a JSON override; omitted fields keep their defaults
    pub fn from_json(raw: &str) -> RosterResult<Self> {
        serde_json::from_str(raw).map_err(|e| RosterError::InvalidConfig(e.to_string()))
    }

    /// Parsed log level, falling back to `Info` on unknown input
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
