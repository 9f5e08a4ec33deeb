//! Roster Store
//!
//! Owns the roster and the group filter. Every mutation is written back
//! to the storage backend before the method returns.

use log::{debug, warn};

use crate::config::StorageKeys;
use crate::error::{RosterError, RosterResult};
use crate::models::{GroupFilter, StudentRecord};
use crate::storage::KeyValueStore;

/// Persisted roster state
#[derive(Debug, Clone)]
pub struct RosterStore<S: KeyValueStore> {
    backend: S,
    keys: StorageKeys,
    records: Vec<StudentRecord>,
    group_filter: GroupFilter,
}

impl<S: KeyValueStore> RosterStore<S> {
    /// Load the roster and group filter from `backend` using the default keys
    pub fn load(backend: S) -> Self {
        Self::load_with_keys(backend, StorageKeys::default())
    }

    /// Load from `backend`.
    ///
    /// Missing values yield an empty roster and the "all" filter.
    /// Roster entries that fail to parse are skipped and logged; the raw
    /// stored value is then copied to the backup key so the next mutation
    /// cannot lose it. A malformed group filter falls back to "all".
    pub fn load_with_keys(mut backend: S, keys: StorageKeys) -> Self {
        let records = match backend.get(&keys.students) {
            None => Vec::new(),
            Some(raw) => {
                let (records, damaged) = parse_roster(&raw);
                if damaged {
                    let backup = keys.students_backup();
                    warn!(
                        "[STORE] Roster under '{}' is partly unreadable, raw value kept in '{}'",
                        keys.students, backup
                    );
                    backend.set(&backup, &raw);
                }
                records
            }
        };
        let group_filter = match backend.get(&keys.group) {
            None => GroupFilter::All,
            Some(raw) => raw.parse::<GroupFilter>().unwrap_or_else(|e| {
                warn!("[STORE] Ignoring malformed group filter under '{}': {}", keys.group, e);
                GroupFilter::All
            }),
        };
        debug!("[STORE] Loaded {} students, group filter '{}'", records.len(), group_filter);

        Self {
            backend,
            keys,
            records,
            group_filter,
        }
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> RosterResult<&StudentRecord> {
        self.records.get(index).ok_or(RosterError::IndexOutOfRange {
            index,
            len: self.records.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn group_filter(&self) -> GroupFilter {
        self.group_filter
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    /// Add a record at the end of the roster
    pub fn append(&mut self, record: StudentRecord) {
        self.records.push(record);
        debug!("[STORE] Appended student #{}", self.records.len() - 1);
        self.persist_records();
    }

    /// Overwrite the record at `index`, keeping its position
    pub fn replace_at(&mut self, index: usize, record: StudentRecord) -> RosterResult<()> {
        self.check_index(index)?;
        self.records[index] = record;
        debug!("[STORE] Replaced student #{}", index);
        self.persist_records();
        Ok(())
    }

    /// Remove the record at `index`; later records shift left.
    ///
    /// Callers must have confirmed the deletion with the user.
    pub fn remove_at(&mut self, index: usize) -> RosterResult<StudentRecord> {
        self.check_index(index)?;
        let removed = self.records.remove(index);
        debug!("[STORE] Removed student #{}", index);
        self.persist_records();
        Ok(removed)
    }

    pub fn set_group_filter(&mut self, filter: GroupFilter) {
        self.group_filter = filter;
        debug!("[STORE] Group filter set to '{}'", filter);
        self.backend.set(&self.keys.group, filter.as_str());
    }

    fn check_index(&self, index: usize) -> RosterResult<()> {
        if index < self.records.len() {
            Ok(())
        } else {
            Err(RosterError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
        }
    }

    fn persist_records(&mut self) {
        match serde_json::to_string(&self.records) {
            Ok(json) => self.backend.set(&self.keys.students, &json),
            Err(e) => warn!("[STORE] Failed to serialize roster: {}", e),
        }
    }
}

/// Decode a stored roster entry by entry.
///
/// Returns the readable records and whether anything was dropped.
/// A stored `null` counts as an empty roster.
fn parse_roster(raw: &str) -> (Vec<StudentRecord>, bool) {
    let entries = match serde_json::from_str::<Option<Vec<serde_json::Value>>>(raw) {
        Ok(entries) => entries.unwrap_or_default(),
        Err(e) => {
            warn!("[STORE] Stored roster is not a JSON array: {}", e);
            return (Vec::new(), true);
        }
    };
    let total = entries.len();
    let records: Vec<StudentRecord> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            serde_json::from_value(entry)
                .map_err(|e| warn!("[STORE] Skipping stored student #{}: {}", i, e))
                .ok()
        })
        .collect();
    let damaged = records.len() < total;
    (records, damaged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Group;
    use crate::storage::MemoryStorage;

    fn record(first: &str, last: &str, group: Group) -> StudentRecord {
        StudentRecord::new(first, last, group, false)
    }

    fn stored_records(store: &RosterStore<MemoryStorage>) -> Vec<StudentRecord> {
        let raw = store.backend().get("students").expect("roster not persisted");
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_load_empty_backend() {
        let store = RosterStore::load(MemoryStorage::new());
        assert!(store.is_empty());
        assert_eq!(store.group_filter(), GroupFilter::All);
        // Loading alone writes nothing back
        assert!(store.backend().is_empty());
    }

    #[test]
    fn test_load_existing_data() {
        let backend = MemoryStorage::new()
            .with_entry(
                "students",
                r#"[{"firstName":"Ali","lastName":"Vali","group":"REACT 13","doesWork":true}]"#,
            )
            .with_entry("student_group", "REACT 13");
        let store = RosterStore::load(backend);
        assert_eq!(store.records(), &[StudentRecord::new("Ali", "Vali", Group::React13, true)]);
        assert_eq!(store.group_filter(), GroupFilter::Only(Group::React13));
    }

    #[test]
    fn test_load_malformed_defaults() {
        let backend = MemoryStorage::new()
            .with_entry("students", "{not json")
            .with_entry("student_group", "REACT 99");
        let store = RosterStore::load(backend);
        assert!(store.is_empty());
        assert_eq!(store.group_filter(), GroupFilter::All);
        assert_eq!(store.backend().get("students").as_deref(), Some("{not json"));
        assert_eq!(store.backend().get("students.bak").as_deref(), Some("{not json"));
    }

    #[test]
    fn test_load_skips_unreadable_entries() {
        let raw = r#"[{"firstName":"Ali","lastName":"Vali","group":"REACT 1","doesWork":false},{"firstName":"Bek","lastName":"Toir","group":"REACT 2","doesWork":true},{"firstName":"Sardor","lastName":"Alimov","group":"REACT 11"}]"#;
        let mut store = RosterStore::load(MemoryStorage::new().with_entry("students", raw));
        assert_eq!(store.records(), &[record("Ali", "Vali", Group::React1)]);

        store.append(record("New", "One", Group::React1));

        // the unreadable entries survive the rewrite of the main key
        assert_eq!(store.backend().get("students.bak").as_deref(), Some(raw));
        assert_eq!(stored_records(&store).len(), 2);
    }

    #[test]
    fn test_load_clean_roster_writes_no_backup() {
        let backend = MemoryStorage::new().with_entry(
            "students",
            r#"[{"firstName":"Ali","lastName":"Vali","group":"REACT 13","doesWork":true}]"#,
        );
        let store = RosterStore::load(backend);
        assert_eq!(store.len(), 1);
        assert!(store.backend().get("students.bak").is_none());
    }

    #[test]
    fn test_load_null_roster() {
        let store = RosterStore::load(MemoryStorage::new().with_entry("students", "null"));
        assert!(store.is_empty());
        assert!(store.backend().get("students.bak").is_none());
    }

    #[test]
    fn test_load_custom_keys() {
        let keys = StorageKeys {
            students: "roster".to_string(),
            group: "roster_group".to_string(),
        };
        let backend = MemoryStorage::new().with_entry("roster_group", "REACT 1");
        let mut store = RosterStore::load_with_keys(backend, keys);
        assert_eq!(store.group_filter(), GroupFilter::Only(Group::React1));

        store.append(record("A", "B", Group::React1));
        assert!(store.backend().get("roster").is_some());
        assert!(store.backend().get("students").is_none());
    }

    #[test]
    fn test_append_persists() {
        let mut store = RosterStore::load(MemoryStorage::new());
        store.append(record("Ali", "Vali", Group::React1));
        store.append(record("Bek", "Toir", Group::React11));
        assert_eq!(store.len(), 2);
        assert_eq!(stored_records(&store), store.records());
    }

    #[test]
    fn test_replace_at() {
        let mut store = RosterStore::load(MemoryStorage::new());
        store.append(record("A", "A", Group::React1));
        store.append(record("B", "B", Group::React1));

        store.replace_at(1, record("C", "C", Group::React15)).unwrap();
        assert_eq!(store.get(1).unwrap().first_name, "C");
        assert_eq!(store.get(0).unwrap().first_name, "A");
        assert_eq!(stored_records(&store)[1].group, Group::React15);
    }

    #[test]
    fn test_replace_out_of_range() {
        let mut store = RosterStore::load(MemoryStorage::new());
        for name in ["A", "B", "C"] {
            store.append(record(name, name, Group::React1));
        }
        let before = store.backend().clone();

        let err = store.replace_at(5, record("X", "X", Group::React1)).unwrap_err();
        assert_eq!(err, RosterError::IndexOutOfRange { index: 5, len: 3 });
        assert_eq!(store.backend(), &before);
    }

    #[test]
    fn test_remove_at_shifts_left() {
        let mut store = RosterStore::load(MemoryStorage::new());
        for name in ["A", "B", "C", "D"] {
            store.append(record(name, name, Group::React1));
        }

        let removed = store.remove_at(1).unwrap();
        assert_eq!(removed.first_name, "B");
        let names: Vec<&str> = store.records().iter().map(|r| r.first_name.as_str()).collect();
        assert_eq!(names, vec!["A", "C", "D"]);
        assert_eq!(stored_records(&store).len(), 3);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut store = RosterStore::load(MemoryStorage::new());
        assert_eq!(
            store.remove_at(0),
            Err(RosterError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_group_filter_persisted_independently() {
        let mut store = RosterStore::load(MemoryStorage::new());
        store.set_group_filter(GroupFilter::Only(Group::React11));
        assert_eq!(store.backend().get("student_group").as_deref(), Some("REACT 11"));
        assert!(store.backend().get("students").is_none());

        store.set_group_filter(GroupFilter::All);
        assert_eq!(store.backend().get("student_group").as_deref(), Some("all"));
    }

    #[test]
    fn test_reload_round_trip() {
        let mut store = RosterStore::load(MemoryStorage::new());
        store.append(record("Ali", "Vali", Group::React13));
        store.set_group_filter(GroupFilter::Only(Group::React13));

        let reloaded = RosterStore::load(store.into_backend());
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.group_filter(), GroupFilter::Only(Group::React13));
    }
}
