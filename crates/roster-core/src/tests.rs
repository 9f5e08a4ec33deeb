//! Roster Scenario Tests
//!
//! End-to-end flows through RosterManager with in-memory storage.

use crate::{
    DraftField, EditorMode, Group, GroupFilter, KeyValueStore, MemoryStorage, RosterError,
    RosterManager, StudentRecord,
};

fn setup_manager(records: &[StudentRecord]) -> RosterManager<MemoryStorage> {
    let json = serde_json::to_string(records).expect("Failed to encode fixture");
    RosterManager::load(MemoryStorage::new().with_entry("students", json))
}

fn ali() -> StudentRecord {
    StudentRecord::new("Ali", "Vali", Group::React1, false)
}

#[test]
fn test_edit_scenario() {
    let mut manager = setup_manager(&[ali()]);

    manager.begin_edit(0).unwrap();
    assert_eq!(manager.editor().draft(), &ali());
    assert_eq!(manager.editor().selected_index(), Some(0));

    manager.update_field(DraftField::DoesWork(true)).unwrap();
    assert!(manager.editor().draft().does_work);

    manager.commit().unwrap();
    assert!(manager.records()[0].does_work);
    assert_eq!(manager.editor().draft(), &StudentRecord::blank());
    assert_eq!(manager.editor().selected_index(), None);
    assert_eq!(manager.editor().mode(), EditorMode::Idle);
}

#[test]
fn test_create_scenario() {
    let mut manager = setup_manager(&[ali(), StudentRecord::new("Sardor", "Alimov", Group::React11, true)]);

    manager.begin_create().unwrap();
    manager.update_field(DraftField::FirstName("Bek".into())).unwrap();
    manager.update_field(DraftField::LastName("Toir".into())).unwrap();
    let index = manager.commit().unwrap();

    assert_eq!(index, 2);
    assert_eq!(manager.records().len(), 3);
    assert_eq!(manager.records()[2], StudentRecord::new("Bek", "Toir", Group::React1, false));
}

#[test]
fn test_replace_out_of_range_scenario() {
    let manager = setup_manager(&[ali(), ali(), ali()]);
    let mut store = manager.store().clone();
    assert_eq!(
        store.replace_at(5, ali()),
        Err(RosterError::IndexOutOfRange { index: 5, len: 3 })
    );
}

#[test]
fn test_remove_preserves_relative_order() {
    let names = ["A", "B", "C", "D", "E"];
    let records: Vec<StudentRecord> = names
        .iter()
        .map(|n| StudentRecord::new(*n, *n, Group::React1, false))
        .collect();

    for i in 0..records.len() {
        let mut manager = setup_manager(&records);
        manager.remove_at(i).unwrap();

        let mut expected = records.clone();
        expected.remove(i);
        assert_eq!(manager.records().len(), records.len() - 1);
        assert_eq!(manager.records(), expected.as_slice());
    }
}

#[test]
fn test_append_then_remove_is_noop() {
    let records = vec![ali(), StudentRecord::new("Bek", "Toir", Group::React15, true)];
    let mut manager = setup_manager(&records);

    manager.begin_create().unwrap();
    manager.update_field(DraftField::FirstName("Tmp".into())).unwrap();
    let index = manager.commit().unwrap();
    manager.remove_at(index).unwrap();

    assert_eq!(manager.records(), records.as_slice());
}

#[test]
fn test_edit_through_filtered_view_targets_original_index() {
    let mut manager = setup_manager(&[
        ali(),
        StudentRecord::new("Bek", "Toir", Group::React11, false),
        StudentRecord::new("Sardor", "Alimov", Group::React11, false),
    ]);
    manager.set_group_filter(GroupFilter::Only(Group::React11));

    let rows = manager.visible("");
    let sardor = rows.iter().find(|row| row.record.first_name == "Sardor").unwrap();
    assert_eq!(sardor.position, 2);

    manager.begin_edit(sardor.original_index).unwrap();
    manager.update_field(DraftField::DoesWork(true)).unwrap();
    manager.commit().unwrap();

    assert!(manager.records()[2].does_work);
    assert!(!manager.records()[1].does_work);
}

#[test]
fn test_visible_uses_stored_group_filter() {
    let mut manager = setup_manager(&[ali(), StudentRecord::new("Bek", "Toir", Group::React13, false)]);
    assert_eq!(manager.visible("").len(), 2);

    manager.set_group_filter(GroupFilter::Only(Group::React13));
    let rows = manager.visible("");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].original_index, 1);

    assert!(manager.visible("ali").is_empty());
}

#[test]
fn test_state_survives_reload() {
    let mut manager = setup_manager(&[]);
    manager.begin_create().unwrap();
    manager.update_field(DraftField::FirstName("Bek".into())).unwrap();
    manager.update_field(DraftField::LastName("Toir".into())).unwrap();
    manager.update_field(DraftField::Group(Group::React15)).unwrap();
    manager.commit().unwrap();
    manager.set_group_filter(GroupFilter::Only(Group::React15));

    let backend = manager.store().clone().into_backend();
    assert!(backend.get("students").is_some());

    let reloaded = RosterManager::load(backend);
    assert_eq!(reloaded.records(), manager.records());
    assert_eq!(reloaded.group_filter(), GroupFilter::Only(Group::React15));
    assert!(!reloaded.editor().is_open());
}

#[test]
fn test_cancel_leaves_roster_untouched() {
    let mut manager = setup_manager(&[ali()]);
    let before = manager.store().backend().clone();

    manager.begin_edit(0).unwrap();
    manager.update_field(DraftField::FirstName("Changed".into())).unwrap();
    manager.cancel();

    assert_eq!(manager.records(), &[ali()]);
    assert_eq!(manager.store().backend(), &before);
}
