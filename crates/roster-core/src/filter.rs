//! Roster Filter
//!
//! Search and group filtering over the roster. Every visible record keeps
//! its original position so edit and delete address the full roster,
//! never the filtered list.

use crate::models::{GroupFilter, StudentRecord};

/// Visible records as `(original_index, record)`, in roster order.
///
/// A record is visible when the search text is empty or a case-insensitive
/// substring of its first or last name, and its group passes the filter.
pub fn visible<'a>(
    roster: &'a [StudentRecord],
    search_text: &str,
    group_filter: GroupFilter,
) -> impl Iterator<Item = (usize, &'a StudentRecord)> + 'a {
    let needle = search_text.to_lowercase();
    roster
        .iter()
        .enumerate()
        .filter(move |(_, record)| matches_search(record, &needle) && group_filter.matches(record.group))
}

fn matches_search(record: &StudentRecord, needle: &str) -> bool {
    needle.is_empty()
        || record.first_name.to_lowercase().contains(needle)
        || record.last_name.to_lowercase().contains(needle)
}

/// A table row: display number plus the record's roster position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VisibleRow {
    /// 1-based number shown in the `#` column
    pub position: usize,
    /// Index into the full roster, used for edit/delete
    pub original_index: usize,
    pub record: StudentRecord,
}

/// Owned rows for rendering
pub fn visible_rows(roster: &[StudentRecord], search_text: &str, group_filter: GroupFilter) -> Vec<VisibleRow> {
    visible(roster, search_text, group_filter)
        .enumerate()
        .map(|(shown, (original_index, record))| VisibleRow {
            position: shown + 1,
            original_index,
            record: record.clone(),
        })
        .collect()
}
