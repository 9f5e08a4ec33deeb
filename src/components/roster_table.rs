//! Roster Table Component
//!
//! Striped table of the visible students with per-row Edit/Delete.

use leptos::prelude::*;
use log::info;
use roster_core::VisibleRow;

use super::DeleteConfirmButton;
use crate::store::{store_apply, use_app_store, AppStateStoreFields};

/// One student row. Edit and delete address `original_index`, the
/// position in the full roster, not the row number shown.
#[component]
fn StudentRow(row: VisibleRow) -> impl IntoView {
    let store = use_app_store();
    let index = row.original_index;

    let on_edit = move |_: web_sys::MouseEvent| {
        store_apply(&store, |manager| manager.begin_edit(index));
    };

    let on_delete = Callback::new(move |_: ()| {
        if let Some(removed) = store_apply(&store, |manager| manager.remove_at(index)) {
            info!("[APP] Deleted {} {}", removed.first_name, removed.last_name);
        }
    });

    let VisibleRow { position, record, .. } = row;

    view! {
        <tr>
            <td>{position}</td>
            <td>{record.first_name.clone()}</td>
            <td>{record.last_name.clone()}</td>
            <td>{record.group.as_str()}</td>
            <td>{record.does_work_label()}</td>
            <td class="text-end">
                <button type="button" class="btn btn-primary" on:click=on_edit>
                    "Edit"
                </button>
                " "
                <DeleteConfirmButton button_class="btn btn-danger" on_confirm=on_delete />
            </td>
        </tr>
    }
}

#[component]
pub fn RosterTable() -> impl IntoView {
    let store = use_app_store();

    let rows = move || {
        let search = store.search().get();
        store.manager().read().visible(&search)
    };

    view! {
        <table class="table table-striped table-hover">
            <thead>
                <tr>
                    <th>"#"</th>
                    <th>"Firstname"</th>
                    <th>"Lastname"</th>
                    <th>"Group"</th>
                    <th>"Does work?"</th>
                    <th class="text-end">"Action"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=rows
                    key=|row| row.clone()
                    children=move |row| view! { <StudentRow row=row /> }
                />
            </tbody>
        </table>
    }
}
