//! Group Select Components
//!
//! Group dropdowns for the toolbar filter and the dialog draft.

use leptos::prelude::*;
use log::warn;
use roster_core::{DraftField, Group, GroupFilter};

use crate::store::{store_apply, use_app_store, AppStateStoreFields};

/// Toolbar filter: "All" plus every group. The choice is persisted.
#[component]
pub fn GroupFilterSelect() -> impl IntoView {
    let store = use_app_store();
    let current = move || store.manager().read().group_filter();

    let on_change = move |ev: web_sys::Event| match event_target_value(&ev).parse::<GroupFilter>() {
        Ok(filter) => store.manager().write().set_group_filter(filter),
        Err(e) => warn!("[APP] {}", e),
    };

    view! {
        <select class="form-select" on:change=on_change>
            {GroupFilter::options().map(|filter| {
                view! {
                    <option value=filter.as_str() prop:selected=move || current() == filter>
                        {filter.label()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

/// Dialog select bound to the draft's group
#[component]
pub fn DraftGroupSelect() -> impl IntoView {
    let store = use_app_store();
    let current = move || store.manager().read().editor().draft().group;

    let on_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        store_apply(&store, |manager| {
            let field = DraftField::from_input("group", &value)?;
            manager.update_field(field)
        });
    };

    view! {
        <select class="form-select" name="group" on:change=on_change>
            {Group::ALL.into_iter().map(|group| {
                view! {
                    <option value=group.as_str() prop:selected=move || current() == group>
                        {group.as_str()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
