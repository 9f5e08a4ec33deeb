//! Toolbar Component
//!
//! Search box, group filter and the "Add student" button.

use leptos::prelude::*;

use super::GroupFilterSelect;
use crate::store::{store_apply, use_app_store, AppStateStoreFields};

#[component]
pub fn Toolbar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="input-group my-3">
            <input
                type="text"
                class="form-control input"
                placeholder="Searching"
                aria-label="Searching"
                prop:value=move || store.search().get()
                on:input=move |ev| store.search().set(event_target_value(&ev))
            />
            <div class="buttons">
                <div class="select">
                    <GroupFilterSelect />
                </div>
                <div class="add-btn">
                    <button
                        type="button"
                        class="btn btn-outline-success"
                        on:click=move |_| {
                            store_apply(&store, |manager| manager.begin_create());
                        }
                    >
                        "Add student"
                    </button>
                </div>
            </div>
        </div>
    }
}
