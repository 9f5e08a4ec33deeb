//! Student Roster App
//!
//! Main application component: toolbar, roster table and the add/edit dialog.

use leptos::prelude::*;
use log::info;
use reactive_stores::Store;
use roster_core::RosterConfig;

use crate::components::{NoticeBar, RosterTable, StudentModal, Toolbar};
use crate::store::AppState;

#[component]
pub fn App(config: RosterConfig) -> impl IntoView {
    let state = AppState::load(&config);
    info!(
        "[APP] Loaded {} students, group filter '{}'",
        state.manager.records().len(),
        state.manager.group_filter()
    );

    // Provide the store to all children
    provide_context(Store::new(state));

    view! {
        <div class="container">
            <Toolbar />
            <NoticeBar />
            <RosterTable />
            <StudentModal />
        </div>
    }
}
