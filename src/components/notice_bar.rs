//! Notice Bar Component
//!
//! Shows the last failed operation; dismissed by click or after a delay.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

const NOTICE_TIMEOUT_MS: u32 = 4_000;

#[component]
pub fn NoticeBar() -> impl IntoView {
    let store = use_app_store();
    // Pending auto-dismiss; replacing it drops (cancels) the previous timer
    let timer = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        let (seq, shown) = {
            let notice = store.notice().read();
            (notice.seq(), notice.message().is_some())
        };
        let next = shown.then(|| {
            Timeout::new(NOTICE_TIMEOUT_MS, move || store.notice().write().expire(seq))
        });
        timer.set_value(next);
    });

    view! {
        {move || store.notice().read().message().map(str::to_string).map(|message| view! {
            <div class="alert alert-warning alert-dismissible" role="alert">
                {message}
                <button
                    type="button"
                    class="btn-close"
                    aria-label="Close"
                    on:click=move |_| store.notice().write().dismiss()
                ></button>
            </div>
        })}
    }
}
