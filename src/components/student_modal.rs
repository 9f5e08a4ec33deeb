//! Student Modal Component
//!
//! Add/edit dialog bound to the editor draft. Shown while a draft is open.

use leptos::prelude::*;
use log::info;
use roster_core::DraftField;
use wasm_bindgen::JsCast;

use super::DraftGroupSelect;
use crate::store::{store_apply, use_app_store, AppStateStoreFields};

/// `(name, value)` of the form control that fired `ev`.
/// Checkboxes report `"true"`/`"false"`.
fn control_input(ev: &web_sys::Event) -> Option<(String, String)> {
    let target = ev.target()?;
    let input = target.dyn_ref::<web_sys::HtmlInputElement>()?;
    let value = if input.type_() == "checkbox" {
        input.checked().to_string()
    } else {
        input.value()
    };
    Some((input.name(), value))
}

#[component]
pub fn StudentModal() -> impl IntoView {
    let store = use_app_store();
    // Set after a submit with missing names, enables the invalid styles
    let (validated, set_validated) = signal(false);

    let is_open = move || store.manager().read().editor().is_open();
    let draft = move || store.manager().read().editor().draft().clone();
    let title = move || store.manager().read().editor().title();
    let submit_label = move || store.manager().read().editor().submit_label();

    let on_field = move |ev: web_sys::Event| {
        let Some((name, value)) = control_input(&ev) else { return };
        store_apply(&store, |manager| {
            let field = DraftField::from_input(&name, &value)?;
            manager.update_field(field)
        });
    };

    let on_close = move |_: web_sys::MouseEvent| {
        store.manager().write().cancel();
        set_validated.set(false);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !draft().has_names() {
            set_validated.set(true);
            return;
        }
        if let Some(index) = store_apply(&store, |manager| manager.commit()) {
            info!("[APP] Saved student #{}", index);
            set_validated.set(false);
        }
    };

    view! {
        <Show when=is_open>
            <div class="modal-backdrop fade show"></div>
            <div class="modal fade show d-block" tabindex="-1" role="dialog">
                <div class="modal-dialog">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">{title}</h5>
                            <button type="button" class="btn-close" aria-label="Close" on:click=on_close></button>
                        </div>
                        <div class="modal-body">
                            <form
                                class=move || if validated.get() { "was-validated" } else { "" }
                                novalidate=true
                                on:submit=on_submit
                            >
                                <div class="mb-3">
                                    <label class="form-label">"First name"</label>
                                    <input
                                        type="text"
                                        class="form-control"
                                        name="firstName"
                                        required=true
                                        prop:value=move || draft().first_name
                                        on:input=on_field
                                    />
                                    <div class="invalid-feedback">"Please fill this field!"</div>
                                </div>
                                <div class="mb-3">
                                    <label class="form-label">"Last name"</label>
                                    <input
                                        type="text"
                                        class="form-control"
                                        name="lastName"
                                        required=true
                                        prop:value=move || draft().last_name
                                        on:input=on_field
                                    />
                                    <div class="invalid-feedback">"Please fill this field!"</div>
                                </div>
                                <div class="mb-3">
                                    <label class="form-label">"Select group"</label>
                                    <DraftGroupSelect />
                                </div>
                                <div class="mb-3 form-check">
                                    <input
                                        type="checkbox"
                                        class="form-check-input"
                                        id="doesWork"
                                        name="doesWork"
                                        prop:checked=move || draft().does_work
                                        on:change=on_field
                                    />
                                    <label class="form-check-label" for="doesWork">"Does work?"</label>
                                </div>
                                <div class="modal-footer">
                                    <button type="button" class="btn btn-secondary" on:click=on_close>
                                        "Close"
                                    </button>
                                    <button type="submit" class="btn btn-primary">
                                        {submit_label}
                                    </button>
                                </div>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
