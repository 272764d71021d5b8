//! Cart Button Component
//!
//! Floating checkout button with a badge counting selected items.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn CartButton() -> impl IntoView {
    let ctx = use_app_context();
    let ui = use_ui_store();
    let total = Memo::new(move |_| ctx.session.with(|s| s.total_in_cart()));

    let on_checkout = move |_: web_sys::MouseEvent| {
        if total.get_untracked() == 0 {
            return;
        }
        ctx.checkout();
        ui.review_open().set(true);
    };

    view! {
        <div class="fab-container">
            <button
                class=move || { if total.get() > 0 { "fab active" } else { "fab" } }
                disabled=move || total.get() == 0
                on:click=on_checkout
            >
                <span class="fab-icon">"🛒"</span>
                <Show when=move || { total.get() > 0 }>
                    <span class="fab-badge">{move || total.get()}</span>
                </Show>
            </button>
        </div>
    }
}
