//! Search Bar Component
//!
//! Case-insensitive search across the whole catalog. Offers to add the
//! query as a custom item when nothing carries that exact name.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::CATEGORY_CUSTOM;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_app_context();
    let ui = use_ui_store();

    let can_create = Memo::new(move |_| {
        let query = ui.search_query().get();
        ctx.session.with(|s| s.can_create_custom(&query))
    });

    let create = move || {
        let query = ui.search_query().get_untracked();
        let mut created = None;
        ctx.session.update(|s| created = s.create_custom_item(&query));
        if created.is_some() {
            ui.search_query().set(String::new());
            ui.selected_category().set(CATEGORY_CUSTOM.to_string());
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if can_create.get_untracked() {
            create();
        }
    };

    view! {
        <form class="search-bar" on:submit=on_submit>
            <input
                type="search"
                placeholder="Search or add an item..."
                autocomplete="off"
                prop:value=move || ui.search_query().get()
                on:input=move |ev| ui.search_query().set(event_target_value(&ev))
            />
            <Show when=move || can_create.get()>
                <button type="button" class="add-custom-btn" on:click=move |_| create()>
                    {move || format!("Add \"{}\"", ui.search_query().get().trim())}
                </button>
            </Show>
        </form>
    }
}
