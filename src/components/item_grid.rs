//! Item Grid Component
//!
//! Cards for the items matching the current search and tab.

use leptos::prelude::*;

use crate::components::ItemCard;
use crate::context::use_app_context;
use crate::models::CATEGORY_FREQUENT;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn ItemGrid() -> impl IntoView {
    let ctx = use_app_context();
    let ui = use_ui_store();

    let visible = Memo::new(move |_| {
        let query = ui.search_query().get();
        let category = ui.selected_category().get();
        ctx.session.with(|s| s.filter_items(&query, &category))
    });

    let empty_message = move || {
        if !ui.search_query().get().trim().is_empty() {
            "No matching items."
        } else if ui.selected_category().get() == CATEGORY_FREQUENT {
            "Nothing here yet. Items you check out will show up here."
        } else {
            "No items in this category."
        }
    };

    view! {
        <Show
            when=move || !visible.get().is_empty()
            fallback=move || view! { <p class="empty-state">{empty_message}</p> }
        >
            <div class="item-grid">
                <For
                    each=move || visible.get()
                    key=|item| item.id.clone()
                    children=|item| view! { <ItemCard item=item /> }
                />
            </div>
        </Show>
    }
}
