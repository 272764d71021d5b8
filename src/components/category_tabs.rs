//! Category Tabs Component
//!
//! Horizontal tab strip: Frequent, All, catalog categories, Custom.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn CategoryTabs() -> impl IntoView {
    let ctx = use_app_context();
    let ui = use_ui_store();
    let categories = Memo::new(move |_| ctx.session.with(|s| s.categories()));

    view! {
        <nav class="category-tabs">
            <For
                each=move || categories.get()
                key=|category| category.clone()
                children=move |category| {
                    let label = category.clone();
                    let target = category.clone();
                    let is_active = move || {
                        ui.search_query().get().trim().is_empty()
                            && ui.selected_category().get() == category
                    };
                    view! {
                        <button
                            class=move || if is_active() { "tab active" } else { "tab" }
                            on:click=move |_| {
                                ui.selected_category().set(target.clone());
                                ui.search_query().set(String::new());
                            }
                        >
                            {label}
                        </button>
                    }
                }
            />
        </nav>
    }
}
