//! Grocery List App
//!
//! Root component: owns the list session and lays out search, tabs, grid,
//! checkout button and review modal.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CartButton, CategoryTabs, ItemGrid, ReviewModal, SearchBar};
use crate::config::AppConfig;
use crate::context::{open_store, AppContext};
use crate::controller::ListController;
use crate::models::{CATEGORY_ALL, CATEGORY_FREQUENT};
use crate::store::UiState;

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = open_store();
    let session = RwSignal::new(ListController::new(&config, store.as_ref(), now_ms));

    // Start on the first real category, like a shop aisle
    let initial_category = session.with_untracked(|s| {
        s.categories()
            .into_iter()
            .find(|c| c != CATEGORY_FREQUENT && c != CATEGORY_ALL)
    });
    log::info!(
        "[app] Session started with {} known purchase counts",
        session.with_untracked(|s| s.frequencies().len())
    );

    provide_context(AppContext::new(session, config));
    provide_context(Store::new(UiState::new(initial_category)));

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"AGI"</h1>
                <p class="tagline">"Awesome Grocery Intelligence"</p>
                <p class="subtitle">"Spouse-proof your shopping with precise items, units & notes"</p>
            </header>

            <SearchBar />
            <CategoryTabs />

            <main class="main-content">
                <ItemGrid />
            </main>

            <CartButton />
            <ReviewModal />
        </div>
    }
}
