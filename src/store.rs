//! UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over view state
//! that is not part of the grocery session itself.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::CATEGORY_ALL;

/// View state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Active category tab
    pub selected_category: String,
    /// Search box contents
    pub search_query: String,
    /// Review modal visibility
    pub review_open: bool,
    /// "Copied" indicator after a clipboard export
    pub copied: bool,
}

impl UiState {
    pub fn new(initial_category: Option<String>) -> Self {
        Self {
            selected_category: initial_category.unwrap_or_else(|| CATEGORY_ALL.to_string()),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}
