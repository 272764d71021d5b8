//! UI Components
//!
//! Leptos views over the grocery session.

mod search_bar;
mod category_tabs;
mod item_card;
mod item_grid;
mod cart_button;
mod review_modal;

pub use search_bar::SearchBar;
pub use category_tabs::CategoryTabs;
pub use item_card::ItemCard;
pub use item_grid::ItemGrid;
pub use cart_button::CartButton;
pub use review_modal::ReviewModal;
