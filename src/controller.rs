//! List Controller
//!
//! Session object owning the catalog, custom items, cart and purchase
//! frequencies. UI callbacks map one-to-one onto its methods.

use crate::cart::Cart;
use crate::catalog;
use crate::config::AppConfig;
use crate::export;
use crate::frequency::{FrequencyMap, FrequencyTracker};
use crate::models::{CartUpdate, CatalogItem, CATEGORY_ALL, CATEGORY_CUSTOM, CATEGORY_FREQUENT};
use crate::storage::KeyValueStore;

/// Milliseconds since the epoch, used to derive custom item ids
pub type Clock = fn() -> u64;

const CUSTOM_EMOJI: &str = "🛒";

#[derive(Debug, Clone)]
pub struct ListController {
    catalog: Vec<CatalogItem>,
    custom_items: Vec<CatalogItem>,
    cart: Cart,
    frequencies: FrequencyTracker,
    custom_units: Vec<String>,
    clock: Clock,
}

impl ListController {
    /// Session over the static catalog; frequencies are read from `store`
    pub fn new(config: &AppConfig, store: &dyn KeyValueStore, clock: Clock) -> Self {
        Self::with_catalog(catalog::initial_catalog(), config, store, clock)
    }

    pub fn with_catalog(
        catalog: Vec<CatalogItem>,
        config: &AppConfig,
        store: &dyn KeyValueStore,
        clock: Clock,
    ) -> Self {
        let frequencies = FrequencyTracker::load(store, &config.storage_key);
        let mut custom_units = config.custom_units.clone();
        if custom_units.is_empty() {
            custom_units = AppConfig::default().custom_units;
        }
        Self {
            catalog,
            custom_items: Vec::new(),
            cart: Cart::new(),
            frequencies,
            custom_units,
            clock,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn frequencies(&self) -> &FrequencyMap {
        self.frequencies.counts()
    }

    pub fn custom_items(&self) -> &[CatalogItem] {
        &self.custom_items
    }

    /// Static catalog followed by custom items
    pub fn combined_items(&self) -> impl Iterator<Item = &CatalogItem> {
        self.catalog.iter().chain(self.custom_items.iter())
    }

    pub fn find_item(&self, id: &str) -> Option<&CatalogItem> {
        self.combined_items().find(|item| item.id == id)
    }

    pub fn quantity(&self, id: &str) -> u32 {
        self.cart.quantity(id)
    }

    pub fn total_in_cart(&self) -> usize {
        self.cart.total_in_cart()
    }

    // ========================
    // Cart updates
    // ========================

    /// Merge a partial update into the cart entry for `id`
    pub fn update_cart(&mut self, id: &str, update: CartUpdate) -> bool {
        if self.cart.get(id).is_none() && update.qty == Some(0) {
            return false;
        }
        let Some(item) = self.find_item(id).cloned() else {
            log::warn!("[cart] Ignoring update for unknown item {}", id);
            return false;
        };
        self.cart.apply(&item, update)
    }

    pub fn increment(&mut self, id: &str) -> bool {
        let qty = self.quantity(id);
        self.update_cart(id, CartUpdate::qty(qty + 1))
    }

    pub fn decrement(&mut self, id: &str) -> bool {
        match self.quantity(id) {
            0 => false,
            qty => self.update_cart(id, CartUpdate::qty(qty - 1)),
        }
    }

    /// Card click: selects an unselected item with its default unit
    pub fn select(&mut self, id: &str) -> bool {
        if self.quantity(id) > 0 {
            return false;
        }
        let Some(unit) = self.find_item(id).map(|item| item.default_unit().to_string()) else {
            return false;
        };
        self.update_cart(id, CartUpdate::qty(1).with_unit(unit).with_note(""))
    }

    /// Changing the unit also selects the item
    pub fn set_unit(&mut self, id: &str, unit: &str) -> bool {
        let qty = self.quantity(id).max(1);
        self.update_cart(id, CartUpdate::qty(qty).with_unit(unit))
    }

    /// Adding a note also selects the item
    pub fn set_note(&mut self, id: &str, note: &str) -> bool {
        let qty = self.quantity(id).max(1);
        self.update_cart(id, CartUpdate::qty(qty).with_note(note))
    }

    // ========================
    // Custom items
    // ========================

    /// Create a custom item from free text and put one in the cart.
    /// Blank names are ignored.
    pub fn create_custom_item(&mut self, name: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let mut stamp = (self.clock)();
        let mut id = format!("custom-{}", stamp);
        while self.find_item(&id).is_some() {
            stamp += 1;
            id = format!("custom-{}", stamp);
        }

        let units: Vec<&str> = self.custom_units.iter().map(String::as_str).collect();
        let item = CatalogItem::new(&id, &capitalize(name), CATEGORY_CUSTOM, &units, CUSTOM_EMOJI);
        log::info!("[cart] Created custom item {} ({})", item.name, item.id);
        self.custom_items.push(item);
        self.increment(&id);
        Some(id)
    }

    // ========================
    // Views
    // ========================

    /// Items visible for the current search and tab
    pub fn filter_items(&self, query: &str, category: &str) -> Vec<CatalogItem> {
        let items: Vec<CatalogItem> = self.combined_items().cloned().collect();
        filter_items(&items, query, category, self.frequencies.counts())
    }

    /// Whether the search box should offer to add `query` as a custom item
    pub fn can_create_custom(&self, query: &str) -> bool {
        let query = query.trim();
        !query.is_empty()
            && !self
                .combined_items()
                .any(|item| item.name.to_lowercase() == query.to_lowercase())
    }

    /// Tab list: Frequent, All, static categories, then Custom once used
    pub fn categories(&self) -> Vec<String> {
        let mut tabs = vec![CATEGORY_FREQUENT.to_string(), CATEGORY_ALL.to_string()];
        tabs.extend(catalog::categories_of(&self.catalog));
        if !self.custom_items.is_empty() {
            tabs.push(CATEGORY_CUSTOM.to_string());
        }
        tabs
    }

    pub fn export_text(&self) -> String {
        export::list_text(self.cart.selected())
    }

    // ========================
    // Checkout
    // ========================

    /// Record one purchase for every selected catalog item and persist the
    /// counts to `store`. Returns how many items were recorded.
    pub fn checkout(&mut self, store: &dyn KeyValueStore) -> usize {
        // Custom items do not outlive the session, so their counts would be orphaned
        let ids: Vec<String> = self
            .cart
            .selected()
            .filter(|e| !e.item.is_custom())
            .map(|e| e.id().to_string())
            .collect();
        if ids.is_empty() {
            return 0;
        }
        let recorded = self.frequencies.record(ids.iter().map(String::as_str));
        if let Err(e) = self.frequencies.save(store) {
            log::error!("[checkout] Failed to persist frequencies: {}", e);
        }
        log::info!("[checkout] Recorded {} items", recorded);
        recorded
    }
}

/// Search overrides the tab; "All" and "Frequent" are virtual tabs
pub fn filter_items(
    items: &[CatalogItem],
    query: &str,
    category: &str,
    frequencies: &FrequencyMap,
) -> Vec<CatalogItem> {
    let query = query.trim().to_lowercase();
    if !query.is_empty() {
        return items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&query))
            .cloned()
            .collect();
    }

    match category {
        CATEGORY_ALL => items.to_vec(),
        CATEGORY_FREQUENT => {
            let count = |item: &CatalogItem| frequencies.get(&item.id).copied().unwrap_or(0);
            let mut ranked: Vec<CatalogItem> = items.iter().filter(|item| count(*item) > 0).cloned().collect();
            // sort_by_key is stable, ties keep catalog order
            ranked.sort_by_key(|item| std::cmp::Reverse(count(item)));
            ranked
        }
        _ => items.iter().filter(|item| item.category == category).cloned().collect(),
    }
}

/// Upper-case the first character, keep the rest as typed
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
