//! Frontend Models
//!
//! Catalog and cart data structures.

use serde::{Deserialize, Serialize};

/// Category of user-created items
pub const CATEGORY_CUSTOM: &str = "Custom";
/// Virtual category showing the whole catalog
pub const CATEGORY_ALL: &str = "All";
/// Virtual category ranked by purchase frequency
pub const CATEGORY_FREQUENT: &str = "Frequent";

/// A purchasable item (static catalog entry or custom)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Never empty; the first unit is the default
    pub units: Vec<String>,
    pub emoji: String,
}

impl CatalogItem {
    pub fn new(id: &str, name: &str, category: &str, units: &[&str], emoji: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            units: units.iter().map(|u| u.to_string()).collect(),
            emoji: emoji.to_string(),
        }
    }

    pub fn default_unit(&self) -> &str {
        self.units.first().map(String::as_str).unwrap_or_default()
    }

    pub fn has_unit(&self, unit: &str) -> bool {
        self.units.iter().any(|u| u == unit)
    }

    pub fn is_custom(&self) -> bool {
        self.category == CATEGORY_CUSTOM
    }
}

/// A selected item with quantity, unit and note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub item: CatalogItem,
    pub qty: u32,
    pub selected_unit: String,
    pub note: String,
}

impl CartItem {
    /// Fresh entry with qty 0, default unit and empty note
    pub fn empty(item: CatalogItem) -> Self {
        let selected_unit = item.default_unit().to_string();
        Self {
            item,
            qty: 0,
            selected_unit,
            note: String::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.item.id
    }

    /// Note with surrounding whitespace removed, None when blank
    pub fn trimmed_note(&self) -> Option<&str> {
        let note = self.note.trim();
        (!note.is_empty()).then_some(note)
    }
}

/// Partial update merged into a cart entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartUpdate {
    pub qty: Option<u32>,
    pub unit: Option<String>,
    pub note: Option<String>,
}

impl CartUpdate {
    pub fn qty(qty: u32) -> Self {
        Self { qty: Some(qty), ..Default::default() }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}
