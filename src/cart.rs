//! Cart Model
//!
//! Ordered mapping of item id to selection. Entries whose quantity drops to
//! zero are removed, so every stored entry has `qty > 0`.

use crate::models::{CartItem, CartUpdate, CatalogItem};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    /// Insertion order is export order
    entries: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn quantity(&self, id: &str) -> u32 {
        self.get(id).map(|e| e.qty).unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CartItem> {
        self.entries.iter()
    }

    /// Entries with a positive quantity, in insertion order
    pub fn selected(&self) -> impl Iterator<Item = &CartItem> {
        self.entries.iter().filter(|e| e.qty > 0)
    }

    pub fn total_in_cart(&self) -> usize {
        self.selected().count()
    }

    /// Merge `update` into the entry for `item`.
    ///
    /// A missing entry starts from qty 0, the item's first unit and an empty
    /// note. Units outside `item.units` are rejected. Returns whether the
    /// cart changed.
    pub fn apply(&mut self, item: &CatalogItem, update: CartUpdate) -> bool {
        let position = self.entries.iter().position(|e| e.id() == item.id);
        if position.is_none() && update.qty == Some(0) {
            return false;
        }

        let mut entry = match position {
            Some(idx) => self.entries[idx].clone(),
            None => CartItem::empty(item.clone()),
        };
        if let Some(qty) = update.qty {
            entry.qty = qty;
        }
        if let Some(unit) = update.unit {
            if entry.item.has_unit(&unit) {
                entry.selected_unit = unit;
            } else {
                log::warn!("[cart] Unit {:?} is not offered for {}", unit, entry.item.id);
            }
        }
        if let Some(note) = update.note {
            entry.note = note;
        }

        match (position, entry.qty) {
            (Some(idx), 0) => {
                self.entries.remove(idx);
                true
            }
            (None, 0) => false,
            (Some(idx), _) => {
                let changed = self.entries[idx] != entry;
                self.entries[idx] = entry;
                changed
            }
            (None, _) => {
                self.entries.push(entry);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn milk() -> CatalogItem {
        CatalogItem::new("milk", "Milk", "Dairy", &["L", "ml", "gallon"], "🥛")
    }

    #[test]
    fn test_new_entry_defaults() {
        let mut cart = Cart::new();
        assert!(cart.apply(&milk(), CartUpdate::qty(2)));
        let entry = cart.get("milk").unwrap();
        assert_eq!(entry.qty, 2);
        assert_eq!(entry.selected_unit, "L");
        assert_eq!(entry.note, "");
    }

    #[test]
    fn test_zero_qty_on_missing_entry_is_noop() {
        let mut cart = Cart::new();
        assert!(!cart.apply(&milk(), CartUpdate::qty(0)));
        assert!(cart.get("milk").is_none());
    }

    #[test]
    fn test_zero_qty_purges_entry() {
        let mut cart = Cart::new();
        cart.apply(&milk(), CartUpdate::qty(1).with_note("organic"));
        assert!(cart.apply(&milk(), CartUpdate::qty(0)));
        assert!(cart.get("milk").is_none());
        assert_eq!(cart.total_in_cart(), 0);
    }

    #[test]
    fn test_merge_keeps_untouched_fields() {
        let mut cart = Cart::new();
        cart.apply(&milk(), CartUpdate::qty(1).with_unit("gallon").with_note("organic"));
        cart.apply(&milk(), CartUpdate::qty(3));
        let entry = cart.get("milk").unwrap();
        assert_eq!(entry.qty, 3);
        assert_eq!(entry.selected_unit, "gallon");
        assert_eq!(entry.note, "organic");
    }

    #[test]
    fn test_foreign_unit_rejected() {
        let mut cart = Cart::new();
        cart.apply(&milk(), CartUpdate::qty(1).with_unit("kg"));
        assert_eq!(cart.get("milk").unwrap().selected_unit, "L");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let eggs = CatalogItem::new("eggs", "Eggs", "Dairy", &["dozen"], "🥚");
        let mut cart = Cart::new();
        cart.apply(&eggs, CartUpdate::qty(1));
        cart.apply(&milk(), CartUpdate::qty(1));
        cart.apply(&eggs, CartUpdate::qty(2));
        let ids: Vec<&str> = cart.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["eggs", "milk"]);
    }

    fn update_strategy() -> impl Strategy<Value = CartUpdate> {
        let unit = prop::option::of(prop::sample::select(vec!["L", "ml", "gallon", "kg", "", "pcs"]));
        (prop::option::of(0u32..5), unit, prop::option::of("[a-z ]{0,8}")).prop_map(|(qty, unit, note)| {
            CartUpdate {
                qty,
                unit: unit.map(str::to_string),
                note,
            }
        })
    }

    proptest! {
        #[test]
        fn prop_selected_unit_always_offered(updates in prop::collection::vec(update_strategy(), 0..30)) {
            let item = milk();
            let mut cart = Cart::new();
            for update in updates {
                cart.apply(&item, update);
                if let Some(entry) = cart.get("milk") {
                    prop_assert!(item.has_unit(&entry.selected_unit));
                    prop_assert!(entry.qty > 0);
                }
            }
        }

        #[test]
        fn prop_increment_then_decrement_restores_qty(start in 0u32..10, steps in 0u32..20) {
            let item = milk();
            let mut cart = Cart::new();
            cart.apply(&item, CartUpdate::qty(start));
            for _ in 0..steps {
                let qty = cart.quantity("milk");
                cart.apply(&item, CartUpdate::qty(qty + 1));
            }
            for _ in 0..steps {
                let qty = cart.quantity("milk");
                cart.apply(&item, CartUpdate::qty(qty.saturating_sub(1)));
            }
            prop_assert_eq!(cart.quantity("milk"), start);
        }
    }
}
