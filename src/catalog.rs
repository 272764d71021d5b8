//! Catalog Store
//!
//! Static list of purchasable items grouped by category.

use crate::models::CatalogItem;

/// (id, name, category, units, emoji)
type Entry = (&'static str, &'static str, &'static str, &'static [&'static str], &'static str);

const INITIAL_CATALOG: &[Entry] = &[
    // Vegetables
    ("tomato", "Tomatoes", "Vegetables", &["kg", "g", "pcs"], "🍅"),
    ("onion", "Onions", "Vegetables", &["kg", "g", "pcs"], "🧅"),
    ("potato", "Potatoes", "Vegetables", &["kg", "g", "pcs"], "🥔"),
    ("carrot", "Carrots", "Vegetables", &["kg", "g", "pcs"], "🥕"),
    ("cucumber", "Cucumber", "Vegetables", &["pcs", "kg"], "🥒"),
    ("broccoli", "Broccoli", "Vegetables", &["pcs", "kg"], "🥦"),
    ("bell-pepper", "Bell Pepper", "Vegetables", &["pcs", "kg"], "🫑"),
    ("garlic", "Garlic", "Vegetables", &["bulb", "g"], "🧄"),
    ("spinach", "Spinach", "Vegetables", &["bunch", "bag", "g"], "🥬"),
    ("corn", "Corn", "Vegetables", &["pcs", "can"], "🌽"),
    // Fruits
    ("banana", "Bananas", "Fruits", &["bunch", "pcs", "kg"], "🍌"),
    ("apple", "Apples", "Fruits", &["kg", "pcs", "bag"], "🍎"),
    ("orange", "Oranges", "Fruits", &["kg", "pcs", "bag"], "🍊"),
    ("lemon", "Lemons", "Fruits", &["pcs", "bag"], "🍋"),
    ("grapes", "Grapes", "Fruits", &["kg", "g", "box"], "🍇"),
    ("strawberry", "Strawberries", "Fruits", &["box", "g"], "🍓"),
    ("avocado", "Avocado", "Fruits", &["pcs", "bag"], "🥑"),
    ("watermelon", "Watermelon", "Fruits", &["pcs", "half"], "🍉"),
    // Dairy
    ("milk", "Milk", "Dairy", &["L", "ml", "gallon"], "🥛"),
    ("eggs", "Eggs", "Dairy", &["dozen", "pcs", "tray"], "🥚"),
    ("butter", "Butter", "Dairy", &["pack", "g"], "🧈"),
    ("cheese", "Cheese", "Dairy", &["pack", "g", "slices"], "🧀"),
    ("yogurt", "Yogurt", "Dairy", &["cup", "tub", "g"], "🥣"),
    ("cream", "Cream", "Dairy", &["ml", "L", "carton"], "🍶"),
    // Pantry
    ("rice", "Rice", "Pantry", &["kg", "bag"], "🍚"),
    ("pasta", "Pasta", "Pantry", &["pack", "g"], "🍝"),
    ("bread", "Bread", "Pantry", &["loaf", "pcs"], "🍞"),
    ("flour", "Flour", "Pantry", &["kg", "bag"], "🌾"),
    ("sugar", "Sugar", "Pantry", &["kg", "g", "bag"], "🍬"),
    ("oil", "Cooking Oil", "Pantry", &["L", "bottle"], "🫒"),
    ("coffee", "Coffee", "Pantry", &["pack", "g", "jar"], "☕"),
    ("tea", "Tea", "Pantry", &["box", "pack"], "🍵"),
    ("honey", "Honey", "Pantry", &["jar", "bottle"], "🍯"),
    // Spices
    ("salt", "Salt", "Spices", &["pack", "g"], "🧂"),
    ("black-pepper", "Black Pepper", "Spices", &["jar", "g"], "⚫"),
    ("chili", "Chili Powder", "Spices", &["pack", "g"], "🌶️"),
    ("cinnamon", "Cinnamon", "Spices", &["jar", "sticks", "g"], "🪵"),
    ("ginger", "Ginger", "Spices", &["g", "pcs"], "🫚"),
];

/// The static catalog in display order
pub fn initial_catalog() -> Vec<CatalogItem> {
    INITIAL_CATALOG
        .iter()
        .map(|(id, name, category, units, emoji)| CatalogItem::new(id, name, category, units, emoji))
        .collect()
}

/// Distinct categories in order of first appearance
pub fn categories_of(items: &[CatalogItem]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for item in items {
        if !categories.iter().any(|c| c == &item.category) {
            categories.push(item.category.clone());
        }
    }
    categories
}
