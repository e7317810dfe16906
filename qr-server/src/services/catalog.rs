//! Menu catalog service
//!
//! A static, in-memory mapping from item id to display name and unit price.
//! Checkout resolves each line against the catalog; on miss it falls back to
//! the caller-supplied name/price.

use shared::models::MenuItem;
use std::collections::HashMap;

/// In-memory menu catalog
#[derive(Debug)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
    index: HashMap<String, usize>,
}

impl MenuCatalog {
    /// Build a catalog from a fixed item list (last entry wins on duplicate ids)
    pub fn from_items(items: Vec<MenuItem>) -> Self {
        let index = items
            .iter()
            .enumerate()
            .map(|(i, it)| (it.id.clone(), i))
            .collect();
        Self { items, index }
    }

    /// The built-in demo menu
    pub fn default_menu() -> Self {
        let entries = [
            ("m1", "Margherita", 8.5, "Pizzas"),
            ("m2", "Regina", 10.0, "Pizzas"),
            ("m3", "Cheeseburger", 12.0, "Burgers"),
            ("m4", "Frites", 3.5, "Sides"),
            ("m5", "Tiramisu", 5.0, "Desserts"),
            ("m6", "Coca 33cl", 2.8, "Boissons"),
        ];
        Self::from_items(
            entries
                .into_iter()
                .map(|(id, name, price, category)| MenuItem {
                    id: id.to_string(),
                    name: name.to_string(),
                    price,
                    category: category.to_string(),
                })
                .collect(),
        )
    }

    /// Look up an item by id
    pub fn lookup(&self, id: &str) -> Option<&MenuItem> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    /// All menu items, in menu order
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::default_menu()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_hit_and_miss() {
        let catalog = MenuCatalog::default_menu();
        let hit = catalog.lookup("m3").unwrap();
        assert_eq!(hit.name, "Cheeseburger");
        assert_eq!(hit.price, 12.0);
        assert!(catalog.lookup("nope").is_none());
    }

    #[test]
    fn test_items_preserve_menu_order() {
        let catalog = MenuCatalog::default_menu();
        assert_eq!(catalog.items().len(), 6);
        assert_eq!(catalog.items()[0].id, "m1");
    }
}
