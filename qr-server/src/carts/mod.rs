//! Cart registry - per-table, multi-guest pending baskets
//!
//! Several devices share one table's cart; additions from any guest merge by
//! item identity (base item id + sorted modifier set), so the same dish with
//! the same modifiers always lands on one line no matter the insertion order
//! of its modifiers. Carts are independent of tickets until checkout, which
//! is a one-way conversion.

use std::collections::BTreeMap;
use std::sync::Arc;

use dashmap::DashMap;
use shared::models::{CartItemInput, CartLine, CartSnapshot};

use crate::money;
use crate::services::MenuCatalog;
use crate::utils::validation::{
    MAX_QUANTITY, normalize_modifiers, validate_price, validate_quantity, validate_required_text,
};
use crate::utils::AppResult;

/// One merged cart line under a guest
#[derive(Debug, Clone)]
struct CartEntry {
    item_id: String,
    name: String,
    quantity: i32,
    unit_price: f64,
    modifiers: Vec<String>,
}

/// One guest's basket (lines keyed by item identity, deterministic order)
#[derive(Debug, Clone, Default)]
struct GuestCart {
    display_name: String,
    lines: BTreeMap<String, CartEntry>,
}

/// Cart registry - single owner of all pending baskets
#[derive(Debug)]
pub struct CartRegistry {
    catalog: Arc<MenuCatalog>,
    /// table id → guest key → basket; entry-level access serializes per table
    carts: DashMap<String, BTreeMap<String, GuestCart>>,
}

/// Merge key: base item id + sorted, deduplicated modifier set
pub fn item_identity(item_id: &str, modifiers: &[String]) -> String {
    let normalized = normalize_modifiers(modifiers);
    format!("{}::{}", item_id, normalized.join("|"))
}

impl CartRegistry {
    pub fn new(catalog: Arc<MenuCatalog>) -> Self {
        Self {
            catalog,
            carts: DashMap::new(),
        }
    }

    /// Add an item to a guest's basket.
    ///
    /// Merges into an existing line of the same identity (quantity summed);
    /// the latest call wins for unit price, modifiers and the guest's display
    /// name. Returns the identity of the touched line.
    pub fn add_item(&self, table: &str, input: &CartItemInput) -> AppResult<String> {
        validate_required_text(table, "table")?;
        validate_required_text(&input.guest, "guest")?;
        validate_required_text(&input.id, "item id")?;
        validate_quantity(input.quantity, "quantity")?;

        // Catalog price wins when the id is known; otherwise trust the caller
        let (name, unit_price) = match self.catalog.lookup(&input.id) {
            Some(menu) => (menu.name.clone(), menu.price),
            None => (
                input
                    .name
                    .as_deref()
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .unwrap_or("Article")
                    .to_string(),
                input.price.unwrap_or(0.0),
            ),
        };
        validate_price(unit_price, "price")?;

        let modifiers = normalize_modifiers(&input.modifiers);
        let identity = item_identity(&input.id, &modifiers);

        let mut table_cart = self.carts.entry(table.to_string()).or_default();
        let guest = table_cart.entry(input.guest.clone()).or_default();
        if let Some(display) = input
            .guest_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
        {
            guest.display_name = display.to_string();
        }

        match guest.lines.get_mut(&identity) {
            Some(entry) => {
                // Repeated adds merge; the line stays within the checkout limit
                entry.quantity = entry.quantity.saturating_add(input.quantity).min(MAX_QUANTITY);
                entry.name = name;
                entry.unit_price = unit_price;
                entry.modifiers = modifiers;
            }
            None => {
                guest.lines.insert(
                    identity.clone(),
                    CartEntry {
                        item_id: input.id.clone(),
                        name,
                        quantity: input.quantity,
                        unit_price,
                        modifiers,
                    },
                );
            }
        }

        tracing::debug!(table, guest = %input.guest, identity = %identity, "Cart item added");
        Ok(identity)
    }

    /// Apply a signed quantity delta to a line; removes it when the result
    /// drops to zero or below. The delta comes straight off the wire, so the
    /// arithmetic saturates and the result is capped at [`MAX_QUANTITY`].
    /// Missing table/guest/line is a benign no-op.
    pub fn adjust_quantity(&self, table: &str, guest_key: &str, identity: &str, delta: i32) {
        let Some(mut table_cart) = self.carts.get_mut(table) else {
            return;
        };
        let remove_guest = {
            let Some(guest) = table_cart.get_mut(guest_key) else {
                return;
            };
            let Some(entry) = guest.lines.get_mut(identity) else {
                return;
            };
            entry.quantity = entry.quantity.saturating_add(delta).min(MAX_QUANTITY);
            if entry.quantity <= 0 {
                guest.lines.remove(identity);
            }
            guest.lines.is_empty()
        };
        if remove_guest {
            table_cart.remove(guest_key);
        }
        let now_empty = table_cart.is_empty();
        drop(table_cart);
        if now_empty {
            self.carts.remove(table);
        }
    }

    /// Drop the whole table cart (all guests)
    pub fn clear_table(&self, table: &str) {
        self.carts.remove(table);
        tracing::debug!(table, "Cart cleared");
    }

    /// Flatten all guests' lines into one billable view.
    ///
    /// Each line carries the guest's display name and `is_owner` so a client
    /// can distinguish its own lines from table-mates'. Totals use the same
    /// rounding rule as tickets.
    pub fn snapshot(&self, table: &str, requesting_guest: Option<&str>) -> CartSnapshot {
        let lines: Vec<CartLine> = match self.carts.get(table) {
            Some(table_cart) => table_cart
                .iter()
                .flat_map(|(guest_key, guest)| {
                    let display = if guest.display_name.is_empty() {
                        "Invité".to_string()
                    } else {
                        guest.display_name.clone()
                    };
                    let is_owner = requesting_guest == Some(guest_key.as_str());
                    guest
                        .lines
                        .iter()
                        .map(move |(identity, entry)| CartLine {
                            identity: identity.clone(),
                            item_id: entry.item_id.clone(),
                            name: entry.name.clone(),
                            quantity: entry.quantity,
                            unit_price: entry.unit_price,
                            modifiers: entry.modifiers.clone(),
                            guest_name: display.clone(),
                            is_owner,
                        })
                        .collect::<Vec<_>>()
                })
                .collect(),
            None => Vec::new(),
        };

        let totals = money::cart_totals(&lines);
        CartSnapshot {
            items: lines,
            totals,
        }
    }
}

#[cfg(test)]
mod tests;
