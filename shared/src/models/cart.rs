//! Cart Models
//!
//! Pre-checkout baskets. Several guests share one table cart; lines merge by
//! item identity (base item id + sorted modifier set).

use serde::{Deserialize, Serialize};

/// Add-to-cart payload
///
/// `modifiers` accepts the legacy `options` / `mods` aliases; normalization
/// into a canonical sorted set happens once at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemInput {
    /// Guest device key (opaque, client-generated)
    pub guest: String,
    /// Guest display name shown to table-mates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default = "default_quantity", alias = "qty")]
    pub quantity: i32,
    /// Unit price override; the catalog price wins when the id matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, alias = "options", alias = "mods")]
    pub modifiers: Vec<String>,
}

fn default_quantity() -> i32 {
    1
}

/// Adjust-cart-quantity payload (signed delta; the line is removed at <= 0)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartAdjust {
    pub guest: String,
    pub identity: String,
    pub delta: i32,
}

/// One flattened cart line in a snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Merge key: item id + sorted modifier set
    pub identity: String,
    pub item_id: String,
    pub name: String,
    pub quantity: i32,
    pub unit_price: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<String>,
    pub guest_name: String,
    /// True iff the line belongs to the requesting guest
    pub is_owner: bool,
}

/// Cart totals (same rounding rule as tickets)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub subtotal: f64,
    /// Fixed 10% surtax
    pub tax: f64,
    pub total: f64,
}

/// Flattened per-table cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub items: Vec<CartLine>,
    pub totals: CartTotals,
}
