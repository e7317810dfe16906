//! Ticket Model
//!
//! A ticket is an order record that is immutable once created, except for the
//! staff-set `printed_at` / `paid_at` timestamps. Table status is never stored
//! on the ticket; it is derived from these timestamps and the wall clock.

use serde::{Deserialize, Serialize};

/// One line of a ticket
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TicketItem {
    /// Menu item ID (or a free-form id for off-menu items)
    pub id: String,
    pub name: String,
    pub quantity: i32,
    pub unit_price: f64,
    /// Display name of the guest this line belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    /// Normalized modifier names (trimmed, deduplicated, sorted)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<String>,
}

/// Ticket entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Sequential ID ("TCK1", "TCK2", ...)
    pub id: String,
    pub table: String,
    pub items: Vec<TicketItem>,
    /// round2(subtotal * 1.10), fixed at creation
    pub total: f64,
    pub created_at: i64,
    /// Business-day bucket ("YYYY-MM-DD"), derived from `created_at`
    pub business_day: String,
    pub printed_at: Option<i64>,
    pub paid_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
}

/// One item of a create-order request
///
/// `modifiers` also accepts the legacy `options` / `mods` aliases; the server
/// normalizes them into a single canonical set before any core logic runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketItemInput {
    pub id: String,
    /// Fallback name when the id is not in the catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default = "default_quantity", alias = "qty")]
    pub quantity: i32,
    /// Fallback unit price when the id is not in the catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(default, alias = "options", alias = "mods")]
    pub modifiers: Vec<String>,
}

fn default_quantity() -> i32 {
    1
}

/// Create ticket payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketCreate {
    pub table: String,
    pub items: Vec<TicketItemInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
}

/// One entry of the day summary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSummary {
    pub id: String,
    pub table: String,
    pub total: f64,
    pub items: Vec<TicketItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    pub created_at: i64,
    /// Local "HH:MM" display time (business timezone)
    pub time: String,
}
