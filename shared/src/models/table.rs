//! Table Models
//!
//! Displayed table status and the per-table projection payload.
//! The status is recomputed from ticket timestamps on every read; there is no
//! stored status field anywhere.

use serde::{Deserialize, Serialize};

/// Displayed table status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    /// No active ticket (or payment display expired / table closed)
    #[default]
    Empty,
    /// Ticket created, auto-print buffer not yet elapsed
    Ordered,
    /// Effectively printed, kitchen at work
    InPreparation,
    /// Preparation window elapsed, bill outstanding
    PaymentDue,
    /// Paid, shown briefly before the table returns to Empty
    Paid,
    /// Session active but no order placed yet
    InProgress,
    /// A repeat order just landed on an already-in-flight table
    NewOrder,
}

/// Per-table mutable flags
///
/// Exists implicitly for every table; defaults to `{false, None}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TableFlags {
    pub closed_manually: bool,
    pub session_start_at: Option<i64>,
}

/// Condensed last-ticket info for the table list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LastTicket {
    pub total: f64,
    pub at: i64,
}

/// Projected table payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    pub id: String,
    pub status: TableStatus,
    /// Suppressed (None) whenever `cleared` is true
    pub last_ticket_at: Option<i64>,
    pub last_ticket: Option<LastTicket>,
    /// Manually closed or auto-cleared after payment
    pub cleared: bool,
    pub closed_manually: bool,
    pub session_start_at: Option<i64>,
}
