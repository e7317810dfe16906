//! Shared types for the QR ordering backend
//!
//! Wire models (tickets, table views, carts, menu items), the unified API
//! response envelope and small time utilities used by both the server and
//! in-process test clients.

pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    CartItemInput, CartLine, CartSnapshot, CartTotals, LastTicket, MenuItem, TableFlags,
    TableStatus, TableView, Ticket, TicketCreate, TicketItem, TicketSummary,
};
pub use response::ApiResponse;
pub use util::now_millis;
