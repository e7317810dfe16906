//! Data models
//!
//! Shared between qr-server and the PWA clients (via API).
//! Wire casing is camelCase; all instants are Unix milliseconds (`i64`).

pub mod cart;
pub mod menu_item;
pub mod table;
pub mod ticket;

// Re-exports
pub use cart::*;
pub use menu_item::*;
pub use table::*;
pub use ticket::*;
