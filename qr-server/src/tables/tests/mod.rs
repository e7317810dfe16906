use std::sync::Arc;

use chrono::TimeZone;
use shared::models::{TicketCreate, TicketItemInput};

use super::manager::{TableManager, TableOptions};
use crate::services::MenuCatalog;

mod test_projection;

pub const SEC: i64 = 1000;
pub const MIN: i64 = 60 * SEC;

/// Fixed base instant: 2025-05-10 12:00:00 Paris (mid-service, far from the
/// 03:00 business-day cutoff)
pub fn base_ms() -> i64 {
    chrono_tz::Europe::Paris
        .with_ymd_and_hms(2025, 5, 10, 12, 0, 0)
        .single()
        .unwrap()
        .timestamp_millis()
}

pub fn test_manager() -> TableManager {
    TableManager::new(Arc::new(MenuCatalog::default_menu()), TableOptions::default())
}

/// Order of catalog items: (id, quantity) pairs
pub fn order(table: &str, items: &[(&str, i32)]) -> TicketCreate {
    TicketCreate {
        table: table.to_string(),
        items: items
            .iter()
            .map(|(id, qty)| TicketItemInput {
                id: id.to_string(),
                name: None,
                quantity: *qty,
                price: None,
                owner_name: None,
                modifiers: vec![],
            })
            .collect(),
        owner_name: None,
    }
}

/// Off-menu line with caller-supplied name and price
pub fn custom_item(id: &str, name: &str, price: f64, quantity: i32) -> TicketItemInput {
    TicketItemInput {
        id: id.to_string(),
        name: Some(name.to_string()),
        quantity,
        price: Some(price),
        owner_name: None,
        modifiers: vec![],
    }
}
