//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: String,
}
