//! Cart API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/cart/{table}?guest= | GET | 购物车快照 (标记请求者本人的行) |
//! | /api/cart/{table}/items | POST | 加入条目 (同身份合并) |
//! | /api/cart/{table}/adjust | POST | 调整数量 (≤0 即删除) |
//! | /api/cart/{table} | DELETE | 清空整桌购物车 |
//! | /api/cart/{table}/checkout | POST | 结算: 快照 → 票据 → 清空 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/cart", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/{table}", get(handler::get_cart).delete(handler::clear))
        .route("/{table}/items", post(handler::add_item))
        .route("/{table}/adjust", post(handler::adjust))
        .route("/{table}/checkout", post(handler::checkout))
}
