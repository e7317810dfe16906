//! Menu API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/menu | GET | 菜单目录 (只读) |

use axum::{Json, Router, extract::State, routing::get};
use shared::models::MenuItem;
use shared::response::ApiResponse;

use crate::core::ServerState;
use crate::utils::ok;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/menu", get(list))
}

/// GET /api/menu - 获取完整菜单
async fn list(State(state): State<ServerState>) -> Json<ApiResponse<Vec<MenuItem>>> {
    ok(state.catalog.items().to_vec())
}
