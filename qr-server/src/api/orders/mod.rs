//! Orders API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/orders | POST | 下单 (生成票据) |
//! | /api/summary | GET | 当前营业日票据汇总 |

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/orders", post(handler::create))
        .route("/api/summary", get(handler::summary))
}
