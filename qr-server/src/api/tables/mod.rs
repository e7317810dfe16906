//! Tables API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/tables | GET | 全部桌台投影 (排序后) |
//! | /api/tables/{id}/print | POST | 标记手动打印 |
//! | /api/tables/{id}/confirm | POST | 确认收款 |
//! | /api/tables/{id}/cancel-confirm | POST | 撤销收款 |
//! | /api/tables/{id}/close | POST | 手动关台 |
//! | /api/tables/{id}/reopen | POST | 撤销关台 |
//! | /api/tables/{id}/session | POST | 开始用餐会话 |

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/tables", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}/print", post(handler::print))
        .route("/{id}/confirm", post(handler::confirm))
        .route("/{id}/cancel-confirm", post(handler::cancel_confirm))
        .route("/{id}/close", post(handler::close))
        .route("/{id}/reopen", post(handler::reopen))
        .route("/{id}/session", post(handler::session))
}
