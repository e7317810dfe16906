//! Tables API Handlers
//!
//! 员工操作一律幂等：目标票据缺失或状态不符时是无害的 no-op，
//! 响应总是返回该桌台刷新后的投影。

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::TableView;
use shared::response::ApiResponse;
use shared::util::now_millis;

use crate::core::ServerState;
use crate::utils::ok;

/// GET /api/tables - 全部桌台投影，按最近票据排序
pub async fn list(State(state): State<ServerState>) -> Json<ApiResponse<Vec<TableView>>> {
    ok(state.tables.list_tables(now_millis()))
}

/// POST /api/tables/{id}/print - 标记手动打印
pub async fn print(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Json<ApiResponse<TableView>> {
    let now = now_millis();
    state.tables.mark_printed(&id, now);
    ok(state.tables.project_table(&id, now))
}

/// POST /api/tables/{id}/confirm - 确认收款
pub async fn confirm(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Json<ApiResponse<TableView>> {
    let now = now_millis();
    state.tables.mark_paid(&id, now);
    ok(state.tables.project_table(&id, now))
}

/// POST /api/tables/{id}/cancel-confirm - 撤销收款
pub async fn cancel_confirm(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Json<ApiResponse<TableView>> {
    let now = now_millis();
    state.tables.cancel_payment(&id, now);
    ok(state.tables.project_table(&id, now))
}

/// POST /api/tables/{id}/close - 手动关台
pub async fn close(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Json<ApiResponse<TableView>> {
    state.tables.close_table(&id);
    ok(state.tables.project_table(&id, now_millis()))
}

/// POST /api/tables/{id}/reopen - 撤销关台
pub async fn reopen(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Json<ApiResponse<TableView>> {
    state.tables.reopen_table(&id);
    ok(state.tables.project_table(&id, now_millis()))
}

/// POST /api/tables/{id}/session - 开始用餐会话 (隐藏上一组客人的票据)
pub async fn session(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Json<ApiResponse<TableView>> {
    let now = now_millis();
    state.tables.start_session(&id, now);
    ok(state.tables.project_table(&id, now))
}
