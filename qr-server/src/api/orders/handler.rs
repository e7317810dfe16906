//! Orders API Handlers

use axum::{Json, extract::State};
use shared::models::{Ticket, TicketCreate, TicketSummary};
use shared::response::ApiResponse;
use shared::util::now_millis;

use crate::core::ServerState;
use crate::utils::{AppResult, ok};

/// POST /api/orders - 下单
///
/// 条目按菜单目录解析 (命中时目录价格优先)，总额含固定附加费。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TicketCreate>,
) -> AppResult<Json<ApiResponse<Ticket>>> {
    let ticket = state.tables.create_ticket(payload, now_millis())?;
    Ok(ok(ticket))
}

/// GET /api/summary - 当前营业日的全部票据 (按下单时间排序)
pub async fn summary(
    State(state): State<ServerState>,
) -> Json<ApiResponse<Vec<TicketSummary>>> {
    ok(state.tables.day_summary(now_millis()))
}
