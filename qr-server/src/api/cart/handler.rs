//! Cart API Handlers
//!
//! 所有购物车写操作都返回写入后的整桌快照，PWA 据此刷新界面，
//! 不需要第二次读取。

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{CartAdjust, CartItemInput, CartSnapshot, Ticket, TicketCreate, TicketItemInput};
use shared::response::ApiResponse;
use shared::util::now_millis;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult, ok};

#[derive(Debug, Deserialize)]
pub struct CartQuery {
    /// 请求者的 guest key，用于标记快照中属于本人的行
    pub guest: Option<String>,
}

/// GET /api/cart/{table}?guest= - 购物车快照
pub async fn get_cart(
    State(state): State<ServerState>,
    Path(table): Path<String>,
    Query(query): Query<CartQuery>,
) -> Json<ApiResponse<CartSnapshot>> {
    ok(state.carts.snapshot(&table, query.guest.as_deref()))
}

/// POST /api/cart/{table}/items - 加入条目
pub async fn add_item(
    State(state): State<ServerState>,
    Path(table): Path<String>,
    Json(payload): Json<CartItemInput>,
) -> AppResult<Json<ApiResponse<CartSnapshot>>> {
    state.carts.add_item(&table, &payload)?;
    Ok(ok(state.carts.snapshot(&table, Some(&payload.guest))))
}

/// POST /api/cart/{table}/adjust - 调整某行数量 (降到 0 及以下即删除)
pub async fn adjust(
    State(state): State<ServerState>,
    Path(table): Path<String>,
    Json(payload): Json<CartAdjust>,
) -> Json<ApiResponse<CartSnapshot>> {
    state
        .carts
        .adjust_quantity(&table, &payload.guest, &payload.identity, payload.delta);
    ok(state.carts.snapshot(&table, Some(&payload.guest)))
}

/// DELETE /api/cart/{table} - 清空整桌购物车
pub async fn clear(
    State(state): State<ServerState>,
    Path(table): Path<String>,
) -> Json<ApiResponse<CartSnapshot>> {
    state.carts.clear_table(&table);
    ok(state.carts.snapshot(&table, None))
}

/// POST /api/cart/{table}/checkout - 结算
///
/// 把整桌购物车转成一张票据：每个购物车行生成一个票据条目，
/// `ownerName` 取该行客人的显示名。下单成功后清空购物车。
pub async fn checkout(
    State(state): State<ServerState>,
    Path(table): Path<String>,
) -> AppResult<Json<ApiResponse<Ticket>>> {
    let snapshot = state.carts.snapshot(&table, None);
    if snapshot.items.is_empty() {
        return Err(AppError::validation("cart is empty"));
    }

    let items = snapshot
        .items
        .iter()
        .map(|line| TicketItemInput {
            id: line.item_id.clone(),
            name: Some(line.name.clone()),
            quantity: line.quantity,
            price: Some(line.unit_price),
            owner_name: Some(line.guest_name.clone()),
            modifiers: line.modifiers.clone(),
        })
        .collect();

    let ticket = state.tables.create_ticket(
        TicketCreate {
            table: table.clone(),
            items,
            owner_name: None,
        },
        now_millis(),
    )?;
    state.carts.clear_table(&table);

    Ok(ok(ticket))
}
