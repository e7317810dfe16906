//! HTTP API - 路由和处理器
//!
//! 每个功能域一个子模块 (`<feature>/{mod.rs, handler.rs}`)，各自暴露
//! `router()`，由 [`build_router`] 合并。中间件在 [`build_app`] 统一挂载。

use axum::Router;
use axum::middleware as axum_middleware;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::core::ServerState;

pub mod cart;
pub mod health;
pub mod menu;
pub mod middleware;
pub mod orders;
pub mod tables;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(menu::router())
        .merge(orders::router())
        .merge(tables::router())
        .merge(cart::router())
}

/// Build a fully configured application with all middleware
pub fn build_app() -> Router<ServerState> {
    build_router()
        // ========== Tower HTTP Middleware ==========
        // CORS - PWA clients are served from a different origin
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Request logging - outermost, executed first
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
}
