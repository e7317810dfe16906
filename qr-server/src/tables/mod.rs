//! Table state engine
//!
//! # 结构
//!
//! - [`status`] - 纯状态推导 (ticket 时间戳 + 当前时间 → 状态)
//! - [`manager`] - ticket 存储、session 标志、员工操作、桌台投影
//!
//! 桌台没有存储的状态字段：每次读取都从 ticket 历史和墙钟重新推导。

pub mod manager;
pub mod status;

pub use manager::{TableManager, TableOptions};
pub use status::{StatusWindows, derive_status, effective_printed_at};

#[cfg(test)]
mod tests;
