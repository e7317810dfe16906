//! QR Table Server - 扫码点餐后端
//!
//! # 架构概述
//!
//! 面向堂食扫码点餐的单进程内存后端：
//!
//! - **桌台引擎** (`tables`): 票据存储、会话标志，以及从时间戳纯推导的桌台状态
//! - **购物车** (`carts`): 同桌多客人共享购物车，按条目身份合并
//! - **菜单目录** (`services`): 内存只读菜单
//! - **金额计算** (`money`): Decimal 精度的小计与固定附加费
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! qr-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── tables/        # 桌台引擎 (状态推导 + 投影)
//! ├── carts/         # 多客人购物车
//! ├── services/      # 菜单目录
//! ├── money/         # 金额计算
//! └── utils/         # 错误、日志、时间、校验
//! ```

pub mod api;
pub mod carts;
pub mod core;
pub mod money;
pub mod services;
pub mod tables;
pub mod utils;

// Re-export 公共类型
pub use carts::CartRegistry;
pub use core::{Config, Server, ServerState};
pub use services::MenuCatalog;
pub use tables::{TableManager, TableOptions};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   ____  ____    ______      __    __
  / __ \/ __ \  /_  __/___ _/ /_  / /__
 / / / / /_/ /   / / / __ `/ __ \/ / _ \
/ /_/ / _, _/   / / / /_/ / /_/ / /  __/
\___\_\_/ |_|   /_/  \__,_/_.___/_/\___/
    "#
    );
}
