//! 服务模块
//!
//! - [`catalog`] - 菜单目录 (内存只读)

pub mod catalog;

pub use catalog::MenuCatalog;
