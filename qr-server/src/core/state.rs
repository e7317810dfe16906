use std::sync::Arc;

use crate::carts::CartRegistry;
use crate::core::Config;
use crate::services::MenuCatalog;
use crate::tables::manager::TableManager;

/// 服务器状态 - 持有所有服务的单例引用
///
/// ServerState 是后端的核心数据结构，持有所有共享服务的引用。
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | catalog | Arc<MenuCatalog> | 菜单目录 |
/// | tables | Arc<TableManager> | 票据、会话与桌台投影 |
/// | carts | Arc<CartRegistry> | 多客人共享购物车 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 菜单目录 (只读)
    pub catalog: Arc<MenuCatalog>,
    /// 桌台引擎
    pub tables: Arc<TableManager>,
    /// 购物车注册表
    pub carts: Arc<CartRegistry>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序装配：菜单目录 → 桌台引擎 → 购物车注册表。
    /// 所有状态都驻留内存，进程重启即清空。
    pub fn initialize(config: &Config) -> Self {
        let catalog = Arc::new(MenuCatalog::default_menu());
        let tables = Arc::new(TableManager::new(catalog.clone(), config.table_options()));
        let carts = Arc::new(CartRegistry::new(catalog.clone()));

        Self {
            config: config.clone(),
            catalog,
            tables,
            carts,
        }
    }
}
