use chrono::NaiveTime;
use chrono_tz::Tz;

use crate::tables::manager::{TableOptions, default_table_ids};
use crate::tables::status::StatusWindows;
use crate::utils::time::parse_cutoff;

/// 服务器配置 - 餐桌点餐后端的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 4000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | BUSINESS_TIMEZONE | Europe/Paris | 业务时区 |
/// | BUSINESS_DAY_CUTOFF | 03:00 | 营业日换日时间 (HH:MM) |
/// | AUTO_PRINT_BUFFER_MS | 120000 | 自动打印缓冲 (毫秒) |
/// | PREP_WINDOW_MS | 1200000 | 备餐窗口 (毫秒) |
/// | PAY_CLEAR_MS | 30000 | 已支付展示窗口 (毫秒) |
/// | NEW_ORDER_WINDOW_MS | 180000 | 加单提示窗口 (毫秒) |
/// | TABLE_COUNT | 10 | 物理桌台数量 (T1..Tn) |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 TABLE_COUNT=24 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 业务时区 (营业日分桶和显示时间均按此时区)
    pub business_timezone: Tz,
    /// 营业日换日时间: 本地时间早于此刻的票据归入前一营业日
    pub business_day_cutoff: NaiveTime,
    /// 自动打印缓冲 (毫秒)
    pub auto_print_buffer_ms: i64,
    /// 备餐窗口 (毫秒)
    pub prep_window_ms: i64,
    /// 已支付展示窗口 (毫秒)
    pub pay_clear_window_ms: i64,
    /// 加单提示窗口 (毫秒)
    pub new_order_window_ms: i64,
    /// 物理桌台数量
    pub table_count: usize,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或解析失败，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(4000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            business_timezone: std::env::var("BUSINESS_TIMEZONE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(chrono_tz::Europe::Paris),
            business_day_cutoff: parse_cutoff(
                &std::env::var("BUSINESS_DAY_CUTOFF").unwrap_or_else(|_| "03:00".into()),
            ),
            auto_print_buffer_ms: std::env::var("AUTO_PRINT_BUFFER_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(120_000),
            prep_window_ms: std::env::var("PREP_WINDOW_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(1_200_000),
            pay_clear_window_ms: std::env::var("PAY_CLEAR_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30_000),
            new_order_window_ms: std::env::var("NEW_ORDER_WINDOW_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(180_000),
            table_count: std::env::var("TABLE_COUNT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10),
        }
    }

    /// 桌台引擎的运行参数
    pub fn table_options(&self) -> TableOptions {
        TableOptions {
            windows: StatusWindows {
                auto_print_buffer_ms: self.auto_print_buffer_ms,
                prep_window_ms: self.prep_window_ms,
                pay_clear_window_ms: self.pay_clear_window_ms,
            },
            new_order_window_ms: self.new_order_window_ms,
            table_ids: default_table_ids(self.table_count),
            cutoff: self.business_day_cutoff,
            tz: self.business_timezone,
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
