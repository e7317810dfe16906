//! 时间工具函数 — 营业日换算
//!
//! 服务日在收市时间结束而不是午夜。所有时间戳统一为 `i64` Unix millis，
//! 仅在分桶和显示时换算到业务时区。

use chrono::{Duration, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// 解析 cutoff 时间字符串 (HH:MM)，失败返回 00:00
pub fn parse_cutoff(cutoff: &str) -> NaiveTime {
    NaiveTime::parse_from_str(cutoff, "%H:%M").unwrap_or_else(|e| {
        tracing::warn!(
            "Failed to parse business_day_cutoff '{}': {}, falling back to 00:00",
            cutoff,
            e
        );
        NaiveTime::MIN
    })
}

/// 时间戳 → 营业日键 "YYYY-MM-DD" (业务时区)
///
/// 本地时间 < cutoff → 归入"昨天"的营业日
pub fn business_day_key(at_ms: i64, cutoff: NaiveTime, tz: Tz) -> String {
    let local = Utc
        .timestamp_millis_opt(at_ms)
        .single()
        .unwrap_or_else(Utc::now)
        .with_timezone(&tz);
    let date = if local.time() < cutoff {
        (local - Duration::days(1)).date_naive()
    } else {
        local.date_naive()
    };
    date.format("%Y-%m-%d").to_string()
}

/// 时间戳 → "HH:MM" 显示时间 (业务时区)
pub fn format_time_hm(at_ms: i64, tz: Tz) -> String {
    Utc.timestamp_millis_opt(at_ms)
        .single()
        .unwrap_or_else(Utc::now)
        .with_timezone(&tz)
        .format("%H:%M")
        .to_string()
}
