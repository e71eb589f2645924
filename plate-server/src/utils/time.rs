//! 时间工具函数
//!
//! `createdAt` 统一使用固定精度 (微秒) 的 RFC 3339 UTC 字符串存储，
//! 字典序即时间序，可直接用于 `ORDER BY createdAt DESC`。

use chrono::{DateTime, SecondsFormat, Utc};

/// Fixed-width RFC 3339 rendering (`2026-10-19T08:30:00.123456Z`)
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse an RFC 3339 string into UTC
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw).map(|dt| dt.with_timezone(&Utc))
}

/// Reservation QR token: `RESERVATION-<unix seconds>.<micros>`
pub fn qr_code_for(ts: &DateTime<Utc>) -> String {
    format!(
        "RESERVATION-{}.{:06}",
        ts.timestamp(),
        ts.timestamp_subsec_micros()
    )
}
