//! 日期时间模块
//!
//! 后端的时间字段都是字符串（ISO 日期或不带时区的日期时间，偶尔带 `Z` / 偏移），
//! 这里负责宽松解析以及各页面使用的显示格式。
//!
//! 解析失败时不报错，原样返回输入，让界面仍然能显示点什么。

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
const DATETIME_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

// =========================================================
// 解析 (Parsing)
// =========================================================

/// 宽松解析日期时间字符串
///
/// 依次尝试 RFC 3339、不带时区的日期时间（秒、毫秒可选）、以及纯日期（视为当天 00:00）。
/// 带时区的值转换为 UTC 的本地表示。
pub fn parse(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", DATETIME_INPUT_FORMAT] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(value, DATE_INPUT_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// 解析为 Unix 毫秒；用于与浏览器时钟比较
pub fn parse_millis(value: &str) -> Option<i64> {
    parse(value).map(|dt| dt.and_utc().timestamp_millis())
}

// =========================================================
// 显示格式 (Display)
// =========================================================

/// 学期卡片使用的 `dd/MM/yyyy`
pub fn format_date(value: &str) -> String {
    match parse(value) {
        Some(dt) => dt.format("%d/%m/%Y").to_string(),
        None => value.to_string(),
    }
}

/// 作业与会话使用的 `MM/dd/yyyy, HH:mm:ss`（24 小时制）
pub fn format_datetime(value: &str) -> String {
    match parse(value) {
        Some(dt) => dt.format("%m/%d/%Y, %H:%M:%S").to_string(),
        None => value.to_string(),
    }
}

// =========================================================
// 表单输入 (Form inputs)
// =========================================================

/// 转为 `<input type="date">` 的值 `yyyy-MM-dd`
pub fn to_date_input(value: &str) -> String {
    match parse(value) {
        Some(dt) => dt.format(DATE_INPUT_FORMAT).to_string(),
        None => value.to_string(),
    }
}

/// 转为 `<input type="datetime-local">` 的值 `yyyy-MM-ddTHH:mm`
pub fn to_datetime_input(value: &str) -> String {
    match parse(value) {
        Some(dt) => dt.format(DATETIME_INPUT_FORMAT).to_string(),
        None => value.to_string(),
    }
}

/// 把 `datetime-local` 的值补全为带秒的 ISO 日期时间，作为请求体发送
pub fn from_datetime_input(value: &str) -> String {
    match parse(value) {
        Some(dt) => dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
        None => value.to_string(),
    }
}

// =========================================================
// 时长 (Durations)
// =========================================================

/// 历史记录中的学习时长
///
/// - 不足 1 分钟：`N seconds`
/// - 不足 1 小时：`N minute(s)`
/// - 其余：保留一位小数的小时数，`1.0` 用单数
pub fn format_study_time(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    if seconds < 60.0 {
        format!("{} seconds", seconds.round() as u64)
    } else if seconds < 3600.0 {
        let minutes = (seconds / 60.0).floor() as u64;
        if minutes == 1 {
            "1 minute".to_string()
        } else {
            format!("{} minutes", minutes)
        }
    } else {
        let hours = format!("{:.1}", seconds / 3600.0);
        let plural = hours.parse::<f64>().map(|h| h > 1.0).unwrap_or(true);
        format!("{} hour{}", hours, if plural { "s" } else { "" })
    }
}

/// 计时器显示 `HH:MM:SS`
pub fn format_elapsed(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_backend_shapes() {
        assert!(parse("2024-10-01T09:00:00").is_some());
        assert!(parse("2024-10-01T09:00:00.123456").is_some());
        assert!(parse("2024-10-01 09:00:00").is_some());
        assert!(parse("2024-10-01T09:00").is_some());
        assert!(parse("2024-10-01").is_some());
        assert!(parse("").is_none());
        assert!(parse("yesterday").is_none());
    }

    #[test]
    fn test_parse_normalizes_offsets_to_utc() {
        let a = parse("2024-10-01T09:00:00Z").unwrap();
        let b = parse("2024-10-01T11:00:00+02:00").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_term_dates_display_day_first() {
        assert_eq!(format_date("2024-09-01"), "01/09/2024");
        assert_eq!(format_date("2024-12-15T00:00:00"), "15/12/2024");
        assert_eq!(format_date("not a date"), "not a date");
    }

    #[test]
    fn test_datetime_display_month_first_24h() {
        assert_eq!(format_datetime("2024-11-01T23:59:00"), "11/01/2024, 23:59:00");
    }

    #[test]
    fn test_form_inputs() {
        assert_eq!(to_date_input("2024-09-01T00:00:00"), "2024-09-01");
        assert_eq!(to_datetime_input("2024-11-01T23:59:30"), "2024-11-01T23:59");
        assert_eq!(from_datetime_input("2024-11-01T23:59"), "2024-11-01T23:59:00");
        assert_eq!(from_datetime_input(""), "");
    }

    #[test]
    fn test_study_time_buckets() {
        assert_eq!(format_study_time(0.0), "0 seconds");
        assert_eq!(format_study_time(42.4), "42 seconds");
        assert_eq!(format_study_time(60.0), "1 minute");
        assert_eq!(format_study_time(150.0), "2 minutes");
        assert_eq!(format_study_time(3600.0), "1.0 hour");
        assert_eq!(format_study_time(5400.0), "1.5 hours");
    }

    #[test]
    fn test_elapsed_clock() {
        assert_eq!(format_elapsed(0), "00:00:00");
        assert_eq!(format_elapsed(3725), "01:02:05");
        assert_eq!(format_elapsed(-5), "00:00:00");
    }
}
