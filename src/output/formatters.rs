//! Reusable formatting utilities for CLI output

use chrono::{DateTime, Local, Utc};

/// Format an epoch-milliseconds timestamp as local date and time.
///
/// Returns "N/A" for missing, zero or out-of-range values.
///
/// # Example output
/// `2025-01-15 14:30 -08:00`
pub fn format_epoch_millis_local(millis: Option<i64>) -> String {
    match millis.filter(|m| *m > 0).and_then(DateTime::from_timestamp_millis) {
        Some(dt) => dt
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M %:z")
            .to_string(),
        None => "N/A".to_string(),
    }
}

/// Format an ISO 8601 timestamp as `YYYY-MM-DD HH:MM` UTC.
///
/// Unparseable input is returned unchanged so nothing is hidden.
pub fn format_iso_short(timestamp: Option<&str>) -> String {
    match timestamp {
        None => "--".to_string(),
        Some(ts) => ts
            .parse::<DateTime<Utc>>()
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| ts.to_string()),
    }
}

/// Truncate to `max_len` characters with an ellipsis.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// `--` for absent values
pub fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "--".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_epoch_millis_local_valid() {
        // Jan 15, 2025 12:00:00 UTC; the date holds in every timezone
        let result = format_epoch_millis_local(Some(1736942400000));
        assert!(result.starts_with("2025-01-15"));
    }

    #[test]
    fn test_format_epoch_millis_local_missing() {
        assert_eq!(format_epoch_millis_local(None), "N/A");
        assert_eq!(format_epoch_millis_local(Some(0)), "N/A");
    }

    #[test]
    fn test_format_iso_short() {
        assert_eq!(
            format_iso_short(Some("2024-05-01T10:00:00.000Z")),
            "2024-05-01 10:00"
        );
        assert_eq!(format_iso_short(Some("yesterday")), "yesterday");
        assert_eq!(format_iso_short(None), "--");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a much longer name", 10), "a much ...");
        assert_eq!(truncate("ééééééé", 5), "éé...");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(Some(3)), "3");
        assert_eq!(or_dash::<u64>(None), "--");
    }
}
