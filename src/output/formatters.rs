//! Reusable formatting utilities for CLI output

use chrono::{DateTime, Utc};

/// Format a UTC timestamp as local date/time, e.g. `2026-10-16 14:30`
pub fn format_local(at: DateTime<Utc>) -> String {
    at.with_timezone(&chrono::Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// Human-readable age for a number of milliseconds
pub fn format_age(age_ms: i64) -> String {
    if age_ms < 60_000 {
        // Covers clock skew as well
        "just now".to_string()
    } else if age_ms < 3_600_000 {
        format!("{}m ago", age_ms / 60_000)
    } else if age_ms < 86_400_000 {
        format!("{}h ago", age_ms / 3_600_000)
    } else {
        format!("{}d ago", age_ms / 86_400_000)
    }
}

/// Format bytes as human-readable size
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(-5_000), "just now");
        assert_eq!(format_age(59_999), "just now");
        assert_eq!(format_age(4 * 60_000 + 10), "4m ago");
        assert_eq!(format_age(2 * 3_600_000), "2h ago");
        assert_eq!(format_age(3 * 86_400_000), "3d ago");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 bytes");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn test_format_local_shape() {
        let at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let formatted = format_local(at);
        assert_eq!(formatted.len(), "2023-11-14 22:13".len());
    }
}
