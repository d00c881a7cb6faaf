//! Date and time rendering
//!
//! The backend reports `created_at` as an ISO-8601 UTC instant and `date`
//! fields as `YYYY-MM-DD`. Chat text renders clocks in KST (fixed UTC+9)
//! and dates as `MM/DD`.

use chrono::{DateTime, FixedOffset};

const KST_OFFSET_SECS: i32 = 9 * 3600;

/// Render a `YYYY-MM-DD` date as `MM/DD`
///
/// Substring-based on purpose: date fields are plain calendar labels, not
/// instants, and must not be reparsed or shifted. Unrecognized shapes pass
/// through unchanged.
pub fn short_date(date: &str) -> String {
    match (date.get(5..7), date.get(8..10)) {
        (Some(month), Some(day)) => format!("{month}/{day}"),
        _ => date.to_string(),
    }
}

/// Render an ISO-8601 UTC instant as a zero-padded KST `HH:MM` clock
pub fn local_clock(created_at: &str) -> Option<String> {
    let parsed = DateTime::parse_from_rfc3339(created_at).ok()?;
    let kst = FixedOffset::east_opt(KST_OFFSET_SECS)?;
    Some(parsed.with_timezone(&kst).format("%H:%M").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_date_takes_month_day_substring() {
        assert_eq!(short_date("2024-12-07"), "12/07");
    }

    #[test]
    fn short_date_passes_odd_shapes_through() {
        assert_eq!(short_date("내일"), "내일");
        assert_eq!(short_date(""), "");
    }

    #[test]
    fn local_clock_wraps_past_midnight() {
        // 15:30 UTC is 00:30 the next day in KST
        assert_eq!(local_clock("2024-12-07T15:30:00Z").as_deref(), Some("00:30"));
    }

    #[test]
    fn local_clock_zero_pads() {
        assert_eq!(local_clock("2024-12-07T00:05:00Z").as_deref(), Some("09:05"));
    }

    #[test]
    fn local_clock_rejects_garbage() {
        assert!(local_clock("not a timestamp").is_none());
    }
}
