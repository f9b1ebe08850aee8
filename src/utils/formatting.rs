//! Text formatting utilities for the seat map.
//!
//! This module provides helper functions for formatting durations and booking
//! windows in a human-readable way.

use chrono::{DateTime, Duration, Utc};

/// Formats a duration as hours and minutes, or minutes and seconds when short.
///
/// Negative durations format as zero.
///
/// # Examples
/// ```
/// use chrono::Duration;
/// use seatmap::utils::format_duration;
///
/// assert_eq!(format_duration(Duration::minutes(65)), "1h 05m");
/// assert_eq!(format_duration(Duration::seconds(90)), "1m 30s");
/// assert_eq!(format_duration(Duration::seconds(-5)), "0s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total = duration.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}h {:02}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {:02}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Formats a booking window relative to `now`.
///
/// The date is omitted for windows that start and end on the day of `now`.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use seatmap::utils::format_window;
///
/// let now = Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap();
/// let start = Utc.with_ymd_and_hms(2026, 10, 16, 10, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2026, 10, 16, 12, 30, 0).unwrap();
/// assert_eq!(format_window(start, end, now), "10:00 - 12:30");
/// ```
pub fn format_window(start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let today = now.date_naive();
    if start.date_naive() == today && end.date_naive() == today {
        format!("{} - {}", start.format("%H:%M"), end.format("%H:%M"))
    } else {
        format!("{} - {}", start.format("%b %d %H:%M"), end.format("%b %d %H:%M"))
    }
}

/// Formats a seat id set compactly, e.g. `"3, 7, 12"` or `"3, 7, 12 (+4)"`.
pub fn format_id_list<T: std::fmt::Display>(ids: impl IntoIterator<Item = T>, max_shown: usize) -> String {
    let ids: Vec<String> = ids.into_iter().map(|id| id.to_string()).collect();
    if ids.len() <= max_shown {
        ids.join(", ")
    } else {
        format!("{} (+{})", ids[..max_shown].join(", "), ids.len() - max_shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::hours(2)), "2h 00m");
        assert_eq!(format_duration(Duration::minutes(125)), "2h 05m");
        assert_eq!(format_duration(Duration::seconds(59)), "59s");
        assert_eq!(format_duration(Duration::zero()), "0s");
    }

    #[test]
    fn test_format_window_across_days() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 23, 0, 0).unwrap();
        let start = Utc.with_ymd_and_hms(2026, 10, 16, 23, 30, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 10, 17, 1, 0, 0).unwrap();
        assert_eq!(format_window(start, end, now), "Oct 16 23:30 - Oct 17 01:00");
    }

    #[test]
    fn test_format_id_list() {
        assert_eq!(format_id_list([1, 2, 3], 5), "1, 2, 3");
        assert_eq!(format_id_list([1, 2, 3, 4], 2), "1, 2 (+2)");
        assert_eq!(format_id_list(Vec::<u32>::new(), 2), "");
    }
}
