//! Formatting helpers for durations and hour totals.

use chrono::Duration;

/// Formats a duration as `HH:MM`. Negative durations are shown as `00:00`.
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Hours with two decimals, matching the stored rounding.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}
