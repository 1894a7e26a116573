use chrono::{DateTime, Datelike, Utc};

const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Formats a unix millisecond timestamp as `"{3-letter month} {day}"`,
/// e.g. `"Nov 17"`, using the UTC calendar.
///
/// Timestamps outside the representable range format as an empty string
/// rather than failing the paint that requested the label.
#[must_use]
pub fn format_short_date(timestamp_millis: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(timestamp_millis) {
        Some(date) => format!("{} {}", SHORT_MONTHS[date.month0() as usize], date.day()),
        None => String::new(),
    }
}
