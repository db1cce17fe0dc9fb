//! Formatting helpers shared across the report and CLI.

use chrono::{Days, NaiveDate};

/// Full English month name for 1-12.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// Get day name from index (0 = Sunday).
pub fn day_name(day: usize) -> &'static str {
    match day {
        0 => "Sunday",
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        6 => "Saturday",
        _ => "Unknown",
    }
}

/// Month label, e.g. "March 2024".
pub fn month_label(year: i32, month: u32) -> String {
    format!("{} {}", month_name(month), year)
}

/// Week label from its Sunday, e.g. "Jan 7 - Jan 13".
pub fn week_label(sunday: NaiveDate) -> String {
    let saturday = sunday.checked_add_days(Days::new(6)).unwrap_or(sunday);
    format!("{} - {}", sunday.format("%b %-d"), saturday.format("%b %-d"))
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// One-decimal display, e.g. "12.5".
pub fn fixed1(value: f64) -> String {
    format!("{:.1}", value)
}

/// Compact count display (e.g., "14.2K").
pub fn compact_count(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

/// "1 day" / "3 days".
pub fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("{} {}", n, unit)
    } else {
        format!("{} {}s", n, unit)
    }
}
