//! Display formatting for counts, shares and instants
//!
//! English-only renderings used by every pane.

use chrono::{DateTime, TimeZone, Timelike};

/// Placeholder for a value that does not exist (empty data)
pub const MISSING: &str = "—";

/// Group digits with commas (`12345` → `12,345`)
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Percentage with one decimal, trailing zeros trimmed (`0.5` → `50%`)
pub fn format_percent(share: f64) -> String {
    let text = format!("{:.1}", share * 100.0);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{text}%")
}

/// `February 5, 2024 at 1:36 PM`
pub fn long_datetime<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    t.format("%B %-d, %Y at %-I:%M %p").to_string()
}

/// `Monday, February 5, 2024`
pub fn full_date<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    t.format("%A, %B %-d, %Y").to_string()
}

/// `1:36 PM`
pub fn short_time<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    t.format("%-I:%M %p").to_string()
}

/// `Feb 5`
pub fn axis_date<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    t.format("%b %-d").to_string()
}

/// 12-hour clock label for an hour-of-day tick (`0` → `12 AM`)
pub fn hour_label(hour: u32) -> String {
    let hour = hour % 24;
    let period = if hour < 12 { "AM" } else { "PM" };
    let display = if hour % 12 == 0 { 12 } else { hour % 12 };
    format!("{display} {period}")
}

/// Long English day-period label for the wall-clock time of `t`
pub fn day_period<Tz: TimeZone>(t: &DateTime<Tz>) -> &'static str {
    match t.hour() {
        6..=11 => "in the morning",
        12 => "noon",
        13..=17 => "in the afternoon",
        18..=20 => "in the evening",
        _ => "at night",
    }
}
