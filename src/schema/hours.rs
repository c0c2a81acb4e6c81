//! Opening-hours parsing.
//!
//! Accepts the compact notation site owners type into a settings field:
//!
//! ```text
//! Mo-Fr 08:30-17:00, Sa 09:00-13:00
//! ```
//!
//! Each comma-separated entry is a day (`Sa`) or an inclusive day range
//! (`Mo-Fr`) followed by an `HH:MM-HH:MM` span. Entries that do not fit the
//! pattern are skipped.

use super::SchemaObject;
use chrono::Weekday;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// `<day>[-<day>] <opens>-<closes>`
static RE_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]{2})(?:-([A-Za-z]{2}))?\s+(\d{2}:\d{2})-(\d{2}:\d{2})$").unwrap()
});

/// One weekly opening window shared by one or more days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningHours {
    pub days: Vec<Weekday>,
    pub opens: String,
    pub closes: String,
}

impl OpeningHours {
    /// `OpeningHoursSpecification` object for this window.
    pub fn to_schema(&self) -> SchemaObject {
        let days: Vec<Value> = self.days.iter().map(|day| day_name(*day).into()).collect();
        SchemaObject::typed("OpeningHoursSpecification")
            .with("dayOfWeek", days)
            .with("opens", self.opens.as_str())
            .with("closes", self.closes.as_str())
    }
}

/// Full English weekday name, as schema.org expects.
pub const fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Two-letter day code, case-insensitive.
fn parse_day(code: &str) -> Option<Weekday> {
    match code.to_ascii_lowercase().as_str() {
        "mo" => Some(Weekday::Mon),
        "tu" => Some(Weekday::Tue),
        "we" => Some(Weekday::Wed),
        "th" => Some(Weekday::Thu),
        "fr" => Some(Weekday::Fri),
        "sa" => Some(Weekday::Sat),
        "su" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Days from `start` through `end` (or `start` alone).
///
/// Ranges run forward through the week without wrapping, so `Sa-Mo` is
/// empty.
fn parse_days(start: &str, end: Option<&str>) -> Vec<Weekday> {
    let Some(start) = parse_day(start) else {
        return Vec::new();
    };
    let end = match end {
        Some(code) => match parse_day(code) {
            Some(day) => day,
            None => return Vec::new(),
        },
        None => start,
    };

    let (first, last) = (start.num_days_from_monday(), end.num_days_from_monday());
    std::iter::successors(Some(start), |day| Some(day.succ()))
        .take((first..=last).count())
        .collect()
}

/// Parse a single entry such as `Mo-Fr 08:30-17:00`.
fn parse_entry(entry: &str) -> Option<OpeningHours> {
    let caps = RE_ENTRY.captures(entry)?;
    let days = parse_days(&caps[1], caps.get(2).map(|m| m.as_str()));
    if days.is_empty() {
        return None;
    }
    Some(OpeningHours {
        days,
        opens: caps[3].to_owned(),
        closes: caps[4].to_owned(),
    })
}

/// Parse a comma-separated opening-hours string.
pub fn parse_opening_hours(input: &str) -> Vec<OpeningHours> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    input.split(',').map(str::trim).filter_map(parse_entry).collect()
}

/// Parse straight to `OpeningHoursSpecification` objects.
pub fn opening_hours_specification(input: &str) -> Vec<SchemaObject> {
    parse_opening_hours(input)
        .iter()
        .map(OpeningHours::to_schema)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
