use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

#[allow(clippy::expect_used)]
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{2})/([0-9]{2})/([0-9]{2})").expect("date pattern is valid")
});

/// Where an agenda entry belongs relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    /// Its day is over.
    Past(NaiveDateTime),
    /// Today or later.
    Upcoming(NaiveDateTime),
    /// No usable `dd/mm/yy` date in the label.
    Undated,
}

/// Extract the first `dd/mm/yy` date of `label`, at 23:59:59 of that day.
///
/// Years are always `2000 + yy`: `15/03/99` is 2099, not 1999. Labels whose
/// first match is not a real calendar date (`31/02/24`) yield `None`, as do
/// labels without a match. JavaScript's `new Date(y, m - 1, d)` would roll
/// such dates over (`31/02/24` to 2 March); here they are not dates.
pub fn parse_event_date(label: &str) -> Option<NaiveDateTime> {
    let caps = DATE_PATTERN.captures(label)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(2000 + year, month, day)?.and_hms_opt(23, 59, 59)
}

pub fn classify(label: &str, now: NaiveDateTime) -> EventStatus {
    match parse_event_date(label) {
        Some(at) if at < now => EventStatus::Past(at),
        Some(at) => EventStatus::Upcoming(at),
        None => EventStatus::Undated,
    }
}
