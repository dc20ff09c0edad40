//! Fill in partial date and time tokens.
//!
//! Users type things like `5`, `5/12`, `9` or `14:30`. Missing pieces come
//! from a fallback instant (normally "now" plus a small lead). Nothing is
//! validated here: the remote planner is the final judge of whether
//! `2024-02-31` exists.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use tracing::debug;

/// Leading `HH:MM`. ASCII digits only; anything after it is kept.
static HH_MM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}").expect("HH:MM pattern is valid"));

/// Normalize a `day[/month[/year]]` token to `year-month-day`.
///
/// Missing month and year are taken from `fallback`. The day is passed
/// through as typed, so `"5"` becomes `"2024-03-5"`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use via_planner::timing::normalize_date;
///
/// let fallback = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap().and_hms_opt(10, 0, 0).unwrap();
///
/// assert_eq!(normalize_date("5", fallback), "2024-03-5");
/// assert_eq!(normalize_date("5/12", fallback), "2024-12-5");
/// assert_eq!(normalize_date("05/12/2025", fallback), "2025-12-05");
/// ```
pub fn normalize_date(token: &str, fallback: NaiveDateTime) -> String {
    let mut parts = token.split('/');
    let day = parts.next().unwrap_or_default();
    let month = parts
        .next()
        .map_or_else(|| fallback.format("%m").to_string(), str::to_string);
    let year = parts
        .next()
        .map_or_else(|| fallback.format("%Y").to_string(), str::to_string);

    format!("{year}-{month}-{day}")
}

/// Normalize a time token to `HH:MM`.
///
/// - A token starting with `HH:MM` is returned verbatim, trailing text
///   included, minutes unchecked.
/// - A bare hour of ASCII digits (`9`, `14`) becomes `09:00`, `14:00`.
///   Signs are not digits, so `+3` and `-3` fall back.
/// - Anything else silently becomes `fallback`'s `HH:MM`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use via_planner::timing::normalize_time;
///
/// let fallback = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap().and_hms_opt(10, 7, 0).unwrap();
///
/// assert_eq!(normalize_time("9", fallback), "09:00");
/// assert_eq!(normalize_time("14:30extra", fallback), "14:30extra");
/// assert_eq!(normalize_time("abc", fallback), "10:07");
/// ```
pub fn normalize_time(token: &str, fallback: NaiveDateTime) -> String {
    if HH_MM.is_match(token) {
        return token.to_string();
    }

    let digits = !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit());
    match token.parse::<u32>() {
        Ok(hour) if digits => format!("{hour:02}:00"),
        _ => {
            debug!(token, "unrecognized time, using fallback");
            fallback.format("%H:%M").to_string()
        }
    }
}

/// Parse normalized date and time strings back into an instant.
///
/// Used only for display. Returns `None` when the strings do not describe
/// a real date and time (e.g. day `31` in February, hour `25`). Text after
/// a leading `HH:MM` is ignored.
pub fn parse_planned(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let (time, _rest) = NaiveTime::parse_and_remainder(time, "%H:%M").ok()?;
    Some(date.and_time(time))
}
