//! Portuguese relative description of a planned instant.

use chrono::{Datelike, Duration, NaiveDateTime};

/// Instants closer than this many minutes are described in minutes.
const SOON_MINS: i64 = 30;

/// Describe `instant` relative to `now`, in Portuguese.
///
/// Both values are local wall-clock times. The result is a day part
/// (`hoje`, `amanhã`, `dia 05`, `dia 05/04`, `dia 05/04/25`) followed by a
/// time part: `agora`, `em 1 minuto`, `em N minutos` when the instant is in
/// the next 30 minutes, otherwise `as HH:MM horas`.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, NaiveDate};
/// use via_planner::timing::describe_relative;
///
/// let now = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap().and_hms_opt(10, 0, 0).unwrap();
///
/// assert_eq!(describe_relative(now + Duration::minutes(10), now), "hoje em 10 minutos");
/// assert_eq!(describe_relative(now + Duration::hours(2), now), "hoje as 12:00 horas");
/// ```
pub fn describe_relative(instant: NaiveDateTime, now: NaiveDateTime) -> String {
    format!("{} {}", day_part(instant, now), time_part(instant, now))
}

fn day_part(instant: NaiveDateTime, now: NaiveDateTime) -> String {
    let day = instant.date();
    let today = now.date();

    if day == today {
        "hoje".to_string()
    } else if today.succ_opt() == Some(day) {
        "amanhã".to_string()
    } else if day.year() == today.year() && day.month() == today.month() {
        format!("dia {}", day.format("%d"))
    } else if day.year() == today.year() {
        format!("dia {}", day.format("%d/%m"))
    } else {
        format!("dia {}", day.format("%d/%m/%y"))
    }
}

fn time_part(instant: NaiveDateTime, now: NaiveDateTime) -> String {
    let until = instant - now;
    if until < Duration::zero() || until >= Duration::minutes(SOON_MINS) {
        return format!("as {} horas", instant.format("%H:%M"));
    }

    match until.num_minutes() {
        0 => "agora".to_string(),
        1 => "em 1 minuto".to_string(),
        mins => format!("em {mins} minutos"),
    }
}
