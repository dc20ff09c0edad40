//! Date and time handling for plan requests.
//!
//! All values are local wall-clock times ([`NaiveDateTime`]); the caller's
//! timezone offset is applied once, in [`now_local`].

mod normalize;
mod relative;

use chrono::{Local, NaiveDateTime};

pub use normalize::{normalize_date, normalize_time, parse_planned};
pub use relative::describe_relative;

/// The current local wall-clock time.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}
