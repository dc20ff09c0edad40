//! Station catalog loading and name resolution.
//!
//! The catalog comes from the disk cache when fresh, otherwise from the
//! SuperVia station list. User-typed names are resolved against it with
//! [`best_match`].

mod cache;
mod resolve;

pub use cache::{DEFAULT_STATIONS_TTL, STATIONS_KEY, StationCache};
pub use resolve::best_match;
