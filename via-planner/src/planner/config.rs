//! Planner configuration.

use std::time::Duration as StdDuration;

use chrono::Duration;

/// Configuration parameters for planning.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// How far ahead of "now" an unspecified date/time is planned (minutes).
    pub lead_mins: i64,

    /// How long a fetched station list is cached (hours).
    pub stations_ttl_hours: u64,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(lead_mins: i64, stations_ttl_hours: u64) -> Self {
        Self {
            lead_mins,
            stations_ttl_hours,
        }
    }

    /// Returns the lead time as a Duration.
    pub fn lead(&self) -> Duration {
        Duration::minutes(self.lead_mins)
    }

    /// Returns the station cache TTL.
    pub fn stations_ttl(&self) -> StdDuration {
        StdDuration::from_secs(self.stations_ttl_hours.saturating_mul(60 * 60))
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            lead_mins: 2,
            stations_ttl_hours: 48,
        }
    }
}
