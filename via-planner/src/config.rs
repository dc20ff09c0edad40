//! Application configuration from environment variables.
//!
//! | Variable                 | Default                                   |
//! |--------------------------|-------------------------------------------|
//! | `VIA_CONTENT_URL`        | `https://content.supervia.com.br`         |
//! | `VIA_ALERTS_URL`         | `https://www.supervia.com.br/pt-br/api/alertas` |
//! | `VIA_CACHE_DIR`          | system temp dir                           |
//! | `VIA_TIMEOUT_SECS`       | none (transport default)                  |
//! | `VIA_STATIONS_TTL_HOURS` | `48`                                      |
//!
//! Logging is controlled separately through `RUST_LOG`.

use std::str::FromStr;

use tracing::warn;

use crate::cache::CacheConfig;
use crate::planner::PlannerConfig;
use crate::supervia::SuperviaConfig;

/// Everything the binary needs to build its collaborators.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub supervia: SuperviaConfig,
    pub cache: CacheConfig,
    pub planner: PlannerConfig,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value. Unparseable numbers are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("VIA_CONTENT_URL") {
            config.supervia = config.supervia.with_content_url(url);
        }
        if let Some(url) = lookup("VIA_ALERTS_URL") {
            config.supervia = config.supervia.with_alerts_url(url);
        }
        if let Some(secs) = parse_var(&lookup, "VIA_TIMEOUT_SECS") {
            config.supervia = config.supervia.with_timeout(secs);
        }
        if let Some(dir) = lookup("VIA_CACHE_DIR") {
            config.cache = CacheConfig::new(dir);
        }
        if let Some(hours) = parse_var(&lookup, "VIA_STATIONS_TTL_HOURS") {
            config.planner.stations_ttl_hours = hours;
        }

        config
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring invalid configuration value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::supervia::{DEFAULT_ALERTS_URL, DEFAULT_CONTENT_URL};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let config = AppConfig::from_lookup(lookup_from(&[]));

        assert_eq!(config.supervia.content_url, DEFAULT_CONTENT_URL);
        assert_eq!(config.supervia.alerts_url, DEFAULT_ALERTS_URL);
        assert_eq!(config.supervia.timeout_secs, None);
        assert_eq!(config.cache.dir, std::env::temp_dir());
        assert_eq!(config.planner.stations_ttl_hours, 48);
    }

    #[test]
    fn reads_all_variables() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("VIA_CONTENT_URL", "http://localhost:9000"),
            ("VIA_ALERTS_URL", "http://localhost:9000/alertas"),
            ("VIA_TIMEOUT_SECS", "15"),
            ("VIA_CACHE_DIR", "/var/cache/via"),
            ("VIA_STATIONS_TTL_HOURS", " 6 "),
        ]));

        assert_eq!(config.supervia.content_url, "http://localhost:9000");
        assert_eq!(config.supervia.alerts_url, "http://localhost:9000/alertas");
        assert_eq!(config.supervia.timeout_secs, Some(15));
        assert_eq!(config.cache.dir, PathBuf::from("/var/cache/via"));
        assert_eq!(config.planner.stations_ttl_hours, 6);
    }

    #[test]
    fn invalid_numbers_keep_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("VIA_TIMEOUT_SECS", "soon"),
            ("VIA_STATIONS_TTL_HOURS", "-1"),
        ]));

        assert_eq!(config.supervia.timeout_secs, None);
        assert_eq!(config.planner.stations_ttl_hours, 48);
    }

    #[test]
    fn maximal_ttl_hours_do_not_overflow() {
        let config = AppConfig::from_lookup(lookup_from(&[(
            "VIA_STATIONS_TTL_HOURS",
            "18446744073709551615",
        )]));

        assert_eq!(config.planner.stations_ttl_hours, u64::MAX);
        assert_eq!(
            config.planner.stations_ttl(),
            std::time::Duration::from_secs(u64::MAX)
        );
    }
}
