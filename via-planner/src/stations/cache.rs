//! Read-through cache for the station catalog.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::cache::{BlobStore, CacheError, DirStore, TtlCache};
use crate::domain::StationCatalog;
use crate::planner::StationProvider;
use crate::supervia::ApiError;

/// Cache key for the station list.
pub const STATIONS_KEY: &str = "stations";

/// How long a fetched station list is trusted: 48 hours.
pub const DEFAULT_STATIONS_TTL: Duration = Duration::from_secs(48 * 60 * 60);

/// Station catalog backed by the disk cache, falling back to the provider.
#[derive(Debug, Clone)]
pub struct StationCache<S = DirStore> {
    cache: TtlCache<S>,
    ttl: Duration,
}

impl<S: BlobStore> StationCache<S> {
    /// Create a station cache with the default TTL (48 hours).
    pub fn new(cache: TtlCache<S>) -> Self {
        Self {
            cache,
            ttl: DEFAULT_STATIONS_TTL,
        }
    }

    /// Set a custom TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Read the cached catalog.
    ///
    /// A record that decodes but is not a station list is reported as
    /// [`CacheError::Corrupted`].
    pub fn cached(&self) -> Result<StationCatalog, CacheError> {
        let bytes = self.cache.load(STATIONS_KEY)?;
        serde_json::from_slice(&bytes).map_err(|e| CacheError::Corrupted {
            key: STATIONS_KEY.to_string(),
            message: e.to_string(),
        })
    }

    /// Store a catalog for the configured TTL.
    pub fn save(&self, catalog: &StationCatalog) -> Result<(), CacheError> {
        let json = serde_json::to_vec(catalog).map_err(|e| CacheError::Corrupted {
            key: STATIONS_KEY.to_string(),
            message: e.to_string(),
        })?;
        self.cache.store(STATIONS_KEY, &json, self.ttl)
    }

    /// Return the cached catalog, or fetch it from `provider` and cache it.
    ///
    /// Any cache failure falls back to the provider. Failing to write the
    /// fresh catalog back is logged and otherwise ignored.
    pub async fn load_or_fetch<P: StationProvider>(
        &self,
        provider: &P,
    ) -> Result<StationCatalog, ApiError> {
        match self.cached() {
            Ok(catalog) => {
                debug!(stations = catalog.len(), "station catalog served from cache");
                return Ok(catalog);
            }
            Err(CacheError::NotFound { .. }) => debug!("station catalog not cached"),
            Err(e) => warn!(error = %e, "ignoring station cache"),
        }

        let catalog = provider.fetch_stations().await?;
        info!(stations = catalog.len(), "fetched station catalog");

        if let Err(e) = self.save(&catalog) {
            warn!(error = %e, "failed to cache station catalog");
        }

        Ok(catalog)
    }
}
