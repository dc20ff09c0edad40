//! Disk-backed named-blob cache with expiry.
//!
//! Each key is stored as one JSON record holding both the payload and its
//! absolute expiry, so a fresh process sees the same TTL the writer set.
//! Payload bytes are base64-encoded inside the record.
//!
//! There is no locking: two processes writing the same key race and the
//! last writer wins.

use std::io;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// File name prefix for cache blobs.
const FILE_PREFIX: &str = "via-cache-";

/// Errors from cache operations.
///
/// `NotFound`, `Expired` and `Corrupted` are expected outcomes; callers
/// usually fall back to the authoritative source on any of them.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// No entry has been stored under this key.
    #[error("cache entry not found: {key}")]
    NotFound { key: String },

    /// The entry exists but its expiry has passed.
    #[error("cache entry expired: {key}")]
    Expired { key: String },

    /// The entry exists but could not be decoded.
    #[error("cache entry {key} is corrupted: {message}")]
    Corrupted { key: String, message: String },

    /// The key cannot be used as a file name.
    #[error("invalid cache key: {key:?}")]
    InvalidKey { key: String },

    /// The underlying store failed.
    #[error("cache I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Durable storage for named blobs.
pub trait BlobStore {
    /// Write `bytes` under `name`, replacing any previous blob.
    fn write(&self, name: &str, bytes: &[u8]) -> io::Result<()>;

    /// Read the blob stored under `name`.
    ///
    /// Returns an error of kind [`io::ErrorKind::NotFound`] if nothing is stored.
    fn read(&self, name: &str) -> io::Result<Vec<u8>>;
}

/// A [`BlobStore`] that keeps one file per blob in a directory.
#[derive(Debug, Clone)]
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl BlobStore for DirStore {
    fn write(&self, name: &str, bytes: &[u8]) -> io::Result<()> {
        if !self.dir.as_os_str().is_empty() && !self.dir.exists() {
            std::fs::create_dir_all(&self.dir)?;
        }
        std::fs::write(self.dir.join(name), bytes)
    }

    fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        std::fs::read(self.dir.join(name))
    }
}

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Directory holding the cache files.
    pub dir: PathBuf,
}

impl CacheConfig {
    /// Create a config for the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new(std::env::temp_dir())
    }
}

/// Persisted form of a cache entry.
#[derive(Debug, Serialize, Deserialize)]
struct CacheRecord {
    /// Unix timestamp (milliseconds) from which the entry is stale.
    /// `None` means the entry never expires.
    expires_at_millis: Option<u64>,
    /// Base64 payload.
    payload: String,
}

/// Named-blob cache with per-entry expiry.
#[derive(Debug, Clone)]
pub struct TtlCache<S = DirStore> {
    store: S,
}

impl TtlCache<DirStore> {
    /// Create a cache writing to the configured directory.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(DirStore::new(&config.dir))
    }
}

impl<S: BlobStore> TtlCache<S> {
    /// Create a cache over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Store `payload` under `key`, valid for `ttl` from now.
    ///
    /// Keys are file name components: ASCII letters, digits, `_`, `-` and
    /// `.`, not starting with `.`. Anything else is [`CacheError::InvalidKey`].
    pub fn store(&self, key: &str, payload: &[u8], ttl: Duration) -> Result<(), CacheError> {
        self.store_at(key, payload, ttl, SystemTime::now())
    }

    /// Store `payload` under `key`, valid for `ttl` from `now`.
    pub fn store_at(
        &self,
        key: &str,
        payload: &[u8],
        ttl: Duration,
        now: SystemTime,
    ) -> Result<(), CacheError> {
        let expires_at = unix_millis(now).saturating_add(millis(ttl));
        self.write_record(key, payload, Some(expires_at))
    }

    /// Store `payload` under `key` with no expiry.
    pub fn store_without_expiry(&self, key: &str, payload: &[u8]) -> Result<(), CacheError> {
        self.write_record(key, payload, None)
    }

    /// Load the payload stored under `key`, if it has not expired.
    pub fn load(&self, key: &str) -> Result<Vec<u8>, CacheError> {
        self.load_at(key, SystemTime::now())
    }

    /// Load the payload stored under `key`, judging expiry against `now`.
    pub fn load_at(&self, key: &str, now: SystemTime) -> Result<Vec<u8>, CacheError> {
        let raw = match self.store.read(&file_name(key)?) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(CacheError::NotFound { key: key.to_string() });
            }
            Err(e) => return Err(CacheError::Io(e)),
        };

        let record: CacheRecord =
            serde_json::from_slice(&raw).map_err(|e| CacheError::Corrupted {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        if let Some(expires_at) = record.expires_at_millis
            && unix_millis(now) >= expires_at
        {
            debug!(key, expires_at, "cache entry expired");
            return Err(CacheError::Expired { key: key.to_string() });
        }

        BASE64
            .decode(record.payload.as_bytes())
            .map_err(|e| CacheError::Corrupted {
                key: key.to_string(),
                message: format!("invalid payload encoding: {e}"),
            })
    }

    fn write_record(
        &self,
        key: &str,
        payload: &[u8],
        expires_at_millis: Option<u64>,
    ) -> Result<(), CacheError> {
        let name = file_name(key)?;
        let record = CacheRecord {
            expires_at_millis,
            payload: BASE64.encode(payload),
        };
        // Serializing a struct of an Option<u64> and a String cannot fail.
        let json = serde_json::to_vec(&record).map_err(|e| CacheError::Corrupted {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.store.write(&name, &json)?;
        debug!(key, ?expires_at_millis, bytes = payload.len(), "cache entry stored");
        Ok(())
    }
}

fn file_name(key: &str) -> Result<String, CacheError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.'));
    if !valid {
        return Err(CacheError::InvalidKey { key: key.to_string() });
    }
    Ok(format!("{FILE_PREFIX}{key}"))
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

fn unix_millis(t: SystemTime) -> u64 {
    t.duration_since(SystemTime::UNIX_EPOCH)
        .map(millis)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::tempdir;

    const HOUR: Duration = Duration::from_secs(60 * 60);

    fn cache_in(dir: &Path) -> TtlCache {
        TtlCache::from_config(&CacheConfig::new(dir))
    }

    #[test]
    fn store_then_load_returns_payload() {
        let dir = tempdir().unwrap();
        let cache = cache_in(dir.path());

        cache.store("k", b"hello", HOUR).unwrap();
        assert_eq!(cache.load("k").unwrap(), b"hello");
    }

    #[test]
    fn load_after_expiry_fails_with_expired() {
        let dir = tempdir().unwrap();
        let cache = cache_in(dir.path());
        let t0 = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);

        cache.store_at("k", b"hello", HOUR, t0).unwrap();

        assert_eq!(cache.load_at("k", t0 + HOUR / 2).unwrap(), b"hello");
        assert!(matches!(
            cache.load_at("k", t0 + HOUR),
            Err(CacheError::Expired { .. })
        ));
        assert!(matches!(
            cache.load_at("k", t0 + 2 * HOUR),
            Err(CacheError::Expired { .. })
        ));
    }

    #[test]
    fn missing_key_is_not_found() {
        let dir = tempdir().unwrap();
        let cache = cache_in(dir.path());

        assert!(matches!(cache.load("nope"), Err(CacheError::NotFound { .. })));
    }

    #[test]
    fn missing_directory_is_not_found() {
        let cache = cache_in(Path::new("/nonexistent/via/cache"));
        assert!(matches!(cache.load("k"), Err(CacheError::NotFound { .. })));
    }

    #[test]
    fn store_overwrites_previous_entry() {
        let dir = tempdir().unwrap();
        let cache = cache_in(dir.path());
        let t0 = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);

        cache.store_at("k", b"old", Duration::from_secs(1), t0).unwrap();
        cache.store_at("k", b"new", HOUR, t0).unwrap();

        assert_eq!(cache.load_at("k", t0 + Duration::from_secs(10)).unwrap(), b"new");
    }

    #[test]
    fn expiry_survives_a_new_cache_instance() {
        let dir = tempdir().unwrap();
        let t0 = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);

        cache_in(dir.path()).store_at("k", b"v", HOUR, t0).unwrap();

        let reopened = cache_in(dir.path());
        assert!(matches!(
            reopened.load_at("k", t0 + 2 * HOUR),
            Err(CacheError::Expired { .. })
        ));
    }

    #[test]
    fn entry_without_expiry_is_always_valid() {
        let dir = tempdir().unwrap();
        let cache = cache_in(dir.path());

        cache.store_without_expiry("k", b"forever").unwrap();

        let far_future = SystemTime::now() + Duration::from_secs(100 * 365 * 24 * 60 * 60);
        assert_eq!(cache.load_at("k", far_future).unwrap(), b"forever");
    }

    #[test]
    fn garbage_file_is_corrupted() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("via-cache-k"), b"{\"estacoes\": [").unwrap();

        let cache = cache_in(dir.path());
        assert!(matches!(cache.load("k"), Err(CacheError::Corrupted { .. })));
    }

    #[test]
    fn bad_base64_is_corrupted() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("via-cache-k"),
            br#"{"expires_at_millis":null,"payload":"not base64!!"}"#,
        )
        .unwrap();

        let cache = cache_in(dir.path());
        assert!(matches!(cache.load("k"), Err(CacheError::Corrupted { .. })));
    }

    #[test]
    fn expiry_keeps_sub_second_precision() {
        let dir = tempdir().unwrap();
        let cache = cache_in(dir.path());
        let t0 = SystemTime::UNIX_EPOCH + Duration::from_millis(1_700_000_000_900);

        cache.store_at("k", b"v", Duration::from_secs(1), t0).unwrap();

        assert_eq!(cache.load_at("k", t0 + Duration::from_millis(200)).unwrap(), b"v");
        assert_eq!(cache.load_at("k", t0 + Duration::from_millis(999)).unwrap(), b"v");
        assert!(matches!(
            cache.load_at("k", t0 + Duration::from_secs(1)),
            Err(CacheError::Expired { .. })
        ));
    }

    #[test]
    fn sub_second_ttl_is_valid_until_it_elapses() {
        let dir = tempdir().unwrap();
        let cache = cache_in(dir.path());
        let t0 = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);

        cache.store_at("k", b"v", Duration::from_millis(500), t0).unwrap();

        assert_eq!(cache.load_at("k", t0 + Duration::from_millis(499)).unwrap(), b"v");
        assert!(matches!(
            cache.load_at("k", t0 + Duration::from_millis(500)),
            Err(CacheError::Expired { .. })
        ));
    }

    #[test]
    fn keys_cannot_leave_the_cache_directory() {
        let dir = tempdir().unwrap();
        let cache = cache_in(&dir.path().join("cache"));

        for key in ["../escape", "a/b", "..", ".hidden", ""] {
            assert!(
                matches!(cache.store(key, b"v", HOUR), Err(CacheError::InvalidKey { .. })),
                "key {key:?} should be rejected"
            );
            assert!(matches!(cache.load(key), Err(CacheError::InvalidKey { .. })));
        }
        assert!(!dir.path().join("escape").exists());
        assert!(!dir.path().join("via-cache-../escape").exists());

        cache.store("stations.v2", b"v", HOUR).unwrap();
        assert_eq!(cache.load("stations.v2").unwrap(), b"v");
    }

    #[test]
    fn creates_cache_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("nested").join("cache");
        let cache = cache_in(&nested);

        cache.store("k", b"v", HOUR).unwrap();
        assert!(nested.join("via-cache-k").exists());
    }
}
