//! Time-bounded caching in front of the upstream APIs.
//!
//! [`TtlCache`] memoizes the result of an async, fallible producer per key.
//! Two instances exist at runtime, one per upstream:
//!
//! - the leaderboard cache, one partition per [`Category`](crate::Category),
//!   TTL [`LEADERBOARD_TTL`];
//! - the gateway catalog cache, a single slot, TTL [`CATALOG_TTL`].
//!
//! # Staleness
//!
//! Staleness is decided lazily on read by comparing `now - stored_at`
//! against the TTL, where `now` comes from an injectable [`Clock`]. Nothing
//! runs in the background: an expired entry just sits in the store until
//! the next successful refresh replaces it.
//!
//! # Failures
//!
//! If the producer fails, the existing entry (fresh or not) is left as it
//! was and the error goes to the caller. Expired data is never served to
//! mask an upstream failure.
//!
//! # Concurrency
//!
//! There is no request coalescing. Two calls that both see a missing or
//! expired entry both run their producer, and whichever finishes last wins.

mod clock;

pub use clock::{Clock, ManualClock, SystemClock};

use std::fmt;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use std::time::{Duration, Instant};

use moka::future::Cache;
use tracing::debug;

use crate::Result;
use crate::telemetry;

/// Leaderboard entries are refetched after two hours.
pub const LEADERBOARD_TTL: Duration = Duration::from_secs(2 * 60 * 60);

/// The gateway catalog is refetched after 24 hours.
pub const CATALOG_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Upper bound on stored partitions per cache.
const DEFAULT_MAX_ENTRIES: u64 = 1_000;

/// A cached payload and the time it was stored.
#[derive(Debug)]
pub struct CacheEntry<V> {
    pub value: Arc<V>,
    pub stored_at: Instant,
}

impl<V> Clone for CacheEntry<V> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            stored_at: self.stored_at,
        }
    }
}

/// Get-or-refresh memoization with a fixed TTL.
///
/// Values are handed out as `Arc<V>`; a stored entry is never mutated, only
/// replaced.
pub struct TtlCache<K, V> {
    name: &'static str,
    ttl: Duration,
    clock: Arc<dyn Clock>,
    entries: Cache<K, CacheEntry<V>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Hash + Eq + Clone + fmt::Debug + Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    /// Create a cache. `name` labels log lines and metrics.
    pub fn new(name: &'static str, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            name,
            ttl,
            clock,
            entries: Cache::new(DEFAULT_MAX_ENTRIES),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached value if fresh, otherwise run `producer`, store its
    /// result and return it.
    pub async fn get_or_refresh<F, Fut>(&self, key: K, producer: F) -> Result<Arc<V>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>>,
    {
        if let Some(value) = self.get(&key).await {
            debug!(cache = self.name, ?key, "cache hit");
            metrics::counter!(telemetry::CACHE_HITS_TOTAL, "cache" => self.name).increment(1);
            return Ok(value);
        }

        debug!(cache = self.name, ?key, "cache miss");
        metrics::counter!(telemetry::CACHE_MISSES_TOTAL, "cache" => self.name).increment(1);
        self.refresh(key, producer).await
    }

    /// The cached value, only if it is still fresh.
    pub async fn get(&self, key: &K) -> Option<Arc<V>> {
        let entry = self.entries.get(key).await?;
        self.is_fresh(&entry).then_some(entry.value)
    }

    /// The stored entry regardless of age.
    pub async fn entry(&self, key: &K) -> Option<CacheEntry<V>> {
        self.entries.get(key).await
    }

    /// Run `producer` unconditionally and replace the entry on success.
    pub async fn refresh<F, Fut>(&self, key: K, producer: F) -> Result<Arc<V>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>>,
    {
        let value = Arc::new(producer().await?);
        let entry = CacheEntry {
            value: Arc::clone(&value),
            stored_at: self.clock.now(),
        };
        self.entries.insert(key, entry).await;
        Ok(value)
    }

    /// Drop one partition.
    pub async fn invalidate(&self, key: &K) {
        self.entries.invalidate(key).await;
    }

    /// Drop every partition.
    pub fn clear(&self) {
        self.entries.invalidate_all();
    }

    fn is_fresh(&self, entry: &CacheEntry<V>) -> bool {
        self.clock.now().saturating_duration_since(entry.stored_at) < self.ttl
    }
}
