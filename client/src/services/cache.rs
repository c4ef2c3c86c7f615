//! In-memory TTL cache with an injectable clock.
//!
//! DESIGN
//! ======
//! Entries map a request key to `(value, expires_at)`. Reads never mutate:
//! an expired entry stays in place until a successful fetch replaces it, so a
//! failed refetch cannot clobber the last good value. The lock is a plain `Mutex` held only for map operations, never
//! across an `.await`.
//!
//! TRADE-OFFS
//! ==========
//! No single-flight: concurrent misses on the same key each run their fetch
//! and the last writer wins.

use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::hash::Hash;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

// =============================================================================
// CLOCK
// =============================================================================

/// Source of the current instant.
pub trait Clock: Send + Sync {
    /// Current instant as seen by the cache.
    fn now(&self) -> Instant;
}

/// Wall-clock time via [`Instant::now`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

// =============================================================================
// CACHE
// =============================================================================

struct CacheEntry<V> {
    value: V,
    /// `None` when `now + ttl` overflows; such entries never expire.
    expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    fn is_fresh(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|at| now < at)
    }
}

/// Key-value store whose entries expire `ttl` after insertion.
pub struct TtlCache<K, V> {
    entries: Mutex<HashMap<K, CacheEntry<V>>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Debug,
    V: Clone,
{
    /// Empty cache whose entries live for `ttl`, timed by `clock`.
    #[must_use]
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self { entries: Mutex::new(HashMap::new()), ttl, clock }
    }

    /// Lifetime given to every inserted entry.
    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Value for `key` if present and not yet expired.
    pub fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.now();
        let entries = self.lock();
        entries
            .get(key)
            .filter(|entry| entry.is_fresh(now))
            .map(|entry| entry.value.clone())
    }

    /// Store `value` under `key`, replacing any previous entry and restarting
    /// its TTL.
    pub fn insert(&self, key: K, value: V) {
        let expires_at = self.clock.now().checked_add(self.ttl);
        self.lock().insert(key, CacheEntry { value, expires_at });
    }

    /// Number of stored entries, expired ones included.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no entry is stored, expired or not.
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cache-aside read: return the fresh value for `key`, or run `fetch`,
    /// store its success, and return it. Errors pass through and leave the
    /// cache untouched.
    ///
    /// # Errors
    ///
    /// Returns whatever error `fetch` returns on a miss.
    pub async fn get_or_try_fetch<F, Fut, E>(&self, key: K, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(&key) {
            tracing::debug!(?key, "cache hit");
            return Ok(value);
        }
        tracing::debug!(?key, "cache miss");
        let value = fetch().await?;
        self.insert(key, value.clone());
        Ok(value)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<K, CacheEntry<V>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;
