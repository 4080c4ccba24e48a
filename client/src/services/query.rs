//! # Query Cache
//!
//! Keyed cache of query results with a stale time, shared by every screen.
//!
//! Results are stored as JSON values so one cache can hold any query type.
//! A stale or invalidated entry is still returned by [`QueryClient::get`];
//! callers use [`QueryClient::is_stale`] to decide whether to refetch.
//!
//! ```rust,ignore
//! let cache = QueryClient::new(Duration::from_secs(30));
//! cache.set(SWAP_REQUESTS_KEY, &requests)?;
//! if cache.is_stale(SWAP_REQUESTS_KEY) {
//!     tasks::swap::fetch_swap_requests(state, event_tx);
//! }
//! ```

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::core::Result;

/// Cache key of the swap request list
pub const SWAP_REQUESTS_KEY: &str = "swap-requests";

/// Cache key of the session list shown in the create form
pub const SESSIONS_KEY: &str = "sessions";

struct CacheEntry {
    value: Value,
    updated_at: Instant,
    invalidated: bool,
}

/// Thread-safe query result cache.
pub struct QueryClient {
    stale_time: Duration,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl QueryClient {
    pub fn new(stale_time: Duration) -> Self {
        Self {
            stale_time,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn stale_time(&self) -> Duration {
        self.stale_time
    }

    /// Cached value for `key`, fresh or not.
    ///
    /// An entry that no longer deserializes as `T` is treated as absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let entries = self.entries.read();
        let entry = entries.get(key)?;
        match serde_json::from_value(entry.value.clone()) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key = key, error = %e, "Cached query has unexpected shape");
                None
            }
        }
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.entries.write().insert(
            key.to_string(),
            CacheEntry {
                value,
                updated_at: Instant::now(),
                invalidated: false,
            },
        );
        tracing::debug!(key = key, "Query cache updated");
        Ok(())
    }

    /// Missing, invalidated, or older than the stale time.
    pub fn is_stale(&self, key: &str) -> bool {
        match self.entries.read().get(key) {
            Some(entry) => entry.invalidated || entry.updated_at.elapsed() >= self.stale_time,
            None => true,
        }
    }

    /// Time since `key` was last written
    pub fn age(&self, key: &str) -> Option<Duration> {
        self.entries.read().get(key).map(|entry| entry.updated_at.elapsed())
    }

    /// Mark `key` stale without dropping the cached value.
    pub fn invalidate(&self, key: &str) {
        if let Some(entry) = self.entries.write().get_mut(key) {
            entry.invalidated = true;
            tracing::debug!(key = key, "Query invalidated");
        }
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl std::fmt::Debug for QueryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryClient")
            .field("stale_time", &self.stale_time)
            .field("entries", &self.entries.read().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_stale() {
        let cache = QueryClient::new(Duration::from_secs(30));
        assert!(cache.is_stale("anything"));
        assert_eq!(cache.get::<Vec<u32>>("anything"), None);
    }

    #[test]
    fn test_set_then_fresh() {
        let cache = QueryClient::new(Duration::from_secs(30));
        cache.set("numbers", &vec![1, 2, 3]).unwrap();
        assert!(!cache.is_stale("numbers"));
        assert_eq!(cache.get::<Vec<u32>>("numbers"), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_invalidate_keeps_value_but_marks_stale() {
        let cache = QueryClient::new(Duration::from_secs(30));
        cache.set("numbers", &vec![1]).unwrap();
        cache.invalidate("numbers");
        assert!(cache.is_stale("numbers"));
        assert_eq!(cache.get::<Vec<u32>>("numbers"), Some(vec![1]));

        cache.set("numbers", &vec![2]).unwrap();
        assert!(!cache.is_stale("numbers"));
    }

    #[test]
    fn test_zero_stale_time_is_always_stale() {
        let cache = QueryClient::new(Duration::ZERO);
        cache.set("numbers", &vec![1]).unwrap();
        assert!(cache.is_stale("numbers"));
    }

    #[test]
    fn test_clear() {
        let cache = QueryClient::new(Duration::from_secs(30));
        cache.set("a", &1).unwrap();
        cache.set("b", &2).unwrap();
        cache.clear();
        assert!(cache.get::<u32>("a").is_none());
        assert!(cache.age("b").is_none());
    }
}
