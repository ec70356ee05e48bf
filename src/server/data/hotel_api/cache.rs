use std::{
    future::Future,
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::RwLock;

struct CacheEntry<T> {
    value: T,
    created_at: Instant,
}

/// Holds a single value for a fixed time to live.
///
/// Clones share the same entry. A zero time to live disables caching.
#[derive(Clone)]
pub struct TtlCache<T> {
    ttl: Duration,
    entry: Arc<RwLock<Option<CacheEntry<T>>>>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: Arc::new(RwLock::new(None)),
        }
    }

    fn is_expired(&self, entry: &CacheEntry<T>) -> bool {
        entry.created_at.elapsed() >= self.ttl
    }

    /// Returns the cached value if it has not expired yet.
    pub async fn get(&self) -> Option<T> {
        let entry = self.entry.read().await;

        entry
            .as_ref()
            .filter(|entry| !self.is_expired(entry))
            .map(|entry| entry.value.clone())
    }

    pub async fn insert(&self, value: T) {
        *self.entry.write().await = Some(CacheEntry {
            value,
            created_at: Instant::now(),
        });
    }

    /// Returns the cached value or runs `fetch`, caching its result on success.
    ///
    /// Errors are returned as-is and leave the previous entry untouched.
    pub async fn get_or_try_fetch<F, Fut, E>(&self, fetch: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.get().await {
            return Ok(value);
        }

        let value = fetch().await?;
        self.insert(value.clone()).await;

        Ok(value)
    }
}
