//! Read-through wrapper around an arbitrary async computation.
//!
//! [`ResponseCache::fetch`] returns the cached value for a key when one is
//! present and fresh; otherwise it runs the computation, hands the result back
//! to the caller, and stores it in the background with a fixed TTL.
//!
//! # Concurrency
//!
//! There is no single-flight coordination. Concurrent misses for the same key
//! each run the computation and each overwrite the entry. Callers that need
//! at-most-one computation in flight must add a per-key in-flight map on top.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};

use super::{deserialize_value, serialize_value, Cache};

/// Default time-to-live for cached responses.
pub const DEFAULT_TTL: Duration = Duration::from_secs(10);

/// Cache-or-compute wrapper over a [`Cache`] backend.
///
/// Cheap to clone; clones share the same backend handle.
#[derive(Clone)]
pub struct ResponseCache {
    cache: Arc<dyn Cache>,
    ttl: Duration,
}

impl ResponseCache {
    /// Creates a wrapper storing entries for `ttl`.
    pub fn new(cache: Arc<dyn Cache>, ttl: Duration) -> Self {
        Self { cache, ttl }
    }

    /// Creates a wrapper using [`DEFAULT_TTL`].
    pub fn with_default_ttl(cache: Arc<dyn Cache>) -> Self {
        Self::new(cache, DEFAULT_TTL)
    }

    /// Returns the TTL applied to stored entries.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the cached value for `key`, or computes and stores a fresh one.
    ///
    /// Any failure reading the store (backend error, malformed payload) is
    /// treated as a miss. Errors from `compute` are returned unchanged and
    /// nothing is stored. The store write runs on a spawned task and never
    /// delays the returned value; a failed write is logged and dropped.
    pub async fn fetch<V, E, F, Fut>(&self, key: &str, compute: F) -> Result<V, E>
    where
        V: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.lookup(key).await {
            return Ok(value);
        }

        let value = compute().await?;
        self.store(key, &value);
        Ok(value)
    }

    async fn lookup<V: DeserializeOwned>(&self, key: &str) -> Option<V> {
        match self.cache.get(key).await {
            Ok(Some(bytes)) => match deserialize_value(&bytes) {
                Ok(value) => {
                    tracing::trace!(key, "Cache hit");
                    Some(value)
                }
                Err(err) => {
                    tracing::warn!(key, error = %err, "Cached value deserialization failed");
                    None
                }
            },
            Ok(None) => {
                tracing::trace!(key, "Cache miss");
                None
            }
            Err(err) => {
                tracing::warn!(key, error = %err, "Cache read failed, computing fresh value");
                None
            }
        }
    }

    fn store<V: Serialize>(&self, key: &str, value: &V) {
        let bytes = match serialize_value(value) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(key, error = %err, "Failed to serialize value for cache");
                return;
            }
        };

        let cache = Arc::clone(&self.cache);
        let key = key.to_string();
        let ttl = self.ttl;

        tokio::spawn(async move {
            if let Err(err) = cache.set(&key, &bytes, Some(ttl)).await {
                tracing::warn!(key = %key, error = %err, "Failed to cache value");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Instant;

    use async_trait::async_trait;

    use super::*;
    use crate::cache::{CacheError, Result as CacheResult};

    /// Minimal TTL-aware cache for exercising the wrapper.
    #[derive(Default)]
    struct TestCache {
        entries: Mutex<HashMap<String, (Vec<u8>, Option<Instant>)>>,
    }

    #[async_trait]
    impl Cache for TestCache {
        async fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
            let entries = self.entries.lock().unwrap();
            Ok(entries
                .get(key)
                .filter(|(_, expires_at)| expires_at.is_none_or(|exp| Instant::now() <= exp))
                .map(|(value, _)| value.clone()))
        }

        async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> CacheResult<()> {
            let expires_at = ttl.map(|d| Instant::now() + d);
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), (value.to_vec(), expires_at));
            Ok(())
        }
    }

    /// Cache whose every operation fails.
    struct FailingCache;

    #[async_trait]
    impl Cache for FailingCache {
        async fn get(&self, _key: &str) -> CacheResult<Option<Vec<u8>>> {
            Err(CacheError::ConnectionFailed("connection refused".to_string()))
        }

        async fn set(&self, _key: &str, _value: &[u8], _ttl: Option<Duration>) -> CacheResult<()> {
            Err(CacheError::ConnectionFailed("connection refused".to_string()))
        }
    }

    /// Waits for the background write to land.
    async fn wait_for_key(cache: &TestCache, key: &str) {
        for _ in 0..200 {
            if cache.get(key).await.unwrap().is_some() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        panic!("key {key} was never written");
    }

    fn counted(calls: &AtomicUsize, value: Vec<u32>) -> impl Future<Output = Result<Vec<u32>, String>> + '_ {
        calls.fetch_add(1, Ordering::SeqCst);
        async move { Ok(value) }
    }

    #[tokio::test]
    async fn test_second_fetch_served_from_cache() {
        let backend = Arc::new(TestCache::default());
        let cache = ResponseCache::with_default_ttl(backend.clone());
        let calls = AtomicUsize::new(0);

        let first = cache
            .fetch("k", || counted(&calls, vec![1, 2, 3]))
            .await
            .unwrap();
        wait_for_key(&backend, "k").await;
        let second = cache
            .fetch("k", || counted(&calls, vec![9, 9, 9]))
            .await
            .unwrap();

        assert_eq!(first, vec![1, 2, 3]);
        assert_eq!(second, first);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_expired_entry_is_recomputed() {
        let backend = Arc::new(TestCache::default());
        let cache = ResponseCache::new(backend.clone(), Duration::from_millis(50));
        let calls = AtomicUsize::new(0);

        cache.fetch("k", || counted(&calls, vec![1])).await.unwrap();
        wait_for_key(&backend, "k").await;

        tokio::time::sleep(Duration::from_millis(100)).await;

        let value = cache.fetch("k", || counted(&calls, vec![2])).await.unwrap();

        assert_eq!(value, vec![2]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_store_failure_falls_back_to_compute() {
        let cache = ResponseCache::with_default_ttl(Arc::new(FailingCache));
        let calls = AtomicUsize::new(0);

        let first = cache.fetch("k", || counted(&calls, vec![7])).await;
        let second = cache.fetch("k", || counted(&calls, vec![7])).await;

        assert_eq!(first, Ok(vec![7]));
        assert_eq!(second, Ok(vec![7]));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_compute_error_propagates_and_is_not_cached() {
        let backend = Arc::new(TestCache::default());
        let cache = ResponseCache::with_default_ttl(backend.clone());

        let result: Result<Vec<u32>, String> = cache
            .fetch("k", || async { Err("upstream down".to_string()) })
            .await;

        assert_eq!(result, Err("upstream down".to_string()));

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(backend.get("k").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_malformed_entry_is_treated_as_miss() {
        let backend = Arc::new(TestCache::default());
        backend.set("k", b"not json", None).await.unwrap();
        let cache = ResponseCache::with_default_ttl(backend.clone());
        let calls = AtomicUsize::new(0);

        let value = cache.fetch("k", || counted(&calls, vec![4])).await.unwrap();

        assert_eq!(value, vec![4]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // The fresh value replaces the malformed payload.
        for _ in 0..200 {
            if backend.get("k").await.unwrap().as_deref() == Some(b"[4]".as_slice()) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        panic!("malformed entry was not overwritten");
    }

    #[tokio::test]
    async fn test_concurrent_misses_each_compute() {
        let backend = Arc::new(TestCache::default());
        let cache = ResponseCache::with_default_ttl(backend);
        let calls = AtomicUsize::new(0);
        let calls = &calls;

        let slow = move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            Ok::<_, String>(vec![1])
        };

        let (a, b) = tokio::join!(cache.fetch("k", slow), cache.fetch("k", slow));

        assert_eq!(a, Ok(vec![1]));
        assert_eq!(b, Ok(vec![1]));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
