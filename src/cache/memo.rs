//! Response Cache Module
//!
//! Read-through memoization of async producers on top of [`TtlCache`].

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheStats, Clock, SystemClock, TtlCache};
use crate::config::CacheConfig;

// == Response Cache ==
/// Shared handle that serves cached values or runs a producer on a miss.
///
/// Whether caching happens at all is fixed when the handle is built: a
/// disabled handle calls the producer every time and never stores anything.
/// Concurrent misses on the same key may each run the producer; the last
/// one to finish wins.
#[derive(Debug)]
pub struct ResponseCache<T, C = SystemClock> {
    store: Option<Arc<RwLock<TtlCache<T, C>>>>,
}

impl<T, C> Clone for ResponseCache<T, C> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<T: Clone> ResponseCache<T, SystemClock> {
    /// Creates an enabled cache on the system clock.
    pub fn new(max_size: usize, default_ttl: Duration) -> Self {
        Self::with_store(TtlCache::new(max_size, default_ttl))
    }

    /// Creates a cache according to the `enabled` switch in `config`.
    pub fn from_config(config: &CacheConfig) -> Self {
        if config.enabled {
            Self::new(config.max_size, config.ttl())
        } else {
            Self::disabled()
        }
    }
}

impl<T, C> ResponseCache<T, C> {
    /// Wraps an existing store.
    pub fn with_store(store: TtlCache<T, C>) -> Self {
        Self {
            store: Some(Arc::new(RwLock::new(store))),
        }
    }

    /// A pass-through handle with no storage behind it.
    pub fn disabled() -> Self {
        Self { store: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.store.is_some()
    }
}

impl<T: Clone, C: Clock> ResponseCache<T, C> {
    // == Wrap ==
    /// Returns the cached value for `key`, or runs `producer` and caches
    /// its success under the default TTL.
    ///
    /// Failures are returned unchanged and leave the cache untouched, so the
    /// next call retries the producer.
    pub async fn wrap<F, Fut, E>(&self, key: &str, producer: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.wrap_with_ttl(key, None, producer).await
    }

    /// Same as [`wrap`](Self::wrap) with an optional per-call TTL.
    pub async fn wrap_with_ttl<F, Fut, E>(
        &self,
        key: &str,
        ttl: Option<Duration>,
        producer: F,
    ) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let Some(store) = &self.store else {
            return producer().await;
        };

        let cached = store.write().await.get(key);
        if let Some(value) = cached {
            debug!(key, "cache hit");
            return Ok(value);
        }

        debug!(key, "cache miss, invoking producer");
        let value = producer().await?;

        let mut guard = store.write().await;
        match ttl {
            Some(ttl) => guard.set_with_ttl(key, value.clone(), ttl),
            None => guard.set(key, value.clone()),
        }

        Ok(value)
    }

    // == Direct Access ==
    pub async fn get(&self, key: &str) -> Option<T> {
        match &self.store {
            Some(store) => store.write().await.get(key),
            None => None,
        }
    }

    pub async fn set(&self, key: &str, value: T) {
        if let Some(store) = &self.store {
            store.write().await.set(key, value);
        }
    }

    /// Removes `key`. Returns whether an entry was dropped.
    pub async fn delete(&self, key: &str) -> bool {
        match &self.store {
            Some(store) => store.write().await.delete(key),
            None => false,
        }
    }

    /// Drops every entry. Returns how many were removed.
    pub async fn clear(&self) -> usize {
        match &self.store {
            Some(store) => store.write().await.clear(),
            None => 0,
        }
    }

    /// Eagerly purges expired entries. Returns how many were removed.
    pub async fn cleanup_expired(&self) -> usize {
        match &self.store {
            Some(store) => store.write().await.cleanup_expired(),
            None => 0,
        }
    }

    /// Statistics of the underlying store, `None` when disabled.
    pub async fn stats(&self) -> Option<CacheStats> {
        match &self.store {
            Some(store) => Some(store.read().await.stats()),
            None => None,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const TTL: Duration = Duration::from_millis(300_000);

    fn manual_cache(max_size: usize) -> (ResponseCache<u32, ManualClock>, ManualClock) {
        let clock = ManualClock::new(0);
        let store = TtlCache::with_clock(max_size, TTL, clock.clone());
        (ResponseCache::with_store(store), clock)
    }

    #[tokio::test]
    async fn test_wrap_hit_skips_producer() {
        let (cache, _) = manual_cache(10);
        let calls = AtomicUsize::new(0);

        for _ in 0..2 {
            let value = cache
                .wrap("key", || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, String>(5)
                })
                .await;
            assert_eq!(value, Ok(5));
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_wrap_failure_is_not_cached() {
        let (cache, _) = manual_cache(10);
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let result = cache
                .wrap("key", || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Err::<u32, _>("upstream down".to_string())
                })
                .await;
            assert_eq!(result, Err("upstream down".to_string()));
        }

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(cache.get("key").await, None);
    }

    #[tokio::test]
    async fn test_wrap_retries_after_failure() {
        let (cache, _) = manual_cache(10);

        let failed = cache
            .wrap("key", || async { Err::<u32, _>("boom") })
            .await;
        assert!(failed.is_err());

        let recovered = cache.wrap("key", || async { Ok::<_, &str>(9) }).await;
        assert_eq!(recovered, Ok(9));
        assert_eq!(cache.get("key").await, Some(9));
    }

    #[tokio::test]
    async fn test_wrap_refetches_after_expiry() {
        let (cache, clock) = manual_cache(10);
        let calls = AtomicUsize::new(0);
        let produce = || async {
            Ok::<_, String>(calls.fetch_add(1, Ordering::SeqCst) as u32)
        };

        assert_eq!(cache.wrap("key", produce).await, Ok(0));
        clock.advance(TTL);
        assert_eq!(cache.wrap("key", produce).await, Ok(1));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_wrap_with_ttl_override() {
        let (cache, clock) = manual_cache(10);

        cache
            .wrap_with_ttl("key", Some(Duration::from_millis(10)), || async {
                Ok::<_, String>(1)
            })
            .await
            .unwrap();

        clock.advance(Duration::from_millis(10));
        assert_eq!(cache.get("key").await, None);
    }

    #[tokio::test]
    async fn test_wrap_serves_value_set_directly() {
        let (cache, _) = manual_cache(2);

        cache.set("a", 1).await;
        cache.set("b", 2).await;
        cache.set("c", 3).await;

        assert_eq!(cache.get("a").await, None);

        let calls = AtomicUsize::new(0);
        let value = cache
            .wrap("b", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, String>(0)
            })
            .await;

        assert_eq!(value, Ok(2));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_concurrent_misses_each_run_producer() {
        let (cache, _) = manual_cache(10);
        let calls = AtomicUsize::new(0);
        let barrier = tokio::sync::Barrier::new(2);

        // Both producers must be in flight at once to pass the barrier, and
        // each reads the cache while its own wrap is pending.
        let (shared, calls_ref, barrier_ref) = (&cache, &calls, &barrier);
        let produce = move |value: u32| {
            move || async move {
                assert_eq!(shared.get("other").await, None);
                calls_ref.fetch_add(1, Ordering::SeqCst);
                barrier_ref.wait().await;
                Ok::<_, String>(value)
            }
        };

        let (first, second) = tokio::time::timeout(
            Duration::from_secs(5),
            async { tokio::join!(cache.wrap("k", produce(1)), cache.wrap("k", produce(2))) },
        )
        .await
        .expect("wrap held the cache lock across the producer");

        assert_eq!(first, Ok(1));
        assert_eq!(second, Ok(2));
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        // Last writer wins; either order is acceptable
        let stored = cache.get("k").await;
        assert!(matches!(stored, Some(1) | Some(2)));
        assert_eq!(cache.stats().await.unwrap().total_entries, 1);
    }

    #[tokio::test]
    async fn test_disabled_cache_always_calls_producer() {
        let cache: ResponseCache<u32> = ResponseCache::disabled();
        let calls = AtomicUsize::new(0);

        for _ in 0..4 {
            cache
                .wrap("key", || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, String>(1)
                })
                .await
                .unwrap();
        }

        assert!(!cache.is_enabled());
        assert_eq!(calls.load(Ordering::SeqCst), 4);
        assert_eq!(cache.get("key").await, None);
        assert!(cache.stats().await.is_none());
    }

    #[tokio::test]
    async fn test_from_config_respects_enabled_flag() {
        let mut config = CacheConfig::default();
        assert!(ResponseCache::<u32>::from_config(&config).is_enabled());

        config.enabled = false;
        assert!(!ResponseCache::<u32>::from_config(&config).is_enabled());
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let (cache, _) = manual_cache(10);
        let other = cache.clone();

        cache.set("key", 3).await;

        assert_eq!(other.get("key").await, Some(3));
        assert!(other.delete("key").await);
        assert_eq!(cache.get("key").await, None);
    }

    #[tokio::test]
    async fn test_clear_and_cleanup() {
        let (cache, clock) = manual_cache(10);

        cache.set("a", 1).await;
        cache.set("b", 2).await;
        assert_eq!(cache.clear().await, 2);

        cache.set("c", 3).await;
        clock.advance(TTL);
        assert_eq!(cache.cleanup_expired().await, 1);

        let stats = cache.stats().await.unwrap();
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.expirations, 1);
    }
}
