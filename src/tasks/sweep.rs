//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cache entries so they
//! do not linger until their key is read again.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{Clock, ResponseCache};

/// Spawns a background task that periodically purges expired entries.
///
/// The task runs in an infinite loop, sleeping for `interval` between
/// runs. Reads stay correct without it; it only reclaims memory.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache: ResponseCache<Value> = ResponseCache::new(512, Duration::from_secs(300));
/// let sweep_handle = spawn_sweep_task(cache.clone(), Duration::from_secs(60));
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task<T, C>(cache: ResponseCache<T, C>, interval: Duration) -> JoinHandle<()>
where
    T: Clone + Send + Sync + 'static,
    C: Clock + 'static,
{
    tokio::spawn(async move {
        info!(
            "Starting expiry sweep task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup_expired().await;

            if removed > 0 {
                info!("Expiry sweep: removed {} expired entries", removed);
            } else {
                debug!("Expiry sweep: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{ManualClock, TtlCache};

    fn manual_cache() -> (ResponseCache<String, ManualClock>, ManualClock) {
        let clock = ManualClock::new(0);
        let store = TtlCache::with_clock(100, Duration::from_secs(300), clock.clone());
        (ResponseCache::with_store(store), clock)
    }

    // Tokio time is paused in these tests: sleeps jump straight to the next
    // timer, so the task runs a fixed number of times.

    #[tokio::test(start_paused = true)]
    async fn test_sweep_task_removes_expired_entries() {
        let (cache, clock) = manual_cache();
        cache.set("expire_soon", "value".to_string()).await;
        clock.advance(Duration::from_secs(300));

        let handle = spawn_sweep_task(cache.clone(), Duration::from_secs(60));

        tokio::time::sleep(Duration::from_secs(90)).await;

        // Removed by the sweep, not by a read
        let stats = cache.stats().await.unwrap();
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.expirations, 1);
        assert_eq!(stats.misses, 0);

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_task_preserves_valid_entries() {
        let (cache, _) = manual_cache();
        cache.set("long_lived", "value".to_string()).await;

        let handle = spawn_sweep_task(cache.clone(), Duration::from_secs(60));

        tokio::time::sleep(Duration::from_secs(250)).await;

        assert_eq!(cache.get("long_lived").await, Some("value".to_string()));

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_task_can_be_aborted() {
        let (cache, _) = manual_cache();

        let handle = spawn_sweep_task(cache, Duration::from_secs(1));

        handle.abort();

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
