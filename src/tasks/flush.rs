//! Cache Flush Task
//!
//! Empties the cache on a fixed schedule (daily by default) so upstream
//! data that changes once a day is never served stale for long.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

use crate::cache::{Clock, ResponseCache};

/// Spawns a background task that calls `clear()` every `interval`.
pub fn spawn_flush_task<T, C>(cache: ResponseCache<T, C>, interval: Duration) -> JoinHandle<()>
where
    T: Clone + Send + Sync + 'static,
    C: Clock + 'static,
{
    tokio::spawn(async move {
        info!(
            "Starting cache flush task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let cleared = cache.clear().await;
            info!("Scheduled flush: cleared {} cached entries", cleared);
        }
    })
}
