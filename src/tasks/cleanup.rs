//! TTL Cleanup Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Weak;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheInner;

/// Spawns a background task that periodically cleans up expired cache entries.
///
/// The sweep period equals the cache TTL, with the first sweep one period
/// after spawning. The task exits when:
/// * `shutdown` is set to `true` (see `Cache::stop`), or
/// * every `Cache` handle has been dropped.
///
/// # Returns
/// A JoinHandle for the spawned task, which `Cache::shutdown` awaits.
pub(crate) fn spawn_cleanup_task(
    runtime: &Handle,
    cache: Weak<CacheInner>,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    runtime.spawn(async move {
        let period = match cache.upgrade() {
            Some(cache) => cache.ttl(),
            None => return,
        };
        info!(
            "Starting cache cleanup task with interval of {} ms",
            period.as_millis()
        );

        // A TTL too large for the clock to represent two periods ahead never
        // expires anything, so only wait for the stop signal.
        let Some(start) = Instant::now()
            .checked_add(period)
            .filter(|start| start.checked_add(period).is_some())
        else {
            info!("Cache TTL exceeds the clock range, cleanup sweeps disabled");
            while shutdown.changed().await.is_ok() && !*shutdown.borrow() {}
            info!("Cache cleanup task stopped");
            return;
        };

        let mut ticker = interval_at(start, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let Some(cache) = cache.upgrade() else {
                        debug!("Cache dropped, stopping cleanup task");
                        break;
                    };
                    let removed = cache.cleanup_expired();

                    if removed > 0 {
                        info!("Cache cleanup: removed {} expired entries", removed);
                    } else {
                        debug!("Cache cleanup: no expired entries found");
                    }
                }
                changed = shutdown.changed() => {
                    // Err means the sender, owned by the cache, is gone.
                    if changed.is_err() || *shutdown.borrow() {
                        info!("Cache cleanup task stopped");
                        break;
                    }
                }
            }
        }
    })
}
