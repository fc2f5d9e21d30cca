//! Cache Store Module
//!
//! The response cache: a mutex-guarded map from request key to cached body,
//! with a background task that reclaims expired entries.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::cache::{CacheEntry, CacheStats};
use crate::error::{PokedexError, Result};
use crate::tasks::spawn_cleanup_task;

// == Shared State ==
/// Map and counters, guarded together by one lock.
#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<String, CacheEntry>,
    stats: CacheStats,
}

/// State shared between every `Cache` handle and the cleanup task.
///
/// The cleanup task only holds a `Weak` to this, so dropping the last handle
/// frees the store and ends the task.
pub(crate) struct CacheInner {
    ttl: Duration,
    state: Mutex<CacheState>,
    shutdown_tx: watch::Sender<bool>,
    cleanup_handle: Mutex<Option<JoinHandle<()>>>,
}

impl CacheInner {
    // Every critical section leaves the map consistent, so a poisoned lock is
    // still safe to use.
    fn state(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn cleanup_handle(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.cleanup_handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Cleanup Expired ==
    /// Removes every entry older than the TTL.
    ///
    /// Returns the number of entries removed.
    pub(crate) fn cleanup_expired(&self) -> usize {
        let now = Instant::now();
        let ttl = self.ttl;

        let mut state = self.state();
        let before = state.entries.len();
        state.entries.retain(|_, entry| !entry.is_expired(ttl, now));
        let remaining = state.entries.len();
        let removed = before - remaining;

        state.stats.record_sweep(removed);
        state.stats.set_total_entries(remaining);
        removed
    }
}

// == Cache ==
/// Time-expiring store of raw response bodies keyed by request URL.
///
/// `Cache` is a handle: clones share the same store. `add` and `get` never
/// fail and never block beyond acquiring the internal lock.
///
/// Expiry is enforced only by the cleanup task, which wakes every `ttl` and
/// drops entries older than `ttl`. `get` does not check age, so an entry
/// stays visible for somewhere between `ttl` and `2 * ttl`.
#[derive(Clone)]
pub struct Cache {
    inner: Arc<CacheInner>,
}

impl Cache {
    // == Constructor ==
    /// Creates a cache and starts its cleanup task on the current runtime.
    ///
    /// # Errors
    /// * `PokedexError::InvalidTtl` if `ttl` is zero
    /// * `PokedexError::NoRuntime` if called outside a tokio runtime
    pub fn new(ttl: Duration) -> Result<Self> {
        if ttl.is_zero() {
            return Err(PokedexError::InvalidTtl);
        }
        let runtime = Handle::try_current().map_err(|_| PokedexError::NoRuntime)?;

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let inner = Arc::new(CacheInner {
            ttl,
            state: Mutex::new(CacheState::default()),
            shutdown_tx,
            cleanup_handle: Mutex::new(None),
        });

        let handle = spawn_cleanup_task(&runtime, Arc::downgrade(&inner), shutdown_rx);
        *inner.cleanup_handle() = Some(handle);

        Ok(Self { inner })
    }

    // == Add ==
    /// Inserts or replaces the entry for `key`.
    ///
    /// Empty keys and empty payloads are both valid.
    pub fn add(&self, key: impl Into<String>, payload: impl Into<Vec<u8>>) {
        let key = key.into();
        let entry = CacheEntry::new(payload.into());
        debug!(key = %key, bytes = entry.payload().len(), "cache add");

        let mut state = self.inner.state();
        state.entries.insert(key, entry);
        let len = state.entries.len();
        state.stats.set_total_entries(len);
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`, or `None` on a miss.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let mut state = self.inner.state();
        let payload = state.entries.get(key).map(|entry| entry.payload().to_vec());

        if payload.is_some() {
            state.stats.record_hit();
            debug!(key = %key, "cache hit");
        } else {
            state.stats.record_miss();
            debug!(key = %key, "cache miss");
        }
        payload
    }

    pub fn ttl(&self) -> Duration {
        self.inner.ttl()
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub fn stats(&self) -> CacheStats {
        let state = self.inner.state();
        let mut stats = state.stats.clone();
        stats.set_total_entries(state.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.inner.state().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.state().entries.is_empty()
    }

    // == Stop ==
    /// Signals the cleanup task to stop. Idempotent and non-blocking.
    ///
    /// The cache stays usable afterwards; entries are just no longer
    /// reclaimed.
    pub fn stop(&self) {
        self.inner.shutdown_tx.send_replace(true);
    }

    /// Whether `stop` has been called on any handle of this cache.
    pub fn is_stopped(&self) -> bool {
        *self.inner.shutdown_tx.borrow()
    }

    // == Shutdown ==
    /// Stops the cleanup task and waits for it to finish.
    pub async fn shutdown(&self) {
        self.stop();

        let handle = self.inner.cleanup_handle().take();
        if let Some(handle) = handle {
            if let Err(err) = handle.await {
                warn!("Cache cleanup task ended abnormally: {}", err);
            }
        }
    }
}

impl fmt::Debug for Cache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("ttl", &self.inner.ttl)
            .field("len", &self.len())
            .field("stopped", &self.is_stopped())
            .finish()
    }
}
