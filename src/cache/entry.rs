//! Cache Entry Module
//!
//! Defines the immutable record stored for each cached response.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A cached response body and the instant it was stored.
///
/// Entries are never mutated; a new `add` for the same key replaces the whole
/// entry.
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry {
    /// The stored response body
    payload: Vec<u8>,
    /// Insertion instant (monotonic)
    created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Wraps `payload` in a freshly timestamped entry.
    pub(crate) fn new(payload: Vec<u8>) -> Self {
        Self {
            payload,
            created_at: Instant::now(),
        }
    }

    pub(crate) fn payload(&self) -> &[u8] {
        &self.payload
    }

    #[cfg(test)]
    pub(crate) fn created_at(&self) -> Instant {
        self.created_at
    }

    // == Age ==
    /// Time elapsed between insertion and `now`, zero if `now` is earlier.
    pub(crate) fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry is older than `ttl` at `now`.
    ///
    /// Boundary condition: an entry whose age equals `ttl` exactly is still
    /// live; it has to exceed the TTL to be reclaimed.
    pub(crate) fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        self.age(now) > ttl
    }
}
