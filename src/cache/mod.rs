//! Cache Module
//!
//! In-memory response cache with time-based expiry. Payloads are opaque
//! bytes; decoding is left to the caller.

mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

pub(crate) use entry::CacheEntry;
pub(crate) use store::CacheInner;

// Re-export public types
pub use stats::CacheStats;
pub use store::Cache;
