//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cache against a plain `HashMap` model.

use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use tokio::runtime::{Builder, Runtime};

use crate::cache::Cache;

// == Test Configuration ==
// Long enough that no sweep runs during a test case.
const TEST_TTL: Duration = Duration::from_secs(3600);

/// Builds a cache on an idle current-thread runtime.
///
/// The runtime is returned so it outlives the cache.
fn test_cache() -> (Runtime, Cache) {
    let runtime = Builder::new_current_thread().enable_all().build().unwrap();
    let cache = {
        let _guard = runtime.enter();
        Cache::new(TEST_TTL).unwrap()
    };
    (runtime, cache)
}

// == Strategies ==
/// Request-URL-like keys from a small alphabet so sequences revisit keys.
fn key_strategy() -> impl Strategy<Value = String> {
    "(/pokemon/|/location-area/)?[a-c]{0,2}".prop_map(|s| s)
}

/// Arbitrary bytes, including empty payloads.
fn payload_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..64)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Add { key: String, payload: Vec<u8> },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), payload_strategy())
            .prop_map(|(key, payload)| CacheOp::Add { key, payload }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Before any sweep, the cache behaves exactly like a map: every get
    // returns the last payload added under that key, and hit/miss counters
    // match the model.
    #[test]
    fn prop_matches_hashmap_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let (_runtime, cache) = test_cache();
        let mut model: HashMap<String, Vec<u8>> = HashMap::new();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Add { key, payload } => {
                    cache.add(key.clone(), payload.clone());
                    model.insert(key, payload);
                }
                CacheOp::Get { key } => {
                    let expected = model.get(&key).cloned();
                    if expected.is_some() {
                        expected_hits += 1;
                    } else {
                        expected_misses += 1;
                    }
                    prop_assert_eq!(cache.get(&key), expected);
                }
            }
        }

        let stats = cache.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.total_entries, model.len(), "Total entries mismatch");
        prop_assert_eq!(cache.len(), model.len());
    }

    // Storing V1 then V2 under the same key leaves V2.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        v1 in payload_strategy(),
        v2 in payload_strategy(),
    ) {
        let (_runtime, cache) = test_cache();

        cache.add(key.clone(), v1);
        cache.add(key.clone(), v2.clone());

        prop_assert_eq!(cache.get(&key), Some(v2));
        prop_assert_eq!(cache.len(), 1);
    }

    // Writes to one key never disturb another.
    #[test]
    fn prop_keys_are_independent(
        a in key_strategy(),
        b in key_strategy(),
        x in payload_strategy(),
        y in payload_strategy(),
    ) {
        prop_assume!(a != b);
        let (_runtime, cache) = test_cache();

        cache.add(a.clone(), x.clone());
        cache.add(b.clone(), y.clone());

        prop_assert_eq!(cache.get(&a), Some(x));
        prop_assert_eq!(cache.get(&b), Some(y));
    }
}
