//! Memoized lookups over a caller-owned cache
//!
//! The cache is always passed in by the caller. Presence is decided by key,
//! not by the stored value, so falsy results like `0`, `""`, `false` or
//! `null` are remembered like any other.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Mutex;
use tracing::trace;

/// Return the cached value for `key`, computing and storing it on first use
///
/// `get_value` runs at most once per distinct key for the lifetime of `cache`.
///
/// # Example
/// ```rust
/// use reshape::get_cached_value;
/// use std::collections::HashMap;
///
/// let mut cache = HashMap::new();
/// let mut calls = 0;
///
/// for _ in 0..3 {
///     let v = get_cached_value(
///         "x",
///         |_| {
///             calls += 1;
///             0
///         },
///         &mut cache,
///     );
///     assert_eq!(v, 0);
/// }
/// assert_eq!(calls, 1);
/// ```
pub fn get_cached_value<K, V, F>(key: K, get_value: F, cache: &mut HashMap<K, V>) -> V
where
    K: Eq + Hash,
    V: Clone,
    F: FnOnce(&K) -> V,
{
    match cache.entry(key) {
        Entry::Occupied(entry) => {
            trace!("cache hit");
            entry.get().clone()
        }
        Entry::Vacant(entry) => {
            trace!("cache miss");
            let value = get_value(entry.key());
            entry.insert(value).clone()
        }
    }
}

/// [`get_cached_value`] for a cache shared between threads
///
/// The lookup, the call to `get_value` and the insert all happen under the
/// lock, so concurrent callers still see at most one call per key. A poisoned
/// lock is recovered since the map itself stays consistent.
pub fn get_cached_value_sync<K, V, F>(key: K, get_value: F, cache: &Mutex<HashMap<K, V>>) -> V
where
    K: Eq + Hash,
    V: Clone,
    F: FnOnce(&K) -> V,
{
    let mut guard = cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    get_cached_value(key, get_value, &mut guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_calls_once_per_key() {
        let mut cache = HashMap::new();
        let mut calls = Vec::new();

        let a1 = get_cached_value(
            "a".to_string(),
            |k| {
                calls.push(k.clone());
                k.len()
            },
            &mut cache,
        );
        let a2 = get_cached_value(
            "a".to_string(),
            |k| {
                calls.push(k.clone());
                99
            },
            &mut cache,
        );
        let b = get_cached_value(
            "bb".to_string(),
            |k| {
                calls.push(k.clone());
                k.len()
            },
            &mut cache,
        );

        assert_eq!((a1, a2, b), (1, 1, 2));
        assert_eq!(calls, vec!["a".to_string(), "bb".to_string()]);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_falsy_values_are_cached() {
        for falsy in [json!(0), json!(""), json!(false), json!(null)] {
            let mut cache: HashMap<&str, Value> = HashMap::new();
            let mut calls = 0;

            for _ in 0..2 {
                let value = get_cached_value(
                    "x",
                    |_| {
                        calls += 1;
                        falsy.clone()
                    },
                    &mut cache,
                );
                assert_eq!(value, falsy);
            }

            assert_eq!(calls, 1, "producer re-ran for {}", falsy);
            assert_eq!(cache.get("x"), Some(&falsy));
        }
    }

    #[test]
    fn test_shared_cache_across_threads() {
        let cache = Arc::new(Mutex::new(HashMap::new()));
        let calls = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let calls = Arc::clone(&calls);
                thread::spawn(move || {
                    get_cached_value_sync(
                        "shared",
                        |_| {
                            calls.fetch_add(1, Ordering::SeqCst);
                            42
                        },
                        &cache,
                    )
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 42);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_poisoned_cache_is_recovered() {
        let cache: Arc<Mutex<HashMap<&str, i32>>> = Arc::new(Mutex::new(HashMap::new()));

        let panicking = Arc::clone(&cache);
        let outcome = thread::spawn(move || {
            get_cached_value_sync("k", |_| panic!("producer failed"), &panicking)
        })
        .join();
        assert!(outcome.is_err());
        assert!(cache.is_poisoned());

        let mut calls = 0;
        for _ in 0..2 {
            let value = get_cached_value_sync(
                "k",
                |_| {
                    calls += 1;
                    7
                },
                &cache,
            );
            assert_eq!(value, 7);
        }
        assert_eq!(calls, 1);
    }
}
