// src/cache/mod.rs
//
// Read-through cache
//
// PRINCIPLES:
// - Explicit keys, explicit population - no framework annotations
// - Lazily populated on read-miss, never eagerly on write
// - Loader failures are never cached

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::RwLock;

/// A process-wide read-through cache over a plain map.
///
/// `get_or_compute` runs the loader outside the lock, so two concurrent
/// misses for the same key may both hit the store; last writer wins. Both
/// compute the same value from the same store state, so the race is
/// harmless.
pub struct Cache<K, V> {
    entries: RwLock<HashMap<K, V>>,
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Return the cached value for `key`, or run `loader` and cache its
    /// result. Only `Ok` values are cached; errors pass straight through.
    pub fn get_or_compute<E, F>(&self, key: K, loader: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(value) = self
            .entries
            .read()
            .expect("cache lock poisoned")
            .get(&key)
        {
            return Ok(value.clone());
        }

        let value = loader()?;

        self.entries
            .write()
            .expect("cache lock poisoned")
            .insert(key, value.clone());

        Ok(value)
    }

    /// Drop a single entry. The service layer currently never calls this on
    /// writes; the read-through-only policy is inherited behavior.
    pub fn invalidate(&self, key: &K) {
        self.entries
            .write()
            .expect("cache lock poisoned")
            .remove(key);
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries.write().expect("cache lock poisoned").clear();
    }

    /// Number of populated entries.
    pub fn len(&self) -> usize {
        self.entries.read().expect("cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V> Default for Cache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
