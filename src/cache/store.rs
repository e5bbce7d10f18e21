//! Cache Store Module
//!
//! Main cache engine combining a HashMap index with the recency list.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::cache::{lru, CacheStats, Handle, RecencyList};
use crate::error::{CacheError, Result};
use crate::models::CacheSnapshot;

// == LRU Cache ==
/// Fixed-capacity key-value cache with least-recently-used eviction.
///
/// Every key in `index` maps to exactly one occupied entry in `order`, and
/// every entry in `order` is indexed by its key.
#[derive(Debug)]
pub struct LruCache<K, V> {
    /// Key to entry handle
    index: HashMap<K, Handle>,
    /// Entries ordered by access, front = most recent
    order: RecencyList<K, V>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries, fixed at construction
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// Fails with [`CacheError::InvalidCapacity`] when `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }
        Ok(Self {
            index: HashMap::with_capacity(capacity),
            order: RecencyList::with_capacity(capacity),
            stats: CacheStats::new(),
            capacity,
        })
    }

    // == Get ==
    /// Returns the value for `key` and marks it most recently used.
    ///
    /// Fails with [`CacheError::NotFound`] if the key is absent.
    pub fn get<Q>(&mut self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(&handle) = self.index.get(key) else {
            self.stats.record_lookup(false);
            return Err(CacheError::NotFound);
        };

        self.stats.record_lookup(true);
        self.order.move_to_front(handle);
        trace!(slot = handle.index(), "promoted entry on get");

        self.order
            .get(handle)
            .map(|entry| &entry.value)
            .ok_or(CacheError::NotFound)
    }

    // == Put ==
    /// Inserts or updates `key`, marking it most recently used.
    ///
    /// Updating an existing key never evicts. Inserting a new key into a
    /// full cache first evicts the least recently used entry, which is
    /// returned.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&handle) = self.index.get(&key) {
            if let Some(slot) = self.order.get_mut(handle) {
                *slot = value;
            }
            self.order.move_to_front(handle);
            trace!(slot = handle.index(), "updated entry in place");
            return None;
        }

        let evicted = if self.index.len() >= self.capacity {
            self.evict_oldest()
        } else {
            None
        };

        let handle = self.order.add_to_front(key.clone(), value);
        self.index.insert(key, handle);
        debug!(
            slot = handle.index(),
            size = self.index.len(),
            capacity = self.capacity,
            "inserted new entry"
        );

        evicted
    }

    // == Evict Oldest ==
    /// Drops the back entry from both structures.
    fn evict_oldest(&mut self) -> Option<(K, V)> {
        let entry = self.order.remove_tail()?;
        self.index.remove(&entry.key);
        self.stats.record_eviction();
        debug!(size = self.index.len(), "evicted least recently used entry");
        Some(entry.into_pair())
    }

    // == Contains ==
    /// Checks membership without touching the recency order.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    // == Peek ==
    /// Returns the value for `key` without touching the recency order.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = *self.index.get(key)?;
        self.order.get(handle).map(|entry| &entry.value)
    }

    // == Remove ==
    /// Removes `key` and returns its value.
    ///
    /// Fails with [`CacheError::NotFound`] if the key is absent.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = self.index.remove(key).ok_or(CacheError::NotFound)?;
        let entry = self.order.remove_node(handle).ok_or(CacheError::NotFound)?;
        Ok(entry.value)
    }

    // == Clear ==
    /// Removes every entry. Capacity and lookup counters are kept.
    pub fn clear(&mut self) {
        let dropped = self.index.len();
        self.index.clear();
        self.order.clear();
        debug!(dropped, "cleared cache");
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            total_entries: self.index.len(),
            ..self.stats
        }
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Iteration ==
    /// Iterates `(key, value)` pairs from most to least recently used.
    pub fn iter(&self) -> lru::Iter<'_, K, V> {
        self.order.iter()
    }

    /// Keys from most to least recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.order.iter().map(|(key, _)| key)
    }

    // == Snapshot ==
    /// Captures the current contents as a serializable, ordered listing.
    pub fn snapshot(&self) -> CacheSnapshot<K, V>
    where
        V: Clone,
    {
        CacheSnapshot::new(
            self.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            self.capacity,
        )
    }

    /// Checks that the index and recency list describe the same entries.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        self.index.len() == self.order.len()
            && self.index.len() <= self.capacity
            && self.order.check_links()
            && self.index.iter().all(|(key, &handle)| {
                self.order
                    .get(handle)
                    .map(|entry| &entry.key == key)
                    .unwrap_or(false)
            })
    }
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone + fmt::Display,
    V: fmt::Display,
{
    // == Display ==
    /// Renders the contents front to back followed by a size summary.
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl<K, V> fmt::Display for LruCache<K, V>
where
    K: Hash + Eq + Clone + fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "LRU Cache Contents:")?;
        for (key, value) in self.iter() {
            writeln!(f, "{} -> {}", key, value)?;
        }
        write!(f, "Cache size: {}/{}", self.len(), self.capacity)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn filled(capacity: usize, keys: &[u32]) -> LruCache<u32, String> {
        let mut cache = LruCache::new(capacity).unwrap();
        for key in keys {
            cache.put(*key, format!("value{}", key));
        }
        cache
    }

    fn order(cache: &LruCache<u32, String>) -> Vec<u32> {
        cache.keys().copied().collect()
    }

    #[test]
    fn test_store_new() {
        let cache: LruCache<u32, String> = LruCache::new(3).unwrap();
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 3);
    }

    #[test]
    fn test_store_zero_capacity_rejected() {
        let result = LruCache::<u32, String>::new(0);
        assert!(matches!(result, Err(CacheError::InvalidCapacity(0))));
    }

    #[test]
    fn test_store_put_and_get() {
        let mut cache = LruCache::new(3).unwrap();
        cache.put("key1".to_string(), "value1".to_string());

        assert_eq!(cache.get("key1").unwrap(), "value1");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut cache = filled(3, &[1]);
        assert!(matches!(cache.get(&9), Err(CacheError::NotFound)));
    }

    #[test]
    fn test_store_get_promotes() {
        let mut cache = filled(3, &[1, 2, 3]);
        cache.get(&1).unwrap();
        assert_eq!(order(&cache), vec![1, 3, 2]);
        assert!(cache.is_consistent());
    }

    #[test]
    fn test_store_overwrite_keeps_size() {
        let mut cache = filled(3, &[1, 2, 3]);

        let evicted = cache.put(1, "updated".to_string());

        assert!(evicted.is_none());
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.peek(&1).map(String::as_str), Some("updated"));
        assert_eq!(order(&cache), vec![1, 3, 2]);
        assert_eq!(cache.stats().evictions, 0);
    }

    #[test]
    fn test_store_lru_eviction() {
        let mut cache = filled(3, &[1, 2, 3]);

        let evicted = cache.put(4, "value4".to_string());

        assert_eq!(evicted, Some((1, "value1".to_string())));
        assert_eq!(cache.len(), 3);
        assert!(!cache.contains(&1));
        assert_eq!(order(&cache), vec![4, 3, 2]);
        assert!(cache.is_consistent());
    }

    #[test]
    fn test_store_capacity_one() {
        let mut cache = filled(1, &[1]);
        cache.put(2, "value2".to_string());
        assert_eq!(order(&cache), vec![2]);
        cache.put(2, "again".to_string());
        assert_eq!(cache.len(), 1);
        assert!(cache.is_consistent());
    }

    #[test]
    fn test_store_contains_does_not_promote() {
        let mut cache = filled(2, &[1, 2]);

        assert!(cache.contains(&1));
        cache.put(3, "value3".to_string());

        assert!(!cache.contains(&1));
        assert!(cache.contains(&2));
    }

    #[test]
    fn test_store_peek_does_not_promote() {
        let mut cache = filled(2, &[1, 2]);

        assert_eq!(cache.peek(&1).map(String::as_str), Some("value1"));
        cache.put(3, "value3".to_string());

        assert!(cache.peek(&1).is_none());
    }

    #[test]
    fn test_store_remove() {
        let mut cache = filled(3, &[1, 2, 3]);

        assert_eq!(cache.remove(&2).unwrap(), "value2");
        assert!(matches!(cache.remove(&2), Err(CacheError::NotFound)));
        assert_eq!(order(&cache), vec![3, 1]);
        assert!(cache.is_consistent());
    }

    #[test]
    fn test_store_clear_keeps_capacity() {
        let mut cache = filled(3, &[1, 2, 3]);

        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 3);
        assert!(!cache.contains(&1));
        cache.put(100, "Hundred".to_string());
        assert_eq!(cache.len(), 1);
        assert!(cache.is_consistent());
    }

    #[test]
    fn test_store_stats() {
        let mut cache = filled(2, &[1, 2]);
        cache.get(&1).unwrap();
        let _ = cache.get(&7);
        cache.put(3, "value3".to_string());

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.total_entries, 2);
    }

    #[test]
    fn test_store_display() {
        let cache = filled(3, &[1, 2]);
        assert_eq!(
            cache.display(),
            "LRU Cache Contents:\n2 -> value2\n1 -> value1\nCache size: 2/3"
        );
    }

    #[test]
    fn test_store_display_empty() {
        let cache: LruCache<u32, String> = LruCache::new(3).unwrap();
        assert_eq!(cache.display(), "LRU Cache Contents:\nCache size: 0/3");
    }
}
