//! Module implementing a thread-safe LRU cache.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use antidote::Mutex;
use lru_cache::LruCache;


/// A thread-safe cache of keys & cached values.
/// Actual values stored in the cache are `Arc<V>`'s.
///
/// This is a wrapper around `LruCache` that also counts
/// cache hits & misses.
pub struct ThreadSafeCache<K: Eq + Hash, V> {
    inner: Mutex<LruCache<K, Arc<V>>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl<K: Eq + Hash, V> ThreadSafeCache<K, V> {
    /// Create the cache with given capacity.
    pub fn new(capacity: usize) -> Self {
        ThreadSafeCache{
            inner: Mutex::new(LruCache::new(capacity)),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }
}

// LruCache interface wrappers.
impl<K: Eq + Hash, V> ThreadSafeCache<K, V> {
    /// Get the element corresponding to given key if it's present in the cache.
    pub fn get<Q>(&self, key: &Q) -> Option<Arc<V>>
        where K: Borrow<Q>, Q: ?Sized + Eq + Hash
    {
        match self.inner.lock().get_mut(key) {
            Some(v) => { self.hit(); Some(v.clone()) }
            None => { self.miss(); None }
        }
    }

    /// Put an item into cache under given key.
    ///
    /// Always returns the (`Arc`'d) value that's under the cached key.
    /// If it wasn't there before, it will be the value just inserted (i.e. `v`).
    pub fn put(&self, k: K, v: V) -> Arc<V> {
        let value = Arc::new(v);
        self.inner.lock().insert(k, value.clone()).unwrap_or_else(|| value)
    }

    /// Cache capacity.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Current size of the cache.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Remove all elements from the cache.
    pub fn clear(&self) {
        self.inner.lock().clear()
    }
}

// Cache statistics.
impl<K: Eq + Hash, V> ThreadSafeCache<K, V> {
    fn hit(&self) -> usize {
        let inc = 1;
        self.hits.fetch_add(inc, Ordering::Relaxed) + inc
    }

    fn miss(&self) -> usize {
        let inc = 1;
        self.misses.fetch_add(inc, Ordering::Relaxed) + inc
    }

    /// Returns the number of cache hits.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    /// Returns the number of cache misses.
    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }
}

impl<K: Eq + Hash, V> fmt::Debug for ThreadSafeCache<K, V> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let mut ds = fmt.debug_struct("ThreadSafeCache");
        if let Ok(inner) = self.inner.try_lock() {
            ds.field("capacity", &inner.capacity());
            ds.field("len", &inner.len());
        }
        ds.field("hits", &self.hits());
        ds.field("misses", &self.misses());
        ds.finish()
    }
}


#[cfg(test)]
mod tests {
    use super::ThreadSafeCache;

    #[test]
    fn put_then_get() {
        let cache = ThreadSafeCache::new(2);
        cache.put("key", 42);
        assert_eq!(Some(42), cache.get("key").map(|v| *v));
        assert_eq!(1, cache.hits());
        assert_eq!(0, cache.misses());
    }

    #[test]
    fn get_missing_counts_a_miss() {
        let cache: ThreadSafeCache<&str, i32> = ThreadSafeCache::new(2);
        assert!(cache.get("nope").is_none());
        assert_eq!(1, cache.misses());
    }

    #[test]
    fn capacity_evicts_lru() {
        let cache = ThreadSafeCache::new(2);
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);
        assert_eq!(2, cache.len());
        assert!(cache.get("a").is_none());
        assert_eq!(Some(3), cache.get("c").map(|v| *v));
    }

    #[test]
    fn debug_format_includes_the_stats() {
        let cache = ThreadSafeCache::new(2);
        cache.put("key", 42);
        cache.get("key");
        let debug = format!("{:?}", cache);
        assert!(debug.contains("len: 1"), "debug = {}", debug);
        assert!(debug.contains("hits: 1"), "debug = {}", debug);
    }

    #[test]
    fn clear_empties_the_cache() {
        let cache = ThreadSafeCache::new(2);
        cache.put("a", 1);
        cache.clear();
        assert!(cache.is_empty());
    }
}
