// In-memory list cache keyed by request URL.
// Handles freshness checking and overwrite-on-store.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};

/// A cached list with the time it was stored.
#[derive(Debug, Clone)]
pub struct CachedList<T> {
    /// The cached records, in page order.
    pub list: Vec<T>,
    /// When the list was stored.
    pub cached_at: DateTime<Utc>,
}

impl<T> CachedList<T> {
    /// Create a new entry stamped with the current time.
    pub fn new(list: Vec<T>) -> Self {
        Self {
            list,
            cached_at: Utc::now(),
        }
    }

    /// Time elapsed since the list was stored.
    pub fn age(&self) -> Duration {
        Utc::now()
            .signed_duration_since(self.cached_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    /// Check if this entry can be served: non-empty and younger than `ttl`.
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        !self.list.is_empty() && self.age() < ttl
    }
}

/// Process-lifetime cache from request URL to the last extracted list.
///
/// Entries are never evicted on their own. A stale or empty entry reads as a
/// miss and is overwritten by the next [`store`](ListCache::store).
#[derive(Debug)]
pub struct ListCache<T> {
    ttl: Duration,
    entries: Mutex<HashMap<String, CachedList<T>>>,
}

impl<T: Clone> ListCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached list for `url`, or an empty list on a miss.
    pub fn lookup(&self, url: &str) -> Vec<T> {
        match self.entries().get(url) {
            Some(cached) if cached.is_fresh(self.ttl) => cached.list.clone(),
            _ => Vec::new(),
        }
    }

    /// Store `list` for `url`, replacing whatever was there.
    pub fn store(&self, url: &str, list: Vec<T>) {
        self.entries().insert(url.to_string(), CachedList::new(list));
    }

    /// Age of the entry for `url`, fresh or not.
    pub fn age_of(&self, url: &str) -> Option<Duration> {
        self.entries().get(url).map(CachedList::age)
    }

    /// Drop the entry for `url`.
    pub fn invalidate(&self, url: &str) {
        self.entries().remove(url);
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries().clear();
    }

    /// Number of entries held, including stale ones.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A panic while holding the lock cannot leave a half-written entry, so a
    // poisoned map is still usable.
    fn entries(&self) -> MutexGuard<'_, HashMap<String, CachedList<T>>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://github.com/trending/?since=daily&spoken_language_code=";

    #[test]
    fn test_store_then_lookup() {
        let cache = ListCache::new(Duration::from_secs(300));
        cache.store(URL, vec!["a", "b"]);

        assert_eq!(cache.lookup(URL), vec!["a", "b"]);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_lookup_missing_is_empty() {
        let cache: ListCache<&str> = ListCache::new(Duration::from_secs(300));
        assert!(cache.lookup(URL).is_empty());
        assert!(cache.age_of(URL).is_none());
    }

    #[test]
    fn test_empty_list_is_a_miss() {
        let cache: ListCache<&str> = ListCache::new(Duration::from_secs(300));
        cache.store(URL, Vec::new());

        assert!(cache.lookup(URL).is_empty());
        // The entry still exists; it just can't be served.
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_stale_entry_is_a_miss() {
        let cache = ListCache::new(Duration::from_secs(300));
        cache.store(URL, vec![1, 2, 3]);

        // Set cached_at to the past
        cache.entries().get_mut(URL).unwrap().cached_at =
            Utc::now() - chrono::Duration::seconds(600);

        assert!(cache.lookup(URL).is_empty());
    }

    #[test]
    fn test_zero_ttl_never_serves() {
        let cache = ListCache::new(Duration::ZERO);
        cache.store(URL, vec![1]);
        assert!(cache.lookup(URL).is_empty());
    }

    #[test]
    fn test_store_overwrites() {
        let cache = ListCache::new(Duration::from_secs(300));
        cache.store(URL, vec![1]);
        cache.store(URL, vec![2, 3]);

        assert_eq!(cache.lookup(URL), vec![2, 3]);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_invalidate_and_clear() {
        let cache = ListCache::new(Duration::from_secs(300));
        cache.store("a", vec![1]);
        cache.store("b", vec![2]);

        cache.invalidate("a");
        assert!(cache.lookup("a").is_empty());
        assert_eq!(cache.lookup("b"), vec![2]);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_fresh_entry_boundary() {
        let mut cached = CachedList::new(vec!["x"]);
        assert!(cached.is_fresh(Duration::from_secs(60)));

        cached.cached_at = Utc::now() - chrono::Duration::seconds(61);
        assert!(!cached.is_fresh(Duration::from_secs(60)));
    }
}
