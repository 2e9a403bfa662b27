//! Size- and time-bounded in-memory cache with stale reads
//!
//! Each entry moves through three states:
//! - fresh: younger than `expiry`, served by every read
//! - expired: older than `expiry`, served only to readers that accept staleness
//! - purgeable: older than `expiry + max_stale`, never served and removed by
//!   the next purge sweep
//!
//! Purge sweeps never run on the caller: they are spawned on the current tokio
//! runtime, or on a short-lived thread outside one. They are best-effort, so a
//! read racing a sweep may observe the pre-purge state.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Default bound on the number of entries
pub const DEFAULT_MAX_ENTRIES: usize = 50;

/// Default freshness window for entries added without explicit timings
pub const DEFAULT_EXPIRY: Duration = Duration::from_secs(300);

/// Default grace window during which an expired entry may still be served
pub const DEFAULT_MAX_STALE: Duration = Duration::from_secs(300);

#[derive(Debug, Clone)]
struct CachedResource {
    content: Vec<u8>,
    expiry: Duration,
    max_stale: Duration,
    cached_at: Instant,
    /// Insertion order, used to evict the oldest entries first
    sequence: u64,
}

impl CachedResource {
    fn has_expired(&self, now: Instant) -> bool {
        self.cached_at + self.expiry < now
    }

    fn can_purge(&self, now: Instant) -> bool {
        self.cached_at + self.expiry + self.max_stale < now
    }
}

#[derive(Debug)]
struct CacheInner {
    entries: DashMap<String, CachedResource>,
    max_entries: usize,
    sequence: AtomicU64,
    hit_count: AtomicU64,
    fetch_count: AtomicU64,
}

impl CacheInner {
    fn purge_stale(&self) {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, resource| !resource.can_purge(now));
        let purged = before.saturating_sub(self.entries.len());
        if purged > 0 {
            debug!("Purged {} stale cache entries", purged);
        }
    }

    /// Drop purgeable entries, then evict the oldest survivors over the bound
    fn purge(&self) {
        self.purge_stale();
        self.purge_excess();
    }

    fn purge_excess(&self) {
        let excess = self.entries.len().saturating_sub(self.max_entries);
        if excess == 0 {
            return;
        }

        let mut by_age: Vec<(u64, String)> = self
            .entries
            .iter()
            .map(|entry| (entry.value().sequence, entry.key().clone()))
            .collect();
        by_age.sort_unstable();

        for (_, key) in by_age.into_iter().take(excess) {
            self.entries.remove(&key);
        }
        debug!("Evicted {} cache entries over the limit of {}", excess, self.max_entries);
    }
}

/// Process-wide key to bytes cache.
///
/// Cloning is cheap and clones share the same storage and counters.
#[derive(Debug, Clone)]
pub struct SimpleCache {
    inner: Arc<CacheInner>,
}

impl Default for SimpleCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SimpleCache {
    /// Create a cache bounded to [`DEFAULT_MAX_ENTRIES`]
    pub fn new() -> Self {
        Self::with_max_entries(DEFAULT_MAX_ENTRIES)
    }

    /// Create a cache bounded to `max_entries`
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            inner: Arc::new(CacheInner {
                entries: DashMap::new(),
                max_entries,
                sequence: AtomicU64::new(0),
                hit_count: AtomicU64::new(0),
                fetch_count: AtomicU64::new(0),
            }),
        }
    }

    /// Insert with the default expiry and max-stale windows
    pub fn add(&self, key: impl Into<String>, content: Vec<u8>) {
        self.add_with_expiry(key, content, DEFAULT_EXPIRY, DEFAULT_MAX_STALE);
    }

    /// Insert or replace an entry, then sweep purgeable entries and evict the
    /// oldest ones if over the bound
    pub fn add_with_expiry(
        &self,
        key: impl Into<String>,
        content: Vec<u8>,
        expiry: Duration,
        max_stale: Duration,
    ) {
        let resource = CachedResource {
            content,
            expiry,
            max_stale,
            cached_at: Instant::now(),
            sequence: self.inner.sequence.fetch_add(1, Ordering::Relaxed),
        };
        self.inner.entries.insert(key.into(), resource);
        self.spawn_purge(CacheInner::purge);
    }

    /// Read an entry.
    ///
    /// A fresh entry counts as a hit. An expired entry triggers a purge sweep
    /// and is returned only when `accept_stale` is set, without hit credit.
    /// A purgeable entry is treated as missing.
    pub fn get(&self, key: &str, accept_stale: bool) -> Option<Vec<u8>> {
        self.inner.fetch_count.fetch_add(1, Ordering::Relaxed);

        let now = Instant::now();
        let (expired, purgeable, content) = {
            let resource = self.inner.entries.get(key)?;
            (
                resource.has_expired(now),
                resource.can_purge(now),
                resource.content.clone(),
            )
        };

        if expired {
            self.spawn_purge(CacheInner::purge_stale);
            return (accept_stale && !purgeable).then_some(content);
        }

        self.inner.hit_count.fetch_add(1, Ordering::Relaxed);
        Some(content)
    }

    /// Remove every entry
    pub fn clear(&self) {
        self.inner.entries.clear();
    }

    /// Number of entries currently stored
    pub fn count(&self) -> usize {
        self.inner.entries.len()
    }

    pub fn max_entries(&self) -> usize {
        self.inner.max_entries
    }

    /// Reads that returned a fresh entry
    pub fn hit_count(&self) -> u64 {
        self.inner.hit_count.load(Ordering::Relaxed)
    }

    /// All reads, including misses and stale reads
    pub fn fetch_count(&self) -> u64 {
        self.inner.fetch_count.load(Ordering::Relaxed)
    }

    fn spawn_purge(&self, sweep: fn(&CacheInner)) {
        let inner = Arc::clone(&self.inner);
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move { sweep(&inner) });
            }
            Err(_) => {
                std::thread::spawn(move || sweep(&inner));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_read_counts_as_hit() {
        let cache = SimpleCache::new();
        cache.add("rules", b"payload".to_vec());

        assert_eq!(cache.get("rules", false), Some(b"payload".to_vec()));
        assert_eq!(cache.hit_count(), 1);
        assert_eq!(cache.fetch_count(), 1);
    }

    #[test]
    fn test_miss_counts_fetch_only() {
        let cache = SimpleCache::new();

        assert_eq!(cache.get("absent", true), None);
        assert_eq!(cache.hit_count(), 0);
        assert_eq!(cache.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_oldest_entries_evicted_first() {
        let cache = SimpleCache::with_max_entries(3);
        for index in 0..5 {
            cache.add(format!("key-{index}"), vec![index]);
        }
        tokio::task::yield_now().await;

        assert_eq!(cache.count(), 3);
        assert!(cache.get("key-0", true).is_none());
        assert!(cache.get("key-1", true).is_none());
        assert!(cache.get("key-4", false).is_some());
    }

    #[test]
    fn test_replacing_a_key_does_not_grow() {
        let cache = SimpleCache::with_max_entries(2);
        cache.add("a", vec![1]);
        cache.add("a", vec![2]);

        assert_eq!(cache.count(), 1);
        assert_eq!(cache.get("a", false), Some(vec![2]));
    }

    #[test]
    fn test_clear() {
        let cache = SimpleCache::new();
        cache.add("a", vec![1]);
        cache.add("b", vec![2]);
        cache.clear();

        assert_eq!(cache.count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_entry_served_only_when_stale_accepted() {
        let cache = SimpleCache::new();
        cache.add_with_expiry(
            "rules",
            b"v1".to_vec(),
            Duration::from_secs(10),
            Duration::from_secs(20),
        );

        tokio::time::advance(Duration::from_secs(11)).await;

        assert_eq!(cache.get("rules", false), None);
        assert_eq!(cache.get("rules", true), Some(b"v1".to_vec()));
        assert_eq!(cache.hit_count(), 0);
        assert_eq!(cache.fetch_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_purgeable_entry_removed_after_stale_window() {
        let cache = SimpleCache::new();
        cache.add_with_expiry(
            "old",
            b"v1".to_vec(),
            Duration::from_secs(10),
            Duration::from_secs(20),
        );
        cache.add_with_expiry(
            "young",
            b"v2".to_vec(),
            Duration::from_secs(100),
            Duration::from_secs(100),
        );

        tokio::time::advance(Duration::from_secs(31)).await;

        assert_eq!(cache.get("old", true), None);
        tokio::task::yield_now().await;

        assert_eq!(cache.count(), 1);
        assert_eq!(cache.get("old", true), None);
        assert!(cache.get("young", false).is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_past_stale_window_never_served() {
        let cache = SimpleCache::new();
        cache.add_with_expiry(
            "rules",
            b"v1".to_vec(),
            Duration::from_secs(10),
            Duration::from_secs(20),
        );

        tokio::time::advance(Duration::from_secs(3600)).await;

        assert_eq!(cache.get("rules", true), None);
        assert_eq!(cache.fetch_count(), 1);
        tokio::task::yield_now().await;
        assert_eq!(cache.count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_add_drops_purgeable_entries_before_evicting_live_ones() {
        let cache = SimpleCache::with_max_entries(2);
        cache.add_with_expiry(
            "long-lived",
            b"a".to_vec(),
            Duration::from_secs(1000),
            Duration::from_secs(1000),
        );
        cache.add_with_expiry(
            "short-lived",
            b"b".to_vec(),
            Duration::from_secs(1),
            Duration::from_secs(1),
        );
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_secs(5)).await;
        cache.add("new", b"c".to_vec());
        tokio::task::yield_now().await;

        assert_eq!(cache.count(), 2);
        assert_eq!(cache.get("long-lived", false), Some(b"a".to_vec()));
        assert_eq!(cache.get("new", false), Some(b"c".to_vec()));
        assert_eq!(cache.get("short-lived", true), None);
    }

    #[test]
    fn test_sweep_outside_runtime_runs_off_the_caller() {
        let cache = SimpleCache::with_max_entries(1);
        cache.add("a", vec![1]);
        cache.add("b", vec![2]);

        for _ in 0..100 {
            if cache.count() == 1 {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(cache.count(), 1);
        assert_eq!(cache.get("b", false), Some(vec![2]));
    }
}
