//! TTL Cache Module
//!
//! Main cache engine combining HashMap storage with insertion-order tracking
//! and per-entry TTL expiration.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats, Clock, InsertionOrder, SystemClock};

// == TTL Cache ==
/// Bounded key-value store with per-entry expiry.
///
/// Expired entries are purged lazily when their key is read. When a new key
/// arrives and the store is full, the oldest-inserted key still present is
/// evicted. Reads never refresh expiry or eviction order.
#[derive(Debug)]
pub struct TtlCache<T, C = SystemClock> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<T>>,
    /// First-insertion order of current keys
    order: InsertionOrder,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_size: usize,
    /// Lifetime applied when `set` gets no override
    default_ttl: Duration,
    clock: C,
}

impl<T: Clone> TtlCache<T, SystemClock> {
    // == Constructor ==
    /// Creates a new cache reading the system wall clock.
    ///
    /// # Arguments
    /// * `max_size` - Maximum number of entries the cache can hold
    /// * `default_ttl` - Lifetime for entries stored without an override
    pub fn new(max_size: usize, default_ttl: Duration) -> Self {
        Self::with_clock(max_size, default_ttl, SystemClock)
    }
}

impl<T: Clone, C: Clock> TtlCache<T, C> {
    /// Creates a new cache reading time from `clock`.
    pub fn with_clock(max_size: usize, default_ttl: Duration, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            stats: CacheStats::new(),
            max_size,
            default_ttl,
            clock,
        }
    }

    // == Get ==
    /// Returns the value stored under `key` if it has not expired.
    ///
    /// An expired entry is removed and reported as absent.
    pub fn get(&mut self, key: &str) -> Option<T> {
        let now = self.clock.now_ms();

        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired_at(now),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.remove_entry(key);
            self.stats.record_expirations(1);
            self.stats.record_miss();
            return None;
        }

        self.stats.record_hit();
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Set ==
    /// Stores a value with the default TTL.
    pub fn set(&mut self, key: impl Into<String>, value: T) {
        let ttl = self.default_ttl;
        self.set_with_ttl(key, value, ttl);
    }

    /// Stores a value that expires `ttl` from now.
    ///
    /// An existing key is fully replaced and its expiry reset, but it keeps
    /// its original insertion position. A new key arriving at capacity
    /// evicts exactly one entry first.
    pub fn set_with_ttl(&mut self, key: impl Into<String>, value: T, ttl: Duration) {
        let key = key.into();
        let now = self.clock.now_ms();

        if !self.entries.contains_key(&key) {
            if self.entries.len() >= self.max_size {
                self.evict_oldest();
            }
            self.order.push(&key);
        }

        self.entries.insert(key, CacheEntry::new(value, now, ttl));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Delete ==
    /// Removes an entry by key. Returns whether anything was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        self.remove_entry(key)
    }

    // == Clear ==
    /// Removes every entry. Returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        self.order.clear();
        self.stats.set_total_entries(0);
        count
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
            self.order.remove(&key);
        }

        self.stats.record_expirations(count);
        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Returns the number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    fn evict_oldest(&mut self) {
        if let Some(evicted) = self.order.pop_oldest() {
            self.entries.remove(&evicted);
            self.stats.record_eviction();
        }
    }

    fn remove_entry(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_some() {
            self.order.remove(key);
            self.stats.set_total_entries(self.entries.len());
            true
        } else {
            false
        }
    }
}
