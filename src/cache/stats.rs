//! Counters kept by [`TtlCache`](super::TtlCache) and reported on `/stats`.

use serde::Serialize;

/// Running totals since the store was created.
///
/// A read of an expired entry bumps both `misses` and `expirations`;
/// `clear` leaves the counters alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    /// Lookups that found nothing live, expired reads included
    pub misses: u64,
    /// Oldest entries dropped to make room for a new key
    pub evictions: u64,
    /// Entries dropped once their TTL ran out, lazily or by a sweep
    pub expirations: u64,
    /// Entry count at the time of the snapshot
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total reads, hit or miss.
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Share of lookups served from the cache, `0.0` before the first read.
    pub fn hit_rate(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            lookups => self.hits as f64 / lookups as f64,
        }
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub(crate) fn record_expirations(&mut self, count: usize) {
        self.expirations += count as u64;
    }

    pub(crate) fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_counters_are_zero() {
        let stats = CacheStats::new();

        assert_eq!(stats.lookups(), 0);
        assert_eq!(stats.evictions + stats.expirations, 0);
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_over_lookups() {
        let mut stats = CacheStats::new();
        for _ in 0..3 {
            stats.record_hit();
        }
        stats.record_miss();

        assert_eq!(stats.lookups(), 4);
        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_removal_counters_are_separate() {
        let mut stats = CacheStats::new();
        stats.record_eviction();
        stats.record_eviction();
        stats.record_expirations(3);

        assert_eq!(stats.evictions, 2);
        assert_eq!(stats.expirations, 3);
        assert_eq!(stats.lookups(), 0);
    }

    #[test]
    fn test_serializes_counter_fields() {
        let mut stats = CacheStats::new();
        stats.record_miss();
        stats.set_total_entries(7);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["misses"], 1);
        assert_eq!(json["total_entries"], 7);
    }
}
