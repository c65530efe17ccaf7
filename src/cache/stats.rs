//! Cache Statistics Module
//!
//! Counters for one settings epoch of the group cache. Replacing the
//! settings starts a fresh set.

use serde::Serialize;

// == Cache Stats ==
/// Lookup, eviction, sweep and preload counters.
///
/// `total_entries` is a snapshot taken when the stats are read, not a
/// running counter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Lookups answered from memory
    pub hits: u64,
    /// Lookups that had to read the data source
    pub misses: u64,
    /// Groups dropped to make room under the bound
    pub evictions: u64,
    /// Groups dropped by the sweep for sitting idle past the TTL
    pub expirations: u64,
    /// Sweep ticks run so far
    pub sweeps: u64,
    /// Groups loaded eagerly when preload mode was entered
    pub preloaded: usize,
    /// Groups held in memory when the snapshot was taken
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lookups served since the last reset, from memory or not.
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Share of lookups answered from memory, 0.0 before the first lookup.
    pub fn hit_rate(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            lookups => self.hits as f64 / lookups as f64,
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Counts one sweep tick and the groups it expired.
    pub fn record_sweep(&mut self, expired: usize) {
        self.sweeps += 1;
        self.expirations += expired as u64;
    }

    pub fn record_preload(&mut self, groups: usize) {
        self.preloaded = groups;
    }

    /// Copy of the counters stamped with the current map size.
    pub fn snapshot(&self, total_entries: usize) -> Self {
        Self {
            total_entries,
            ..self.clone()
        }
    }
}
