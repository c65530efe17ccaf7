//! Cache Entry Module
//!
//! A materialized group plus its last-access bookkeeping.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::SymbolSet;

// == Cache Entry ==
/// One cached group.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The group's symbols exactly as the data source returned them
    pub symbols: SymbolSet,
    /// Last time a lookup touched this entry, None = not tracked (preload)
    pub last_access: Option<Instant>,
}

impl CacheEntry {
    // == Constructors ==
    /// Creates an entry stamped with the current time.
    pub fn tracked(symbols: SymbolSet) -> Self {
        Self {
            symbols,
            last_access: Some(Instant::now()),
        }
    }

    /// Creates an entry without access tracking. Never considered stale.
    pub fn pinned(symbols: SymbolSet) -> Self {
        Self {
            symbols,
            last_access: None,
        }
    }

    // == Touch ==
    /// Refreshes the last-access timestamp of a tracked entry.
    pub fn touch(&mut self) {
        if let Some(last_access) = self.last_access.as_mut() {
            *last_access = Instant::now();
        }
    }

    // == Idle Time ==
    /// Time since the entry was last touched, zero for untracked entries.
    pub fn idle_for(&self, now: Instant) -> Duration {
        self.last_access
            .map(|last_access| now.saturating_duration_since(last_access))
            .unwrap_or_default()
    }

    // == Is Stale ==
    /// True when the idle time, in whole seconds, exceeds `ttl_secs`.
    pub fn is_stale(&self, now: Instant, ttl_secs: u64) -> bool {
        self.last_access.is_some() && self.idle_for(now).as_secs() > ttl_secs
    }
}

// == Eviction Scan ==
/// Returns the key of the entry idle for the longest time.
///
/// Linear scan over the whole map. Ties keep the first entry met in map
/// iteration order, which is arbitrary.
pub fn stalest_key(entries: &HashMap<String, CacheEntry>, now: Instant) -> Option<String> {
    let mut stalest: Option<(&String, Duration)> = None;

    for (key, entry) in entries {
        let idle = entry.idle_for(now);
        match stalest {
            Some((_, longest)) if idle <= longest => {}
            _ => stalest = Some((key, idle)),
        }
    }

    stalest.map(|(key, _)| key.clone())
}
