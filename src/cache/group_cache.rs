//! Group Cache Module
//!
//! Sole point of contact with the group data source. Dispatches every lookup
//! on the active [`CacheSettings`] mode.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::cache::entry::stalest_key;
use crate::cache::{CacheEntry, CacheSettings, CacheStats, SymbolSet};
use crate::error::{LookupError, Result};
use crate::source::GroupSource;
use crate::tasks::spawn_sweep_task;

// == Public Constants ==
/// Default period between two sweep ticks in bounded mode
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

// == Cache State ==
/// Everything guarded by the cache lock. Lookups, sweep ticks and settings
/// replacement all go through this one mutex.
#[derive(Debug)]
pub(crate) struct CacheState {
    settings: CacheSettings,
    entries: HashMap<String, CacheEntry>,
    stats: CacheStats,
    /// Bumped on every settings replacement
    generation: u64,
    sweeper: Option<JoinHandle<()>>,
    /// Why the last preload failed. Cleared by the next settings replacement.
    preload_failure: Option<String>,
}

impl CacheState {
    pub(crate) fn new(settings: CacheSettings) -> Self {
        Self {
            settings,
            entries: HashMap::new(),
            stats: CacheStats::new(),
            generation: 0,
            sweeper: None,
            preload_failure: None,
        }
    }

    // == Sweep ==
    /// Drops every entry idle longer than the TTL. Returns the number removed.
    ///
    /// Does nothing outside bounded mode.
    pub(crate) fn sweep(&mut self, now: Instant) -> usize {
        let CacheSettings::Bounded { ttl_secs, .. } = self.settings else {
            return 0;
        };

        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_stale(now, ttl_secs));
        let removed = before - self.entries.len();

        self.stats.record_sweep(removed);
        removed
    }

    /// Evicts one entry when inserting would exceed the bound.
    fn make_room(&mut self, max_entries: usize, now: Instant) {
        if self.entries.len() < max_entries {
            return;
        }
        if let Some(key) = stalest_key(&self.entries, now) {
            self.entries.remove(&key);
            self.stats.record_eviction();
            debug!(group = %key, "Evicted least recently touched group");
        }
    }

    fn stop_sweeper(&mut self) {
        if let Some(handle) = self.sweeper.take() {
            handle.abort();
            info!("Cache sweep stopped");
        }
    }

    fn sweeper_running(&self) -> bool {
        self.sweeper
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

// == Group Cache ==
/// Mediates between lookups and the slow group source.
///
/// Returned [`SymbolSet`]s are shared and immutable; the cache never filters
/// or alters what the source returned.
pub struct GroupCache {
    source: Arc<dyn GroupSource>,
    state: Arc<Mutex<CacheState>>,
    sweep_interval: Duration,
}

impl GroupCache {
    // == Constructor ==
    /// Creates a cache and runs the setup of the initial mode (starting the
    /// sweep, or preloading every group).
    pub async fn new(
        source: Arc<dyn GroupSource>,
        settings: CacheSettings,
        sweep_interval: Duration,
    ) -> Result<Self> {
        settings.validate()?;
        if sweep_interval.is_zero() {
            return Err(LookupError::Configuration(
                "sweep interval must be greater than zero".to_string(),
            ));
        }

        let cache = Self {
            source,
            state: Arc::new(Mutex::new(CacheState::new(settings))),
            sweep_interval,
        };

        {
            let mut state = cache.state.lock().await;
            cache.activate(&mut state).await?;
        }

        Ok(cache)
    }

    // == Get ==
    /// Returns the symbols of one group.
    ///
    /// Source failures propagate unchanged and are never cached.
    pub async fn get(&self, acronym: &str) -> Result<SymbolSet> {
        let generation = {
            let mut guard = self.state.lock().await;
            let state = &mut *guard;

            match state.settings {
                CacheSettings::Passthrough => {
                    state.stats.record_miss();
                    state.generation
                }
                CacheSettings::Preload => {
                    return match (state.entries.get(acronym), &state.preload_failure) {
                        (Some(entry), _) => {
                            state.stats.record_hit();
                            Ok(entry.symbols.clone())
                        }
                        (None, Some(reason)) => Err(LookupError::Unavailable(format!(
                            "preload failed ({}), replace the cache settings to retry",
                            reason
                        ))),
                        (None, None) => Err(LookupError::GroupNotFound(acronym.to_string())),
                    };
                }
                CacheSettings::Bounded { .. } => {
                    if let Some(entry) = state.entries.get_mut(acronym) {
                        entry.touch();
                        state.stats.record_hit();
                        debug!(group = acronym, "Cache hit");
                        return Ok(entry.symbols.clone());
                    }
                    state.stats.record_miss();
                    state.generation
                }
            }
        };

        // The lock is released while the source is read.
        let symbols = self.fetch(acronym).await?;

        let mut guard = self.state.lock().await;
        let state = &mut *guard;

        if state.generation != generation {
            debug!(group = acronym, "Settings replaced during fetch, not caching");
            return Ok(symbols);
        }

        if let CacheSettings::Bounded { max_entries, .. } = state.settings {
            if let Some(entry) = state.entries.get_mut(acronym) {
                // Another lookup loaded the same group meanwhile.
                entry.touch();
                return Ok(entry.symbols.clone());
            }

            state.make_room(max_entries, Instant::now());
            state
                .entries
                .insert(acronym.to_string(), CacheEntry::tracked(symbols.clone()));
            debug!(group = acronym, entries = state.entries.len(), "Cached group");
        }

        Ok(symbols)
    }

    // == Set Settings ==
    /// Replaces the settings. Always discards the cached groups, then runs
    /// the new mode's setup.
    ///
    /// Holds the cache lock throughout, so no lookup or sweep tick
    /// interleaves with the switch.
    pub async fn set_settings(&self, settings: CacheSettings) -> Result<()> {
        settings.validate()?;

        let mut state = self.state.lock().await;
        info!(
            from = state.settings.mode_name(),
            to = settings.mode_name(),
            "Replacing cache settings"
        );

        state.settings = settings;
        state.entries = HashMap::new();
        state.stats = CacheStats::new();
        state.preload_failure = None;
        state.generation += 1;

        self.activate(&mut state).await
    }

    // == Accessors ==
    pub async fn settings(&self) -> CacheSettings {
        self.state.lock().await.settings
    }

    pub async fn stats(&self) -> CacheStats {
        let state = self.state.lock().await;
        state.stats.snapshot(state.entries.len())
    }

    /// Number of groups currently held in memory.
    pub async fn len(&self) -> usize {
        self.state.lock().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Whether a group is currently held in memory. Does not touch it.
    pub async fn contains(&self, acronym: &str) -> bool {
        self.state.lock().await.entries.contains_key(acronym)
    }

    /// Whether the background sweep is running.
    pub async fn is_sweeping(&self) -> bool {
        self.state.lock().await.sweeper_running()
    }

    pub fn sweep_interval(&self) -> Duration {
        self.sweep_interval
    }

    // == Mode Setup ==
    async fn activate(&self, state: &mut CacheState) -> Result<()> {
        match state.settings {
            CacheSettings::Passthrough => state.stop_sweeper(),
            CacheSettings::Bounded { .. } => {
                if !state.sweeper_running() {
                    state.sweeper = Some(spawn_sweep_task(
                        Arc::downgrade(&self.state),
                        self.sweep_interval,
                    ));
                }
            }
            CacheSettings::Preload => {
                state.stop_sweeper();
                if let Err(e) = self.preload(state).await {
                    // Later lookups report the failure instead of an unknown group.
                    state.entries.clear();
                    state.preload_failure = Some(e.to_string());
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    async fn preload(&self, state: &mut CacheState) -> Result<()> {
        let table = self.source.list_groups().await?;
        let acronyms: Vec<String> = table.acronyms().map(String::from).collect();

        for acronym in acronyms {
            let symbols = self.fetch(&acronym).await?;
            state.entries.insert(acronym, CacheEntry::pinned(symbols));
        }

        state.stats.record_preload(state.entries.len());
        info!(groups = state.entries.len(), "Preloaded every group");
        Ok(())
    }

    async fn fetch(&self, acronym: &str) -> Result<SymbolSet> {
        match self.source.fetch_group(acronym).await {
            Ok(symbols) => Ok(SymbolSet::from(symbols)),
            Err(e) => {
                warn!(group = acronym, error = %e, "Group fetch failed");
                Err(e)
            }
        }
    }
}

impl Drop for GroupCache {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.try_lock() {
            state.stop_sweeper();
        }
    }
}
