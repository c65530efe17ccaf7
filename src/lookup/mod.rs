//! Lookup Module
//!
//! Composes user queries (by name, value, substring, block, emoji flag) into
//! group cache fetches plus in-memory filtering.
//!
//! Groups are the caching granularity, so group-scoped queries are cheap.
//! Blocks have no storage of their own: every block query materializes all
//! symbols and filters them.

mod blocks;
mod groups;

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::cache::{CacheSettings, CacheStats, GroupCache, DEFAULT_SWEEP_INTERVAL};
use crate::config::Config;
use crate::error::Result;
use crate::models::Symbol;
use crate::source::{FsSource, GroupSource, GroupTable};

// == Lookup ==
/// Query engine over a [`GroupCache`].
///
/// The group table and block list are read from the source once, at
/// construction, and never refreshed.
pub struct Lookup {
    cache: GroupCache,
    groups: GroupTable,
    blocks: Vec<String>,
}

impl Lookup {
    // == Constructors ==
    /// Creates a lookup with the default sweep interval.
    pub async fn new(source: Arc<dyn GroupSource>, settings: CacheSettings) -> Result<Self> {
        Self::with_sweep_interval(source, settings, DEFAULT_SWEEP_INTERVAL).await
    }

    pub async fn with_sweep_interval(
        source: Arc<dyn GroupSource>,
        settings: CacheSettings,
        sweep_interval: Duration,
    ) -> Result<Self> {
        let groups = source.list_groups().await?;
        let blocks = source.list_blocks().await?;
        let cache = GroupCache::new(source, settings, sweep_interval).await?;

        info!(
            groups = groups.len(),
            blocks = blocks.len(),
            mode = settings.mode_name(),
            "Lookup ready"
        );

        Ok(Self {
            cache,
            groups,
            blocks,
        })
    }

    /// Creates a lookup over the data directory named in the configuration.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let source = Arc::new(FsSource::new(config.data_dir.clone()));
        Self::with_sweep_interval(source, config.cache_settings()?, config.sweep_interval()).await
    }

    // == Group Table ==
    /// Acronym for a display name, e.g. "Control" -> "Cc".
    ///
    /// When several groups share the display name, the first one in table
    /// order wins.
    pub fn group_acronym(&self, name: &str) -> Option<&str> {
        self.groups.acronym_of(name)
    }

    /// Display name for an acronym, e.g. "Cc" -> "Control".
    pub fn group_name(&self, acronym: &str) -> Option<&str> {
        self.groups.name_of(acronym)
    }

    pub fn group_acronyms(&self) -> impl Iterator<Item = &str> {
        self.groups.acronyms()
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.names()
    }

    /// Owned copy of the acronyms, in table order.
    fn acronym_list(&self) -> Vec<String> {
        self.groups.acronyms().map(String::from).collect()
    }

    pub fn groups(&self) -> &GroupTable {
        &self.groups
    }

    /// Block names as listed by the source.
    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    // == Cache Control ==
    pub fn cache(&self) -> &GroupCache {
        &self.cache
    }

    pub async fn cache_settings(&self) -> CacheSettings {
        self.cache.settings().await
    }

    /// Replaces the cache settings, discarding every cached group.
    pub async fn set_cache_settings(&self, settings: CacheSettings) -> Result<()> {
        self.cache.set_settings(settings).await
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }
}

// == Filters ==
fn named<'a>(symbols: &'a [Symbol], name: &'a str) -> impl Iterator<Item = &'a Symbol> + 'a {
    symbols.iter().filter(move |symbol| symbol.name == name)
}

fn containing<'a>(
    symbols: &'a [Symbol],
    needle_upper: &'a str,
) -> impl Iterator<Item = &'a Symbol> + 'a {
    symbols
        .iter()
        .filter(move |symbol| symbol.name_contains_upper(needle_upper))
}

/// Values are unique within a group, so the first match is the only one.
fn with_value<'a>(symbols: &'a [Symbol], value: &str) -> Option<&'a Symbol> {
    symbols.iter().find(|symbol| symbol.value == value)
}
