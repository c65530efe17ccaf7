//! Response DTOs for the lookup API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::{CacheSettings, CacheStats};
use crate::models::Symbol;
use crate::source::GroupTable;

/// One row of the group table
#[derive(Debug, Clone, Serialize)]
pub struct GroupInfo {
    pub acronym: String,
    pub name: String,
}

/// Response body for GET /groups
#[derive(Debug, Clone, Serialize)]
pub struct GroupsResponse {
    /// Known groups in table order
    pub groups: Vec<GroupInfo>,
}

impl GroupsResponse {
    pub fn from_table(table: &GroupTable) -> Self {
        Self {
            groups: table
                .iter()
                .map(|(acronym, name)| GroupInfo {
                    acronym: acronym.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        }
    }
}

/// Response body for every endpoint returning a list of symbols
#[derive(Debug, Clone, Serialize)]
pub struct SymbolsResponse {
    /// Number of symbols returned
    pub count: usize,
    pub symbols: Vec<Symbol>,
}

impl SymbolsResponse {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self {
            count: symbols.len(),
            symbols,
        }
    }
}

/// Response body for GET /blocks
#[derive(Debug, Clone, Serialize)]
pub struct BlocksResponse {
    pub blocks: Vec<String>,
}

/// Response body for the cache settings endpoints
#[derive(Debug, Clone, Serialize)]
pub struct SettingsResponse {
    /// Human readable outcome
    pub message: String,
    pub settings: CacheSettings,
}

impl SettingsResponse {
    pub fn current(settings: CacheSettings) -> Self {
        Self {
            message: format!("Cache is in {} mode", settings.mode_name()),
            settings,
        }
    }

    pub fn replaced(settings: CacheSettings) -> Self {
        Self {
            message: format!(
                "Cache settings replaced, now in {} mode",
                settings.mode_name()
            ),
            settings,
        }
    }
}

/// Response body for GET /cache/stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Active cache mode
    pub mode: String,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expirations: u64,
    pub sweeps: u64,
    /// Groups loaded when preload mode was entered
    pub preloaded: usize,
    /// Groups currently held in memory
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    pub fn new(settings: CacheSettings, stats: &CacheStats) -> Self {
        Self {
            mode: settings.mode_name().to_string(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expirations: stats.expirations,
            sweeps: stats.sweeps,
            preloaded: stats.preloaded,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
