//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::{CacheSettings, DEFAULT_MAX_ENTRIES, DEFAULT_TTL_SECS};
use crate::error::Result;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `groups.csv`, `blocks` and one JSON file per group
    pub data_dir: PathBuf,
    /// Cache mode name: passthrough, bounded or preload
    pub cache_mode: String,
    /// Maximum number of cached groups in bounded mode
    pub max_entries: usize,
    /// Idle time in seconds before a cached group is swept
    pub ttl_secs: u64,
    /// Period of the background sweep in seconds
    pub sweep_interval: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DATA_DIR` - Data directory (default: ./data)
    /// - `CACHE_MODE` - passthrough, bounded or preload (default: bounded)
    /// - `CACHE_MAX_ENTRIES` - Bound on cached groups (default: 14)
    /// - `CACHE_TTL` - Idle TTL in seconds (default: 60)
    /// - `SWEEP_INTERVAL` - Sweep period in seconds (default: 60)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            cache_mode: env::var("CACHE_MODE").unwrap_or(defaults.cache_mode),
            max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_entries),
            ttl_secs: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.ttl_secs),
            sweep_interval: env::var("SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.sweep_interval),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
        }
    }

    /// Validated cache settings for the configured mode.
    pub fn cache_settings(&self) -> Result<CacheSettings> {
        CacheSettings::from_mode(&self.cache_mode, self.max_entries, self.ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            cache_mode: "bounded".to_string(),
            max_entries: DEFAULT_MAX_ENTRIES,
            ttl_secs: DEFAULT_TTL_SECS,
            sweep_interval: 60,
            server_port: 3000,
        }
    }
}
