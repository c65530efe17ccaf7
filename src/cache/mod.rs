//! Cache Module
//!
//! Group cache with three switchable regimes: pass-through, TTL and size
//! bounded, and eager preload.

mod entry;
mod group_cache;
mod settings;
mod stats;


use std::sync::Arc;

use crate::models::Symbol;

// Re-export public types
pub use entry::CacheEntry;
pub(crate) use group_cache::CacheState;
pub use group_cache::{GroupCache, DEFAULT_SWEEP_INTERVAL};
pub use settings::{CacheSettings, DEFAULT_MAX_ENTRIES, DEFAULT_TTL_SECS};
pub use stats::CacheStats;

/// Immutable, shared view of one group's symbols.
pub type SymbolSet = Arc<[Symbol]>;
