//! UniLookup - Unicode symbol lookup over a switchable group cache
//!
//! Symbols are stored per group and served through a cache that can pass
//! every lookup through, keep a TTL and size bounded working set, or preload
//! everything.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod lookup;
pub mod models;
pub mod source;
mod tasks;

pub use api::AppState;
pub use cache::{CacheSettings, CacheStats, GroupCache, SymbolSet};
pub use config::Config;
pub use error::{LookupError, Result};
pub use lookup::Lookup;
pub use models::Symbol;
pub use source::{FsSource, GroupSource, GroupTable, MemorySource};
