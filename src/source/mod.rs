//! Data Source Module
//!
//! The slow, reloadable collaborator behind the group cache.
//!
//! # Implementations
//! - [`FsSource`]: one JSON file per group plus a `groups.csv` table
//! - [`MemorySource`]: in-memory groups, used by tests and embedding callers

mod fs;
mod memory;
mod table;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Symbol;

pub use fs::FsSource;
pub use memory::MemorySource;
pub use table::GroupTable;

// == Group Source ==
/// Fetches whole groups of symbols.
///
/// The group cache is the only caller of `fetch_group`; the lookup engine
/// reads `list_groups` and `list_blocks` once at construction.
#[async_trait]
pub trait GroupSource: Send + Sync {
    /// Returns every symbol of the group, in source order.
    ///
    /// Fails with `GroupNotFound` for an unknown acronym and `Io`/`Parse`
    /// when the backing storage cannot be read.
    async fn fetch_group(&self, acronym: &str) -> Result<Vec<Symbol>>;

    /// Returns the known groups in source order.
    async fn list_groups(&self) -> Result<GroupTable>;

    /// Returns the known block names.
    async fn list_blocks(&self) -> Result<Vec<String>>;
}
