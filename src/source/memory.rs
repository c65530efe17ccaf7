//! In-Memory Source
//!
//! Holds groups in memory and counts fetches, so callers can observe exactly
//! when the cache goes back to its source.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use super::{GroupSource, GroupTable};
use crate::error::{LookupError, Result};
use crate::models::Symbol;

#[derive(Debug, Default)]
struct MemoryInner {
    table: GroupTable,
    groups: HashMap<String, Vec<Symbol>>,
    fetches: HashMap<String, usize>,
    failing: bool,
}

// == Memory Source ==
/// Mutable in-memory group source.
#[derive(Debug, Default)]
pub struct MemorySource {
    inner: RwLock<MemoryInner>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`MemorySource::insert_group`].
    pub fn with_group(self, acronym: &str, name: &str, symbols: Vec<Symbol>) -> Self {
        self.insert_group(acronym, name, symbols);
        self
    }

    /// Adds or replaces a group.
    pub fn insert_group(&self, acronym: &str, name: &str, symbols: Vec<Symbol>) {
        let mut inner = self.write();
        inner.table.insert(acronym, name);
        inner.groups.insert(acronym.to_string(), symbols);
    }

    /// Drops a group; later fetches fail with `GroupNotFound`.
    pub fn remove_group(&self, acronym: &str) {
        let mut inner = self.write();
        inner.table.remove(acronym);
        inner.groups.remove(acronym);
    }

    /// While set, every fetch fails with an I/O error.
    pub fn set_failing(&self, failing: bool) {
        self.write().failing = failing;
    }

    /// Number of fetches made for one group.
    pub fn fetch_count(&self, acronym: &str) -> usize {
        self.read().fetches.get(acronym).copied().unwrap_or(0)
    }

    /// Number of fetches made for all groups.
    pub fn total_fetches(&self) -> usize {
        self.read().fetches.values().sum()
    }

    fn read(&self) -> RwLockReadGuard<'_, MemoryInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl GroupSource for MemorySource {
    async fn fetch_group(&self, acronym: &str) -> Result<Vec<Symbol>> {
        let mut inner = self.write();
        *inner.fetches.entry(acronym.to_string()).or_insert(0) += 1;

        if inner.failing {
            return Err(LookupError::Io(std::io::Error::other(format!(
                "memory source unavailable while fetching '{}'",
                acronym
            ))));
        }

        inner
            .groups
            .get(acronym)
            .cloned()
            .ok_or_else(|| LookupError::GroupNotFound(acronym.to_string()))
    }

    async fn list_groups(&self) -> Result<GroupTable> {
        Ok(self.read().table.clone())
    }

    /// Distinct block names in order of first appearance, walking the
    /// groups in table order.
    async fn list_blocks(&self) -> Result<Vec<String>> {
        let inner = self.read();
        let mut blocks: Vec<String> = Vec::new();

        for acronym in inner.table.acronyms() {
            for symbol in inner.groups.get(acronym).into_iter().flatten() {
                if !blocks.contains(&symbol.block) {
                    blocks.push(symbol.block.clone());
                }
            }
        }

        Ok(blocks)
    }
}
