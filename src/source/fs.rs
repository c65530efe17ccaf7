//! Filesystem Source
//!
//! Reads groups from a data directory:
//! - `groups.csv`: `ACRONYM;Display Name` per line
//! - `blocks`: optional, one block name per line
//! - `<ACRONYM>.json`: JSON array of symbols

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::{GroupSource, GroupTable};
use crate::error::{LookupError, Result};
use crate::models::Symbol;

// == Public Constants ==
pub const GROUPS_FILE: &str = "groups.csv";
pub const BLOCKS_FILE: &str = "blocks";
pub const GROUP_FILE_EXTENSION: &str = "json";

// == Filesystem Source ==
/// Directory-backed group source.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps an acronym to its file, refusing anything that could leave the
    /// data directory.
    fn group_path(&self, acronym: &str) -> Result<PathBuf> {
        let valid = !acronym.is_empty()
            && acronym
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(LookupError::GroupNotFound(acronym.to_string()));
        }

        Ok(self
            .root
            .join(format!("{}.{}", acronym, GROUP_FILE_EXTENSION)))
    }
}

#[async_trait]
impl GroupSource for FsSource {
    async fn fetch_group(&self, acronym: &str) -> Result<Vec<Symbol>> {
        let path = self.group_path(acronym)?;
        debug!(path = %path.display(), "Reading group file");

        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(LookupError::GroupNotFound(acronym.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&text)
            .map_err(|e| LookupError::Parse(format!("{}: {}", path.display(), e)))
    }

    async fn list_groups(&self) -> Result<GroupTable> {
        let text = tokio::fs::read_to_string(self.root.join(GROUPS_FILE)).await?;
        GroupTable::parse_csv(&text)
    }

    async fn list_blocks(&self) -> Result<Vec<String>> {
        match tokio::fs::read_to_string(self.root.join(BLOCKS_FILE)).await {
            Ok(text) => Ok(text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }
}
