//! Block-scoped queries
//!
//! Blocks are not stored, so each block query first materializes every
//! symbol of every group. A block with no members and an unknown block both
//! yield an empty result.

use super::{containing, named, with_value, Lookup};
use crate::error::Result;
use crate::models::Symbol;

impl Lookup {
    /// Every symbol whose block is `block`. Full scan.
    pub async fn symbols_in_block(&self, block: &str) -> Result<Vec<Symbol>> {
        let mut symbols = self.all_symbols().await?;
        symbols.retain(|symbol| symbol.block == block);
        Ok(symbols)
    }

    pub async fn by_value_in_block(&self, value: &str, block: &str) -> Result<Option<Symbol>> {
        let value = Symbol::normalize_value(value);
        let symbols = self.symbols_in_block(block).await?;
        Ok(with_value(&symbols, &value).cloned())
    }

    /// First match in caller order.
    pub async fn by_value_in_blocks<I>(&self, value: &str, blocks: I) -> Result<Option<Symbol>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for block in blocks {
            if let Some(symbol) = self.by_value_in_block(value, block.as_ref()).await? {
                return Ok(Some(symbol));
            }
        }
        Ok(None)
    }

    pub async fn by_name_in_block(&self, name: &str, block: &str) -> Result<Vec<Symbol>> {
        let symbols = self.symbols_in_block(block).await?;
        Ok(named(&symbols, name).cloned().collect())
    }

    pub async fn by_name_in_blocks<I>(&self, name: &str, blocks: I) -> Result<Vec<Symbol>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut found = Vec::new();
        for block in blocks {
            found.extend(self.by_name_in_block(name, block.as_ref()).await?);
        }
        Ok(found)
    }

    pub async fn find_substring_in_block(&self, seq: &str, block: &str) -> Result<Vec<Symbol>> {
        let needle = seq.to_uppercase();
        let symbols = self.symbols_in_block(block).await?;
        Ok(containing(&symbols, &needle).cloned().collect())
    }

    pub async fn find_substring_in_blocks<I>(&self, seq: &str, blocks: I) -> Result<Vec<Symbol>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut found = Vec::new();
        for block in blocks {
            found.extend(self.find_substring_in_block(seq, block.as_ref()).await?);
        }
        Ok(found)
    }
}
