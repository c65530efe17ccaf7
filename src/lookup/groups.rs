//! Group-scoped queries
//!
//! Every query is defined for a single group and composed over a list of
//! groups in caller order. A group the source does not know contributes
//! nothing; only [`Lookup::symbols_in_group`] reports it as an error.

use super::{containing, named, with_value, Lookup};
use crate::cache::SymbolSet;
use crate::error::{LookupError, Result};
use crate::models::Symbol;

impl Lookup {
    // == Whole Groups ==
    /// All symbols of one group, as cached.
    ///
    /// Unknown groups and source failures surface as the cache reports them.
    pub async fn symbols_in_group(&self, acronym: &str) -> Result<SymbolSet> {
        self.cache.get(acronym).await
    }

    async fn group_or_empty(&self, acronym: &str) -> Result<SymbolSet> {
        match self.cache.get(acronym).await {
            Err(LookupError::GroupNotFound(_)) => Ok(SymbolSet::from(Vec::new())),
            other => other,
        }
    }

    /// Every symbol of every known group.
    ///
    /// Loads the whole dataset. Meant for bulk export; formatting the result
    /// in one go is likely to be very slow.
    pub async fn all_symbols(&self) -> Result<Vec<Symbol>> {
        let mut symbols = Vec::new();
        for acronym in self.acronym_list() {
            symbols.extend(self.group_or_empty(&acronym).await?.iter().cloned());
        }
        Ok(symbols)
    }

    /// Every symbol flagged as emoji.
    pub async fn emoji_symbols(&self) -> Result<Vec<Symbol>> {
        let mut symbols = self.all_symbols().await?;
        symbols.retain(|symbol| symbol.emoji);
        Ok(symbols)
    }

    // == By Name ==
    /// Symbols whose name equals `name` exactly (case-sensitive).
    pub async fn by_name_in_group(&self, name: &str, acronym: &str) -> Result<Vec<Symbol>> {
        let symbols = self.group_or_empty(acronym).await?;
        Ok(named(&symbols, name).cloned().collect())
    }

    pub async fn by_name_in_groups<I>(&self, name: &str, acronyms: I) -> Result<Vec<Symbol>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut found = Vec::new();
        for acronym in acronyms {
            found.extend(self.by_name_in_group(name, acronym.as_ref()).await?);
        }
        Ok(found)
    }

    pub async fn by_name(&self, name: &str) -> Result<Vec<Symbol>> {
        self.by_name_in_groups(name, self.acronym_list()).await
    }

    // == By Substring ==
    /// Symbols whose name contains `seq`, ignoring case.
    pub async fn find_substring_in_group(&self, seq: &str, acronym: &str) -> Result<Vec<Symbol>> {
        let needle = seq.to_uppercase();
        let symbols = self.group_or_empty(acronym).await?;
        Ok(containing(&symbols, &needle).cloned().collect())
    }

    pub async fn find_substring_in_groups<I>(&self, seq: &str, acronyms: I) -> Result<Vec<Symbol>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut found = Vec::new();
        for acronym in acronyms {
            found.extend(self.find_substring_in_group(seq, acronym.as_ref()).await?);
        }
        Ok(found)
    }

    pub async fn find_substring(&self, seq: &str) -> Result<Vec<Symbol>> {
        self.find_substring_in_groups(seq, self.acronym_list()).await
    }

    // == By Value ==
    /// The symbol with this value in one group, if any.
    pub async fn by_value_in_group(&self, value: &str, acronym: &str) -> Result<Option<Symbol>> {
        let value = Symbol::normalize_value(value);
        let symbols = self.group_or_empty(acronym).await?;
        Ok(with_value(&symbols, &value).cloned())
    }

    /// First match in caller order. Later groups are not fetched once found.
    pub async fn by_value_in_groups<I>(&self, value: &str, acronyms: I) -> Result<Option<Symbol>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for acronym in acronyms {
            if let Some(symbol) = self.by_value_in_group(value, acronym.as_ref()).await? {
                return Ok(Some(symbol));
            }
        }
        Ok(None)
    }

    pub async fn by_value(&self, value: &str) -> Result<Option<Symbol>> {
        self.by_value_in_groups(value, self.acronym_list()).await
    }

    pub async fn by_char(&self, c: char) -> Result<Option<Symbol>> {
        self.by_value(&Symbol::value_from_char(c)).await
    }
}
