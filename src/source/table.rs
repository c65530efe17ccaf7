//! Group Table
//!
//! Ordered acronym to display-name mapping for the known groups.

use crate::error::{LookupError, Result};

// == Group Table ==
/// Acronym/name pairs in the order the data source listed them.
///
/// Reverse lookups scan in that order, so the first group carrying a given
/// display name wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupTable {
    entries: Vec<(String, String)>,
}

impl GroupTable {
    pub fn new() -> Self {
        Self::default()
    }

    // == Parse ==
    /// Parses `ACRONYM;Display Name` lines. Blank lines are skipped.
    pub fn parse_csv(text: &str) -> Result<Self> {
        let mut table = Self::new();

        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match line.split_once(';') {
                Some((acronym, name)) if !acronym.trim().is_empty() => {
                    table.insert(acronym.trim(), name.trim());
                }
                _ => {
                    return Err(LookupError::Parse(format!(
                        "groups table line {}: expected 'ACRONYM;Name', got '{}'",
                        index + 1,
                        line
                    )))
                }
            }
        }

        Ok(table)
    }

    // == Insert ==
    /// Adds a group. Re-inserting an acronym renames it in place.
    pub fn insert(&mut self, acronym: impl Into<String>, name: impl Into<String>) {
        let acronym = acronym.into();
        let name = name.into();

        match self.entries.iter_mut().find(|(known, _)| *known == acronym) {
            Some(entry) => entry.1 = name,
            None => self.entries.push((acronym, name)),
        }
    }

    /// Removes a group, returning its display name.
    pub fn remove(&mut self, acronym: &str) -> Option<String> {
        let index = self.entries.iter().position(|(known, _)| known == acronym)?;
        Some(self.entries.remove(index).1)
    }

    // == Lookups ==
    /// Forward lookup, acronym to display name.
    pub fn name_of(&self, acronym: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(known, _)| known == acronym)
            .map(|(_, name)| name.as_str())
    }

    /// Reverse lookup, display name to acronym. First match in table order.
    pub fn acronym_of(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, known)| known == name)
            .map(|(acronym, _)| acronym.as_str())
    }

    pub fn contains(&self, acronym: &str) -> bool {
        self.name_of(acronym).is_some()
    }

    pub fn acronyms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(acronym, _)| acronym.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, name)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(acronym, name)| (acronym.as_str(), name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<A: Into<String>, N: Into<String>> FromIterator<(A, N)> for GroupTable {
    fn from_iter<I: IntoIterator<Item = (A, N)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (acronym, name) in iter {
            table.insert(acronym, name);
        }
        table
    }
}
