//! Symbol Model
//!
//! One Unicode character record as loaded from a group data source.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Textual value used by the data source for "no character".
pub const NULL_VALUE: &str = "null";

// == Symbol ==
/// Immutable Unicode character record.
///
/// Two symbols are equal when they share the same `value` (code point);
/// use [`Symbol::same_name`] for name-collision checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Symbol {
    /// Code point as uppercase hex, zero-padded to at least 4 digits
    pub value: String,
    /// Display name, uppercase by convention of the source
    pub name: String,
    /// Acronym of the group this symbol was loaded under
    pub group: String,
    /// Unicode block display name
    pub block: String,
    /// Whether the character is flagged as emoji
    #[serde(default)]
    pub emoji: bool,
}

impl Symbol {
    // == Constructor ==
    pub fn new(
        value: impl Into<String>,
        name: impl Into<String>,
        group: impl Into<String>,
        block: impl Into<String>,
        emoji: bool,
    ) -> Self {
        Self {
            value: value.into(),
            name: name.into(),
            group: group.into(),
            block: block.into(),
            emoji,
        }
    }

    // == Value Helpers ==
    /// Renders a code point the way symbol values are stored.
    ///
    /// ```
    /// use unilookup::Symbol;
    /// assert_eq!(Symbol::value_from_code_point(0x9), "0009");
    /// assert_eq!(Symbol::value_from_code_point(0x1F600), "1F600");
    /// ```
    pub fn value_from_code_point(code_point: u32) -> String {
        format!("{:04X}", code_point)
    }

    /// Renders a character the way symbol values are stored.
    pub fn value_from_char(c: char) -> String {
        Self::value_from_code_point(c as u32)
    }

    /// Normalizes a user supplied value for comparison against stored values.
    ///
    /// Hex input is re-rendered in stored form, so `"9"`, `"09"` and
    /// `"0009"` all name TAB. Anything else is only trimmed and uppercased.
    ///
    /// ```
    /// use unilookup::Symbol;
    /// assert_eq!(Symbol::normalize_value("9"), "0009");
    /// assert_eq!(Symbol::normalize_value(" 1f600 "), "1F600");
    /// ```
    pub fn normalize_value(value: &str) -> String {
        let value = value.trim();
        if value.eq_ignore_ascii_case(NULL_VALUE) {
            return NULL_VALUE.to_string();
        }

        let hex = !value.is_empty() && value.bytes().all(|b| b.is_ascii_hexdigit());
        match u32::from_str_radix(value, 16) {
            Ok(code_point) if hex => Self::value_from_code_point(code_point),
            _ => value.to_uppercase(),
        }
    }

    // == Accessors ==
    /// Converts the stored value back to the character it names.
    ///
    /// Returns `None` for the `"null"` sentinel and for values that are not a
    /// valid Unicode scalar.
    pub fn as_char(&self) -> Option<char> {
        if self.value == NULL_VALUE {
            return None;
        }
        u32::from_str_radix(&self.value, 16)
            .ok()
            .and_then(char::from_u32)
    }

    /// Compares two symbols by name only.
    pub fn same_name(&self, other: &Symbol) -> bool {
        self.name == other.name
    }

    /// Case-insensitive substring match on the name. `needle` must already be
    /// uppercase.
    ///
    /// Unicode character names are ASCII, so the comparison folds ASCII case
    /// only and never allocates.
    pub(crate) fn name_contains_upper(&self, needle: &str) -> bool {
        let needle = needle.as_bytes();
        needle.is_empty()
            || self
                .name
                .as_bytes()
                .windows(needle.len())
                .any(|window| window.eq_ignore_ascii_case(needle))
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.as_char().map(String::from).unwrap_or_default();
        write!(
            f,
            "{{U+{} ({}) {} Block: {}, Group: {}, Emoji: {}}}",
            self.value, rendered, self.name, self.block, self.group, self.emoji
        )
    }
}
