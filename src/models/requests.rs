//! Request DTOs for the lookup API
//!
//! Defines the structure of incoming query strings.

use serde::Deserialize;

/// Query string for the substring search endpoints (`?q=...`)
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    /// Substring to look for in symbol names, case-insensitive
    #[serde(default)]
    pub q: String,
}

impl SearchQuery {
    /// Validates the query
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.q.trim().is_empty() {
            return Some("Query parameter 'q' cannot be empty".to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_deserialize() {
        let query: SearchQuery = serde_json::from_str(r#"{"q": "latin"}"#).unwrap();
        assert_eq!(query.q, "latin");
        assert!(query.validate().is_none());
    }

    #[test]
    fn test_validate_empty_query() {
        let query: SearchQuery = serde_json::from_str("{}").unwrap();
        assert!(query.validate().is_some());

        let blank = SearchQuery { q: "   ".to_string() };
        assert!(blank.validate().is_some());
    }
}
