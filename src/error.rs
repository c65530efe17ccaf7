//! Error types for the lookup service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Lookup Error Enum ==
/// Unified error type for the cache, the data sources and the lookup engine.
///
/// "No match" is not an error anywhere in the lookup surface: queries return
/// `Ok(None)` or an empty collection. `NotFound` only exists so the HTTP layer
/// can turn an absent result into a 404.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The data source does not know this group acronym
    #[error("Group not found: {0}")]
    GroupNotFound(String),

    /// A query produced no result and the caller asked for one
    #[error("Not found: {0}")]
    NotFound(String),

    /// The data source could not be read
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// The data source was readable but its content is malformed
    #[error("Parse error: {0}")]
    Parse(String),

    /// The cache cannot serve lookups until its settings are replaced
    #[error("Cache unavailable: {0}")]
    Unavailable(String),

    /// Invalid cache settings or environment values
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let status = match &self {
            LookupError::GroupNotFound(_) | LookupError::NotFound(_) => StatusCode::NOT_FOUND,
            LookupError::Configuration(_) | LookupError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            LookupError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            LookupError::Io(_) | LookupError::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the lookup service.
pub type Result<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (LookupError::GroupNotFound("Xx".into()), StatusCode::NOT_FOUND),
            (LookupError::NotFound("0041".into()), StatusCode::NOT_FOUND),
            (LookupError::Configuration("bad".into()), StatusCode::BAD_REQUEST),
            (LookupError::InvalidRequest("bad".into()), StatusCode::BAD_REQUEST),
            (LookupError::Parse("bad".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (
                LookupError::Unavailable("preload failed".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                LookupError::Io(std::io::Error::other("disk gone")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_io_conversion() {
        let err: LookupError = std::io::Error::other("boom").into();
        assert!(matches!(err, LookupError::Io(_)));
        assert!(err.to_string().contains("boom"));
    }
}
