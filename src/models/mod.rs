//! Data model and HTTP DTOs
//!
//! `Symbol` is the domain record; the request/response types are the
//! serialized shapes used by the HTTP surface.

pub mod requests;
pub mod responses;
pub mod symbol;

// Re-export commonly used types
pub use requests::SearchQuery;
pub use responses::{
    BlocksResponse, GroupInfo, GroupsResponse, HealthResponse, SettingsResponse, StatsResponse,
    SymbolsResponse,
};
pub use symbol::{Symbol, NULL_VALUE};
