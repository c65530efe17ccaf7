//! API Module
//!
//! Thin read-only HTTP surface over the lookup engine.
//!
//! # Endpoints
//! - `GET /groups`, `GET /groups/:acronym`, `GET /groups/:acronym/search?q=`
//! - `GET /symbols/value/:value`, `GET /symbols/name/:name`, `GET /symbols/search?q=`
//! - `GET /blocks`, `GET /blocks/:block`, `GET /emoji`
//! - `GET|PUT /cache/settings`, `GET /cache/stats`
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
