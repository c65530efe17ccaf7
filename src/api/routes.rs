//! API Routes
//!
//! Configures the Axum router with all lookup endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    block_handler, blocks_handler, emoji_handler, get_settings_handler, group_handler,
    group_search_handler, groups_handler, health_handler, name_handler, put_settings_handler,
    search_handler, stats_handler, value_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /groups`, `GET /groups/:acronym`, `GET /groups/:acronym/search?q=`
/// - `GET /symbols/value/:value`, `GET /symbols/name/:name`, `GET /symbols/search?q=`
/// - `GET /blocks`, `GET /blocks/:block`
/// - `GET /emoji`
/// - `GET|PUT /cache/settings`, `GET /cache/stats`
/// - `GET /health`
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/groups", get(groups_handler))
        .route("/groups/:acronym", get(group_handler))
        .route("/groups/:acronym/search", get(group_search_handler))
        .route("/symbols/value/:value", get(value_handler))
        .route("/symbols/name/:name", get(name_handler))
        .route("/symbols/search", get(search_handler))
        .route("/blocks", get(blocks_handler))
        .route("/blocks/:block", get(block_handler))
        .route("/emoji", get(emoji_handler))
        .route(
            "/cache/settings",
            get(get_settings_handler).put(put_settings_handler),
        )
        .route("/cache/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheSettings;
    use crate::lookup::{fixtures, Lookup};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    async fn create_test_app() -> Router {
        let lookup = Lookup::new(fixtures::source(), CacheSettings::default())
            .await
            .unwrap();
        create_router(AppState::new(lookup))
    }

    async fn status_of(uri: &str) -> StatusCode {
        create_test_app()
            .await
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        assert_eq!(status_of("/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        assert_eq!(status_of("/cache/stats").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_group_not_found() {
        assert_eq!(status_of("/groups/Xx").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_block_with_spaces() {
        assert_eq!(status_of("/blocks/Basic%20Latin").await, StatusCode::OK);
    }
}
