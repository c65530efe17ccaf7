//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use unilookup::{api::create_router, AppState, CacheSettings, Lookup, MemorySource, Symbol};

// == Helper Functions ==

fn source() -> Arc<MemorySource> {
    let control = (0..0x20u32)
        .map(|cp| {
            let name = if cp == 0x09 {
                "CHARACTER TABULATION"
            } else {
                "<control>"
            };
            Symbol::new(Symbol::value_from_code_point(cp), name, "Cc", "Basic Latin", false)
        })
        .collect();

    Arc::new(
        MemorySource::new()
            .with_group("Cc", "Control", control)
            .with_group(
                "Lu",
                "Uppercase Letter",
                vec![
                    Symbol::new("0041", "LATIN CAPITAL LETTER A", "Lu", "Basic Latin", false),
                    Symbol::new("00C0", "LATIN CAPITAL LETTER A WITH GRAVE", "Lu", "Latin-1 Supplement", false),
                ],
            )
            .with_group(
                "So",
                "Other Symbol",
                vec![Symbol::new("1F600", "GRINNING FACE", "So", "Emoticons", true)],
            ),
    )
}

async fn create_test_app() -> Router {
    let lookup = Lookup::new(source(), CacheSettings::default()).await.unwrap();
    create_router(AppState::new(lookup))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

async fn put_settings(app: Router, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/cache/settings")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

// == Group Endpoints ==

#[tokio::test]
async fn test_groups_endpoint_lists_table_in_order() {
    let (status, json) = get(create_test_app().await, "/groups").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["groups"][0]["acronym"], "Cc");
    assert_eq!(json["groups"][0]["name"], "Control");
    assert_eq!(json["groups"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_group_endpoint() {
    let (status, json) = get(create_test_app().await, "/groups/Cc").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 32);
    assert_eq!(json["symbols"][9]["name"], "CHARACTER TABULATION");
}

#[tokio::test]
async fn test_group_endpoint_unknown_group() {
    let (status, json) = get(create_test_app().await, "/groups/Xx").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("Xx"));
}

#[tokio::test]
async fn test_group_search_endpoint() {
    let (status, json) = get(create_test_app().await, "/groups/Cc/search?q=tab").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 1);
    assert_eq!(json["symbols"][0]["value"], "0009");
}

// == Symbol Endpoints ==

#[tokio::test]
async fn test_value_endpoint() {
    let (status, json) = get(create_test_app().await, "/symbols/value/1f600").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "GRINNING FACE");
    assert_eq!(json["emoji"], true);
}

#[tokio::test]
async fn test_value_endpoint_no_match() {
    let (status, json) = get(create_test_app().await, "/symbols/value/FFFF").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_name_endpoint() {
    let (status, json) = get(
        create_test_app().await,
        "/symbols/name/LATIN%20CAPITAL%20LETTER%20A",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 1);
    assert_eq!(json["symbols"][0]["value"], "0041");
}

#[tokio::test]
async fn test_search_endpoint() {
    let (status, json) = get(create_test_app().await, "/symbols/search?q=Letter%20A").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 2);
}

#[tokio::test]
async fn test_search_endpoint_requires_query() {
    let (status, _) = get(create_test_app().await, "/symbols/search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// == Block and Emoji Endpoints ==

#[tokio::test]
async fn test_blocks_endpoint() {
    let (status, json) = get(create_test_app().await, "/blocks").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["blocks"][0], "Basic Latin");
}

#[tokio::test]
async fn test_block_endpoint_unions_groups() {
    let (status, json) = get(create_test_app().await, "/blocks/Basic%20Latin").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 33);
}

#[tokio::test]
async fn test_block_endpoint_unknown_block_is_empty() {
    let (status, json) = get(create_test_app().await, "/blocks/Klingon").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 0);
}

#[tokio::test]
async fn test_emoji_endpoint() {
    let (status, json) = get(create_test_app().await, "/emoji").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 1);
    assert_eq!(json["symbols"][0]["value"], "1F600");
}

// == Cache Endpoints ==

#[tokio::test]
async fn test_settings_endpoint_reports_default() {
    let (status, json) = get(create_test_app().await, "/cache/settings").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["settings"]["mode"], "bounded");
    assert_eq!(json["settings"]["max_entries"], 14);
    assert_eq!(json["settings"]["ttl_secs"], 60);
}

#[tokio::test]
async fn test_put_settings_resets_cache() {
    let app = create_test_app().await;

    let (status, _) = get(app.clone(), "/groups/Cc").await;
    assert_eq!(status, StatusCode::OK);

    let (_, stats) = get(app.clone(), "/cache/stats").await;
    assert_eq!(stats["total_entries"], 1);
    assert_eq!(stats["misses"], 1);

    let (status, json) = put_settings(app.clone(), r#"{"mode":"passthrough"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["settings"]["mode"], "passthrough");

    let (_, stats) = get(app, "/cache/stats").await;
    assert_eq!(stats["mode"], "passthrough");
    assert_eq!(stats["total_entries"], 0);
    assert_eq!(stats["misses"], 0);
}

#[tokio::test]
async fn test_put_settings_preload() {
    let app = create_test_app().await;

    let (status, _) = put_settings(app.clone(), r#"{"mode":"preload"}"#).await;
    assert_eq!(status, StatusCode::OK);

    let (_, stats) = get(app, "/cache/stats").await;
    assert_eq!(stats["mode"], "preload");
    assert_eq!(stats["total_entries"], 3);
    assert_eq!(stats["preloaded"], 3);
    assert_eq!(stats["misses"], 0);
}

#[tokio::test]
async fn test_put_settings_rejects_zero_bound() {
    let app = create_test_app().await;

    let (status, json) = put_settings(
        app.clone(),
        r#"{"mode":"bounded","max_entries":0,"ttl_secs":60}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("max_entries"));

    let (_, json) = get(app, "/cache/settings").await;
    assert_eq!(json["settings"]["max_entries"], 14);
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, json) = get(create_test_app().await, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}
