//! API Handlers
//!
//! HTTP request handlers for each lookup endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::cache::CacheSettings;
use crate::error::{LookupError, Result};
use crate::lookup::Lookup;
use crate::models::{
    BlocksResponse, GroupsResponse, HealthResponse, SearchQuery, SettingsResponse, StatsResponse,
    Symbol, SymbolsResponse,
};

/// Application state shared across all handlers.
///
/// The lookup synchronizes internally, so no outer lock is needed.
#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<Lookup>,
}

impl AppState {
    pub fn new(lookup: Lookup) -> Self {
        Self {
            lookup: Arc::new(lookup),
        }
    }
}

fn search_term(query: SearchQuery) -> Result<String> {
    match query.validate() {
        Some(error_msg) => Err(LookupError::InvalidRequest(error_msg)),
        None => Ok(query.q),
    }
}

/// Handler for GET /groups
pub async fn groups_handler(State(state): State<AppState>) -> Json<GroupsResponse> {
    Json(GroupsResponse::from_table(state.lookup.groups()))
}

/// Handler for GET /groups/:acronym
///
/// Unknown groups answer 404.
pub async fn group_handler(
    State(state): State<AppState>,
    Path(acronym): Path<String>,
) -> Result<Json<SymbolsResponse>> {
    let symbols = state.lookup.symbols_in_group(&acronym).await?;
    Ok(Json(SymbolsResponse::new(symbols.to_vec())))
}

/// Handler for GET /groups/:acronym/search?q=
pub async fn group_search_handler(
    State(state): State<AppState>,
    Path(acronym): Path<String>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SymbolsResponse>> {
    let seq = search_term(query)?;
    let symbols = state.lookup.find_substring_in_group(&seq, &acronym).await?;
    Ok(Json(SymbolsResponse::new(symbols)))
}

/// Handler for GET /symbols/value/:value
///
/// First group containing the value wins.
pub async fn value_handler(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> Result<Json<Symbol>> {
    state
        .lookup
        .by_value(&value)
        .await?
        .map(Json)
        .ok_or(LookupError::NotFound(value))
}

/// Handler for GET /symbols/name/:name
pub async fn name_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<SymbolsResponse>> {
    let symbols = state.lookup.by_name(&name).await?;
    Ok(Json(SymbolsResponse::new(symbols)))
}

/// Handler for GET /symbols/search?q=
pub async fn search_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SymbolsResponse>> {
    let seq = search_term(query)?;
    let symbols = state.lookup.find_substring(&seq).await?;
    Ok(Json(SymbolsResponse::new(symbols)))
}

/// Handler for GET /blocks
pub async fn blocks_handler(State(state): State<AppState>) -> Json<BlocksResponse> {
    Json(BlocksResponse {
        blocks: state.lookup.blocks().to_vec(),
    })
}

/// Handler for GET /blocks/:block
///
/// Scans every group. An unknown block answers an empty list.
pub async fn block_handler(
    State(state): State<AppState>,
    Path(block): Path<String>,
) -> Result<Json<SymbolsResponse>> {
    let symbols = state.lookup.symbols_in_block(&block).await?;
    Ok(Json(SymbolsResponse::new(symbols)))
}

/// Handler for GET /emoji
pub async fn emoji_handler(State(state): State<AppState>) -> Result<Json<SymbolsResponse>> {
    let symbols = state.lookup.emoji_symbols().await?;
    Ok(Json(SymbolsResponse::new(symbols)))
}

/// Handler for GET /cache/settings
pub async fn get_settings_handler(State(state): State<AppState>) -> Json<SettingsResponse> {
    Json(SettingsResponse::current(
        state.lookup.cache_settings().await,
    ))
}

/// Handler for PUT /cache/settings
///
/// Replaces the settings and discards every cached group.
pub async fn put_settings_handler(
    State(state): State<AppState>,
    Json(settings): Json<CacheSettings>,
) -> Result<Json<SettingsResponse>> {
    state.lookup.set_cache_settings(settings).await?;
    Ok(Json(SettingsResponse::replaced(settings)))
}

/// Handler for GET /cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let settings = state.lookup.cache_settings().await;
    let stats = state.lookup.cache_stats().await;
    Json(StatsResponse::new(settings, &stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
