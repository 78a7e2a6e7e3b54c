//! JSON API handlers

use axum::extract::{Query, State};
use axum::response::Json;
use reelpick_search::{SearchFilters, SearchOutcome};
use serde::Deserialize;
use serde_json::json;

use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct ApiSearchQuery {
    #[serde(default)]
    pub query: String,
    pub year: Option<u16>,
    pub min_rating: Option<f32>,
}

/// Stateless search: nothing is stored in the caller's session.
pub async fn api_search(
    State(state): State<AppState>,
    Query(params): Query<ApiSearchQuery>,
) -> Json<SearchOutcome> {
    let filters = SearchFilters {
        year: params.year,
        min_rating: params.min_rating,
    };

    Json(
        state
            .catalog
            .search_with_filters(&params.query, &filters)
            .await,
    )
}

pub async fn api_status(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "mode": state.catalog.mode(),
        "provider": state.catalog.provider_name(),
        "sessions": state.sessions.session_count().await,
    }))
}
