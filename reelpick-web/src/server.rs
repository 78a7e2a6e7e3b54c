//! HTMX + Tailwind web server for Reelpick
//!
//! Serves the search page, HTMX fragments, exports and the JSON API from a
//! single router.

use std::net::SocketAddr;

use axum::Router;
use axum::routing::{get, post};
use reelpick_core::ReelpickConfig;
use reelpick_search::{CatalogError, MovieCatalog, PosterArchive};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{api_search, api_status, export_csv, export_posters, export_print};
use crate::htmx::{htmx_search, pick_all, pick_none, toggle_pick};
use crate::pages::{search_page, search_results_page};
use crate::session::SessionStore;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: MovieCatalog,
    pub posters: PosterArchive,
    pub sessions: SessionStore,
    pub file_prefix: &'static str,
}

impl AppState {
    /// Builds state from configuration.
    ///
    /// # Errors
    /// - `CatalogError::ProviderError` - HTTP client could not be built
    pub fn from_config(config: &ReelpickConfig) -> Result<Self, CatalogError> {
        Ok(Self {
            catalog: MovieCatalog::from_config(&config.catalog)?,
            posters: PosterArchive::new(&config.catalog)?,
            sessions: SessionStore::with_limits(
                config.server.session_ttl,
                config.server.max_sessions,
            ),
            file_prefix: config.export.file_prefix,
        })
    }
}

/// Creates the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(search_page))
        .route("/search", get(search_results_page))
        // HTMX partial update endpoints
        .route("/htmx/search", get(htmx_search))
        .route("/htmx/pick/{generation}/all", post(pick_all))
        .route("/htmx/pick/{generation}/none", post(pick_none))
        .route("/htmx/pick/{generation}/{index}", post(toggle_pick))
        // Exports
        .route("/export/csv", get(export_csv))
        .route("/export/print", get(export_print))
        .route("/export/posters.zip", get(export_posters))
        // JSON API endpoints
        .route("/api/search", get(api_search))
        .route("/api/status", get(api_status))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds the configured address and serves until the process stops.
///
/// # Errors
/// - Catalog setup failed
/// - The address could not be bound
pub async fn run_server(config: ReelpickConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::from_config(&config)?;
    let mode = state.catalog.mode();
    let provider = state.catalog.provider_name();
    let app = create_router(state);

    let addr = SocketAddr::new(config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, %mode, %provider, "Reelpick server listening");
    println!("Reelpick running on http://{addr} ({mode})");

    axum::serve(listener, app).await?;
    Ok(())
}
