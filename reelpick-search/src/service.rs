//! Movie catalog service
//!
//! Picks a provider from configuration and turns lookup failures into notices.

use std::sync::Arc;

use reelpick_core::{CatalogConfig, CatalogMode, MovieRecord, ProviderKind};

use crate::errors::CatalogError;
use crate::filters::SearchFilters;
use crate::providers::{CatalogProvider, DemoProvider, OmdbProvider, TmdbProvider};
use crate::types::{Notice, SearchOutcome};

/// Movie lookup service shared by the web UI and the CLI.
#[derive(Debug, Clone)]
pub struct MovieCatalog {
    provider: Arc<dyn CatalogProvider>,
    mode: CatalogMode,
}

impl MovieCatalog {
    /// Creates the catalog described by `config`.
    ///
    /// Without an API key for the configured provider this falls back to
    /// demonstration data.
    ///
    /// # Errors
    /// - `CatalogError::ProviderError` - HTTP client could not be built
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        if config.mode().is_demo() {
            tracing::info!(provider = %config.provider, "No API key configured, using demonstration data");
            return Ok(Self::new_demo());
        }

        let provider: Arc<dyn CatalogProvider> = match config.provider {
            ProviderKind::Tmdb => Arc::new(TmdbProvider::from_config(config)?),
            ProviderKind::Omdb => Arc::new(OmdbProvider::from_config(config)?),
        };
        tracing::info!(provider = %config.provider, "Using live movie catalog");

        Ok(Self {
            provider,
            mode: CatalogMode::Live,
        })
    }

    /// Creates a catalog serving the fixed demonstration records.
    pub fn new_demo() -> Self {
        Self {
            provider: Arc::new(DemoProvider::new()),
            mode: CatalogMode::Demo,
        }
    }

    /// Creates a catalog backed by an arbitrary provider.
    pub fn with_provider(provider: Arc<dyn CatalogProvider>, mode: CatalogMode) -> Self {
        Self { provider, mode }
    }

    pub fn mode(&self) -> CatalogMode {
        self.mode
    }

    /// Display name of the catalog behind this service.
    pub fn provider_name(&self) -> String {
        self.provider.source().to_string()
    }

    /// Searches without degrading errors.
    ///
    /// A blank query returns no records and makes no request.
    ///
    /// # Errors
    /// - `CatalogError::NetworkError` - Catalog unreachable
    /// - `CatalogError::HttpStatus` - Catalog answered with a non-success status
    /// - `CatalogError::ParseError` - Malformed response body
    /// - `CatalogError::ProviderError` - Catalog-specific error
    pub async fn try_search(&self, query: &str) -> Result<Vec<MovieRecord>, CatalogError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        self.provider.search_movies(query).await
    }

    /// Searches and reports failures as an empty result with an error notice.
    pub async fn search(&self, query: &str) -> SearchOutcome {
        self.search_with_filters(query, &SearchFilters::default())
            .await
    }

    /// Like [`Self::search`], then narrows the records with `filters`.
    pub async fn search_with_filters(&self, query: &str, filters: &SearchFilters) -> SearchOutcome {
        let query = query.trim().to_string();
        if query.is_empty() {
            return SearchOutcome {
                query,
                mode: self.mode,
                records: Vec::new(),
                notice: None,
            };
        }

        let (records, notice) = match self.try_search(&query).await {
            Ok(records) => {
                let records = filters.apply(records);
                let notice = if records.is_empty() {
                    Some(Notice::warning(format!("No films found for \"{query}\".")))
                } else if self.mode.is_demo() {
                    Some(Notice::info(
                        "Demonstration mode: set TMDB_API_KEY or OMDB_API_KEY for live results.",
                    ))
                } else {
                    None
                };
                (records, notice)
            }
            Err(e) => {
                tracing::warn!(
                    query = %query,
                    provider = %self.provider.source(),
                    transient = e.is_transient(),
                    error = %e,
                    "Movie lookup failed"
                );
                (Vec::new(), Some(Notice::error(e.user_message())))
            }
        };

        tracing::info!(query = %query, count = records.len(), "Search complete");
        SearchOutcome {
            query,
            mode: self.mode,
            records,
            notice,
        }
    }
}

impl Default for MovieCatalog {
    fn default() -> Self {
        Self::new_demo()
    }
}
