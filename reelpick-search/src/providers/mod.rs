//! Provider implementations for movie catalog lookups.

use async_trait::async_trait;
use reelpick_core::{CatalogConfig, CatalogSource, MovieRecord};
use serde::de::DeserializeOwned;

use crate::errors::CatalogError;

pub mod demo;
pub mod mock;
pub mod omdb;
pub mod tmdb;

pub use demo::DemoProvider;
#[cfg(test)]
pub use mock::{MockBehavior, MockProvider};
pub use omdb::OmdbProvider;
pub use tmdb::TmdbProvider;

/// Trait for movie catalog providers.
///
/// Implementations return records in the catalog's own relevance order.
/// Callers guarantee `query` is non-empty and trimmed.
#[async_trait]
pub trait CatalogProvider: Send + Sync + std::fmt::Debug {
    /// Catalog this provider reads from.
    fn source(&self) -> CatalogSource;

    /// Search movies by free-text title.
    ///
    /// # Errors
    /// - `CatalogError::NetworkError` - Network connectivity issues
    /// - `CatalogError::HttpStatus` - Catalog answered with a non-success status
    /// - `CatalogError::ParseError` - Malformed response body
    /// - `CatalogError::ProviderError` - Catalog-specific error
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieRecord>, CatalogError>;
}

/// Builds the HTTP client shared by live providers.
///
/// # Errors
/// - `CatalogError::ProviderError` - TLS backend or client configuration failed
pub fn http_client(config: &CatalogConfig) -> Result<reqwest::Client, CatalogError> {
    reqwest::Client::builder()
        .timeout(config.http_timeout)
        .user_agent(config.user_agent)
        .build()
        .map_err(|e| CatalogError::ProviderError {
            reason: format!("HTTP client setup failed: {e}"),
        })
}

/// Sends `request` and decodes a JSON body.
///
/// Error URLs have their query string stripped so API keys never reach logs.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, CatalogError> {
    let response = request
        .send()
        .await
        .map_err(|e| CatalogError::NetworkError {
            reason: format!("HTTP request failed: {}", e.without_url()),
        })?;

    let status = response.status();
    if !status.is_success() {
        let mut url = response.url().clone();
        url.set_query(None);
        return Err(CatalogError::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| CatalogError::NetworkError {
            reason: format!("Reading response failed: {}", e.without_url()),
        })?;

    serde_json::from_str(&body).map_err(|e| CatalogError::ParseError {
        reason: format!("JSON parsing failed: {e}"),
    })
}
