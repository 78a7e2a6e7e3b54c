//! OMDb (Open Movie Database) provider.
//!
//! Search hits carry only title, year and poster, so each hit gets a detail
//! lookup for plot, director and rating. When that lookup fails the basic hit
//! is kept.

use async_trait::async_trait;
use reelpick_core::movie::{non_empty, parse_year};
use reelpick_core::{CatalogConfig, CatalogSource, MovieRecord};
use serde::Deserialize;

use super::{CatalogProvider, fetch_json, http_client};
use crate::errors::CatalogError;

/// OMDb answers with these errors for searches that simply matched nothing.
const NO_MATCH_ERRORS: [&str; 2] = ["Movie not found!", "Too many results."];

/// Response from the `s=` search endpoint.
#[derive(Debug, Deserialize)]
struct OmdbSearchResponse {
    #[serde(rename = "Search", default)]
    search: Vec<OmdbHit>,
    #[serde(rename = "Response")]
    response: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

/// Single hit from an OMDb search.
#[derive(Debug, Clone, Deserialize)]
struct OmdbHit {
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Poster")]
    poster: Option<String>,
}

/// Response from the `i=` detail endpoint.
#[derive(Debug, Deserialize)]
struct OmdbDetail {
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Plot")]
    plot: Option<String>,
    #[serde(rename = "Director")]
    director: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "Response")]
    response: Option<String>,
}

/// OMDb search provider.
#[derive(Debug)]
pub struct OmdbProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    max_results: usize,
}

impl OmdbProvider {
    /// Create provider from catalog configuration.
    ///
    /// # Errors
    /// - `CatalogError::ProviderError` - No OMDb key configured or HTTP client setup failed
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let api_key = config
            .omdb_api_key
            .clone()
            .ok_or_else(|| CatalogError::ProviderError {
                reason: "OMDB_API_KEY is not set".to_string(),
            })?;

        Ok(Self {
            client: http_client(config)?,
            base_url: config.omdb_base_url.clone(),
            api_key,
            max_results: config.max_results,
        })
    }

    async fn fetch_detail(&self, imdb_id: &str) -> Option<OmdbDetail> {
        let request = self.client.get(&self.base_url).query(&[
            ("apikey", self.api_key.as_str()),
            ("i", imdb_id),
            ("plot", "full"),
        ]);

        match fetch_json::<OmdbDetail>(request).await {
            Ok(detail) if detail.response.as_deref() == Some("True") => Some(detail),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!(imdb_id, error = %e, "OMDb detail lookup failed");
                None
            }
        }
    }

    fn to_record(hit: OmdbHit, detail: Option<OmdbDetail>) -> Option<MovieRecord> {
        let Some(detail) = detail else {
            let title = non_empty(hit.title)?;
            return Some(MovieRecord {
                title,
                original_title: None,
                year: hit.year.as_deref().and_then(parse_year),
                poster_url: non_empty(hit.poster),
                summary: String::new(),
                director: None,
                rating: None,
                source: CatalogSource::Omdb,
            });
        };

        let title = non_empty(detail.title).or_else(|| non_empty(hit.title))?;
        let year = detail
            .year
            .as_deref()
            .and_then(parse_year)
            .or_else(|| hit.year.as_deref().and_then(parse_year));

        Some(MovieRecord {
            title,
            original_title: None,
            year,
            poster_url: non_empty(detail.poster).or_else(|| non_empty(hit.poster)),
            summary: non_empty(detail.plot).unwrap_or_default(),
            director: non_empty(detail.director),
            rating: non_empty(detail.imdb_rating).and_then(|r| r.parse().ok()),
            source: CatalogSource::Omdb,
        })
    }
}

#[async_trait]
impl CatalogProvider for OmdbProvider {
    fn source(&self) -> CatalogSource {
        CatalogSource::Omdb
    }

    async fn search_movies(&self, query: &str) -> Result<Vec<MovieRecord>, CatalogError> {
        let request = self.client.get(&self.base_url).query(&[
            ("apikey", self.api_key.as_str()),
            ("s", query),
            ("type", "movie"),
        ]);

        let response: OmdbSearchResponse = fetch_json(request).await?;
        if response.response.as_deref() != Some("True") {
            let error = response.error.unwrap_or_else(|| "Unknown error".to_string());
            if NO_MATCH_ERRORS.contains(&error.as_str()) {
                tracing::debug!(query, reason = %error, "OMDb found nothing");
                return Ok(Vec::new());
            }
            return Err(CatalogError::ProviderError { reason: error });
        }

        let hits: Vec<OmdbHit> = response.search.into_iter().take(self.max_results).collect();
        let details =
            futures::future::join_all(hits.iter().map(|hit| self.fetch_detail(&hit.imdb_id)))
                .await;

        let records: Vec<MovieRecord> = hits
            .into_iter()
            .zip(details)
            .filter_map(|(hit, detail)| Self::to_record(hit, detail))
            .collect();

        tracing::debug!(query, count = records.len(), "OMDb search complete");
        Ok(records)
    }
}
