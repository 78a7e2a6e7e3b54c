//! TMDB (The Movie Database) provider.
//!
//! One `search/movie` call per query, then one `credits` call per hit to find
//! the director. Credits failures only cost the director field.

use async_trait::async_trait;
use reelpick_core::movie::{non_empty, parse_year};
use reelpick_core::{CatalogConfig, CatalogSource, MovieRecord};
use serde::Deserialize;

use super::{CatalogProvider, fetch_json, http_client};
use crate::errors::CatalogError;

/// Response from the `search/movie` endpoint.
#[derive(Debug, Deserialize)]
struct TmdbSearchResponse {
    #[serde(default)]
    results: Vec<TmdbMovie>,
}

/// Single hit from a TMDB search.
#[derive(Debug, Deserialize)]
struct TmdbMovie {
    id: u64,
    title: Option<String>,
    original_title: Option<String>,
    release_date: Option<String>,
    overview: Option<String>,
    poster_path: Option<String>,
    vote_average: Option<f32>,
}

/// Response from the `movie/{id}/credits` endpoint.
#[derive(Debug, Deserialize)]
struct TmdbCredits {
    #[serde(default)]
    crew: Vec<TmdbCrewMember>,
}

#[derive(Debug, Deserialize)]
struct TmdbCrewMember {
    name: Option<String>,
    job: Option<String>,
}

/// TMDB search provider.
#[derive(Debug)]
pub struct TmdbProvider {
    client: reqwest::Client,
    base_url: String,
    image_base_url: String,
    api_key: String,
    language: String,
    max_results: usize,
}

impl TmdbProvider {
    /// Create provider from catalog configuration.
    ///
    /// # Errors
    /// - `CatalogError::ProviderError` - No TMDB key configured or HTTP client setup failed
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let api_key = config
            .tmdb_api_key
            .clone()
            .ok_or_else(|| CatalogError::ProviderError {
                reason: "TMDB_API_KEY is not set".to_string(),
            })?;

        Ok(Self {
            client: http_client(config)?,
            base_url: config.tmdb_base_url.trim_end_matches('/').to_string(),
            image_base_url: config.tmdb_image_base_url.trim_end_matches('/').to_string(),
            api_key,
            language: config.language.clone(),
            max_results: config.max_results,
        })
    }

    /// Director names from the credits endpoint, joined with ", ".
    async fn fetch_director(&self, movie_id: u64) -> Option<String> {
        let request = self
            .client
            .get(format!("{}/movie/{movie_id}/credits", self.base_url))
            .query(&[("api_key", self.api_key.as_str()), ("language", self.language.as_str())]);

        match fetch_json::<TmdbCredits>(request).await {
            Ok(credits) => {
                let directors: Vec<String> = credits
                    .crew
                    .into_iter()
                    .filter(|member| member.job.as_deref() == Some("Director"))
                    .filter_map(|member| non_empty(member.name))
                    .collect();
                (!directors.is_empty()).then(|| directors.join(", "))
            }
            Err(e) => {
                tracing::debug!(movie_id, error = %e, "TMDB credits lookup failed");
                None
            }
        }
    }

    fn to_record(&self, movie: TmdbMovie, director: Option<String>) -> Option<MovieRecord> {
        let title = non_empty(movie.title)?;

        Some(MovieRecord {
            title,
            original_title: non_empty(movie.original_title),
            year: movie.release_date.as_deref().and_then(parse_year),
            poster_url: non_empty(movie.poster_path)
                .map(|path| format!("{}{path}", self.image_base_url)),
            summary: non_empty(movie.overview).unwrap_or_default(),
            director,
            rating: movie.vote_average.filter(|r| *r > 0.0),
            source: CatalogSource::Tmdb,
        })
    }
}

#[async_trait]
impl CatalogProvider for TmdbProvider {
    fn source(&self) -> CatalogSource {
        CatalogSource::Tmdb
    }

    async fn search_movies(&self, query: &str) -> Result<Vec<MovieRecord>, CatalogError> {
        let request = self
            .client
            .get(format!("{}/search/movie", self.base_url))
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("query", query),
                ("language", self.language.as_str()),
                ("include_adult", "false"),
            ]);

        let response: TmdbSearchResponse = fetch_json(request).await?;
        let hits: Vec<TmdbMovie> = response
            .results
            .into_iter()
            .take(self.max_results)
            .collect();

        let directors =
            futures::future::join_all(hits.iter().map(|hit| self.fetch_director(hit.id))).await;

        let records: Vec<MovieRecord> = hits
            .into_iter()
            .zip(directors)
            .filter_map(|(hit, director)| {
                let id = hit.id;
                let record = self.to_record(hit, director);
                if record.is_none() {
                    tracing::debug!(movie_id = id, "Skipping TMDB hit without a title");
                }
                record
            })
            .collect();

        tracing::debug!(query, count = records.len(), "TMDB search complete");
        Ok(records)
    }
}
