//! Demo provider used when no API key is configured.

use async_trait::async_trait;
use reelpick_core::{CatalogSource, MovieRecord};

use super::CatalogProvider;
use crate::errors::CatalogError;

/// Demo provider for running without credentials.
///
/// Always answers with the same three records, whatever the query says, so
/// the full search, pick and export flow can be tried offline.
#[derive(Debug, Default)]
pub struct DemoProvider;

impl DemoProvider {
    pub fn new() -> Self {
        Self
    }

    /// The fixed demonstration sequence.
    pub fn records() -> Vec<MovieRecord> {
        vec![
            MovieRecord::new("Inception", CatalogSource::Demo)
                .with_original_title("Inception")
                .with_year(2010)
                .with_director("Christopher Nolan")
                .with_rating(8.8)
                .with_summary(
                    "Dom Cobb is a skilled thief who steals valuable secrets from deep \
                     within the subconscious during the dream state, when the mind is \
                     at its most vulnerable.",
                ),
            MovieRecord::new("The Godfather", CatalogSource::Demo)
                .with_original_title("The Godfather")
                .with_year(1972)
                .with_director("Francis Ford Coppola")
                .with_rating(9.2)
                .with_summary(
                    "New York, 1945. Don Vito Corleone, head of one of the five mafia \
                     families, refuses to back Sollozzo's narcotics business, setting \
                     off a war between the families.",
                ),
            MovieRecord::new("Schindler's List", CatalogSource::Demo)
                .with_original_title("Schindler's List")
                .with_year(1993)
                .with_director("Steven Spielberg")
                .with_rating(9.0)
                .with_summary(
                    "Oskar Schindler, an industrialist who arrived in Krakow with the \
                     German army in 1939, protects Jewish workers by employing them in \
                     his enamelware factory throughout the war.",
                ),
        ]
    }
}

#[async_trait]
impl CatalogProvider for DemoProvider {
    fn source(&self) -> CatalogSource {
        CatalogSource::Demo
    }

    async fn search_movies(&self, query: &str) -> Result<Vec<MovieRecord>, CatalogError> {
        tracing::debug!(query, "Serving demonstration records");
        Ok(Self::records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_results_ignore_query() {
        let provider = DemoProvider::new();

        let matrix = provider.search_movies("Matrix").await.unwrap();
        let godfather = provider.search_movies("godfather").await.unwrap();
        let gibberish = provider.search_movies("zzqx 42").await.unwrap();

        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix, godfather);
        assert_eq!(matrix, gibberish);
    }

    #[tokio::test]
    async fn test_demo_records_are_complete() {
        let records = DemoProvider::new().search_movies("Matrix").await.unwrap();

        assert_eq!(records[0].title, "Inception");
        for record in &records {
            assert!(!record.title.is_empty());
            assert!(record.year.is_some());
            assert!(record.director.is_some());
            assert_eq!(record.source, CatalogSource::Demo);
        }
    }
}
