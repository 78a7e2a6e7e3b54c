//! Mock provider implementation for testing.

#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use reelpick_core::{CatalogSource, MovieRecord};

#[cfg(test)]
use super::CatalogProvider;
#[cfg(test)]
use crate::errors::CatalogError;

/// Canned behaviour for [`MockProvider`].
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub enum MockBehavior {
    /// Echo the query back as a single complete record
    Echo,
    /// Return no records
    Empty,
    /// Fail as if the network were down
    NetworkDown,
    /// Fail as if the body were not JSON
    Malformed,
}

/// Mock provider for testing.
#[cfg(test)]
#[derive(Debug)]
pub struct MockProvider {
    behavior: MockBehavior,
    calls: AtomicUsize,
}

#[cfg(test)]
impl MockProvider {
    /// Creates a new mock provider for testing.
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of searches that reached this provider.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
#[async_trait]
impl CatalogProvider for MockProvider {
    fn source(&self) -> CatalogSource {
        CatalogSource::Tmdb
    }

    async fn search_movies(&self, query: &str) -> Result<Vec<MovieRecord>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            MockBehavior::Echo => Ok(vec![
                MovieRecord::new(query, CatalogSource::Tmdb)
                    .with_year(2024)
                    .with_director("Mock Director")
                    .with_rating(8.5)
                    .with_summary("Mock plot description"),
                MovieRecord::new(format!("{query} II"), CatalogSource::Tmdb),
            ]),
            MockBehavior::Empty => Ok(Vec::new()),
            MockBehavior::NetworkDown => Err(CatalogError::NetworkError {
                reason: "connection refused".to_string(),
            }),
            MockBehavior::Malformed => Err(CatalogError::ParseError {
                reason: "expected value at line 1 column 1".to_string(),
            }),
        }
    }
}
