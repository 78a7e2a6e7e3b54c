//! Movie record returned by catalog lookups.

use serde::{Deserialize, Serialize};

/// Placeholder shown wherever an optional field is unknown.
pub const UNKNOWN: &str = "N/A";

/// Catalog that produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    /// Fixed demonstration data
    Demo,
    /// The Movie Database
    Tmdb,
    /// Open Movie Database
    Omdb,
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Demo => write!(f, "Demo"),
            Self::Tmdb => write!(f, "TMDB"),
            Self::Omdb => write!(f, "OMDb"),
        }
    }
}

/// One film's displayable attributes.
///
/// Only `title` is guaranteed. Every other field mirrors whatever the catalog
/// returned and may be missing; partial records are kept as they are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub original_title: Option<String>,
    pub year: Option<u16>,
    pub poster_url: Option<String>,
    pub summary: String,
    pub director: Option<String>,
    pub rating: Option<f32>,
    pub source: CatalogSource,
}

impl MovieRecord {
    /// Creates a record with only a title set.
    pub fn new(title: impl Into<String>, source: CatalogSource) -> Self {
        Self {
            title: title.into(),
            original_title: None,
            year: None,
            poster_url: None,
            summary: String::new(),
            director: None,
            rating: None,
            source,
        }
    }

    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_original_title(mut self, original_title: impl Into<String>) -> Self {
        self.original_title = Some(original_title.into());
        self
    }

    pub fn with_poster_url(mut self, poster_url: impl Into<String>) -> Self {
        self.poster_url = Some(poster_url.into());
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Year as display text, `N/A` when unknown.
    pub fn display_year(&self) -> String {
        self.year
            .map(|y| y.to_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// Director as display text, `N/A` when unknown.
    pub fn display_director(&self) -> &str {
        self.director.as_deref().unwrap_or(UNKNOWN)
    }

    /// Rating as `x.y/10`, `N/A` when unknown.
    pub fn display_rating(&self) -> String {
        self.rating
            .map(|r| format!("{r:.1}/10"))
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// Summary text, with a placeholder when the catalog sent none.
    pub fn display_summary(&self) -> &str {
        if self.summary.trim().is_empty() {
            "No summary available"
        } else {
            &self.summary
        }
    }
}

/// Parses the leading four-digit year out of catalog date strings.
///
/// Accepts `2010-07-15`, `2010`, `2019–2021` and rejects `N/A` or empty input.
pub fn parse_year(raw: &str) -> Option<u16> {
    let digits: String = raw.trim().chars().take(4).collect();
    if digits.len() != 4 {
        return None;
    }
    digits.parse().ok()
}

/// Normalizes a catalog string field: empty and `N/A` become `None`.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != UNKNOWN)
}
