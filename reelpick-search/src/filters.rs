//! Optional narrowing of search results by year and rating.

use reelpick_core::MovieRecord;
use serde::{Deserialize, Serialize};

/// Post-search filters.
///
/// A record whose field is unknown is never excluded by the filter on that
/// field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Keep only films released this year
    pub year: Option<u16>,
    /// Keep only films rated at least this much (0-10)
    pub min_rating: Option<f32>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.min_rating.is_none()
    }

    pub fn matches(&self, record: &MovieRecord) -> bool {
        let year_ok = match (self.year, record.year) {
            (Some(wanted), Some(actual)) => wanted == actual,
            _ => true,
        };
        let rating_ok = match (self.min_rating, record.rating) {
            (Some(min), Some(actual)) => actual >= min,
            _ => true,
        };
        year_ok && rating_ok
    }

    /// Drops non-matching records, keeping the original order.
    pub fn apply(&self, records: Vec<MovieRecord>) -> Vec<MovieRecord> {
        if self.is_empty() {
            return records;
        }
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}
