//! Catalog mode: live lookups or demonstration data.

use serde::{Deserialize, Serialize};

/// Whether lookups hit a real catalog.
///
/// Derived from configuration: a missing API key always means `Demo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogMode {
    /// Live mode - queries the configured metadata API
    Live,
    /// Demonstration mode - fixed sample records, no network calls
    Demo,
}

impl CatalogMode {
    /// Check if running in demonstration mode.
    pub fn is_demo(self) -> bool {
        matches!(self, Self::Demo)
    }

    /// Check if running against a real catalog.
    pub fn is_live(self) -> bool {
        matches!(self, Self::Live)
    }
}

impl Default for CatalogMode {
    fn default() -> Self {
        Self::Demo
    }
}

impl std::fmt::Display for CatalogMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Live => write!(f, "LIVE"),
            Self::Demo => write!(f, "DEMO"),
        }
    }
}
