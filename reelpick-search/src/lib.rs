//! Reelpick Search - Movie metadata lookup

#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Queries an external movie catalog (TMDB or OMDb) for titles matching a free
//! text query, or serves fixed demonstration records when no API key is set.
//! Lookup failures never escape [`MovieCatalog::search`]; they become an empty
//! result with a visible notice.

pub mod errors;
pub mod filters;
pub mod posters;
pub mod providers;
pub mod service;
pub mod types;

// Re-export main types
pub use errors::CatalogError;
pub use filters::SearchFilters;
pub use posters::{ArchiveReport, PosterArchive, poster_filename};
pub use providers::{CatalogProvider, DemoProvider, OmdbProvider, TmdbProvider};
pub use service::MovieCatalog;
pub use types::{Notice, NoticeLevel, SearchOutcome};

/// Convenience type alias for Results with CatalogError.
pub type Result<T> = std::result::Result<T, CatalogError>;
