//! Reelpick Core - Movie records, result selection and export
//!
//! This crate holds everything that does not talk to the network: the movie
//! record model, configuration, the per-session result picker, the CSV and
//! print exporters, and tracing setup.

pub mod config;
pub mod export;
pub mod mode;
pub mod movie;
pub mod selection;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use config::{CatalogConfig, ExportConfig, ProviderKind, ReelpickConfig, ServerConfig};
pub use export::{CsvRow, ExportKind};
pub use mode::CatalogMode;
pub use movie::{CatalogSource, MovieRecord};
pub use selection::ResultPicker;

/// Core errors that can bubble up from any Reelpick subsystem.
#[derive(Debug, thiserror::Error)]
pub enum ReelpickError {
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("Selection index {index} out of range for {len} results")]
    Selection { index: usize, len: usize },

    #[error("Results from search {generation} were replaced by search {current}")]
    StaleResults { generation: u64, current: u64 },

    #[error("Export error: {reason}")]
    Export { reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReelpickError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            ReelpickError::Configuration { reason } => format!("Configuration problem: {reason}"),
            ReelpickError::Selection { .. } => {
                "That result is no longer on screen, run the search again".to_string()
            }
            ReelpickError::StaleResults { .. } => {
                "These results were replaced by a newer search, reload the page".to_string()
            }
            ReelpickError::Export { .. } | ReelpickError::Csv(_) => {
                "Export could not be produced".to_string()
            }
            ReelpickError::Io(_) => "File system error occurred".to_string(),
        }
    }

    /// Checks if this error is due to user input validation.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ReelpickError::Configuration { .. }
                | ReelpickError::Selection { .. }
                | ReelpickError::StaleResults { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ReelpickError>;
