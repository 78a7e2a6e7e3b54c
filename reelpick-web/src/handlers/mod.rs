//! Export downloads and JSON API handlers

pub mod api;
pub mod export;

pub use api::{api_search, api_status};
pub use export::{export_csv, export_posters, export_print};
