//! Reelpick Web - HTMX search UI and JSON API

#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Server-rendered search page with checkbox selection, CSV and print exports,
//! and a small JSON API. Each browser session keeps its own result picker.

pub mod components;
pub mod error;
pub mod handlers;
pub mod htmx;
pub mod pages;
pub mod server;
pub mod session;

// Re-export main types
pub use error::WebError;
pub use server::{AppState, create_router, run_server};
pub use session::{SESSION_COOKIE_NAME, SessionStore};
