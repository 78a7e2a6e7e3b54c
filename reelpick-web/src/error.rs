//! Error responses for web handlers.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use reelpick_core::ReelpickError;
use reelpick_search::CatalogError;
use thiserror::Error;

use crate::components::activity;

/// Errors a handler can answer with.
#[derive(Debug, Error)]
pub enum WebError {
    /// Selection or export failed in the core crate.
    #[error(transparent)]
    Core(#[from] ReelpickError),

    /// Poster download or archiving failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Request parameters were unusable.
    #[error("Bad request: {reason}")]
    BadRequest {
        /// What was wrong with the request
        reason: String,
    },
}

impl WebError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Core(ReelpickError::StaleResults { .. }) => StatusCode::CONFLICT,
            Self::Core(e) if e.is_user_error() => StatusCode::BAD_REQUEST,
            Self::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Catalog(e) if e.is_transient() => StatusCode::BAD_GATEWAY,
            Self::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
        }
    }

    fn user_message(&self) -> String {
        match self {
            Self::Core(e) => e.user_message(),
            Self::Catalog(e) => e.user_message(),
            Self::BadRequest { reason } => reason.clone(),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let toast = activity::notification_toast(&self.user_message(), "error", true);
        (status, Html(toast)).into_response()
    }
}
