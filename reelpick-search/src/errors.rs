//! Error types for catalog lookups.

use thiserror::Error;

/// Errors that can occur while talking to a movie catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Network communication failed before a response arrived.
    #[error("Network error: {reason}")]
    NetworkError {
        /// The reason for the network error
        reason: String,
    },

    /// The catalog answered with a non-success HTTP status.
    #[error("HTTP {status} from {url}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Request URL with the query string removed
        url: String,
    },

    /// Response body could not be parsed.
    #[error("Parse error: {reason}")]
    ParseError {
        /// The reason for the parse error
        reason: String,
    },

    /// The catalog reported an error of its own, or is misconfigured.
    #[error("Provider error: {reason}")]
    ProviderError {
        /// The reason for the provider error
        reason: String,
    },

    /// A poster image could not be downloaded.
    #[error("Poster fetch failed for '{title}': {reason}")]
    PosterFetchFailed {
        /// Title of the film whose poster failed
        title: String,
        /// The reason for the failure
        reason: String,
    },

    /// Writing the poster archive failed.
    #[error("Archive error: {reason}")]
    ArchiveFailed {
        /// The reason for the archive failure
        reason: String,
    },
}

impl CatalogError {
    /// Whether retrying the same request later could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::NetworkError { .. } => true,
            Self::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Short message suitable for the notice banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::NetworkError { .. } => {
                "The movie catalog could not be reached. Check your connection and try again."
                    .to_string()
            }
            Self::HttpStatus { status: 401, .. } => {
                "The movie catalog rejected the API key.".to_string()
            }
            Self::HttpStatus { status, .. } => {
                format!("The movie catalog returned an error (HTTP {status}).")
            }
            Self::ParseError { .. } => {
                "The movie catalog sent a response that could not be read.".to_string()
            }
            Self::ProviderError { reason } => format!("Search failed: {reason}"),
            Self::PosterFetchFailed { title, .. } => format!("Poster unavailable for {title}"),
            Self::ArchiveFailed { .. } => "The poster archive could not be built.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        let network = CatalogError::NetworkError {
            reason: "timeout".to_string(),
        };
        let throttled = CatalogError::HttpStatus {
            status: 429,
            url: "https://api.example/search".to_string(),
        };
        let unauthorized = CatalogError::HttpStatus {
            status: 401,
            url: "https://api.example/search".to_string(),
        };

        assert!(network.is_transient());
        assert!(throttled.is_transient());
        assert!(!unauthorized.is_transient());
        assert!(unauthorized.user_message().contains("API key"));
    }
}
