//! Centralized configuration for Reelpick.
//!
//! All tunable parameters and settings are defined here to avoid
//! hard-coded values scattered throughout the codebase.

use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::mode::CatalogMode;
use crate::{ReelpickError, Result};

/// Central configuration for all Reelpick components.
///
/// Supports environment variable overrides for runtime customization.
#[derive(Debug, Clone, Default)]
pub struct ReelpickConfig {
    pub catalog: CatalogConfig,
    pub server: ServerConfig,
    pub export: ExportConfig,
}

/// Which metadata API live lookups go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    #[default]
    Tmdb,
    Omdb,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tmdb => write!(f, "tmdb"),
            Self::Omdb => write!(f, "omdb"),
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tmdb" => Ok(Self::Tmdb),
            "omdb" => Ok(Self::Omdb),
            _ => Err(format!(
                "Invalid provider: '{s}'. Valid options are: tmdb, omdb"
            )),
        }
    }
}

/// Metadata catalog settings.
///
/// An absent key for the selected provider switches the whole catalog into
/// demonstration mode.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub provider: ProviderKind,
    pub tmdb_api_key: Option<String>,
    pub omdb_api_key: Option<String>,
    pub tmdb_base_url: String,
    pub tmdb_image_base_url: String,
    pub omdb_base_url: String,
    /// Language tag sent to TMDB (e.g. `fr-FR`)
    pub language: String,
    /// Results kept from a single search response
    pub max_results: usize,
    pub http_timeout: Duration,
    pub user_agent: &'static str,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Tmdb,
            tmdb_api_key: None,
            omdb_api_key: None,
            tmdb_base_url: "https://api.themoviedb.org/3".to_string(),
            tmdb_image_base_url: "https://image.tmdb.org/t/p/w500".to_string(),
            omdb_base_url: "https://www.omdbapi.com/".to_string(),
            language: "fr-FR".to_string(),
            max_results: 20,
            http_timeout: Duration::from_secs(10),
            user_agent: "reelpick/0.1.0",
        }
    }
}

impl CatalogConfig {
    /// API key for the selected provider, if any.
    pub fn active_api_key(&self) -> Option<&str> {
        match self.provider {
            ProviderKind::Tmdb => self.tmdb_api_key.as_deref(),
            ProviderKind::Omdb => self.omdb_api_key.as_deref(),
        }
    }

    /// Live when the selected provider has a key, demonstration otherwise.
    pub fn mode(&self) -> CatalogMode {
        if self.active_api_key().is_some() {
            CatalogMode::Live
        } else {
            CatalogMode::Demo
        }
    }
}

/// Web server binding and session limits.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Idle time after which a browser session's picker is forgotten
    pub session_ttl: Duration,
    /// Upper bound on pickers held in memory
    pub max_sessions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            session_ttl: Duration::from_secs(30 * 60),
            max_sessions: 10_000,
        }
    }
}

/// Export and logging output locations.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Prefix of generated export file names
    pub file_prefix: &'static str,
    pub logs_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_prefix: "films",
            logs_dir: PathBuf::from("logs"),
        }
    }
}

impl ReelpickConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// # Errors
    /// - `ReelpickError::Configuration` - A variable is set to an unparseable value
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset so `TMDB_API_KEY=` keeps demo mode.
    ///
    /// # Errors
    /// - `ReelpickError::Configuration` - A variable is set to an unparseable value
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        config.catalog.tmdb_api_key = get("TMDB_API_KEY");
        config.catalog.omdb_api_key = get("OMDB_API_KEY");

        if let Some(provider) = get("REELPICK_PROVIDER") {
            config.catalog.provider = provider
                .parse()
                .map_err(|reason| ReelpickError::Configuration { reason })?;
        }

        if let Some(language) = get("REELPICK_LANGUAGE") {
            config.catalog.language = language;
        }

        if let Some(timeout) = get("REELPICK_HTTP_TIMEOUT") {
            let seconds = parse_value::<u64>("REELPICK_HTTP_TIMEOUT", &timeout)?;
            config.catalog.http_timeout = Duration::from_secs(seconds);
        }

        if let Some(max) = get("REELPICK_MAX_RESULTS") {
            config.catalog.max_results = parse_value("REELPICK_MAX_RESULTS", &max)?;
        }

        if let Some(host) = get("REELPICK_HOST") {
            config.server.host = parse_value("REELPICK_HOST", &host)?;
        }

        if let Some(port) = get("REELPICK_PORT") {
            config.server.port = parse_value("REELPICK_PORT", &port)?;
        }

        if let Some(ttl) = get("REELPICK_SESSION_TTL") {
            let seconds = parse_value::<u64>("REELPICK_SESSION_TTL", &ttl)?;
            config.server.session_ttl = Duration::from_secs(seconds);
        }

        if let Some(max) = get("REELPICK_MAX_SESSIONS") {
            config.server.max_sessions = parse_value("REELPICK_MAX_SESSIONS", &max)?;
        }

        Ok(config)
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| ReelpickError::Configuration {
        reason: format!("{key} has invalid value '{value}'"),
    })
}
