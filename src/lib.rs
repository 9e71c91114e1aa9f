//! Propcrawl: a paginated listing-search crawler
//!
//! This crate crawls a paginated property-listing search endpoint, extracts
//! structured records from each result page, and persists the aggregated
//! result as a single JSON snapshot artifact per run.

pub mod agents;
pub mod config;
pub mod crawler;
pub mod listing;
pub mod store;

use thiserror::Error;

/// Main error type for crawl operations
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Store error: {0}")]
    Store(#[from] store::StoreError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CrawlError {
    /// Whether another attempt at the same request may succeed.
    ///
    /// Network faults, timeouts, and every status >= 400 are retryable.
    /// Client errors are included on purpose: anti-automation defenses
    /// often return transient 403/429 responses that are indistinguishable
    /// from permanent 404s at this layer.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CrawlError::Http { .. } | CrawlError::Timeout { .. } | CrawlError::Status { .. }
        )
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for crawl operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{CrawlConfig, ParamValue};
pub use listing::Listing;
pub use store::{Artifact, ArtifactMetadata, JsonFileStore, Store};
