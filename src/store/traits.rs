//! Store trait and snapshot artifact types

use crate::config::CrawlConfig;
use crate::listing::Listing;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while persisting an artifact
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode artifact: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The persisted snapshot document for one crawl run
///
/// `metadata.count` always equals `data.len()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    pub metadata: ArtifactMetadata,
    pub data: Vec<Listing>,
}

/// Run metadata embedded alongside the listing sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    /// ISO-8601 instant at which the artifact was assembled
    pub timestamp: String,

    /// Number of listings in `data`
    pub count: usize,
}

impl Artifact {
    /// Assembles an artifact from an aggregated crawl result
    pub fn new(listings: &[Listing]) -> Self {
        use chrono::{SecondsFormat, Utc};

        Self {
            metadata: ArtifactMetadata {
                timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                count: listings.len(),
            },
            data: listings.to_vec(),
        }
    }
}

/// Persists the aggregated crawl result
///
/// Implementations must embed `{timestamp, count}` metadata alongside the
/// listing sequence and return the location of the written artifact.
pub trait Store: Send + Sync {
    fn persist(&self, listings: &[Listing], config: &CrawlConfig) -> Result<PathBuf, StoreError>;
}
