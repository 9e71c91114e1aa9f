//! JSON file store
//!
//! Writes one pretty-printed JSON artifact per run into `outputDir`,
//! named `{outputFilename}_{timestamp}.json`. The timestamp in the
//! filename uses `-` in place of `:` so it stays filesystem-safe.

use crate::config::CrawlConfig;
use crate::listing::Listing;
use crate::store::traits::{Artifact, Store, StoreError};
use chrono::Utc;
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Persists crawl results as timestamped JSON files
pub struct JsonFileStore;

impl Store for JsonFileStore {
    fn persist(&self, listings: &[Listing], config: &CrawlConfig) -> Result<PathBuf, StoreError> {
        let output_dir = Path::new(&config.output_dir);
        fs::create_dir_all(output_dir)?;

        let stamp = Utc::now().format("%Y-%m-%dT%H-%M-%S");
        let path = output_dir.join(format!("{}_{}.json", config.output_filename, stamp));

        let artifact = Artifact::new(listings);

        let file = fs::File::create(&path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), &artifact)?;

        tracing::info!("Data saved as JSON: {}", path.display());
        Ok(path)
    }
}
