//! Crawler module: page fetching, extraction, and orchestration
//!
//! This module contains the core crawl pipeline:
//! - HTTP transport with per-attempt timeout, retry, and backoff
//! - Listing extraction from result-page markup
//! - Per-page fetch units composing pacing, transport, and extraction
//! - Orchestration under a concurrency limiter with page-order aggregation

mod extractor;
mod fetcher;
mod orchestrator;
mod retry;
mod transport;

pub use extractor::extract_listings;
pub use fetcher::{build_page_url, fetch_page};
pub use orchestrator::Orchestrator;
pub use retry::{exponential_backoff, retry_with_backoff};
pub use transport::HttpTransport;

use crate::agents::DEFAULT_USER_AGENTS;
use crate::config::CrawlConfig;
use crate::listing::Listing;
use crate::store::JsonFileStore;
use crate::Result;

/// Runs a complete crawl with the default user-agent corpus and JSON store
///
/// This is the main entry point for one crawl invocation. It returns the
/// aggregated listings; the snapshot artifact has already been written by
/// the time it returns (unless the result was empty).
pub async fn crawl(config: CrawlConfig) -> Result<Vec<Listing>> {
    let orchestrator = Orchestrator::new(config, DEFAULT_USER_AGENTS)?;
    orchestrator.run(&JsonFileStore).await
}
