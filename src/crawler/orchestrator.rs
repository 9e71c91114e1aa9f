//! Crawl orchestration
//!
//! Schedules one task per result page under a concurrency limiter,
//! aggregates their listings in page-number order, and hands the non-empty
//! result to the store. Failure containment is the whole point here: a
//! task that fails (or panics) contributes an empty page and never
//! terminates, blocks, or corrupts a sibling task.

use crate::config::CrawlConfig;
use crate::crawler::fetcher::fetch_page;
use crate::crawler::transport::HttpTransport;
use crate::listing::Listing;
use crate::store::Store;
use crate::Result;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Runs a full crawl: schedule, fetch, aggregate, persist
pub struct Orchestrator {
    config: Arc<CrawlConfig>,
    transport: Arc<HttpTransport>,
}

impl Orchestrator {
    /// Creates an orchestrator for the given crawl plan
    ///
    /// `corpus` is the user-agent pool handed to the transport.
    pub fn new(config: CrawlConfig, corpus: &[&str]) -> Result<Self> {
        crate::config::validate(&config)?;
        let transport = HttpTransport::new(&config, corpus)?;

        Ok(Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
        })
    }

    /// Crawls all configured pages and persists the aggregated result
    ///
    /// Spawns `pages` tasks gated by a semaphore of size `concurrency`.
    /// Each task's listings are collected in page-number order regardless
    /// of completion order. A non-empty result is handed to `store`; an
    /// empty result skips persistence. Only a persistence failure
    /// propagates out of here.
    pub async fn run(&self, store: &dyn Store) -> Result<Vec<Listing>> {
        let total = self.config.pages;
        tracing::info!("Starting crawl: {} pages, concurrency {}", total, self.config.concurrency);

        let semaphore = Arc::new(Semaphore::new(self.config.concurrency as usize));
        let progress = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::with_capacity(total as usize);
        for page in 1..=total {
            let semaphore = Arc::clone(&semaphore);
            let progress = Arc::clone(&progress);
            let config = Arc::clone(&self.config);
            let transport = Arc::clone(&self.transport);

            handles.push(tokio::spawn(async move {
                // The semaphore is never closed, so acquire only fails if
                // the runtime is shutting down; treat that as a failed page.
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => return Vec::new(),
                };

                let listings = match fetch_page(&transport, &config, page).await {
                    Ok(listings) => listings,
                    Err(e) => {
                        tracing::error!("Error processing page {}: {}", page, e);
                        Vec::new()
                    }
                };

                let done = progress.fetch_add(1, Ordering::SeqCst) + 1;
                tracing::info!("Progress: {}/{} pages", done, total);
                listings
            }));
        }

        // Await handles in page order so aggregation is ordered by page
        // number, not completion time.
        let mut all_listings = Vec::new();
        for (index, handle) in handles.into_iter().enumerate() {
            match handle.await {
                Ok(listings) => all_listings.extend(listings),
                Err(e) => {
                    // A panicked task still only loses its own page.
                    tracing::error!("Page {} task failed: {}", index + 1, e);
                    progress.fetch_add(1, Ordering::SeqCst);
                }
            }
        }

        tracing::info!(
            "Crawling completed. Total listings found: {}",
            all_listings.len()
        );

        if !all_listings.is_empty() {
            let path = store.persist(&all_listings, &self.config)?;
            tracing::info!("Data saved to: {}", path.display());
        } else {
            tracing::warn!("No listings extracted; skipping persistence");
        }

        Ok(all_listings)
    }
}
