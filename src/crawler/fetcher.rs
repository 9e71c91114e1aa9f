//! Page fetcher: URL construction, pacing, transport, extraction
//!
//! One [`fetch_page`] call is the whole unit of work for a single result
//! page. Failures from the transport propagate to the orchestrator's
//! isolation boundary, where they are logged and converted to an empty
//! page; they never abort sibling tasks.

use crate::config::{CrawlConfig, ParamValue};
use crate::crawler::extractor::extract_listings;
use crate::crawler::transport::HttpTransport;
use crate::listing::Listing;
use crate::Result;
use std::time::Duration;
use url::Url;

/// Builds the URL for one result page
///
/// `baseUrl + searchPath + ('?' + query if non-empty)`. List-valued
/// parameters repeat the key once per value in list order. The `page`
/// parameter is appended only for pages after the first; page 1 uses the
/// bare search URL.
pub fn build_page_url(config: &CrawlConfig, page: u32) -> Result<Url> {
    let mut url = Url::parse(&format!("{}{}", config.base_url, config.search_path))?;

    if !config.params.is_empty() || page > 1 {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in &config.params {
            match value {
                ParamValue::Single(v) => {
                    pairs.append_pair(key, v);
                }
                ParamValue::Many(values) => {
                    for v in values {
                        pairs.append_pair(key, v);
                    }
                }
            }
        }
        if page > 1 {
            pairs.append_pair("page", &page.to_string());
        }
    }

    Ok(url)
}

/// Fetches and extracts one result page
///
/// Applies the pacing delay for pages after the first, then delegates to
/// the transport and the extractor.
pub async fn fetch_page(
    transport: &HttpTransport,
    config: &CrawlConfig,
    page: u32,
) -> Result<Vec<Listing>> {
    tracing::info!("Processing page {}...", page);

    if page > 1 && config.delay > 0 {
        tokio::time::sleep(Duration::from_millis(config.delay)).await;
    }

    let url = build_page_url(config, page)?;
    tracing::debug!("Fetching {}", url);

    let body = transport.fetch(url.as_str()).await?;
    let listings = extract_listings(&body);

    tracing::info!("Page {} completed: Found {} listings", page, listings.len());
    Ok(listings)
}
