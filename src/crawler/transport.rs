//! HTTP transport for single logical page requests
//!
//! One [`HttpTransport::fetch`] call covers the full retry budget for a URL:
//! browser-like navigation headers, optional per-request user-agent
//! rotation, a per-attempt timeout, and exponential backoff between
//! attempts. Errors are classified into network, timeout, and status kinds
//! so the retry predicate and the caller's logs can tell them apart.

use crate::config::CrawlConfig;
use crate::crawler::retry::{exponential_backoff, retry_with_backoff};
use crate::{CrawlError, Result};
use rand::seq::SliceRandom;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use std::time::Duration;

/// Issues one logical page request with timeout, retry, and backoff
pub struct HttpTransport {
    client: Client,
    retries: u32,
    /// Rotation corpus; empty when rotation is disabled
    user_agents: Vec<String>,
}

impl HttpTransport {
    /// Builds a transport from the crawl configuration
    ///
    /// `corpus` is the user-agent pool to rotate through; it is ignored
    /// when `userAgentRotation` is off.
    pub fn new(config: &CrawlConfig, corpus: &[&str]) -> Result<Self> {
        let client = Client::builder()
            .default_headers(navigation_headers())
            .timeout(Duration::from_millis(config.timeout))
            .gzip(true)
            .brotli(true)
            .build()?;

        let user_agents = if config.user_agent_rotation {
            corpus.iter().map(|s| s.to_string()).collect()
        } else {
            Vec::new()
        };

        Ok(Self {
            client,
            retries: config.retries,
            user_agents,
        })
    }

    /// Fetches `url` and returns the response body
    ///
    /// Makes up to `1 + retries` attempts, sleeping `2^k * 1000` ms after
    /// failed attempt `k`. Exhausting the budget surfaces the last error.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        retry_with_backoff(
            self.retries,
            exponential_backoff,
            CrawlError::is_retryable,
            || self.attempt(url),
        )
        .await
    }

    /// One attempt: send the request, check the status, read the body
    async fn attempt(&self, url: &str) -> Result<String> {
        let mut request = self.client.get(url);
        if let Some(agent) = self.pick_user_agent() {
            tracing::debug!("Using User-Agent: {}", agent);
            request = request.header(USER_AGENT, agent);
        }

        let response = request
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let status = response.status().as_u16();
        if status >= 400 {
            tracing::error!("HTTP Error: {} for {}", status, url);
            return Err(CrawlError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().await.map_err(|e| classify_error(url, e))
    }

    /// Picks a random user agent from the corpus, if rotation is on
    fn pick_user_agent(&self) -> Option<&str> {
        self.user_agents
            .choose(&mut rand::thread_rng())
            .map(|s| s.as_str())
    }
}

/// Maps a reqwest error to the transport error taxonomy
fn classify_error(url: &str, error: reqwest::Error) -> CrawlError {
    if error.is_timeout() {
        CrawlError::Timeout {
            url: url.to_string(),
        }
    } else {
        CrawlError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}

/// Fixed browser-like navigation headers sent with every request
fn navigation_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        "Accept",
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml"),
    );
    headers.insert(
        "Accept-Language",
        HeaderValue::from_static("en-US,en;q=0.9"),
    );
    headers.insert("Cache-Control", HeaderValue::from_static("no-cache"));
    headers.insert("Pragma", HeaderValue::from_static("no-cache"));
    headers.insert("Sec-Fetch-Dest", HeaderValue::from_static("document"));
    headers.insert("Sec-Fetch-Mode", HeaderValue::from_static("navigate"));
    headers.insert("Sec-Fetch-Site", HeaderValue::from_static("none"));
    headers.insert("Sec-Fetch-User", HeaderValue::from_static("?1"));
    headers.insert(
        "Upgrade-Insecure-Requests",
        HeaderValue::from_static("1"),
    );
    headers
}
