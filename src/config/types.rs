use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Crawl plan for one run
///
/// Deserialized from a TOML config file; every field has a default so a
/// partial (or absent) file still yields a usable plan. Immutable once the
/// crawl starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// Origin of the listing site, e.g. "https://www.propertyguru.com.sg"
    #[serde(rename = "baseUrl")]
    pub base_url: String,

    /// URL path of the search endpoint, e.g. "/property-for-sale"
    #[serde(rename = "searchPath")]
    pub search_path: String,

    /// Number of result pages to crawl (1..=pages)
    pub pages: u32,

    /// Pacing delay in milliseconds, applied before requests for pages > 1
    pub delay: u64,

    /// Timeout in milliseconds per individual HTTP attempt
    pub timeout: u64,

    /// Extra attempts beyond the first for a failed request
    pub retries: u32,

    /// Maximum number of page fetches in flight at once
    pub concurrency: u32,

    /// Rotate the User-Agent header per request
    #[serde(rename = "userAgentRotation")]
    pub user_agent_rotation: bool,

    /// Artifact filename stem (a timestamp and ".json" are appended)
    #[serde(rename = "outputFilename")]
    pub output_filename: String,

    /// Directory the artifact is written into (created if missing)
    #[serde(rename = "outputDir")]
    pub output_dir: String,

    /// Extra diagnostics in logs
    pub verbose: bool,

    /// Query parameters appended to every page request
    pub params: BTreeMap<String, ParamValue>,
}

/// A query parameter value: a single string or an ordered list of strings
///
/// List-valued entries repeat the key once per value in the query string,
/// in list order (e.g. `districtCode=D1&districtCode=D2`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Single(String),
    Many(Vec<String>),
}

impl Default for CrawlConfig {
    fn default() -> Self {
        let mut params = BTreeMap::new();
        params.insert(
            "isCommercial".to_string(),
            ParamValue::Single("false".to_string()),
        );
        params.insert(
            "market".to_string(),
            ParamValue::Single("residential".to_string()),
        );

        Self {
            base_url: "https://www.propertyguru.com.sg".to_string(),
            search_path: "/property-for-sale".to_string(),
            params,
            pages: 5,
            delay: 2000,
            timeout: 30000,
            retries: 3,
            concurrency: 2,
            user_agent_rotation: true,
            output_filename: "property-listings".to_string(),
            output_dir: "./data".to_string(),
            verbose: false,
        }
    }
}
