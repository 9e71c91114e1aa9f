use crate::config::types::CrawlConfig;
use crate::ConfigError;
use url::Url;

/// Validates a crawl configuration
///
/// Defaults have already been substituted by this point, so anything that
/// fails here was explicitly set to an unusable value and would make task
/// construction impossible.
pub fn validate(config: &CrawlConfig) -> Result<(), ConfigError> {
    let base = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid baseUrl '{}': {}", config.base_url, e)))?;

    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "baseUrl must use http or https, got '{}'",
            config.base_url
        )));
    }

    if !config.search_path.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "searchPath must start with '/', got '{}'",
            config.search_path
        )));
    }

    if config.pages < 1 {
        return Err(ConfigError::Validation(format!(
            "pages must be >= 1, got {}",
            config.pages
        )));
    }

    if config.concurrency < 1 {
        return Err(ConfigError::Validation(format!(
            "concurrency must be >= 1, got {}",
            config.concurrency
        )));
    }

    if config.timeout < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout must be >= 1ms, got {}ms",
            config.timeout
        )));
    }

    if config.output_filename.is_empty() {
        return Err(ConfigError::Validation(
            "outputFilename cannot be empty".to_string(),
        ));
    }

    if config.output_dir.is_empty() {
        return Err(ConfigError::Validation(
            "outputDir cannot be empty".to_string(),
        ));
    }

    Ok(())
}
