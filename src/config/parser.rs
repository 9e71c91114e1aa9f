use crate::config::types::CrawlConfig;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads the crawl configuration from the given path
///
/// Missing file: the defaults are written out to `path` (so the user has a
/// template to edit) and used for this run. Unparseable file: a warning is
/// logged and the defaults are used. Neither case is fatal. A well-formed
/// file with invalid values (pages = 0, bad baseUrl, ...) fails validation
/// and that error does propagate.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use propcrawl::config::load_config;
///
/// let config = load_config(Path::new("config.toml")).unwrap();
/// println!("Crawling {} pages", config.pages);
/// ```
pub fn load_config(path: &Path) -> Result<CrawlConfig, ConfigError> {
    let config = if path.exists() {
        let content = std::fs::read_to_string(path)?;
        match toml::from_str::<CrawlConfig>(&content) {
            Ok(config) => {
                tracing::info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!(
                    "Error parsing config {}: {}. Using default configuration.",
                    path.display(),
                    e
                );
                CrawlConfig::default()
            }
        }
    } else {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        write_default_config(path);
        CrawlConfig::default()
    };

    validate(&config)?;

    Ok(config)
}

/// Writes the default configuration to `path` as a starting template
///
/// Failure to write is only logged; the run proceeds on defaults either way.
fn write_default_config(path: &Path) {
    let default = CrawlConfig::default();
    let serialized = match toml::to_string_pretty(&default) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!("Failed to serialize default config: {}", e);
            return;
        }
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("Failed to create config directory: {}", e);
                return;
            }
        }
    }

    match std::fs::write(path, serialized) {
        Ok(()) => tracing::info!("Created default config at {}", path.display()),
        Err(e) => tracing::warn!("Failed to write default config: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParamValue;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
baseUrl = "https://listings.example.com"
searchPath = "/search"
pages = 3
delay = 100
timeout = 5000
retries = 1
concurrency = 4
userAgentRotation = false
outputFilename = "snapshot"
outputDir = "./out"

[params]
market = "residential"
districtCode = ["D1", "D2"]
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.base_url, "https://listings.example.com");
        assert_eq!(config.pages, 3);
        assert_eq!(config.concurrency, 4);
        assert!(!config.user_agent_rotation);
        assert_eq!(
            config.params.get("districtCode"),
            Some(&ParamValue::Many(vec![
                "D1".to_string(),
                "D2".to_string()
            ]))
        );
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config_content = r#"
pages = 2
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.pages, 2);
        assert_eq!(config.base_url, "https://www.propertyguru.com.sg");
        assert_eq!(config.retries, 3);
        assert_eq!(config.delay, 2000);
    }

    #[test]
    fn test_missing_file_creates_default_and_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = load_config(&path).unwrap();

        assert_eq!(config.pages, CrawlConfig::default().pages);
        assert!(path.exists(), "default config should be written out");

        // The written file should round-trip to the same defaults
        let reloaded = load_config(&path).unwrap();
        assert_eq!(reloaded.base_url, config.base_url);
    }

    #[test]
    fn test_invalid_toml_falls_back_to_defaults() {
        let file = create_temp_config("this is not valid TOML {{{");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.pages, CrawlConfig::default().pages);
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let config_content = r#"
pages = 0
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());

        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
