//! Configuration module
//!
//! Handles loading, defaulting, and validating the TOML crawl configuration.
//!
//! # Example
//!
//! ```no_run
//! use propcrawl::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Crawling {} pages of {}", config.pages, config.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{CrawlConfig, ParamValue};

// Re-export parser functions
pub use parser::load_config;
pub use validation::validate;
