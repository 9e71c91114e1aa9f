//! Propcrawl main entry point
//!
//! Command-line interface for the paginated listing-search crawler.

use clap::Parser;
use propcrawl::config::load_config;
use propcrawl::crawler::crawl;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Crawl a paginated listing search and save a JSON snapshot
#[derive(Parser, Debug)]
#[command(name = "propcrawl")]
#[command(version = "1.0.0")]
#[command(about = "Web crawler for residential property listings", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG", default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose diagnostics
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let mut config = load_config(&cli.config)?;
    if cli.verbose {
        config.verbose = true;
    }

    tracing::info!("Starting crawler...");
    tracing::info!(
        "Target: {}{} ({} pages, concurrency {})",
        config.base_url,
        config.search_path,
        config.pages,
        config.concurrency
    );

    // Any error reaching here (persistence, unusable config) exits with
    // code 1; per-page failures were already absorbed inside the crawl.
    let listings = crawl(config).await?;

    tracing::info!(
        "Crawling completed. Extracted {} property listings.",
        listings.len()
    );

    Ok(())
}

/// Sets up the tracing subscriber based on the verbose flag
fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("propcrawl=debug,info")
    } else {
        EnvFilter::new("propcrawl=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
