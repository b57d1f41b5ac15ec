use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::BufReader;

use storefront::api::HttpCatalogApi;
use storefront::config::Config;
use storefront::history::NavigationHistory;
use storefront::logging::init_tracing;
use storefront::router::Router;
use storefront::shell;
use storefront::view::PresentationRoot;

/// Browse the product catalog from the terminal.
#[derive(Parser)]
#[command(name = "storefront", version, about)]
struct Cli {
    /// Location to open, e.g. "/?category=7" (default: shell.start_location)
    location: Option<String>,

    /// Config file (default: platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load config")?;

    let api = HttpCatalogApi::new(&config.api, config.catalog)
        .context("failed to build catalog client")?;

    let location = cli
        .location
        .unwrap_or_else(|| config.shell.start_location.clone());
    let history = NavigationHistory::new(location);
    let router = Router::new(
        Arc::new(api),
        PresentationRoot::new(),
        history,
        config.catalog,
    );

    router.route().await;
    shell::run(&router, BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
        .context("shell I/O failed")?;

    Ok(())
}
