//! Movie browser command (`popcorn` / `popcorn browse`)
//!
//! Launches the interactive search and watchlist screen.

use std::sync::Arc;

use iocraft::prelude::*;
use tracing::info;

use crate::config::Config;
use crate::error::{PopcornError, Result};
use crate::movies::OmdbClient;
use crate::tui::{PopcornApp, RatingConfig};

/// Overrides taken from the command line
#[derive(Debug, Clone, Default)]
pub struct BrowseOptions {
    /// API key that wins over both the environment and the config file
    pub api_key: Option<String>,
}

/// Build the API client, preferring an explicit key over configuration
fn build_client(config: &Config, options: &BrowseOptions) -> Result<OmdbClient> {
    match options.api_key.as_deref().filter(|k| !k.is_empty()) {
        Some(api_key) => OmdbClient::new(api_key, &config.api_url, config.timeout()),
        None => OmdbClient::from_config(config),
    }
}

/// Launch the movie browser TUI
pub fn cmd_browse(options: BrowseOptions) -> Result<()> {
    let config = Config::load()?;

    let client = Arc::new(build_client(&config, &options)?);
    let rating_config = RatingConfig::from_config(&config);

    info!(
        api_url = %config.api_url,
        max_rating = rating_config.max_rating,
        "starting movie browser"
    );

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| PopcornError::Other(format!("Failed to create runtime: {}", e)))?;

    let result = rt.block_on(async {
        element!(PopcornApp(
            client: Some(client),
            rating_config: Some(rating_config),
        ))
        .fullscreen()
        .await
        .map_err(|e| PopcornError::Tui(e.to_string()))
    });

    info!("movie browser closed");
    result
}
