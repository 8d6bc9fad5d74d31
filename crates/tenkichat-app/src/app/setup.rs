use anyhow::{Context, Result};
use std::env;

use tenkichat_api::{GeminiClient, DEFAULT_MODEL, GEMINI_API_URL};
use tenkichat_tools::{NOMINATIM_URL, OPEN_METEO_URL};

use crate::cli::Cli;

/// Application configuration derived from CLI arguments and environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub model: String,
    pub api_url: String,
    pub geocode_url: String,
    pub forecast_url: String,
    pub verbose: bool,
}

impl AppConfig {
    pub fn client(&self) -> GeminiClient {
        GeminiClient::with_base_url(
            self.api_key.clone(),
            self.model.clone(),
            self.api_url.clone(),
            self.verbose,
        )
    }
}

/// Set up application configuration from CLI arguments.
/// Precedence: CLI flags > environment > defaults.
pub fn setup_from_cli(cli: &Cli) -> Result<AppConfig> {
    let api_key = cli
        .api_key
        .clone()
        .or_else(|| env::var("GEMINI_API_KEY").ok())
        .context("GEMINI_API_KEY environment variable not set. Pass --api-key or add the key to a .env file.")?;

    Ok(AppConfig {
        api_key,
        model: cli.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        api_url: cli.api_url.clone().unwrap_or_else(|| GEMINI_API_URL.to_string()),
        geocode_url: cli
            .geocode_url
            .clone()
            .unwrap_or_else(|| NOMINATIM_URL.to_string()),
        forecast_url: cli
            .forecast_url
            .clone()
            .unwrap_or_else(|| OPEN_METEO_URL.to_string()),
        verbose: cli.verbose,
    })
}
