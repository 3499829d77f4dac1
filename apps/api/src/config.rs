use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so the service starts with an empty environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Artificial response delay applied by the analysis handlers, in
    /// milliseconds. 0 disables pacing.
    pub analysis_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            analysis_delay_ms: std::env::var("ANALYSIS_DELAY_MS")
                .unwrap_or_else(|_| "0".to_string())
                .parse::<u64>()
                .context("ANALYSIS_DELAY_MS must be a whole number of milliseconds")?,
        })
    }
}
