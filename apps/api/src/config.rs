use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// The Anthropic key and Gumroad product id are optional at startup: the
/// service boots without them and the affected endpoints fail with a
/// user-actionable configuration error when called.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub anthropic_api_key: Option<String>,
    pub gumroad_product_id: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://jobsmith.db?mode=rwc".to_string()),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            gumroad_product_id: optional_env("GUMROAD_PRODUCT_ID"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
