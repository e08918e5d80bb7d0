use anyhow::{Context, Result};

use crate::referee::providers::ollama::DEFAULT_OLLAMA_URL;

/// Application configuration loaded from environment variables.
/// Every referee setting is optional — the service degrades to the mock
/// provider when no backend is configured — so only malformed values fail
/// startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub ollama_url: String,
    pub openai_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            ollama_url: std::env::var("OLLAMA_URL")
                .unwrap_or_else(|_| DEFAULT_OLLAMA_URL.to_string()),
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
