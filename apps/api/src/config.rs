use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Speech recognition endpoint. When unset, audio answers degrade to
    /// empty responses instead of failing the analysis.
    pub transcribe_endpoint: Option<String>,
    pub transcribe_api_key: Option<String>,
    /// Overrides the embedded lexicon data file.
    pub lexicon_path: Option<String>,
    /// Overrides the embedded question bank data file.
    pub question_bank_path: Option<String>,
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
            transcribe_endpoint: optional_env("TRANSCRIBE_ENDPOINT"),
            transcribe_api_key: optional_env("TRANSCRIBE_API_KEY"),
            lexicon_path: optional_env("LEXICON_PATH"),
            question_bank_path: optional_env("QUESTION_BANK_PATH"),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
