use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
}

impl Config {
    /// Loads configuration from the environment. Every field has a default
    /// matching the original single-machine deployment, so the server starts
    /// with no configuration at all.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: match std::env::var("PORT") {
                Ok(value) => value.parse().context("PORT must be a number")?,
                Err(_) => 8000,
            },
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://enduro.db?mode=rwc".into()),
        })
    }
}
