//! Application configuration

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// URL of the remote sheet store (GET loads, POST saves)
    pub sheet_store_url: String,
    /// Request timeout for the sheet store
    pub sheet_store_timeout: Duration,

    /// Optional JSON catalog replacing the built-in classes and skills
    pub catalog_path: Option<PathBuf>,

    /// Port of the development sheet store server
    pub server_port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let server_port: u16 = lookup("SERVER_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .context("SERVER_PORT must be a valid port number")?;

        let timeout_secs: u64 = lookup("SHEET_STORE_TIMEOUT_SECS")
            .unwrap_or_else(|| "10".to_string())
            .parse()
            .context("SHEET_STORE_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Self {
            sheet_store_url: lookup("SHEET_STORE_URL")
                .unwrap_or_else(|| format!("http://localhost:{server_port}/")),
            sheet_store_timeout: Duration::from_secs(timeout_secs),
            catalog_path: lookup("SHEET_CATALOG_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            server_port,
        })
    }
}
