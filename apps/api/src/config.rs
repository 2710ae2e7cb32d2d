use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_CATALOG_PATH: &str = "internship_data.csv";

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numeric values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_path: PathBuf,
    /// Alternate resource catalog (JSON). Built-in set when unset.
    pub resources_path: Option<PathBuf>,
    /// Overrides the engine's scoring window when set.
    pub candidate_window: Option<usize>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            catalog_path: lookup("CATALOG_PATH")
                .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string())
                .into(),
            resources_path: lookup("RESOURCES_PATH").map(PathBuf::from),
            candidate_window: lookup("CANDIDATE_WINDOW")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("CANDIDATE_WINDOW must be a non-negative integer")?,
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
