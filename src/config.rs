use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub paths: PathsConfig,
    pub fetch: FetchConfig,
    #[serde(default)]
    pub stats: StatsConfig,
}

/// Filesystem layout for the pipeline.
///
/// Everything lives under `data_dir`: raw converted JSON in `main/` and
/// `detailed/`, the enriched snapshot in `enriched/`.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    pub data_dir: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Upstream TSV source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Base URL the seven TSV files are fetched from.
    /// Overridden by the GITHUB_SOURCE environment variable when set.
    pub source_url: String,
}

/// Statistics reporting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StatsConfig {
    #[serde(default = "default_top")]
    pub top: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        StatsConfig { top: default_top() }
    }
}

fn default_top() -> usize {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file
    ///
    /// Loads environment variables from .env file (if present) before loading config.
    /// Looks for config file in this order:
    /// 1. Path specified in MEDIAGRAPH_CONFIG environment variable
    /// 2. ./config.toml in current directory
    pub fn load() -> Result<Self> {
        // Load .env file if it exists (ignore errors - file is optional)
        let _ = dotenv::dotenv();

        let config_path = std::env::var("MEDIAGRAPH_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config.toml"));

        let config_str = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .context("Failed to parse config.toml")?;

        // GITHUB_SOURCE takes precedence over the configured source URL
        if let Ok(source) = std::env::var("GITHUB_SOURCE") {
            if !source.is_empty() {
                config.fetch.source_url = source;
            }
        }

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.paths.data_dir.as_os_str().is_empty() {
            anyhow::bail!("paths.data_dir must not be empty");
        }

        if !self.fetch.source_url.starts_with("http://")
            && !self.fetch.source_url.starts_with("https://")
        {
            anyhow::bail!(
                "fetch.source_url must be an http(s) URL, got: {}",
                self.fetch.source_url
            );
        }

        if self.stats.top == 0 {
            anyhow::bail!("stats.top must be greater than 0");
        }

        Ok(())
    }

    /// Get the data directory root
    pub fn data_dir(&self) -> &Path {
        &self.paths.data_dir
    }

    /// Directory holding the raw entity lists (personnes, medias, organisations)
    pub fn main_dir(&self) -> PathBuf {
        self.paths.data_dir.join("main")
    }

    /// Directory holding the raw relation lists
    pub fn detailed_dir(&self) -> PathBuf {
        self.paths.data_dir.join("detailed")
    }

    /// Directory the enriched snapshot is written to
    pub fn enriched_dir(&self) -> PathBuf {
        self.paths.data_dir.join("enriched")
    }
}
