use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level koyomi configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct KoyomiConfig {
    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Event store settings.
    #[serde(default)]
    pub events: EventsConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Label months in era form (令和7年8月) instead of Gregorian.
    #[serde(default)]
    pub era: bool,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct EventsConfig {
    /// Path to the events JSON file.
    pub file: Option<PathBuf>,
}

impl KoyomiConfig {
    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist. A file that exists but fails to parse is an
    /// error, not a fallback.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}
