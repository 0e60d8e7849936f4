use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory next to `books.json` where OpenAudible keeps the audio files
const DEFAULT_SOURCE_DIR: &str = "books";

/// Application configuration loaded from ~/.config/shelver/config.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub build: BuildConfig,
}

/// Configuration for the build command
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BuildConfig {
    /// Default AudioBookshelf library directory
    pub dest: Option<PathBuf>,

    /// Default directory holding the exported audio files
    pub source: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default path (~/.config/shelver/config.toml)
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("shelver").join("config.toml"))
    }

    /// Get the destination library, with CLI override taking precedence
    pub fn dest(&self, cli_override: Option<&Path>) -> Option<PathBuf> {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.build.dest.clone())
    }

    /// Get the audio source directory, with CLI override taking precedence,
    /// falling back to `books/` beside the catalog
    pub fn source(&self, cli_override: Option<&Path>, catalog: &Path) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.build.source.clone())
            .unwrap_or_else(|| {
                catalog
                    .parent()
                    .unwrap_or_else(|| Path::new(""))
                    .join(DEFAULT_SOURCE_DIR)
            })
    }
}
