//! Configuration for a kwmine run.
//!
//! Layered as: built-in defaults, then the TOML config file, then
//! environment/CLI overrides applied by the binary.

use kwmine_suggest::MinerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{MinerError, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where seeds are read from.
    pub input: InputConfig,
    /// Where and how suggestions are written.
    pub output: OutputConfig,
    /// Mining core settings (sources, workers, pacing, suffixes).
    pub miner: MinerConfig,
}

/// Seed input settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Newline-delimited seed file.
    pub seeds_path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            seeds_path: PathBuf::from("keywords.txt"),
        }
    }
}

/// Suggestion output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Destination file for the suggestion table.
    pub path: PathBuf,
    /// Field delimiter; must be a single ASCII character.
    pub delimiter: char,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("suggestions.csv"),
            delimiter: ',',
        }
    }
}

impl OutputConfig {
    /// The delimiter as a byte.
    ///
    /// # Errors
    ///
    /// Returns [`MinerError::Config`] if the delimiter is not ASCII.
    pub fn delimiter_byte(&self) -> Result<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                MinerError::Config(format!(
                    "output delimiter {:?} must be a single ASCII character",
                    self.delimiter
                ))
            })
    }
}

/// Settings given on the command line or through `KWMINE_*` variables.
///
/// Every field left unset keeps the value from the file or the defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub seeds_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub workers: Option<usize>,
    /// Query bare seeds only.
    pub no_expand: bool,
}

impl AppConfig {
    /// Overlay `overrides` on this configuration.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(ref seeds) = overrides.seeds_path {
            self.input.seeds_path = seeds.clone();
        }
        if let Some(ref output) = overrides.output_path {
            self.output.path = output.clone();
        }
        if let Some(workers) = overrides.workers {
            self.miner.workers = workers;
        }
        if overrides.no_expand {
            self.miner.expand_suffixes = false;
        }
    }

    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| MinerError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| MinerError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `~/.config/kwmine/config.toml`.
    pub fn default_config_path() -> PathBuf {
        if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config).join("kwmine").join("config.toml")
        } else if let Some(config) = dirs::config_dir() {
            config.join("kwmine").join("config.toml")
        } else {
            PathBuf::from("/tmp/kwmine-config/config.toml")
        }
    }
}
