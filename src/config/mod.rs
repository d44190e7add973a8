//! Configuration file support for swatch.
//!
//! Settings are read from `~/.config/swatch/config.toml`. If no config file
//! exists, defaults are used.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::SwatchConfig;

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::{JsonSchema, Schema};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest allocation edge accepted from the config file.
pub const MAX_EDGE: i32 = 8192;

/// Main configuration structure.
///
/// # Example TOML
/// ```toml
/// [swatch]
/// default_color = "#ff8000"
/// width = 240
/// height = 160
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Swatch defaults (color and size)
    #[serde(default)]
    pub swatch: SwatchConfig,
}

impl Config {
    /// Clamps the allocation to 1..=MAX_EDGE, logging a warning for each fix.
    fn validate_and_clamp(&mut self) {
        if !(1..=MAX_EDGE).contains(&self.swatch.width) {
            log::warn!(
                "Invalid width {}, clamping to 1-{} range",
                self.swatch.width,
                MAX_EDGE
            );
            self.swatch.width = self.swatch.width.clamp(1, MAX_EDGE);
        }

        if !(1..=MAX_EDGE).contains(&self.swatch.height) {
            log::warn!(
                "Invalid height {}, clamping to 1-{} range",
                self.swatch.height,
                MAX_EDGE
            );
            self.swatch.height = self.swatch.height.clamp(1, MAX_EDGE);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("swatch");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if it does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or is not valid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);
        config.validate_and_clamp();

        Ok(config)
    }

    fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> Schema {
        schemars::schema_for!(Config)
    }
}
