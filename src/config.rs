use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::export::OutputFormat;
use crate::logging::LogConfig;
use crate::models::SensorPackage;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Summary output format
    pub output: OutputFormat,

    /// Logging settings
    pub logging: LogConfig,

    /// Packages processed when no input file is given
    pub packages: Vec<SensorPackage>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            logging: LogConfig::default(),
            packages: SensorPackage::demo_packages(),
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| "Failed to parse TOML configuration")?;

        Ok(config)
    }

    /// Get default configuration file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("trainstat")
            .join("config.toml")
    }

    /// Load the default config file, or built-in defaults when it is absent
    pub fn load_or_default() -> Result<Self> {
        let config_path = Self::default_config_path();

        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }
}
