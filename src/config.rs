//! Configuration management for tvnav
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{APP_NAME, BUILTIN_KEY_CODES, CONFIG_FILE_NAME, CONFIG_GENERATED, LOG_BUFFER_DEFAULT_CAPACITY};
use crate::input::Command;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Remote-control input configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InputConfig {
    /// Extra key code bindings on top of the built-in arrow/Enter/Backspace table,
    /// e.g. `Escape = "back"`. Built-in codes cannot be rebound.
    pub bindings: BTreeMap<String, Command>,
    /// Extra logical key values treated as a vendor back button (`GoBack` is always included)
    pub vendor_back_keys: Vec<String>,
}

/// Terminal shell configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Idle tick interval of the event loop in milliseconds
    pub tick_rate_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in the cache directory
    pub enabled: bool,
    /// Minimum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
    /// Number of lines kept in memory for the log view
    pub buffer_capacity: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 100 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
            buffer_capacity: LOG_BUFFER_DEFAULT_CAPACITY,
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        for code in self.input.bindings.keys() {
            if code.trim().is_empty() {
                anyhow::bail!("input.bindings: key code cannot be empty");
            }
            if BUILTIN_KEY_CODES.contains(&code.as_str()) {
                anyhow::bail!("input.bindings: '{}' is a built-in key and cannot be rebound", code);
            }
        }

        if self.input.vendor_back_keys.iter().any(|key| key.trim().is_empty()) {
            anyhow::bail!("input.vendor_back_keys: key value cannot be empty");
        }

        if self.ui.tick_rate_ms == 0 || self.ui.tick_rate_ms > 1000 {
            anyhow::bail!("tick_rate_ms must be between 1 and 1000, got {}", self.ui.tick_rate_ms);
        }

        self.logging.level_filter()?;

        if self.logging.buffer_capacity == 0 {
            anyhow::bail!("logging.buffer_capacity must be greater than 0");
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# tvnav Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
