//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application
//! configuration in TOML format with platform-specific directory resolution.
//! This is the app's own settings file, not the product configuration; the
//! product configuration lives in memory for the session only.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::DEFAULT_CONTACT_URL;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Order handoff configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Compose link for the external contact channel (Telegram)
    pub url: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CONTACT_URL.to_string(),
        }
    }
}

/// Order message export configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory where exported order messages are written
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        // Use config directory for exports by default
        let output_dir =
            Self::default_output_dir().unwrap_or_else(|_| PathBuf::from(".orders"));

        Self { output_dir }
    }
}

impl ExportConfig {
    /// Gets the default export directory path.
    ///
    /// - Linux: `~/.config/BbqpConfigurator/orders/`
    /// - macOS: `~/Library/Application Support/BbqpConfigurator/orders/`
    /// - Windows: `%APPDATA%\BbqpConfigurator\orders\`
    fn default_output_dir() -> Result<PathBuf> {
        Ok(Config::config_dir()?.join("orders"))
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/BbqpConfigurator/config.toml`
/// - macOS: `~/Library/Application Support/BbqpConfigurator/config.toml`
/// - Windows: `%APPDATA%\BbqpConfigurator\config.toml`
///
/// The `BBQP_CONFIG_DIR` environment variable overrides the directory,
/// which keeps end-to-end tests isolated from a developer's real config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Order handoff settings
    pub contact: ContactConfig,
    /// Order message export settings
    pub export: ExportConfig,
    /// UI preferences
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var("BBQP_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("BbqpConfigurator");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        // Serialize to TOML
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks that the contact URL is non-empty and uses http(s); the order
    /// compose link is opened by the host environment, nothing else in the
    /// application dereferences it.
    pub fn validate(&self) -> Result<()> {
        if self.contact.url.is_empty() {
            anyhow::bail!("Contact URL cannot be empty");
        }

        if !self.contact.url.starts_with("http://") && !self.contact.url.starts_with("https://") {
            anyhow::bail!(
                "Contact URL must start with http:// or https:// (got '{}')",
                self.contact.url
            );
        }

        Ok(())
    }
}
