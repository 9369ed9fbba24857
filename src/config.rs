//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR_NAME, DEFAULT_KEYMAP_ROUTE};

/// Route configuration for generated back links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Route of the keymap editor (e.g., "/keymap")
    #[serde(default = "default_keymap_route")]
    pub keymap_route: String,
}

/// Default keymap route
fn default_keymap_route() -> String {
    DEFAULT_KEYMAP_ROUTE.to_string()
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            keymap_route: default_keymap_route(),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Log at debug level unless RUST_LOG says otherwise
    #[serde(default)]
    pub verbose_logging: bool,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/MacroTab/config.toml`
/// - macOS: `~/Library/Application Support/MacroTab/config.toml`
/// - Windows: `%APPDATA%\MacroTab\config.toml`
///
/// # Validation
///
/// - `keymap_route` must start with `/` and must not end with `/`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Back link routes
    #[serde(default)]
    pub links: LinkConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `config_path`.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
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

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `config_path` using atomic write.
    ///
    /// Creates the parent directory if needed. Uses temp file + rename
    /// pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let route = &self.links.keymap_route;

        if !route.starts_with('/') {
            anyhow::bail!("Keymap route must start with '/': {route}");
        }

        if route.len() > 1 && route.ends_with('/') {
            anyhow::bail!("Keymap route must not end with '/': {route}");
        }

        Ok(())
    }

    /// Sets the keymap route with validation.
    pub fn set_keymap_route(&mut self, route: impl Into<String>) -> Result<()> {
        let previous = std::mem::replace(&mut self.links.keymap_route, route.into());
        if let Err(err) = self.validate() {
            self.links.keymap_route = previous;
            return Err(err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.links.keymap_route, "/keymap");
        assert!(!config.ui.verbose_logging);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_route() {
        let mut config = Config::new();

        config.links.keymap_route = "keymap".to_string();
        assert!(config.validate().is_err());

        config.links.keymap_route = "/keymap/".to_string();
        assert!(config.validate().is_err());

        config.links.keymap_route = "/".to_string();
        assert!(config.validate().is_ok());

        config.links.keymap_route = "/config/keymap".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_set_keymap_route_keeps_previous_on_error() {
        let mut config = Config::new();
        assert!(config.set_keymap_route("no-slash").is_err());
        assert_eq!(config.links.keymap_route, "/keymap");

        config.set_keymap_route("/km").unwrap();
        assert_eq!(config.links.keymap_route, "/km");
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.links.keymap_route = "/editor/keymap".to_string();
        config.ui.verbose_logging = true;

        config.save_to(&config_file).unwrap();
        assert!(!config_file.with_extension("toml.tmp").exists());

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");

        Config::new().save_to(&config_file).unwrap();
        assert_eq!(Config::load_from(&config_file).unwrap(), Config::new());
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&temp_dir.path().join("missing.toml")).unwrap();
        assert_eq!(loaded, Config::new());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[ui]\nverbose_logging = true\n").unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert!(loaded.ui.verbose_logging);
        assert_eq!(loaded.links.keymap_route, "/keymap");
    }

    #[test]
    fn test_load_rejects_invalid_route() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[links]\nkeymap_route = \"keymap\"\n").unwrap();

        assert!(Config::load_from(&config_file).is_err());
    }
}
