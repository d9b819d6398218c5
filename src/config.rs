//! Configuration management for the bot.
//!
//! This module loads the optional TOML config file from the platform config
//! directory and resolves the bot token from the CLI, the environment and the
//! file, in that order.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR_NAME, TOKEN_ENV_VAR};

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Bot authentication token
    pub token: Option<String>,
}

impl Config {
    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/pronounbot/`
    /// - macOS: `~/Library/Application Support/pronounbot/`
    /// - Windows: `%APPDATA%\pronounbot\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the default config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Picks the token to log in with.
    ///
    /// `cli_token` is the value clap resolved from `--token` or the
    /// environment; it wins over the config file. Blank values count as unset.
    pub fn resolve_token(&self, cli_token: Option<&str>) -> Result<String> {
        non_blank(cli_token)
            .or_else(|| non_blank(self.token.as_deref()))
            .map(ToString::to_string)
            .with_context(|| {
                format!(
                    "No bot token configured. Pass --token, set {}, or add `token = \"...\"` to {}",
                    TOKEN_ENV_VAR,
                    Self::config_file_path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|_| "config.toml".to_string())
                )
            })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_token_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "token = \"abc.def\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.token.as_deref(), Some("abc.def"));
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "token = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config file"));
    }

    #[test]
    fn test_resolve_token_prefers_cli() {
        let config = Config {
            token: Some("from-file".to_string()),
        };
        assert_eq!(config.resolve_token(Some("from-cli")).unwrap(), "from-cli");
    }

    #[test]
    fn test_resolve_token_falls_back_to_file() {
        let config = Config {
            token: Some("  from-file  ".to_string()),
        };
        assert_eq!(config.resolve_token(None).unwrap(), "from-file");
        assert_eq!(config.resolve_token(Some("   ")).unwrap(), "from-file");
    }

    #[test]
    fn test_resolve_token_missing() {
        let err = Config::default().resolve_token(None).unwrap_err();
        assert!(err.to_string().contains("No bot token configured"));
    }
}
