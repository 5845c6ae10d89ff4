//! Application configuration with persistence.
//!
//! # Configuration File Location
//!
//! - Linux: `~/.config/subdash/config.json`
//! - macOS: `~/Library/Application Support/subdash/config.json`
//! - Windows: `%APPDATA%/subdash/config.json`
//!
//! The `SUBDASH_API_URL` environment variable overrides `api_url`; the
//! `--api-url` flag overrides both.

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::platform::paths::{self, CONFIG_FILE_NAME};
use crate::client::api::DEFAULT_LANGUAGE;
use crate::domain::node::default_nodes;
use crate::domain::{NodeCatalog, RegionalNode};

// ============================================================================
// Constants
// ============================================================================

/// Environment variable that overrides the configured backend URL.
pub const API_URL_ENV: &str = "SUBDASH_API_URL";

/// Backend URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the subscription backend.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Language passed to the knowledge-base endpoint.
    #[serde(default = "default_language")]
    pub knowledge_language: String,
    /// Regional entrance catalog offered in the node picker.
    #[serde(default = "default_nodes")]
    pub nodes: Vec<RegionalNode>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            knowledge_language: default_language(),
            nodes: default_nodes(),
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        paths::config_file(CONFIG_FILE_NAME)
    }

    /// Loads the configuration from disk, falling back to defaults, then
    /// applies the environment override.
    ///
    /// On first run the defaults are written out so the node catalog can be
    /// edited. A file that exists but fails to parse is left untouched.
    #[must_use]
    pub fn load() -> Self {
        let config = match Self::config_path() {
            Ok(path) if !path.exists() => {
                let config = Self::default();
                if let Err(err) = config.save_to(&path) {
                    tracing::warn!("Could not write default config: {err}");
                }
                config
            }
            Ok(path) => Self::load_from(&path).unwrap_or_else(|err| {
                tracing::warn!("Config load failed, using defaults: {err}");
                Self::default()
            }),
            Err(err) => {
                tracing::info!("No config directory, using defaults: {err}");
                Self::default()
            }
        };
        config.with_env_override(std::env::var(API_URL_ENV).ok())
    }

    /// Reads the configuration stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Writes the configuration to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Replaces `api_url` when `value` is set and non-empty.
    #[must_use]
    pub fn with_env_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            self.api_url = url;
        }
        self
    }

    /// Node catalog built from the configured entrances.
    #[must_use]
    pub fn catalog(&self) -> NodeCatalog {
        NodeCatalog::new(self.nodes.clone())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.knowledge_language, "zh-CN");
        assert_eq!(config.catalog().len(), 6);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"api_url":"https://panel.example.com"}"#).unwrap();
        assert_eq!(config.api_url, "https://panel.example.com");
        assert_eq!(config.nodes, default_nodes());
    }

    #[test]
    fn test_custom_catalog() {
        let json = r#"{"nodes":[{"id":"J1","name":"Tokyo"}]}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        let catalog = config.catalog();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("J1").map(|n| n.name.as_str()), Some("Tokyo"));
    }

    #[rstest]
    #[case(Some("https://env.example.com"), "https://env.example.com")]
    #[case(Some("   "), DEFAULT_API_URL)]
    #[case(None, DEFAULT_API_URL)]
    fn test_env_override(#[case] value: Option<&str>, #[case] expected: &str) {
        let config = AppConfig::default().with_env_override(value.map(String::from));
        assert_eq!(config.api_url, expected);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = std::env::temp_dir().join(format!("subdash-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE_NAME);

        let mut config = AppConfig::default();
        config.knowledge_language = "en-US".to_string();
        config.save_to(&path).unwrap();

        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_broken_file_is_an_error() {
        let dir = std::env::temp_dir().join(format!("subdash-config-bad-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE_NAME);
        fs::write(&path, "{not json").unwrap();

        assert!(AppConfig::load_from(&path).is_err());
        let _ = fs::remove_dir_all(dir);
    }
}
