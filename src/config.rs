//! Configuration module for shopview
//!
//! Manages the endpoint, loading policy and logging settings.
//! Configuration is stored in the user's config directory and is optional:
//! a missing file means defaults.

use crate::catalog::DEFAULT_ENDPOINT;
use clap::ValueEnum;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured endpoint
pub const ENDPOINT_ENV: &str = "SHOPVIEW_ENDPOINT";

/// What the loading flag does when the catalog fetch fails
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LoadingPolicy {
    /// Clear the loading flag so the empty-state message is shown
    #[default]
    Clear,
    /// Keep the loading indicator up indefinitely
    Keep,
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ShopConfig {
    /// Product-listing endpoint
    pub endpoint: String,

    /// Loading flag behavior on fetch failure
    pub loading_policy: LoadingPolicy,

    /// Heading shown at the top of the view
    pub title: String,

    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,

    /// Log file for the interactive view (defaults to the cache directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            loading_policy: LoadingPolicy::default(),
            title: "ECommerce Store".to_string(),
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl ShopConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("shopview").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, applying the endpoint override
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::build(path, std::env::var(ENDPOINT_ENV).ok())
    }

    fn build(path: &Path, endpoint_override: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if path.exists() {
            builder = builder.add_source(File::from(path.to_path_buf()).format(FileFormat::Toml));
        }

        let settings = builder
            .set_override_option("endpoint", endpoint_override)?
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = self.to_toml()?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Render the configuration as pretty TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration cannot be serialized.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }

    /// Resolve the log file location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no log file is configured and the cache
    /// directory cannot be determined.
    pub fn log_file_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.log_file {
            return Ok(path.clone());
        }

        dirs::cache_dir()
            .map(|dir| dir.join("shopview").join("shopview.log"))
            .ok_or_else(|| ConfigError::Message("Could not determine cache directory".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ShopConfig::build(&dir.path().join("config.toml"), None).unwrap();
        assert_eq!(config, ShopConfig::default());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.loading_policy, LoadingPolicy::Clear);
    }

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = ShopConfig {
            endpoint: "http://localhost:8080/products".to_string(),
            loading_policy: LoadingPolicy::Keep,
            title: "Test Store".to_string(),
            log_level: "debug".to_string(),
            log_file: Some(dir.path().join("shop.log")),
        };
        config.save_to(&path).unwrap();

        let loaded = ShopConfig::build(&path, None).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "loading_policy = \"keep\"\n").unwrap();

        let config = ShopConfig::build(&path, None).unwrap();
        assert_eq!(config.loading_policy, LoadingPolicy::Keep);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.title, "ECommerce Store");
    }

    #[test]
    fn test_endpoint_override_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "endpoint = \"http://file/products\"\n").unwrap();

        let config =
            ShopConfig::build(&path, Some("http://env/products".to_string())).unwrap();
        assert_eq!(config.endpoint, "http://env/products");
    }

    #[test]
    fn test_invalid_policy_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "loading_policy = \"sometimes\"\n").unwrap();

        assert!(ShopConfig::build(&path, None).is_err());
    }

    #[test]
    fn test_log_file_path_prefers_configured() {
        let config = ShopConfig {
            log_file: Some(PathBuf::from("/tmp/shop.log")),
            ..ShopConfig::default()
        };
        assert_eq!(config.log_file_path().unwrap(), PathBuf::from("/tmp/shop.log"));
    }
}
