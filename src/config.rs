//! Configuration loading and management
//!
//! Handles parsing of `tasknest.toml` configuration files. The file lives in
//! the user config directory by default and can be pointed elsewhere with
//! `--config` / `TASKNEST_CONFIG`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API configuration
    #[serde(default)]
    pub api: ApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
        }
    }
}

/// Remote API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base address of the task service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Optional request timeout in seconds; absent means no timeout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Load configuration from a `tasknest.toml` file
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the given path, or return defaults when the
    /// file does not exist
    pub fn load_or_default(path: Option<&Path>) -> crate::error::Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load(path),
            Some(_) | None => Ok(Self::default()),
        }
    }

    /// Default location of the config file in the user config directory
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "tasknest")
            .map(|dirs| dirs.config_dir().join("tasknest.toml"))
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> crate::error::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> crate::error::Result<()> {
        self.api.validate()
    }
}

impl ApiConfig {
    pub(crate) fn validate(&self) -> crate::error::Result<()> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(crate::error::Error::InvalidConfig(
                "api.base_url cannot be empty".to_string(),
            ));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(crate::error::Error::InvalidConfig(format!(
                "api.base_url must start with http:// or https:// (got '{url}')"
            )));
        }
        if let Some(timeout) = self.timeout_secs {
            if timeout == 0 {
                return Err(crate::error::Error::InvalidConfig(
                    "api.timeout_secs must be > 0 when set".to_string(),
                ));
            }
        }
        Ok(())
    }
}
