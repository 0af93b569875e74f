use crate::errors::LuxResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Base URL used when nothing else is configured, matching a local
/// development deployment of the backend.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Configuration struct for the LuxAI client
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct LuxConfig {
    pub api_base_url: Option<String>,
    pub log_level: Option<String>,
}

impl LuxConfig {
    /// Resolved base URL for API requests.
    pub fn base_url(&self) -> String {
        self.api_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Loads configuration from a file if it exists, otherwise returns the default config
    pub fn load_from_file(path: &Path) -> LuxResult<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                crate::errors::LuxError::ConfigError(format!("Failed to read config file: {}", e))
            })?;

            let config: Self = toml::from_str(&content).map_err(|e| {
                crate::errors::LuxError::ConfigError(format!("Failed to parse config file: {}", e))
            })?;

            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves configuration to a file
    pub fn save_to_file(&self, path: &Path) -> LuxResult<()> {
        let content = toml::to_string(self).map_err(|e| {
            crate::errors::LuxError::ConfigError(format!("Failed to serialize config: {}", e))
        })?;

        // Ensure the directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                crate::errors::LuxError::ConfigError(format!(
                    "Failed to create config directory: {}",
                    e
                ))
            })?;
        }

        fs::write(path, content).map_err(|e| {
            crate::errors::LuxError::ConfigError(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Merges this config with another config, preferring values from the other config if present
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            api_base_url: other
                .api_base_url
                .clone()
                .or_else(|| self.api_base_url.clone()),
            log_level: other.log_level.clone().or_else(|| self.log_level.clone()),
        }
    }
}

/// Helper function to get default config directory
pub fn get_default_config_dir() -> LuxResult<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        crate::errors::LuxError::ConfigError("Could not determine home directory".to_string())
    })?;

    let config_dir = home_dir.join(".config").join("luxai");

    Ok(config_dir)
}

/// Helper function to get default config file path
pub fn get_default_config_file() -> LuxResult<PathBuf> {
    let config_dir = get_default_config_dir()?;
    Ok(config_dir.join("config.toml"))
}
