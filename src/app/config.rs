//! Application configuration loading from `terragen.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{ApiConfig, AppError};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "terragen.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Completion endpoint settings.
    #[serde(default)]
    pub api: ApiConfig,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicitly passed path must exist; the default `terragen.toml` is
    /// optional and falls back to built-in defaults when absent.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let (path, required) = match path {
            Some(explicit) => (explicit.to_path_buf(), true),
            None => (PathBuf::from(CONFIG_FILE), false),
        };

        if !path.exists() {
            if required {
                return Err(AppError::Configuration(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
