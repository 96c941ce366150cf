//! Runtime configuration read from `config.toml`.

use crate::config;
use crate::error::ConfigError;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Application config; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Overrides the platform data directory
    pub data_dir: Option<PathBuf>,
    /// Default log filter, used when RUST_LOG is not set
    pub log_filter: Option<String>,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(config::APP_QUALIFIER, config::APP_ORGANIZATION, config::APP_NAME)
}

impl AppConfig {
    /// Load config from a file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let parsed = toml::from_str(&contents)?;
        log::debug!("Config loaded from {:?}", path);
        Ok(parsed)
    }

    /// Load config from the platform config directory
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Location of `config.toml`, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(config::CONFIG_FILE))
    }

    /// Directory holding widget data
    pub fn data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }

        project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| {
                // No home directory: fall back to the working directory
                PathBuf::from(".").join(config::APP_NAME)
            })
    }

    /// Log filter to use when RUST_LOG is unset
    pub fn log_filter(&self) -> &str {
        self.log_filter
            .as_deref()
            .unwrap_or(config::DEFAULT_LOG_FILTER)
    }
}
