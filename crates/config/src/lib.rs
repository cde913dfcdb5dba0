//! Configuration loading, validation, and management for Tagweave.
//!
//! Loads configuration from `~/.tagweave/config.toml` with environment
//! variable overrides. Every field has a default, so a missing file is a
//! valid configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides `catalog.data_dir`.
pub const DATA_DIR_ENV: &str = "TAGWEAVE_DATA_DIR";

/// Highest label precision accepted by validation.
pub const MAX_LABEL_PRECISION: usize = 6;

/// The root configuration structure.
///
/// Maps directly to `~/.tagweave/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Tag catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Editing session settings
    #[serde(default)]
    pub editor: EditorConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory of YAML tag files. Defaults to `~/.tagweave/data`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Sort the selection into catalog order before committing
    #[serde(default)]
    pub sort_on_commit: bool,

    /// Decimal places in on-screen weight labels
    #[serde(default = "default_label_precision")]
    pub label_precision: usize,
}

fn default_label_precision() -> usize {
    3
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            sort_on_commit: false,
            label_precision: default_label_precision(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.tagweave/config.toml).
    ///
    /// `TAGWEAVE_DATA_DIR` overrides the catalog directory.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;

        if let Some(dir) = std::env::var(DATA_DIR_ENV).ok().filter(|d| !d.is_empty()) {
            config.catalog.data_dir = Some(PathBuf::from(dir));
        }

        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".tagweave")
    }

    /// The catalog directory to use, after defaults.
    pub fn data_dir(&self) -> PathBuf {
        self.catalog
            .data_dir
            .clone()
            .unwrap_or_else(|| Self::config_dir().join("data"))
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self
            .catalog
            .data_dir
            .as_ref()
            .is_some_and(|dir| dir.as_os_str().is_empty())
        {
            return Err(ConfigError::ValidationError(
                "catalog.data_dir must not be empty".into(),
            ));
        }

        if self.editor.label_precision > MAX_LABEL_PRECISION {
            return Err(ConfigError::ValidationError(format!(
                "editor.label_precision must be at most {MAX_LABEL_PRECISION}"
            )));
        }

        Ok(())
    }

    /// Generate a default config TOML string.
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
