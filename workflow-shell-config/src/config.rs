//! The `Config` struct plus YAML persistence and path helpers.
//!
//! Covers:
//! - `load` / `save` (YAML file I/O with atomic write)
//! - XDG-style path helpers (`config_path`, `config_dir`)
//! - Field validation (`validate`)

use crate::error::ConfigError;
use crate::types::LogLevel;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application name used for the config directory.
const APP_NAME: &str = "workflow-shell";

/// Config file name.
const CONFIG_FILENAME: &str = "config.yaml";

/// Settings for the document shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Extension (without the leading dot) that marks a workflow document
    #[serde(default = "crate::defaults::extension")]
    pub extension: String,

    /// Label shown next to the extension filter in file dialogs
    #[serde(default = "crate::defaults::file_filter_label")]
    pub file_filter_label: String,

    /// Folder to open at startup, if any
    #[serde(default)]
    pub start_directory: Option<PathBuf>,

    /// Use the platform's native file dialogs instead of console prompts
    #[serde(default = "crate::defaults::bool_false")]
    pub native_dialogs: bool,

    /// Debug log verbosity (overridden by `RUST_LOG` and `--log-level`)
    #[serde(default = "crate::defaults::log_level")]
    pub log_level: LogLevel,

    /// First line written to the log view
    #[serde(default = "crate::defaults::welcome_message")]
    pub welcome_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extension: crate::defaults::extension(),
            file_filter_label: crate::defaults::file_filter_label(),
            start_directory: None,
            native_dialogs: crate::defaults::bool_false(),
            log_level: crate::defaults::log_level(),
            welcome_message: crate::defaults::welcome_message(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the workflow document extension
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Set the folder opened at startup
    pub fn with_start_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start_directory = Some(dir.into());
        self
    }

    /// Load configuration from the default location, creating it if missing
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, writing defaults there if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        log::info!("Config path: {:?}", path);

        if path.exists() {
            log::info!("Loading existing config from {:?}", path);
            let contents = fs::read_to_string(path).map_err(ConfigError::from)?;
            let config: Config = if contents.trim().is_empty() {
                Self::default()
            } else {
                serde_yaml_ng::from_str(&contents).map_err(ConfigError::from)?
            };
            config.validate()?;
            Ok(config)
        } else {
            log::info!("Config file not found, creating default at {:?}", path);
            let config = Self::default();
            if let Err(e) = config.save_to(path) {
                log::error!("Failed to save default config: {}", e);
                return Err(e);
            }
            log::info!("Default config created successfully");
            Ok(config)
        }
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::from)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::from)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(ConfigError::from)?;
        fs::rename(&temp_path, path).map_err(ConfigError::from)?;

        Ok(())
    }

    /// Get the configuration file path: `~/.config/workflow-shell/config.yaml`
    pub fn config_path() -> PathBuf {
        Self::config_dir().join(CONFIG_FILENAME)
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join(APP_NAME)
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join(APP_NAME)
            } else {
                PathBuf::from(".")
            }
        }
    }

    /// Check field values that serde cannot enforce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ext = self.extension.as_str();
        if ext.is_empty() {
            return Err(ConfigError::Validation(
                "extension must not be empty".to_string(),
            ));
        }
        if ext.contains(['.', '/', '\\']) {
            return Err(ConfigError::Validation(format!(
                "extension '{ext}' must not contain '.' or path separators"
            )));
        }
        Ok(())
    }
}
