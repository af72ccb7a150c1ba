//! Configuration system using TOML files.
//!
//! Config is read from the OS-standard config directory:
//! - Windows: %APPDATA%\audio-lib-checker\config.toml
//! - macOS: ~/Library/Application Support/audio-lib-checker/config.toml
//! - Linux: ~/.config/audio-lib-checker/config.toml
//!
//! or from an explicit path given with `--config`. The file only provides
//! defaults; command-line flags take precedence.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Defaults of the `check` command
    pub check: CheckConfig,

    /// Defaults of the `export` command
    pub export: ExportConfig,
}

/// Check command settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Error count limit (0 = unlimited)
    pub limit: usize,

    /// Report errors only
    pub only_errors: bool,
}

/// Export command settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Extract embedded covers
    pub covers: bool,

    /// Where extracted covers go
    pub covers_path: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            covers: false,
            covers_path: PathBuf::from("./covers"),
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("audio-lib-checker"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Parse a config file.
pub fn load_from(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path)?;
    toml::from_str(&contents)
        .map_err(|e| Error::config(format!("{}: {}", path.display(), e.message())))
}

/// Load configuration, from `explicit` if given, else from the default location.
///
/// Returns default config if the file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load(explicit: Option<&Path>) -> Config {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match config_path() {
            Some(path) => path,
            None => {
                tracing::warn!("Could not determine config directory, using defaults");
                return Config::default();
            }
        },
    };

    if !path.exists() {
        if explicit.is_some() {
            tracing::warn!("Config file {:?} not found, using defaults", path);
        } else {
            tracing::debug!("No config file found at {:?}, using defaults", path);
        }
        return Config::default();
    }

    match load_from(&path) {
        Ok(config) => {
            tracing::debug!("Loaded config from {:?}", path);
            config
        }
        Err(e) => {
            tracing::error!("Failed to load config file {:?}: {}", path, e);
            tracing::warn!("Using default configuration");
            Config::default()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
