//! Configuration for mousecap.
//!
//! This module provides:
//! - TOML configuration file loading from `~/.mousecap/config.toml`
//! - A mode override that forces mouse reporting on or off
//! - Policy flags for terminals whose support is switched off by default
//!
//! # Configuration File
//!
//! ```toml
//! # auto: detect from the environment (default)
//! # on:   always enable xterm mouse reporting
//! # off:  never enable mouse reporting
//! mode = "auto"
//!
//! [policy]
//! # ConEmu / Cmder can report mouse events but it has been unreliable
//! conemu_mouse = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{classify, Detection, DetectionPolicy, EnvironmentSignals};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[source] toml::ser::Error),

    #[error("Failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine config path")]
    NoHome,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// How the final answer is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseMode {
    /// Run detection
    #[default]
    Auto,
    /// Always enable
    On,
    /// Never enable
    Off,
}

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub mode: MouseMode,
    pub policy: PolicyConfig,
}

/// Policy flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub conemu_mouse: bool,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Falls back to defaults when there is no file or it cannot be used.
    pub fn load() -> Self {
        let Some(path) = Self::get_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Load configuration from `path`
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        let path = Self::get_config_path().ok_or(ConfigError::NoHome)?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|source| ConfigError::Write {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        self.save_to(&path)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Default config file path
    pub fn get_config_path() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".mousecap").join("config.toml"))
    }

    pub fn detection_policy(&self) -> DetectionPolicy {
        DetectionPolicy {
            conemu_mouse: self.policy.conemu_mouse,
        }
    }

    /// Apply the configured mode to `signals`
    pub fn resolve(&self, signals: &EnvironmentSignals) -> Detection {
        match self.mode {
            MouseMode::Auto => classify(signals, &self.detection_policy()),
            MouseMode::On => Detection::forced(true),
            MouseMode::Off => Detection::forced(false),
        }
    }
}

// Get home directory
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("USERPROFILE")
        .or_else(|| std::env::var_os("HOME"))
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}
