//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/sessionlens/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/sessionlens/` (~/.config/sessionlens/)
//! - Data: `$XDG_DATA_HOME/sessionlens/` (~/.local/share/sessionlens/)
//! - State/Logs: `$XDG_STATE_HOME/sessionlens/` (~/.local/state/sessionlens/)
//!
//! The projects root being scanned defaults to `~/.claude/projects`, the
//! location where the assistant writes its session logs.

use crate::error::{Error, Result};
use crate::keywords::KeywordSets;
use serde::Deserialize;
use std::path::PathBuf;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_DATA_HOME or ~/.local/share
fn xdg_data_home() -> PathBuf {
    std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/share"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Override for the projects root directory being scanned
    pub projects_root: Option<PathBuf>,

    /// Override for the report output path used by export
    pub output: Option<PathBuf>,

    /// Keyword tables for the analysis heuristics
    pub keywords: KeywordSets,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/sessionlens/config.toml` (~/.config/sessionlens/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("sessionlens").join("config.toml")
    }

    /// Returns the data directory path (for the exported report)
    ///
    /// `$XDG_DATA_HOME/sessionlens/` (~/.local/share/sessionlens/)
    pub fn data_dir() -> PathBuf {
        xdg_data_home().join("sessionlens")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/sessionlens/` (~/.local/state/sessionlens/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("sessionlens")
    }

    /// Returns the projects root to scan, honoring the config override.
    ///
    /// Defaults to `~/.claude/projects`.
    pub fn projects_root(&self) -> PathBuf {
        self.projects_root
            .clone()
            .unwrap_or_else(|| home_dir().join(".claude").join("projects"))
    }

    /// Returns the report output path, honoring the config override.
    ///
    /// Defaults to `$XDG_DATA_HOME/sessionlens/insights.json`.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| Self::data_dir().join("insights.json"))
    }
}
