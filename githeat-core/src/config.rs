//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/githeat/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/githeat/` (~/.config/githeat/)
//! - State/Logs: `$XDG_STATE_HOME/githeat/` (~/.local/state/githeat/)

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Percentile markers used for the intensity ladder.
pub const DEFAULT_PERCENTILE_MARKERS: [u8; 10] = [20, 30, 40, 50, 60, 70, 80, 90, 95, 99];

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

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Analytics configuration
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Tunables for one analysis pass
#[derive(Debug, Deserialize, Clone)]
pub struct AnalyticsConfig {
    /// Percentile markers (1-100) computed over active days
    #[serde(default = "default_percentile_markers")]
    pub percentile_markers: Vec<u8>,

    /// Number of pinned languages to report
    #[serde(default = "default_top_languages")]
    pub top_languages: usize,

    /// Number of timeline repos to pass through
    #[serde(default = "default_top_repos")]
    pub top_repos: usize,

    /// Number of achievement badges to pass through
    #[serde(default = "default_achievements")]
    pub achievements: usize,

    /// Minimum source level for a day to join the high-activity island
    #[serde(default = "default_island_min_level")]
    pub island_min_level: u8,

    /// Maximum count for a day to join the slump island
    #[serde(default = "default_slump_island_max_count")]
    pub slump_island_max_count: u32,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            percentile_markers: default_percentile_markers(),
            top_languages: default_top_languages(),
            top_repos: default_top_repos(),
            achievements: default_achievements(),
            island_min_level: default_island_min_level(),
            slump_island_max_count: default_slump_island_max_count(),
        }
    }
}

impl AnalyticsConfig {
    /// Validate configuration, returning error message if invalid
    pub fn validate(&self) -> Result<()> {
        if let Some(bad) = self
            .percentile_markers
            .iter()
            .find(|m| !(1..=100).contains(*m))
        {
            return Err(Error::Config(format!(
                "analytics.percentile_markers must be between 1 and 100, got {}",
                bad
            )));
        }
        if !(1..=4).contains(&self.island_min_level) {
            return Err(Error::Config(
                "analytics.island_min_level must be between 1 and 4".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_percentile_markers() -> Vec<u8> {
    DEFAULT_PERCENTILE_MARKERS.to_vec()
}

fn default_top_languages() -> usize {
    2
}

fn default_top_repos() -> usize {
    3
}

fn default_achievements() -> usize {
    4
}

fn default_island_min_level() -> u8 {
    2
}

fn default_slump_island_max_count() -> u32 {
    1
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
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
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        config.analytics.validate()?;
        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/githeat/config.toml` (~/.config/githeat/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("githeat").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/githeat/` (~/.local/state/githeat/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("githeat")
    }

    /// Returns the log file path
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("githeat.log")
    }
}
