//! Configuration management for sitrep.
//!
//! Loads configuration from ${SITREP_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use crate::catalog::{self, ServiceRecord};
use crate::status::Status;

/// Returns the default config template content.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for sitrep configuration and data directories.
    //!
    //! SITREP_HOME resolution order:
    //! 1. SITREP_HOME environment variable (if set)
    //! 2. ~/.config/sitrep (default)

    use std::path::PathBuf;

    /// Returns the sitrep home directory.
    ///
    /// Checks SITREP_HOME env var first, falls back to ~/.config/sitrep
    pub fn sitrep_home() -> PathBuf {
        if let Ok(home) = std::env::var("SITREP_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("sitrep"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        sitrep_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        sitrep_home().join("logs")
    }
}

/// Default value for serde when a metric field is missing.
fn default_metric_text() -> String {
    "N/A".to_string()
}

/// One `[[systems]]` entry in the config file.
///
/// Entries are display data only; nothing probes the named system. An
/// unrecognized `status` string loads as `unknown` rather than failing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SystemEntry {
    pub name: String,
    pub description: String,
    pub status: Status,
    #[serde(default = "default_metric_text")]
    pub uptime: String,
    #[serde(default = "default_metric_text")]
    pub response_time: String,
    /// Age of the last check at startup, in seconds.
    pub last_checked_secs_ago: i64,
}

impl Default for SystemEntry {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            status: Status::default(),
            uptime: default_metric_text(),
            response_time: default_metric_text(),
            last_checked_secs_ago: 0,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Heading shown at the top of the dashboard
    pub title: String,

    /// Line shown under the heading
    pub subtitle: String,

    /// Systems to display; empty means the built-in demo catalog
    #[serde(default)]
    pub systems: Vec<SystemEntry>,
}

impl Config {
    const DEFAULT_TITLE: &str = "System Status";
    const DEFAULT_SUBTITLE: &str =
        "Real-time monitoring and health status of all our services and infrastructure";

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Materializes the display records for this run.
    ///
    /// Config entries become records with check times relative to the
    /// startup instant; an empty list falls back to the built-in catalog.
    /// The returned list is never mutated afterwards.
    pub fn records(&self, now: DateTime<Utc>) -> Vec<ServiceRecord> {
        if self.systems.is_empty() {
            return catalog::builtin(now);
        }

        self.systems
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                ServiceRecord::new(
                    index as u32 + 1,
                    &entry.name,
                    &entry.description,
                    entry.status,
                    &entry.uptime,
                    &entry.response_time,
                    now - Duration::seconds(entry.last_checked_secs_ago),
                )
            })
            .collect()
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: Self::DEFAULT_TITLE.to_string(),
            subtitle: Self::DEFAULT_SUBTITLE.to_string(),
            systems: Vec::new(),
        }
    }
}
