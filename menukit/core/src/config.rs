//! Configuration
//!
//! Two layers of configuration live here:
//!
//! - [`ManagerConfig`]: the manager's own startup knobs (entry page and
//!   entry delay), carried in code by the embedder.
//! - [`RuntimeToml`] + [`load_runtime_config`]: an optional TOML file
//!   for runtime drivers such as the demo binary, resolved under the
//!   XDG config directory.
//!
//! # Example Configuration
//!
//! ```toml
//! tick_hz = 30
//! entry_delay_ticks = 8
//! log_filter = "info,menukit_core=debug"
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default scheduler rate for runtime drivers, in ticks per second.
pub const DEFAULT_TICK_HZ: u64 = 30;

/// Startup configuration for a [`PageManager`](crate::PageManager).
#[derive(Clone, Copy, Debug)]
pub struct ManagerConfig<P> {
    /// Page auto-opened once at startup, if any.
    pub entry: Option<P>,
    /// Scheduler ticks to wait before requesting the entry page.
    pub entry_delay_ticks: u64,
}

impl<P> Default for ManagerConfig<P> {
    fn default() -> Self {
        Self {
            entry: None,
            entry_delay_ticks: 0,
        }
    }
}

impl<P> ManagerConfig<P> {
    /// Set the page auto-opened at startup.
    #[must_use]
    pub fn with_entry(mut self, entry: P) -> Self {
        self.entry = Some(entry);
        self
    }

    /// Set the delay, in scheduler ticks, before the entry page is
    /// requested.
    #[must_use]
    pub fn with_entry_delay(mut self, ticks: u64) -> Self {
        self.entry_delay_ticks = ticks;
        self
    }
}

/// Errors that can occur when loading the runtime configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML contents.
    #[error("failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Runtime driver settings loaded from the optional TOML file.
///
/// Every field is optional; missing fields fall back to defaults.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeToml {
    /// Scheduler rate in ticks per second.
    pub tick_hz: Option<u64>,
    /// Ticks to wait before requesting the entry page.
    pub entry_delay_ticks: Option<u64>,
    /// Log filter directive handed to the tracing subscriber.
    pub log_filter: Option<String>,
}

impl RuntimeToml {
    /// The wall-clock interval between scheduler ticks.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        let hz = self.tick_hz.unwrap_or(DEFAULT_TICK_HZ).max(1);
        Duration::from_millis(1000 / hz)
    }

    /// Entry delay in ticks, defaulting to zero.
    #[must_use]
    pub fn entry_delay(&self) -> u64 {
        self.entry_delay_ticks.unwrap_or(0)
    }
}

/// Default location of the runtime configuration file.
///
/// Follows the XDG Base Directory specification:
/// `$XDG_CONFIG_HOME/menukit/menukit.toml`, falling back to
/// `~/.config/menukit/menukit.toml`, or a bare relative path when no
/// home directory is known.
#[must_use]
pub fn default_config_path() -> PathBuf {
    if let Ok(config_home) = env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(config_home).join("menukit").join("menukit.toml");
    }
    if let Ok(home) = env::var("HOME") {
        return PathBuf::from(home)
            .join(".config")
            .join("menukit")
            .join("menukit.toml");
    }
    PathBuf::from("menukit.toml")
}

/// Load the runtime configuration from `path`.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] if the file cannot be read and
/// [`ConfigError::ParseError`] if it is not valid TOML.
pub fn load_runtime_config(path: &Path) -> Result<RuntimeToml, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&raw)?)
}
