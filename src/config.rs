// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! timing overrides to a `settings.toml` file.
//!
//! Every field is optional; absent or unparseable values fall back to the
//! defaults below, so a stale or hand-edited config file never prevents
//! startup.
//!
//! # Examples
//!
//! ```no_run
//! use toastbox::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.display_ms = Some(3000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::notifications::Timings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "toastbox";

/// How long a toast stays fully visible before its exit begins.
pub const DEFAULT_DISPLAY_MS: u64 = 5000;
/// Delay between mounting a toast and starting its entry transition.
/// Starting a transition in the same frame as insertion is unreliable in
/// presentation engines, so the reveal is deferred by one short beat.
pub const DEFAULT_ENTER_DELAY_MS: u64 = 100;
/// Duration of the exit transition before the toast is removed entirely.
pub const DEFAULT_EXIT_MS: u64 = 300;
/// Quiet period for debounced resize handling.
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 250;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display_ms: Option<u64>,
    #[serde(default)]
    pub enter_delay_ms: Option<u64>,
    #[serde(default)]
    pub exit_ms: Option<u64>,
    #[serde(default)]
    pub resize_debounce_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_ms: Some(DEFAULT_DISPLAY_MS),
            enter_delay_ms: Some(DEFAULT_ENTER_DELAY_MS),
            exit_ms: Some(DEFAULT_EXIT_MS),
            resize_debounce_ms: Some(DEFAULT_RESIZE_DEBOUNCE_MS),
        }
    }
}

impl Config {
    /// Builds the toast lifecycle timings from this configuration.
    #[must_use]
    pub fn timings(&self) -> Timings {
        Timings {
            enter_delay: Duration::from_millis(
                self.enter_delay_ms.unwrap_or(DEFAULT_ENTER_DELAY_MS),
            ),
            display: Duration::from_millis(self.display_ms.unwrap_or(DEFAULT_DISPLAY_MS)),
            exit: Duration::from_millis(self.exit_ms.unwrap_or(DEFAULT_EXIT_MS)),
        }
    }

    /// Returns the quiet period for debounced resize handling.
    #[must_use]
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(
            self.resize_debounce_ms
                .unwrap_or(DEFAULT_RESIZE_DEBOUNCE_MS),
        )
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_timings() {
        let config = Config {
            display_ms: Some(2500),
            enter_delay_ms: Some(50),
            exit_ms: Some(150),
            resize_debounce_ms: Some(400),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.display_ms, config.display_ms);
        assert_eq!(loaded.enter_delay_ms, config.enter_delay_ms);
        assert_eq!(loaded.exit_ms, config.exit_ms);
        assert_eq!(loaded.resize_debounce_ms, config.resize_debounce_ms);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "display_ms = \"not a number\"").expect("failed to write");

        let loaded = load_from_path(&config_path).expect("load should not fail");
        assert_eq!(loaded.display_ms, Some(DEFAULT_DISPLAY_MS));
    }

    #[test]
    fn timings_fall_back_to_defaults_for_unset_fields() {
        let config = Config {
            display_ms: None,
            enter_delay_ms: None,
            exit_ms: None,
            resize_debounce_ms: None,
        };
        let timings = config.timings();
        assert_eq!(timings.display, Duration::from_millis(DEFAULT_DISPLAY_MS));
        assert_eq!(
            timings.enter_delay,
            Duration::from_millis(DEFAULT_ENTER_DELAY_MS)
        );
        assert_eq!(timings.exit, Duration::from_millis(DEFAULT_EXIT_MS));
        assert_eq!(
            config.resize_debounce(),
            Duration::from_millis(DEFAULT_RESIZE_DEBOUNCE_MS)
        );
    }

    #[test]
    fn timings_use_configured_values() {
        let config = Config {
            display_ms: Some(1000),
            enter_delay_ms: Some(20),
            exit_ms: Some(80),
            resize_debounce_ms: Some(10),
        };
        let timings = config.timings();
        assert_eq!(timings.display, Duration::from_millis(1000));
        assert_eq!(timings.enter_delay, Duration::from_millis(20));
        assert_eq!(timings.exit, Duration::from_millis(80));
    }
}
