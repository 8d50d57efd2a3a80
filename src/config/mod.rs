// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user overrides to a `settings.toml` file.
//!
//! Every field is optional; missing fields fall back to the constants in
//! [`defaults`]. The state machines never read this file themselves — the
//! resolved values are passed to them at construction time.
//!
//! # Examples
//!
//! ```no_run
//! use unboxed::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.lock_pin = Some("1234".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;
pub use defaults::*;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Unboxed";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tear_open_threshold: Option<f32>,
    #[serde(default)]
    pub swipe_advance_threshold: Option<f32>,
    #[serde(default)]
    pub reveal_delay_ms: Option<u64>,
    #[serde(default)]
    pub lock_pin: Option<String>,
    #[serde(default)]
    pub audio_volume: Option<f32>,
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

/// Clamps a configured audio volume into the supported range so persisted
/// configs cannot request nonsensical gain.
pub fn clamp_volume(value: f32) -> f32 {
    value.clamp(MIN_AUDIO_VOLUME, MAX_AUDIO_VOLUME)
}

/// Validates a configured lock PIN. The gate only ever compares sanitized
/// digit buffers, so an empty or non-digit override falls back to the
/// default instead of producing a gate that unlocks on an empty submission
/// or can never match.
pub fn sanitize_lock_pin(value: String) -> String {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        value
    } else {
        DEFAULT_LOCK_PIN.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_overrides() {
        let config = Config {
            tear_open_threshold: Some(150.0),
            swipe_advance_threshold: Some(80.0),
            reveal_delay_ms: Some(500),
            lock_pin: Some("9999".to_string()),
            audio_volume: Some(0.3),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.tear_open_threshold, config.tear_open_threshold);
        assert_eq!(loaded.swipe_advance_threshold, config.swipe_advance_threshold);
        assert_eq!(loaded.reveal_delay_ms, config.reveal_delay_ms);
        assert_eq!(loaded.lock_pin, config.lock_pin);
        assert_eq!(loaded.audio_volume, config.audio_volume);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.lock_pin.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");
        let config = Config {
            reveal_delay_ms: Some(1000),
            ..Config::default()
        };

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_overrides_nothing() {
        let config = Config::default();
        assert!(config.tear_open_threshold.is_none());
        assert!(config.swipe_advance_threshold.is_none());
        assert!(config.reveal_delay_ms.is_none());
        assert!(config.lock_pin.is_none());
        assert!(config.audio_volume.is_none());
    }

    #[test]
    fn clamp_volume_stays_in_range() {
        assert_eq!(clamp_volume(-1.0), MIN_AUDIO_VOLUME);
        assert_eq!(clamp_volume(2.0), MAX_AUDIO_VOLUME);
        assert_eq!(clamp_volume(0.5), 0.5);
    }

    #[test]
    fn sanitize_lock_pin_accepts_digit_overrides() {
        assert_eq!(sanitize_lock_pin("9999".to_string()), "9999");
        assert_eq!(sanitize_lock_pin("000000".to_string()), "000000");
    }

    #[test]
    fn sanitize_lock_pin_rejects_empty_and_non_digit_overrides() {
        assert_eq!(sanitize_lock_pin(String::new()), DEFAULT_LOCK_PIN);
        assert_eq!(sanitize_lock_pin("25o4".to_string()), DEFAULT_LOCK_PIN);
        assert_eq!(sanitize_lock_pin("¼".to_string()), DEFAULT_LOCK_PIN);
    }
}
