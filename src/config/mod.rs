// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[player]` - Skip step, auto-hide delay, initial volume and speed menu
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set the `ICED_REEL_CONFIG_DIR` environment variable
//! 4. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_reel::config;
//!
//! let (mut config, _warning) = config::load();
//! config.player.skip_step_secs = Some(10.0);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::ui::HideDelay;
use crate::domain::video::{PlaybackSpeed, SkipStep, Volume};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Player behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerConfig {
    /// Seconds skipped by the skip buttons and the arrow keys.
    #[serde(
        default = "default_skip_step_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub skip_step_secs: Option<f64>,

    /// Seconds of mouse inactivity before the chrome hides.
    #[serde(
        default = "default_hide_delay_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub hide_delay_secs: Option<u32>,

    /// Volume applied when the player is mounted (0.0 to 1.0).
    #[serde(default = "default_volume", skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,

    /// Rates offered by the speed menu.
    #[serde(
        default = "default_speed_options",
        skip_serializing_if = "Option::is_none"
    )]
    pub speed_options: Option<Vec<f64>>,

    /// Rate selected when the player is mounted.
    #[serde(
        default = "default_default_speed",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_speed: Option<f64>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            skip_step_secs: default_skip_step_secs(),
            hide_delay_secs: default_hide_delay_secs(),
            volume: default_volume(),
            speed_options: default_speed_options(),
            default_speed: default_default_speed(),
        }
    }
}

impl PlayerConfig {
    #[must_use]
    pub fn skip_step(&self) -> SkipStep {
        SkipStep::new(self.skip_step_secs.unwrap_or(DEFAULT_SKIP_STEP_SECS))
    }

    #[must_use]
    pub fn hide_delay(&self) -> HideDelay {
        HideDelay::new(self.hide_delay_secs.unwrap_or(DEFAULT_HIDE_DELAY_SECS))
    }

    #[must_use]
    pub fn volume(&self) -> Volume {
        Volume::new(self.volume.unwrap_or(DEFAULT_VOLUME))
    }

    #[must_use]
    pub fn default_speed(&self) -> PlaybackSpeed {
        PlaybackSpeed::new(self.default_speed.unwrap_or(DEFAULT_PLAYBACK_SPEED))
    }

    /// Speed menu entries; an empty or missing list yields the built-in presets.
    #[must_use]
    pub fn speed_options(&self) -> Vec<PlaybackSpeed> {
        let raw = match self.speed_options.as_deref() {
            Some(list) if !list.is_empty() => list,
            _ => DEFAULT_SPEED_OPTIONS,
        };
        raw.iter().copied().map(PlaybackSpeed::new).collect()
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Player behaviour settings.
    #[serde(default)]
    pub player: PlayerConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_skip_step_secs() -> Option<f64> {
    Some(DEFAULT_SKIP_STEP_SECS)
}

fn default_hide_delay_secs() -> Option<u32> {
    Some(DEFAULT_HIDE_DELAY_SECS)
}

fn default_volume() -> Option<f64> {
    Some(DEFAULT_VOLUME)
}

fn default_speed_options() -> Option<Vec<f64>> {
    Some(DEFAULT_SPEED_OPTIONS.to_vec())
}

fn default_default_speed() -> Option<f64> {
    Some(DEFAULT_PLAYBACK_SPEED)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), "failed to load config: {err}");
                    return (
                        Config::default(),
                        Some(format!("Ignoring {}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
