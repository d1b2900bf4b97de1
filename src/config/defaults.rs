// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Skip**: Skip buttons and arrow-key seeking
//! - **Interface**: Chrome auto-hide delay
//! - **Volume**: Initial playback volume
//! - **Speed**: Speed menu entries

use crate::domain::ui::newtypes::hide_delay_bounds;
use crate::domain::video::newtypes::{skip_step_bounds, speed_bounds, volume_bounds};

// ==========================================================================
// Skip Defaults
// ==========================================================================

/// Default skip step in seconds (skip buttons and arrow keys).
pub const DEFAULT_SKIP_STEP_SECS: f64 = skip_step_bounds::DEFAULT;

/// Minimum skip step in seconds.
pub const MIN_SKIP_STEP_SECS: f64 = skip_step_bounds::MIN;

/// Maximum skip step in seconds.
pub const MAX_SKIP_STEP_SECS: f64 = skip_step_bounds::MAX;

// ==========================================================================
// Interface Defaults
// ==========================================================================

/// Default inactivity delay before the chrome is hidden (in seconds).
pub const DEFAULT_HIDE_DELAY_SECS: u32 = hide_delay_bounds::DEFAULT_SECS;

/// Minimum hide delay (in seconds).
pub const MIN_HIDE_DELAY_SECS: u32 = hide_delay_bounds::MIN_SECS;

/// Maximum hide delay (in seconds).
pub const MAX_HIDE_DELAY_SECS: u32 = hide_delay_bounds::MAX_SECS;

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default playback volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f64 = volume_bounds::DEFAULT;

// ==========================================================================
// Speed Defaults
// ==========================================================================

/// Speed that is active when the player starts.
pub const DEFAULT_PLAYBACK_SPEED: f64 = speed_bounds::DEFAULT;

/// Entries of the speed menu.
pub const DEFAULT_SPEED_OPTIONS: &[f64] = speed_bounds::PRESETS;

// ==========================================================================
// Media Clock
// ==========================================================================

/// Minimum interval between two `timeupdate` events while playing (ms).
pub const TIME_UPDATE_INTERVAL_MS: u64 = 250;

/// Interval of the tick driving the media clock and the hide timer (ms).
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SKIP_STEP_SECS > 0.0);
    assert!(MAX_SKIP_STEP_SECS >= MIN_SKIP_STEP_SECS);
    assert!(DEFAULT_SKIP_STEP_SECS >= MIN_SKIP_STEP_SECS);
    assert!(DEFAULT_SKIP_STEP_SECS <= MAX_SKIP_STEP_SECS);

    assert!(MIN_HIDE_DELAY_SECS > 0);
    assert!(MAX_HIDE_DELAY_SECS >= MIN_HIDE_DELAY_SECS);
    assert!(DEFAULT_HIDE_DELAY_SECS >= MIN_HIDE_DELAY_SECS);
    assert!(DEFAULT_HIDE_DELAY_SECS <= MAX_HIDE_DELAY_SECS);

    assert!(DEFAULT_VOLUME >= 0.0);
    assert!(DEFAULT_VOLUME <= 1.0);

    assert!(!DEFAULT_SPEED_OPTIONS.is_empty());
    assert!(TICK_INTERVAL_MS < TIME_UPDATE_INTERVAL_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_defaults_are_valid() {
        assert_eq!(DEFAULT_SKIP_STEP_SECS, 5.0);
        assert!(DEFAULT_SKIP_STEP_SECS >= MIN_SKIP_STEP_SECS);
        assert!(DEFAULT_SKIP_STEP_SECS <= MAX_SKIP_STEP_SECS);
    }

    #[test]
    fn hide_delay_defaults_are_valid() {
        assert_eq!(DEFAULT_HIDE_DELAY_SECS, 5);
        assert!(DEFAULT_HIDE_DELAY_SECS >= MIN_HIDE_DELAY_SECS);
        assert!(DEFAULT_HIDE_DELAY_SECS <= MAX_HIDE_DELAY_SECS);
    }

    #[test]
    fn default_speed_is_a_menu_entry() {
        assert!(DEFAULT_SPEED_OPTIONS
            .iter()
            .any(|&speed| (speed - DEFAULT_PLAYBACK_SPEED).abs() < f64::EPSILON));
    }
}
