// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for video playback values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Volume
// =============================================================================

/// Volume bounds (0.0 to 1.0, the media element range).
pub mod volume_bounds {
    /// Minimum volume level.
    pub const MIN: f64 = 0.0;
    /// Maximum volume level.
    pub const MAX: f64 = 1.0;
    /// Default volume level.
    pub const DEFAULT: f64 = 1.0;
    /// Scale of the volume slider (0–100).
    pub const SLIDER_SCALE: f64 = 100.0;
}

/// Volume level, guaranteed to be within valid range (0.0–1.0).
///
/// This newtype enforces validity at the type level, making it impossible
/// to create an invalid volume value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f64);

impl Volume {
    /// Silence.
    pub const MUTED: Self = Self(volume_bounds::MIN);
    /// Full volume.
    pub const FULL: Self = Self(volume_bounds::MAX);

    /// Creates a new volume level, clamping to valid range.
    ///
    /// `NaN` is treated as silence.
    #[must_use]
    pub fn new(volume: f64) -> Self {
        if volume.is_nan() {
            return Self::MUTED;
        }
        Self(volume.clamp(volume_bounds::MIN, volume_bounds::MAX))
    }

    /// Creates a volume from a slider position (0–100).
    #[must_use]
    pub fn from_slider(position: f64) -> Self {
        Self::new(position / volume_bounds::SLIDER_SCALE)
    }

    /// Returns the volume value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the slider position (0–100) for this volume.
    #[must_use]
    pub fn slider_position(self) -> f64 {
        self.0 * volume_bounds::SLIDER_SCALE
    }

    /// Returns true if the volume is exactly zero.
    #[must_use]
    pub fn is_muted(self) -> bool {
        self.0 == volume_bounds::MIN
    }

    /// Returns true if the volume is exactly full.
    #[must_use]
    pub fn is_full(self) -> bool {
        self.0 == volume_bounds::MAX
    }

    /// Mute button behaviour: full volume mutes, any other level (including a
    /// slider-driven zero) jumps to full volume. No previous level is kept.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_full() {
            Self::MUTED
        } else {
            Self::FULL
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(volume_bounds::DEFAULT)
    }
}

// =============================================================================
// PlaybackSpeed
// =============================================================================

/// Playback speed bounds (0.1x to 8.0x).
pub mod speed_bounds {
    /// Minimum playback speed (0.1x = ten times slower).
    pub const MIN: f64 = 0.1;
    /// Maximum playback speed (8x = eight times faster).
    pub const MAX: f64 = 8.0;
    /// Default playback speed (1.0 = normal speed).
    pub const DEFAULT: f64 = 1.0;
    /// Entries of the speed menu.
    pub const PRESETS: &[f64] = &[0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 2.0];
}

/// Playback speed value, guaranteed to be within valid range (0.1x - 8.0x).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSpeed(f64);

impl PlaybackSpeed {
    /// Creates a new playback speed, clamping to valid range.
    #[must_use]
    pub fn new(speed: f64) -> Self {
        if speed.is_nan() {
            return Self::default();
        }
        Self(speed.clamp(speed_bounds::MIN, speed_bounds::MAX))
    }

    /// Returns the speed value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true if both speeds are the same menu entry.
    #[must_use]
    pub fn same_as(self, other: Self) -> bool {
        (self.0 - other.0).abs() < 0.001
    }

    /// Label shown in the speed menu, e.g. `1.5x`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{}x", self.0)
    }
}

impl Default for PlaybackSpeed {
    fn default() -> Self {
        Self(speed_bounds::DEFAULT)
    }
}

// =============================================================================
// SkipStep
// =============================================================================

/// Skip step bounds (0.5 to 30.0 seconds).
pub mod skip_step_bounds {
    /// Minimum skip step in seconds.
    pub const MIN: f64 = 0.5;
    /// Maximum skip step in seconds.
    pub const MAX: f64 = 30.0;
    /// Default skip step in seconds (skip buttons and arrow keys).
    pub const DEFAULT: f64 = 5.0;
}

/// Skip step in seconds used by the skip buttons and arrow keys.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (0.5–30.0 seconds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkipStep(f64);

impl SkipStep {
    /// Creates a new skip step value, clamping to valid range.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(skip_step_bounds::MIN, skip_step_bounds::MAX))
    }

    /// Returns the value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the step as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f64(self.0)
    }
}

impl Default for SkipStep {
    fn default() -> Self {
        Self(skip_step_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================
