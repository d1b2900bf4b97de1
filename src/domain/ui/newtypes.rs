// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Hide Delay Bounds
// =============================================================================

/// Interface auto-hide delay bounds (1 to 30 seconds).
pub mod hide_delay_bounds {
    /// Minimum delay in seconds.
    pub const MIN_SECS: u32 = 1;
    /// Maximum delay in seconds.
    pub const MAX_SECS: u32 = 30;
    /// Default delay in seconds.
    pub const DEFAULT_SECS: u32 = 5;
}

// =============================================================================
// HideDelay
// =============================================================================

/// Inactivity delay before the player chrome is hidden.
///
/// # Example
///
/// ```
/// use iced_reel::domain::ui::HideDelay;
///
/// let delay = HideDelay::new(5);
/// assert_eq!(delay.value(), 5);
///
/// // Values outside range are clamped
/// assert_eq!(HideDelay::new(100).value(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideDelay(u32);

impl HideDelay {
    /// Creates a new hide delay, clamping to valid range.
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self(secs.clamp(hide_delay_bounds::MIN_SECS, hide_delay_bounds::MAX_SECS))
    }

    /// Returns the value in seconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl Default for HideDelay {
    fn default() -> Self {
        Self(hide_delay_bounds::DEFAULT_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(HideDelay::new(0).value(), hide_delay_bounds::MIN_SECS);
        assert_eq!(HideDelay::new(100).value(), hide_delay_bounds::MAX_SECS);
    }

    #[test]
    fn default_is_five_seconds() {
        assert_eq!(HideDelay::default().as_duration(), Duration::from_secs(5));
    }
}
