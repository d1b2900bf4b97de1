// SPDX-License-Identifier: MPL-2.0
//! Tunables applied when a player is mounted.

use crate::config::PlayerConfig;
use crate::domain::media::MediaFilter;
use crate::domain::ui::HideDelay;
use crate::domain::video::{PlaybackSpeed, SkipStep, Volume};

/// Behaviour settings of a [`PlayerController`](super::PlayerController).
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSettings {
    /// Seconds moved by the skip controls and the arrow keys.
    pub skip_step: SkipStep,
    /// Inactivity before the chrome hides.
    pub hide_delay: HideDelay,
    /// Volume set on the media element at mount.
    pub volume: Volume,
    /// Rate set on the media element at mount.
    pub speed: PlaybackSpeed,
    /// Files offered by the source picker.
    pub filter: MediaFilter,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            skip_step: SkipStep::default(),
            hide_delay: HideDelay::default(),
            volume: Volume::default(),
            speed: PlaybackSpeed::default(),
            filter: MediaFilter::from_accept("video/*"),
        }
    }
}

impl From<&PlayerConfig> for PlayerSettings {
    fn from(config: &PlayerConfig) -> Self {
        Self {
            skip_step: config.skip_step(),
            hide_delay: config.hide_delay(),
            volume: config.volume(),
            speed: config.default_speed(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn defaults_match_the_stock_player() {
        let settings = PlayerSettings::default();
        assert_abs_diff_eq!(settings.skip_step.value(), 5.0);
        assert_eq!(settings.hide_delay.value(), 5);
        assert!(settings.volume.is_full());
        assert_eq!(settings.filter, MediaFilter::video());
    }

    #[test]
    fn config_values_are_carried_over() {
        let config = PlayerConfig {
            skip_step_secs: Some(10.0),
            hide_delay_secs: Some(2),
            volume: Some(0.25),
            default_speed: Some(1.5),
            ..PlayerConfig::default()
        };
        let settings = PlayerSettings::from(&config);

        assert_abs_diff_eq!(settings.skip_step.value(), 10.0);
        assert_eq!(settings.hide_delay.value(), 2);
        assert_abs_diff_eq!(settings.volume.value(), 0.25);
        assert_abs_diff_eq!(settings.speed.value(), 1.5);
    }
}
