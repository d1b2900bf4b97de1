// SPDX-License-Identifier: MPL-2.0
//! The player markup contract: what a host must provide to mount a player.
//!
//! A host resolves a selector to a container holding a video element and a
//! fixed set of named controls. The controller checks the whole set before
//! wiring anything, so a missing piece never leaves a half-bound player.

use super::pip::DisplayCapabilities;
use crate::application::port::MediaElement;
use crate::domain::error::InitializationError;
use crate::domain::video::PlaybackSpeed;

/// Named controls of the player markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    TogglePlayback,
    PlayIcon,
    PauseIcon,
    SkipBackward,
    SkipForward,
    VolumeInput,
    ToggleVolume,
    SpeedToggle,
    SpeedOptions,
    PictureInPicture,
    Fullscreen,
    Timeline,
    TimelineCurrent,
    TimelineGhost,
    Hint,
    Duration,
}

impl Control {
    /// Every control, in the order they are checked at mount.
    pub const ALL: [Control; 16] = [
        Control::TogglePlayback,
        Control::PlayIcon,
        Control::PauseIcon,
        Control::SkipBackward,
        Control::SkipForward,
        Control::VolumeInput,
        Control::ToggleVolume,
        Control::SpeedToggle,
        Control::SpeedOptions,
        Control::PictureInPicture,
        Control::Fullscreen,
        Control::Timeline,
        Control::TimelineCurrent,
        Control::TimelineGhost,
        Control::Hint,
        Control::Duration,
    ];

    /// Name reported by [`InitializationError::MissingControl`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Control::TogglePlayback => "toggle-video",
            Control::PlayIcon => "play",
            Control::PauseIcon => "pause",
            Control::SkipBackward => "skip-backward",
            Control::SkipForward => "skip-forward",
            Control::VolumeInput => "volume-input",
            Control::ToggleVolume => "toggle-volume",
            Control::SpeedToggle => "speed",
            Control::SpeedOptions => "speed-options",
            Control::PictureInPicture => "pic-in-pic",
            Control::Fullscreen => "fullscreen",
            Control::Timeline => "line",
            Control::TimelineCurrent => "line-current",
            Control::TimelineGhost => "line-ghost",
            Control::Hint => "hint",
            Control::Duration => "duration",
        }
    }
}

/// Name reported when the speed menu has no entries.
pub const SPEED_OPTION: &str = "speed-option";

/// Controls found inside a player container.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlSet {
    controls: Vec<Control>,
    speed_options: Vec<PlaybackSpeed>,
}

impl ControlSet {
    /// The full control set with the given speed menu entries.
    #[must_use]
    pub fn standard(speed_options: Vec<PlaybackSpeed>) -> Self {
        Self {
            controls: Control::ALL.to_vec(),
            speed_options,
        }
    }

    /// Removes `control` from the set.
    #[must_use]
    pub fn without(mut self, control: Control) -> Self {
        self.controls.retain(|present| *present != control);
        self
    }

    #[must_use]
    pub fn contains(&self, control: Control) -> bool {
        self.controls.contains(&control)
    }

    #[must_use]
    pub fn speed_options(&self) -> &[PlaybackSpeed] {
        &self.speed_options
    }

    /// Checks that every control is present and the speed menu has entries.
    ///
    /// # Errors
    ///
    /// Returns [`InitializationError::MissingControl`] naming the first
    /// absent control.
    pub fn validate(&self) -> Result<(), InitializationError> {
        if let Some(missing) = Control::ALL.iter().find(|control| !self.contains(**control)) {
            return Err(InitializationError::MissingControl(missing.name()));
        }
        if self.speed_options.is_empty() {
            return Err(InitializationError::MissingControl(SPEED_OPTION));
        }
        Ok(())
    }
}

/// A container resolved by a host.
#[derive(Debug)]
pub struct PlayerMount<M> {
    /// The container's video element, if it has one.
    pub video: Option<M>,
    /// Controls found inside the container.
    pub controls: ControlSet,
}

/// Environment a player is mounted into.
pub trait PlayerHost {
    type Media: MediaElement;

    /// Resolves `selector` to a container, handing over its video element.
    fn query(&mut self, selector: &str) -> Option<PlayerMount<Self::Media>>;

    /// Display features available to the player.
    fn capabilities(&self) -> DisplayCapabilities;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speeds() -> Vec<PlaybackSpeed> {
        vec![PlaybackSpeed::new(1.0)]
    }

    #[test]
    fn standard_set_validates() {
        assert_eq!(ControlSet::standard(speeds()).validate(), Ok(()));
    }

    #[test]
    fn missing_control_is_named() {
        let controls = ControlSet::standard(speeds()).without(Control::VolumeInput);
        assert_eq!(
            controls.validate(),
            Err(InitializationError::MissingControl("volume-input"))
        );
    }

    #[test]
    fn first_missing_control_is_reported() {
        let controls = ControlSet::standard(speeds())
            .without(Control::Duration)
            .without(Control::PlayIcon);
        assert_eq!(
            controls.validate(),
            Err(InitializationError::MissingControl("play"))
        );
    }

    #[test]
    fn empty_speed_menu_is_missing_options() {
        assert_eq!(
            ControlSet::standard(Vec::new()).validate(),
            Err(InitializationError::MissingControl(SPEED_OPTION))
        );
    }

    #[test]
    fn control_names_are_unique() {
        let mut names: Vec<_> = Control::ALL.iter().map(|control| control.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Control::ALL.len());
    }
}
