// SPDX-License-Identifier: MPL-2.0
//! Video playback state machine.
//!
//! `Unset` only leaves through the first toggle, once a source has been bound.
//! After that the state flips between `Paused` and `Playing`.

/// Represents the current playback state of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// No media source has been bound yet.
    #[default]
    Unset,
    /// Source bound, playback paused.
    Paused,
    /// Source bound, playback running.
    Playing,
}

impl PlaybackState {
    /// Returns true if the video is currently playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if the video is paused.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Returns true if no source has been bound yet.
    #[must_use]
    pub fn is_unset(self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns the state reached by a play/pause toggle.
    ///
    /// A toggle from `Unset` starts playback; callers must bind a source first.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Unset | Self::Paused => Self::Playing,
            Self::Playing => Self::Paused,
        }
    }
}
