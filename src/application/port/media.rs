// SPDX-License-Identifier: MPL-2.0
//! Media element port definition.
//!
//! The [`MediaElement`] trait is the playback surface the player controller
//! drives: a bound source, a position, a volume and a rate. Setters never
//! call back into the controller. Instead the element queues
//! [`MediaEvent`]s that the controller drains once the current event has
//! been handled.

use crate::domain::media::{MediaSource, ReadyState};
use crate::domain::video::{PlaybackSpeed, Volume};
use std::time::Instant;

/// Notifications a media element raises about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// Duration and dimensions are known.
    LoadedMetadata,
    /// The playback position changed.
    TimeUpdate,
    /// The volume changed.
    VolumeChange,
    /// The element lost its previous media.
    Emptied,
}

/// Port for the media element the player is bound to.
///
/// # Contract
///
/// - `set_current_time` clamps into `[0, duration]`
/// - `set_volume` raises [`MediaEvent::VolumeChange`] only when the value
///   actually changes
/// - Queued events come back from [`take_events`](Self::take_events) in the
///   order they were raised
pub trait MediaElement {
    /// Source currently bound to the element, if any.
    fn source(&self) -> Option<&MediaSource>;

    /// Binds a new source and resets the position to zero.
    fn set_source(&mut self, source: MediaSource);

    fn play(&mut self);

    fn pause(&mut self);

    fn is_paused(&self) -> bool;

    /// Playback position in seconds.
    fn current_time(&self) -> f64;

    /// Seeks to `secs`, clamped into `[0, duration]`.
    fn set_current_time(&mut self, secs: f64);

    /// Duration in seconds, `None` until metadata is loaded.
    fn duration(&self) -> Option<f64>;

    fn volume(&self) -> Volume;

    fn set_volume(&mut self, volume: Volume);

    fn playback_rate(&self) -> PlaybackSpeed;

    fn set_playback_rate(&mut self, rate: PlaybackSpeed);

    fn ready_state(&self) -> ReadyState;

    /// Whether the current media forbids picture-in-picture.
    fn disable_picture_in_picture(&self) -> bool {
        false
    }

    /// Lets clock-driven elements move their position forward.
    ///
    /// Elements backed by a real decoder can ignore this.
    fn advance(&mut self, _now: Instant) {}

    /// Removes and returns every queued event.
    fn take_events(&mut self) -> Vec<MediaEvent>;
}
