// SPDX-License-Identifier: MPL-2.0
//! Inputs and outputs of the player controller.

use super::pip::PipTicket;
use super::timeline::PointerPosition;
use crate::application::port::MediaEvent;
use crate::domain::error::DisplayError;
use crate::domain::media::{MediaFilter, MediaSource};
use std::time::Instant;

/// Events raised by or on the video element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoEvent {
    Click,
    DoubleClick,
    LoadedMetadata,
    TimeUpdate,
    VolumeChange,
    EnterPictureInPicture,
    LeavePictureInPicture,
    Emptied,
}

impl From<MediaEvent> for VideoEvent {
    fn from(event: MediaEvent) -> Self {
        match event {
            MediaEvent::LoadedMetadata => VideoEvent::LoadedMetadata,
            MediaEvent::TimeUpdate => VideoEvent::TimeUpdate,
            MediaEvent::VolumeChange => VideoEvent::VolumeChange,
            MediaEvent::Emptied => VideoEvent::Emptied,
        }
    }
}

/// Activations of the player controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    TogglePlayback,
    SkipBackward,
    SkipForward,
    /// Volume slider input, 0 to 100.
    VolumeInput(f64),
    ToggleVolume,
    OpenSpeedMenu,
    /// Speed menu entry, by position.
    SelectSpeed(usize),
    TogglePictureInPicture,
    ToggleFullscreen,
}

/// Pointer activity on the seek bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimelineEvent {
    PointerDown(PointerPosition),
    PointerMove(PointerPosition),
    PointerUp,
}

/// What a page-level click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    SpeedToggle,
    Elsewhere,
}

/// Keys the page-level listener reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    ArrowRight,
    ArrowLeft,
}

/// Events observed on the whole page, not just the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    Click(ClickTarget),
    KeyDown(Key),
}

/// Everything the controller can be told.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    Video(VideoEvent),
    Control(ControlEvent),
    Timeline(TimelineEvent),
    Page(PageEvent),
    /// Mouse movement over the player.
    MouseMove(Instant),
    /// The player entered or left fullscreen.
    FullscreenChange(bool),
    /// Periodic clock tick.
    Tick(Instant),
    /// The source picker resolved.
    SourcePicked(Vec<MediaSource>),
    /// A fullscreen request or exit settled.
    FullscreenSettled(Result<(), DisplayError>),
    /// A picture-in-picture request or exit settled.
    PictureInPictureSettled(PipTicket, Result<(), DisplayError>),
}

impl From<VideoEvent> for PlayerEvent {
    fn from(event: VideoEvent) -> Self {
        PlayerEvent::Video(event)
    }
}

impl From<ControlEvent> for PlayerEvent {
    fn from(event: ControlEvent) -> Self {
        PlayerEvent::Control(event)
    }
}

impl From<TimelineEvent> for PlayerEvent {
    fn from(event: TimelineEvent) -> Self {
        PlayerEvent::Timeline(event)
    }
}

impl From<PageEvent> for PlayerEvent {
    fn from(event: PageEvent) -> Self {
        PlayerEvent::Page(event)
    }
}

/// Asynchronous work the host performs on the controller's behalf.
///
/// Each effect is answered by exactly one settle event.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Open the source picker; answer with [`PlayerEvent::SourcePicked`].
    PickSource { filter: MediaFilter, multiple: bool },
    /// Answer with [`PlayerEvent::FullscreenSettled`].
    RequestFullscreen,
    /// Answer with [`PlayerEvent::FullscreenSettled`].
    ExitFullscreen,
    /// Answer with [`PlayerEvent::PictureInPictureSettled`].
    RequestPictureInPicture(PipTicket),
    /// Answer with [`PlayerEvent::PictureInPictureSettled`].
    ExitPictureInPicture(PipTicket),
}

/// Outcome of delivering one event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dispatch {
    /// Work the host must start, in order.
    pub effects: Vec<Effect>,
    /// The event's default action must be suppressed.
    pub default_prevented: bool,
}

impl Dispatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty() && !self.default_prevented
    }
}
