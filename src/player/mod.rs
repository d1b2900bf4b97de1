// SPDX-License-Identifier: MPL-2.0
//! Toolkit-agnostic video player controller.
//!
//! The [`PlayerController`] owns a [`MediaElement`] and turns input events
//! into media calls and a [`Chrome`] presentation model. It never awaits:
//! asynchronous work is returned as [`Effect`]s and completed by settle
//! events, so every dispatch runs to completion.
//!
//! # Example
//!
//! ```ignore
//! use iced_reel::player::{ControlEvent, PlayerController, PlayerSettings};
//!
//! let mut player = PlayerController::mount(&mut host, ".player", PlayerSettings::default())?;
//! let dispatch = player.dispatch(ControlEvent::TogglePlayback);
//! for effect in dispatch.effects {
//!     // run the effect, then dispatch its settle event
//! }
//! ```
//!
//! [`MediaElement`]: crate::application::port::MediaElement

pub mod auto_hide;
pub mod chrome;
pub mod controller;
pub mod events;
pub mod markup;
pub mod pip;
pub mod settings;
pub mod speed_menu;
pub mod time_format;
pub mod timeline;
pub mod volume_icon;

pub use auto_hide::{AutoHide, HideTimer};
pub use chrome::{Chrome, Fill, FullscreenIcon, Hint, PlaybackIcon, SpeedOptionView};
pub use controller::PlayerController;
pub use events::{
    ClickTarget, ControlEvent, Dispatch, Effect, Key, PageEvent, PlayerEvent, TimelineEvent,
    VideoEvent,
};
pub use markup::{Control, ControlSet, PlayerHost, PlayerMount};
pub use pip::{DisplayCapabilities, PipControl, PipTicket};
pub use settings::PlayerSettings;
pub use speed_menu::SpeedMenu;
pub use time_format::{duration_label, format_time, progress_percent};
pub use timeline::{time_from_pointer, BarGeometry, PointerPosition, Preview, ScrubState};
pub use volume_icon::VolumeIcon;
