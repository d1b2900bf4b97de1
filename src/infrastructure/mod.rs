// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`clock_media`]: Wall-clock media element (implements [`MediaElement`])
//! - [`ffmpeg`]: Metadata probing via `FFmpeg` (implements [`MediaProbe`])
//! - [`picker`]: Native file dialog via `rfd` (implements [`SourcePicker`])
//!
//! [`MediaElement`]: crate::application::port::MediaElement
//! [`MediaProbe`]: crate::application::port::MediaProbe
//! [`SourcePicker`]: crate::application::port::SourcePicker

pub mod clock_media;
pub mod ffmpeg;
pub mod picker;

pub use clock_media::ClockMedia;
pub use ffmpeg::FfmpegProbe;
pub use picker::RfdSourcePicker;
