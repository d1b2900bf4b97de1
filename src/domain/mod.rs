// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core player types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`VideoError`](error::VideoError),
//!   [`InitializationError`](error::InitializationError), [`DisplayError`](error::DisplayError))
//! - [`media`]: Media types ([`MediaSource`](media::MediaSource), [`MediaInfo`](media::MediaInfo),
//!   [`MediaFilter`](media::MediaFilter), [`ReadyState`](media::ReadyState))
//! - [`ui`]: UI value objects ([`HideDelay`](ui::HideDelay))
//! - [`video`]: Video playback types ([`PlaybackState`](video::PlaybackState),
//!   [`Volume`](video::Volume), [`PlaybackSpeed`](video::PlaybackSpeed), [`SkipStep`](video::SkipStep))

pub mod error;
pub mod media;
pub mod ui;
pub mod video;
