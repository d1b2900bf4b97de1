// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`media`]: The media element driven by the player controller
//! - [`probe`]: Duration and frame size discovery
//! - [`picker`]: Source selection through a file dialog
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `FFmpeg` types)
//! - Media element methods are synchronous; changes are reported through
//!   queued [`MediaEvent`]s that the controller drains after every event
//! - The picker is the only asynchronous port and returns a boxed future
//!   the shell turns into an Iced `Task`

pub mod media;
pub mod picker;
pub mod probe;

pub use media::{MediaElement, MediaEvent};
pub use picker::SourcePicker;
pub use probe::MediaProbe;
