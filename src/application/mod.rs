// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports between the player and its collaborators.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The player controller only talks to ports, never to adapters
//!
//! # Example
//!
//! ```ignore
//! use iced_reel::application::port::MediaProbe;
//!
//! // Infrastructure implements the port trait
//! struct FfmpegProbe;
//! impl MediaProbe for FfmpegProbe { /* ... */ }
//! ```

pub mod port;
