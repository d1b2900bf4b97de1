// SPDX-License-Identifier: MPL-2.0
//! User interface for the player.
//!
//! The view follows the Elm-style "state down, messages up" pattern: it
//! renders the controller's [`Chrome`](crate::player::Chrome) and reports
//! interactions as [`player_view::Message`]s.
//!
//! - [`player_view`] - Video surface, timeline and control bar
//! - [`styles`] - Centralized styling (buttons, containers, overlays, sliders)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod player_view;
pub mod styles;
