// SPDX-License-Identifier: MPL-2.0
//! `iced_reel` is a lightweight video player built with the Iced GUI framework.
//!
//! The player logic lives in [`player`] and does not depend on Iced: a
//! [`player::PlayerController`] drives any [`application::port::MediaElement`]
//! and exposes a [`player::Chrome`] presentation model. The [`app`] and
//! [`ui`] modules render that model in a desktop window.

#![doc(html_root_url = "https://docs.rs/iced_reel/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod player;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
