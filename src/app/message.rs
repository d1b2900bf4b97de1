// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use std::time::Instant;

use iced::window;

use crate::domain::error::DisplayError;
use crate::domain::media::MediaSource;
use crate::player::{Key, PipTicket};
use crate::ui::player_view;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Interaction with the player view.
    Player(player_view::Message),
    /// Periodic tick driving playback and the auto-hide timer.
    Tick(Instant),
    /// A shortcut key nobody else handled.
    KeyPressed { window: window::Id, key: Key },
    /// The left mouse button went up anywhere in the window.
    MouseReleased(window::Id),
    /// The window was opened.
    WindowOpened(window::Id),
    /// Result of the source picker.
    SourcePicked(Vec<MediaSource>),
    /// A window mode change toward `desired` settled.
    FullscreenSettled {
        desired: bool,
        result: Result<(), DisplayError>,
    },
    /// A picture-in-picture request settled.
    PictureInPictureSettled(PipTicket, Result<(), DisplayError>),
    /// Window close was requested.
    WindowCloseRequested(window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional video path to open and play on startup.
    pub file_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_REEL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
