// SPDX-License-Identifier: MPL-2.0
//! The desktop window as a [`PlayerHost`].
//!
//! The window holds exactly one player. Its controls are drawn by
//! [`crate::ui::player_view`], so the control set is always complete; only
//! the media element is handed over at mount.

use crate::application::port::MediaElement;
use crate::domain::video::PlaybackSpeed;
use crate::player::{ControlSet, DisplayCapabilities, PlayerHost, PlayerMount};

/// Selector of the player container in the main window.
pub const PLAYER_SELECTOR: &str = ".player";

/// Host backed by the main window.
#[derive(Debug)]
pub struct DesktopHost<M> {
    media: Option<M>,
    speed_options: Vec<PlaybackSpeed>,
    capabilities: DisplayCapabilities,
}

impl<M: MediaElement> DesktopHost<M> {
    /// A host offering `media` and a speed menu with `speed_options`.
    ///
    /// Picture-in-picture is not available in a desktop window.
    pub fn new(media: M, speed_options: Vec<PlaybackSpeed>) -> Self {
        Self {
            media: Some(media),
            speed_options,
            capabilities: DisplayCapabilities::default(),
        }
    }
}

impl<M: MediaElement> PlayerHost for DesktopHost<M> {
    type Media = M;

    fn query(&mut self, selector: &str) -> Option<PlayerMount<M>> {
        if selector != PLAYER_SELECTOR {
            return None;
        }
        Some(PlayerMount {
            video: self.media.take(),
            controls: ControlSet::standard(self.speed_options.clone()),
        })
    }

    fn capabilities(&self) -> DisplayCapabilities {
        self.capabilities
    }
}
