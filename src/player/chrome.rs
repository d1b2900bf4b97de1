// SPDX-License-Identifier: MPL-2.0
//! Presentation model of the player chrome.
//!
//! The controller writes here and renderers only read. Every field mirrors
//! one visible property of a control in the player markup.

use super::time_format::duration_label;
use super::timeline::Preview;
use super::volume_icon::VolumeIcon;
use crate::domain::video::PlaybackSpeed;

/// Icon of the play/pause toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackIcon {
    #[default]
    Play,
    Pause,
}

/// Icon of the fullscreen toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FullscreenIcon {
    #[default]
    Expand,
    Compress,
}

/// Width of the current-position fill, as a percentage of the bar.
///
/// Always derived from the media position, including while scrubbing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Fill(pub f64);

impl Fill {
    /// Fraction of the bar covered, in `[0, 1]`.
    #[must_use]
    pub fn fraction(self) -> f32 {
        ((self.0 / 100.0) as f32).clamp(0.0, 1.0)
    }
}

/// One entry of the speed menu as displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedOptionView {
    pub label: String,
    pub active: bool,
}

/// Hint tooltip over the timeline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Hint {
    pub text: String,
    pub left_px: f32,
}

/// Everything a renderer needs to draw the player.
#[derive(Debug, Clone, PartialEq)]
pub struct Chrome {
    playback_icon: PlaybackIcon,
    play_overlay_visible: bool,
    pause_overlay_visible: bool,
    volume_icon: VolumeIcon,
    volume_slider: f64,
    duration_label: String,
    label_writes: u64,
    current_fill: Fill,
    ghost_fill_px: f32,
    hint: Hint,
    speed_menu_open: bool,
    speed_options: Vec<SpeedOptionView>,
    pip_visible: bool,
    pip_enabled: bool,
    fullscreen_icon: FullscreenIcon,
    fullscreen_marker: bool,
    interface_hidden: bool,
    source_name: Option<String>,
}

impl Default for Chrome {
    fn default() -> Self {
        Self {
            playback_icon: PlaybackIcon::Play,
            play_overlay_visible: false,
            pause_overlay_visible: true,
            volume_icon: VolumeIcon::default(),
            volume_slider: 100.0,
            duration_label: duration_label(0.0, None),
            label_writes: 0,
            current_fill: Fill::default(),
            ghost_fill_px: 0.0,
            hint: Hint::default(),
            speed_menu_open: false,
            speed_options: Vec::new(),
            pip_visible: false,
            pip_enabled: false,
            fullscreen_icon: FullscreenIcon::Expand,
            fullscreen_marker: false,
            interface_hidden: false,
            source_name: None,
        }
    }
}

impl Chrome {
    // ---------------------------------------------------------------------
    // Reads
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn playback_icon(&self) -> PlaybackIcon {
        self.playback_icon
    }

    /// The large "playing" overlay icon.
    #[must_use]
    pub fn play_overlay_visible(&self) -> bool {
        self.play_overlay_visible
    }

    /// The large "paused" overlay icon.
    #[must_use]
    pub fn pause_overlay_visible(&self) -> bool {
        self.pause_overlay_visible
    }

    #[must_use]
    pub fn volume_icon(&self) -> VolumeIcon {
        self.volume_icon
    }

    /// Slider position, 0 to 100.
    #[must_use]
    pub fn volume_slider(&self) -> f64 {
        self.volume_slider
    }

    #[must_use]
    pub fn duration_label(&self) -> &str {
        &self.duration_label
    }

    /// How many times the duration label text was replaced.
    #[must_use]
    pub fn label_writes(&self) -> u64 {
        self.label_writes
    }

    #[must_use]
    pub fn current_fill(&self) -> Fill {
        self.current_fill
    }

    #[must_use]
    pub fn ghost_fill_px(&self) -> f32 {
        self.ghost_fill_px
    }

    #[must_use]
    pub fn hint(&self) -> &Hint {
        &self.hint
    }

    #[must_use]
    pub fn speed_menu_open(&self) -> bool {
        self.speed_menu_open
    }

    #[must_use]
    pub fn speed_options(&self) -> &[SpeedOptionView] {
        &self.speed_options
    }

    #[must_use]
    pub fn pip_visible(&self) -> bool {
        self.pip_visible
    }

    #[must_use]
    pub fn pip_enabled(&self) -> bool {
        self.pip_enabled
    }

    #[must_use]
    pub fn fullscreen_icon(&self) -> FullscreenIcon {
        self.fullscreen_icon
    }

    /// Whether the player carries its fullscreen styling.
    #[must_use]
    pub fn fullscreen_marker(&self) -> bool {
        self.fullscreen_marker
    }

    #[must_use]
    pub fn interface_hidden(&self) -> bool {
        self.interface_hidden
    }

    #[must_use]
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    // ---------------------------------------------------------------------
    // Writes (controller only)
    // ---------------------------------------------------------------------

    pub(super) fn set_playing(&mut self, playing: bool) {
        self.play_overlay_visible = playing;
        self.pause_overlay_visible = !playing;
        self.playback_icon = if playing {
            PlaybackIcon::Pause
        } else {
            PlaybackIcon::Play
        };
    }

    pub(super) fn set_volume(&mut self, icon: VolumeIcon, slider: f64) {
        self.volume_icon = icon;
        self.volume_slider = slider;
    }

    /// Replaces the label only when the text differs.
    pub(super) fn set_duration_label(&mut self, label: String) {
        if self.duration_label != label {
            self.duration_label = label;
            self.label_writes += 1;
        }
    }

    pub(super) fn set_current_fill(&mut self, fill: Fill) {
        self.current_fill = fill;
    }

    pub(super) fn clear_ghost(&mut self) {
        self.ghost_fill_px = 0.0;
    }

    pub(super) fn set_ghost_preview(&mut self, preview: Preview) {
        self.ghost_fill_px = preview.width_px;
        self.set_hint(preview);
    }

    pub(super) fn set_hint(&mut self, preview: Preview) {
        self.hint = Hint {
            text: preview.hint_text,
            left_px: preview.hint_left_px,
        };
    }

    pub(super) fn set_speed_menu(
        &mut self,
        open: bool,
        options: &[PlaybackSpeed],
        active: Option<usize>,
    ) {
        self.speed_menu_open = open;
        self.speed_options = options
            .iter()
            .enumerate()
            .map(|(index, speed)| SpeedOptionView {
                label: speed.label(),
                active: active == Some(index),
            })
            .collect();
    }

    pub(super) fn set_pip(&mut self, visible: bool, enabled: bool) {
        self.pip_visible = visible;
        self.pip_enabled = enabled;
    }

    pub(super) fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen_marker = fullscreen;
        self.fullscreen_icon = if fullscreen {
            FullscreenIcon::Compress
        } else {
            FullscreenIcon::Expand
        };
    }

    pub(super) fn set_interface_hidden(&mut self, hidden: bool) {
        self.interface_hidden = hidden;
    }

    pub(super) fn set_source_name(&mut self, name: Option<String>) {
        self.source_name = name;
    }
}
