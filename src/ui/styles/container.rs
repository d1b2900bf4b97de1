// SPDX-License-Identifier: MPL-2.0
//! Container styles for the video surface, control bar and timeline.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Black backdrop behind the video.
pub fn video_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BLACK)),
        text_color: Some(palette::GRAY_200),
        ..Default::default()
    }
}

/// Translucent strip holding the controls.
pub fn control_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Popup listing the playback speeds.
pub fn speed_menu(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_HOVER,
            ..palette::GRAY_900
        })),
        text_color: Some(WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Unfilled part of the timeline.
pub fn timeline_track(_theme: &Theme) -> container::Style {
    bar(Color {
        a: opacity::OVERLAY_SUBTLE,
        ..WHITE
    })
}

/// Fill following the pointer while it hovers the timeline.
pub fn timeline_ghost(_theme: &Theme) -> container::Style {
    bar(Color {
        a: opacity::GHOST,
        ..WHITE
    })
}

/// Fill showing the playback position.
pub fn timeline_current(_theme: &Theme) -> container::Style {
    bar(palette::ACCENT_500)
}

fn bar(color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_layers_are_distinct() {
        let theme = Theme::Dark;
        let track = timeline_track(&theme).background;
        let ghost = timeline_ghost(&theme).background;
        let current = timeline_current(&theme).background;
        assert_ne!(track, ghost);
        assert_ne!(ghost, current);
    }

    #[test]
    fn control_bar_is_translucent() {
        let Some(Background::Color(color)) = control_bar(&Theme::Dark).background else {
            panic!("control bar must have a solid background");
        };
        assert!(color.a < 1.0);
    }
}
