// SPDX-License-Identifier: MPL-2.0
//! Button styles for the control bar.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Flat button sitting on the control bar.
///
/// Transparent until hovered, so the bar reads as a single strip.
pub fn control(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..WHITE
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..WHITE
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: match status {
            button::Status::Disabled => palette::GRAY_400,
            _ => WHITE,
        },
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Large round button drawn in the middle of the video surface.
pub fn overlay(
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered | button::Status::Pressed => alpha_hover,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Entry of the speed menu. The active speed is drawn with the accent color.
pub fn speed_option(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if !active {
            return control(theme, status);
        }

        let background = match status {
            button::Status::Hovered => palette::ACCENT_400,
            _ => palette::ACCENT_500,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                color: palette::ACCENT_700,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_control_is_transparent() {
        let style = control(&Theme::Dark, button::Status::Active);
        assert!(style.background.is_none());
        assert_eq!(style.text_color, WHITE);
    }

    #[test]
    fn active_speed_option_uses_accent() {
        let style = speed_option(true)(&Theme::Dark, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::ACCENT_500))
        );
    }

    #[test]
    fn inactive_speed_option_matches_control() {
        let option = speed_option(false)(&Theme::Dark, button::Status::Hovered);
        let plain = control(&Theme::Dark, button::Status::Hovered);
        assert_eq!(option.background, plain.background);
    }

    #[test]
    fn overlay_darkens_on_hover() {
        let style = overlay(opacity::OVERLAY_MEDIUM, opacity::OVERLAY_HOVER);
        let idle = style(&Theme::Dark, button::Status::Active);
        let hovered = style(&Theme::Dark, button::Status::Hovered);
        assert_ne!(idle.background, hovered.background);
    }
}
