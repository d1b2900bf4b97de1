// SPDX-License-Identifier: MPL-2.0
//! Slider style for the volume input.

use crate::ui::design_tokens::{opacity, palette};
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

/// Thin white rail with the filled part in the accent color.
pub fn volume(_theme: &Theme, status: slider::Status) -> slider::Style {
    let handle = match status {
        slider::Status::Hovered | slider::Status::Dragged => palette::ACCENT_400,
        slider::Status::Active => palette::WHITE,
    };

    slider::Style {
        rail: slider::Rail {
            backgrounds: (
                Background::Color(palette::ACCENT_500),
                Background::Color(Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::WHITE
                }),
            ),
            width: 4.0,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 2.0.into(),
            },
        },
        handle: slider::Handle {
            shape: slider::HandleShape::Circle { radius: 6.0 },
            background: Background::Color(handle),
            border_width: 0.0,
            border_color: Color::TRANSPARENT,
        },
    }
}
