// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the player chrome.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Control and timeline sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_reel::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let bar_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::SM; // 8px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.08, 0.08, 0.08);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.55, 0.55);
    pub const GRAY_200: Color = Color::from_rgb(0.8, 0.8, 0.8);

    // Accent (timeline progress, active speed)
    pub const ACCENT_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const ACCENT_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const ACCENT_700: Color = Color::from_rgb(0.15, 0.4, 0.7);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Timeline ghost fill shown under the pointer.
    pub const GHOST: f32 = 0.35;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 2.0;
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 12.0;
    pub const LG: f32 = 16.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_LG: f32 = 48.0;

    pub const BUTTON_HEIGHT: f32 = 32.0;

    /// Height of the clickable timeline strip.
    pub const TIMELINE_HIT: f32 = 16.0;
    /// Height of the visible timeline track inside the strip.
    pub const TIMELINE_TRACK: f32 = 6.0;

    /// Width reserved for the time hint above the timeline.
    pub const HINT_WIDTH: f32 = 52.0;

    pub const VOLUME_SLIDER_WIDTH: f32 = 80.0;
    pub const SPEED_MENU_WIDTH: f32 = 72.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Source name shown on the video surface.
    pub const TITLE: f32 = 18.0;

    /// Control labels and the duration readout.
    pub const BODY: f32 = 14.0;

    /// Timeline hint.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::GHOST > 0.0 && opacity::GHOST < opacity::OVERLAY_MEDIUM);

    assert!(sizing::TIMELINE_HIT >= sizing::TIMELINE_TRACK);
    assert!(sizing::ICON_LG > sizing::ICON_SM);

    assert!(typography::TITLE > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
