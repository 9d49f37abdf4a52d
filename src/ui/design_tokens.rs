// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens.

## Organization

- **Palette**: Base colors (GoBarber visual identity)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use gobarber::ui::design_tokens::{palette, spacing};

let accent = palette::ORANGE_500;
let padding = spacing::MD; // 16px
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
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Surfaces (dark theme, #312e38 family)
    pub const BACKGROUND: Color = Color::from_rgb(0.192, 0.180, 0.220);
    pub const SURFACE: Color = Color::from_rgb(0.157, 0.149, 0.180);
    pub const INPUT: Color = Color::from_rgb(0.137, 0.129, 0.161);

    // Brand colors (orange scale)
    pub const ORANGE_400: Color = Color::from_rgb(1.0, 0.65, 0.2);
    pub const ORANGE_500: Color = Color::from_rgb(1.0, 0.565, 0.0); // #ff9000
    pub const ORANGE_600: Color = Color::from_rgb(0.8, 0.45, 0.0);

    // Text
    pub const TEXT: Color = Color::from_rgb(0.957, 0.929, 0.910); // #f4ede8
    pub const PLACEHOLDER: Color = Color::from_rgb(0.4, 0.388, 0.376); // #666360

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.773, 0.188, 0.188); // #c53030
    pub const SUCCESS_500: Color = Color::from_rgb(0.016, 0.827, 0.380); // #04d361
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Fixed width of a toast card.
    pub const TOAST_WIDTH: f32 = 360.0;
    /// Fixed width of a form column (sign-in, sign-up, etc.).
    pub const FORM_WIDTH: f32 = 340.0;
    /// Avatar display size on the dashboard and profile screens.
    pub const AVATAR_SIZE: f32 = 56.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY: f32 = 14.0;
    pub const SUBTITLE: f32 = 16.0;
    pub const TITLE: f32 = 24.0;
    pub const DISPLAY: f32 = 30.0;
}

// ============================================================================
// Border Widths
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radii
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    /// Large enough to render square avatars as circles.
    pub const ROUND: f32 = 999.0;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::new(0.0, 0.0),
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        offset: Vector::new(0.0, 2.0),
        blur_radius: 8.0,
    };
}
