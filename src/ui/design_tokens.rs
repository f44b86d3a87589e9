// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the design system's tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size and line-height scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_swatch::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Tinted severity background
let info_tint = Color {
    a: opacity::TINT,
    ..palette::INFO_500
};

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
    pub const GRAY_950: Color = Color::from_rgb(0.04, 0.04, 0.06);
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_800: Color = Color::from_rgb(0.15, 0.15, 0.17);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_500: Color = Color::from_rgb(0.45, 0.45, 0.48);
    pub const GRAY_400: Color = Color::from_rgb(0.6, 0.6, 0.62);
    pub const GRAY_200: Color = Color::from_rgb(0.85, 0.85, 0.87);
    pub const GRAY_100: Color = Color::from_rgb(0.94, 0.94, 0.95);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Severity-tinted surfaces (alerts, toasts).
    pub const TINT: f32 = 0.1;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const DISABLED: f32 = 0.5;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 1 unit
    pub const XS: f32 = 8.0; // 2 units
    pub const SM: f32 = 12.0; // 3 units
    pub const MD: f32 = 16.0; // 4 units
    pub const LG: f32 = 24.0; // 6 units
    pub const XL: f32 = 32.0; // 8 units
    pub const XXL: f32 = 48.0; // 12 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_XS: f32 = 12.0;
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;
    pub const ICON_LG: f32 = 24.0;

    // Text input heights (sm / md / lg)
    pub const INPUT_HEIGHT_SM: f32 = 32.0;
    pub const INPUT_HEIGHT_MD: f32 = 40.0;
    pub const INPUT_HEIGHT_LG: f32 = 48.0;
    pub const INPUT_WIDTH: f32 = 280.0;

    // Checkbox box sizes (sm / md / lg)
    pub const CHECKBOX_SM: f32 = 14.0;
    pub const CHECKBOX_MD: f32 = 16.0;
    pub const CHECKBOX_LG: f32 = 20.0;

    // Component widths
    pub const TOAST_WIDTH: f32 = 360.0;
    pub const PAGE_MAX_WIDTH: f32 = 960.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale for the typography variants.
    //!
    //! Line heights are relative multipliers applied to the size.

    pub const DISPLAY: f32 = 48.0;
    pub const H1: f32 = 36.0;
    pub const H2: f32 = 30.0;
    pub const H3: f32 = 24.0;
    pub const H4: f32 = 20.0;
    pub const H5: f32 = 18.0;
    pub const H6: f32 = 16.0;
    pub const BODY_LG: f32 = 18.0;
    pub const BODY: f32 = 16.0;
    pub const BODY_SM: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
    pub const HELPER: f32 = 12.0;
    pub const CODE: f32 = 14.0;

    pub const LEADING_TIGHT: f32 = 1.1;
    pub const LEADING_SNUG: f32 = 1.3;
    pub const LEADING_NORMAL: f32 = 1.5;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - inputs, alerts, segmented controls
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - focus rings
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 6.0;
    pub const LG: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.15,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 2.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::TINT > 0.0 && opacity::TINT < opacity::OVERLAY_SUBTLE);

    assert!(sizing::INPUT_HEIGHT_LG > sizing::INPUT_HEIGHT_MD);
    assert!(sizing::INPUT_HEIGHT_MD > sizing::INPUT_HEIGHT_SM);
    assert!(sizing::CHECKBOX_LG > sizing::CHECKBOX_MD);
    assert!(sizing::CHECKBOX_MD > sizing::CHECKBOX_SM);

    assert!(typography::DISPLAY > typography::H1);
    assert!(typography::H1 > typography::H2);
    assert!(typography::H2 > typography::H3);
    assert!(typography::H3 > typography::H4);
    assert!(typography::H4 > typography::H5);
    assert!(typography::H5 > typography::H6);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
