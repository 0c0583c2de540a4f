// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every screen: colors, spacing, sizes, font
//! sizes, corner radii and shadows.
//!
//! ```
//! use instafilter::ui::design_tokens::{spacing, typography};
//!
//! let padding = [spacing::SM, spacing::LG];
//! assert!(typography::TITLE_LG > typography::BODY);
//! # let _ = padding;
//! ```

pub mod palette {
    use iced::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_600: Color = Color::from_rgb(0.35, 0.35, 0.35);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    /// Accent blue, light to dark.
    pub const ACCENT_LIGHT: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const ACCENT: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const ACCENT_DARK: Color = Color::from_rgb(0.2, 0.5, 0.8);
}

pub mod opacity {
    /// Toolbars drawn over the window background.
    pub const SURFACE: f32 = 0.95;
}

/// Multiples of a 4px step.
pub mod spacing {
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Width of the filter controls column.
    pub const CONTROLS_WIDTH: f32 = 280.0;
}

pub mod typography {
    /// Empty state headings.
    pub const TITLE_LG: f32 = 30.0;
    /// Section headers.
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY: f32 = 14.0;
    /// Image size, render status, save confirmation.
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
}

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    const fn lift(depth: f32) -> Shadow {
        Shadow {
            color: Color::BLACK,
            offset: Vector { x: 0.0, y: depth },
            blur_radius: depth * 2.0,
        }
    }

    pub const NONE: Shadow = lift(0.0);
    pub const SM: Shadow = lift(2.0);
    pub const MD: Shadow = lift(4.0);
}

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::CONTROLS_WIDTH > sizing::BUTTON_HEIGHT);
};
