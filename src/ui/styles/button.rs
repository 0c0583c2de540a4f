// SPDX-License-Identifier: MPL-2.0
//! Button styles: an accent call to action and a neutral variant.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::button::{Status, Style};
use iced::{Background, Border, Color, Shadow, Theme};

fn filled(background: Color, text_color: Color, border: Color, shadow: Shadow) -> Style {
    Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

fn is_dark(theme: &Theme) -> bool {
    let bg = theme.palette().background;
    (bg.r + bg.g + bg.b) / 3.0 < 0.5
}

fn muted(theme: &Theme) -> Style {
    let surface = if is_dark(theme) {
        palette::GRAY_700
    } else {
        palette::GRAY_200
    };
    filled(surface, palette::GRAY_400, palette::GRAY_400, shadow::NONE)
}

/// "Select Image", "Save" and the navbar tab of the active screen.
pub fn primary(theme: &Theme, status: Status) -> Style {
    match status {
        Status::Active | Status::Pressed => filled(
            palette::ACCENT,
            palette::WHITE,
            palette::ACCENT_DARK,
            shadow::SM,
        ),
        Status::Hovered => filled(
            palette::ACCENT_LIGHT,
            palette::WHITE,
            palette::ACCENT,
            shadow::MD,
        ),
        Status::Disabled => muted(theme),
    }
}

/// Inactive navbar tabs and secondary actions.
pub fn secondary(theme: &Theme, status: Status) -> Style {
    let (surface, hovered, text) = if is_dark(theme) {
        (palette::GRAY_700, palette::GRAY_600, palette::WHITE)
    } else {
        (palette::GRAY_100, palette::GRAY_200, palette::GRAY_900)
    };

    match status {
        Status::Active | Status::Pressed => {
            filled(surface, text, palette::GRAY_400, shadow::NONE)
        }
        Status::Hovered => filled(hovered, text, palette::ACCENT, shadow::SM),
        Status::Disabled => muted(theme),
    }
}
