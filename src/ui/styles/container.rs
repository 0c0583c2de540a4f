// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::opacity;
use iced::widget::container;
use iced::{Background, Color, Theme};

/// Slightly translucent strip behind the navbar and the filter controls.
pub fn toolbar(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        ..container::Style::default()
    }
}
