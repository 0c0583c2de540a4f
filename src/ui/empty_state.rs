// SPDX-License-Identifier: MPL-2.0
//! Placeholder shown where an image would be, before one is available.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Translation keys for the three lines of the placeholder.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub button: &'static str,
}

/// Centered title, subtitle and call-to-action button.
///
/// The button is disabled when `on_press` is `None`.
pub fn view<'a, M: Clone + 'a>(
    i18n: &I18n,
    labels: Labels,
    on_press: Option<M>,
) -> Element<'a, M> {
    let title = Text::new(i18n.tr(labels.title))
        .size(typography::TITLE_LG)
        .color(palette::GRAY_400);

    let subtitle = Text::new(i18n.tr(labels.subtitle))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let action = button(Text::new(i18n.tr(labels.button)))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press_maybe(on_press);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(action);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
