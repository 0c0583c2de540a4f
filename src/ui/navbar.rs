// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown above every screen.
//!
//! Holds one tab per screen, a theme toggle and a language selector.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, pick_list, Container, Row, Space, Text},
    Element, Length, Theme,
};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    SelectTab(Screen),
    CycleTheme,
    LanguageSelected(LanguageIdentifier),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    SwitchScreen(Screen),
    ThemeChanged(ThemeMode),
    LanguageChanged(LanguageIdentifier),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, current: Screen, theme_mode: ThemeMode) -> Event {
    match message {
        Message::SelectTab(screen) if screen == current => Event::None,
        Message::SelectTab(screen) => Event::SwitchScreen(screen),
        Message::CycleTheme => Event::ThemeChanged(theme_mode.next()),
        Message::LanguageSelected(locale) => Event::LanguageChanged(locale),
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let tab = |screen: Screen, key: &str| {
        let style: fn(&Theme, button::Status) -> button::Style = if screen == ctx.screen {
            styles::button::primary
        } else {
            styles::button::secondary
        };
        button(Text::new(ctx.i18n.tr(key)))
            .on_press(Message::SelectTab(screen))
            .padding([spacing::XS, spacing::MD])
            .style(style)
    };

    let theme_label = ctx.i18n.tr_with_args(
        "navbar-theme-button",
        &[("mode", &ctx.i18n.tr(ctx.theme_mode.label_key()))],
    );
    let theme_button = button(Text::new(theme_label))
        .on_press(Message::CycleTheme)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary);

    let languages = pick_list(
        ctx.i18n.available_locales.clone(),
        Some(ctx.i18n.current_locale().clone()),
        Message::LanguageSelected,
    );

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(tab(Screen::Filter, "navbar-filter-tab"))
        .push(tab(Screen::Picker, "navbar-picker-tab"))
        .push(Space::new().width(Length::Fill))
        .push(theme_button)
        .push(languages);

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::toolbar)
        .into()
}
