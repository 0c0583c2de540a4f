// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::filter_screen;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::picker_screen;
use crate::ui::theming::ThemeMode;
use iced::{
    widget::{Column, Container},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub theme_mode: ThemeMode,
    pub filter: &'a filter_screen::State,
    pub picker: &'a picker_screen::State,
}

/// Renders the navbar above the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Filter => ctx.filter.view(ctx.i18n).map(Message::Filter),
        Screen::Picker => ctx.picker.view(ctx.i18n).map(Message::Picker),
    };

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        screen: ctx.screen,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Navbar);

    Column::new()
        .push(navbar_view)
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
