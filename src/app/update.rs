// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Screens report side effects as `Effect` values; this module turns them
//! into config writes and cross-screen updates.

use super::{persistence, Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::filter_screen::{self, Effect as FilterEffect};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::picker_screen::{self, Effect as PickerEffect};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::PathBuf;

/// Mutable view of the application state shared by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub theme_mode: &'a mut ThemeMode,
    pub filter: &'a mut filter_screen::State,
    pub picker: &'a mut picker_screen::State,
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, *ctx.screen, *ctx.theme_mode) {
        NavbarEvent::None => {}
        NavbarEvent::SwitchScreen(screen) => {
            tracing::debug!(?screen, "switching screen");
            *ctx.screen = screen;
        }
        NavbarEvent::ThemeChanged(mode) => {
            *ctx.theme_mode = mode;
            persistence::persist_theme_mode(mode);
        }
        NavbarEvent::LanguageChanged(locale) => {
            persistence::apply_language_change(ctx.i18n, locale);
        }
    }
    Task::none()
}

pub fn handle_filter_message(
    ctx: &mut UpdateContext<'_>,
    message: filter_screen::Message,
) -> Task<Message> {
    let (effect, task) = ctx.filter.handle_message(message);
    match effect {
        FilterEffect::None => {}
        FilterEffect::PersistPreferences => persistence::persist_filter_preferences(ctx.filter),
        FilterEffect::RememberDirectory(dir) => remember_directory(ctx, dir),
    }
    task.map(Message::Filter)
}

pub fn handle_picker_message(
    ctx: &mut UpdateContext<'_>,
    message: picker_screen::Message,
) -> Task<Message> {
    let (effect, task) = ctx.picker.handle_message(message);
    match effect {
        PickerEffect::None => {}
        PickerEffect::RememberDirectory(dir) => remember_directory(ctx, dir),
    }
    task.map(Message::Picker)
}

/// Shares the directory between both screens and stores it for next launch.
fn remember_directory(ctx: &mut UpdateContext<'_>, dir: PathBuf) {
    ctx.filter.set_last_directory(dir.clone());
    ctx.picker.set_last_directory(dir.clone());
    persistence::persist_last_directory(dir);
}
