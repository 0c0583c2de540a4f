// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the two screens.
//!
//! The `App` struct wires together localization, the filter screen and the
//! picker screen, and translates their effects into config persistence.

pub mod config;
mod message;
pub mod paths;
mod persistence;
mod screen;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::filter::FilterAmount;
use crate::i18n::fluent::I18n;
use crate::ui::filter_screen::{self, InputSource};
use crate::ui::picker_screen;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    filter: filter_screen::State,
    picker: picker_screen::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("theme_mode", &self.theme_mode)
            .field("filter_kind", &self.filter.kind())
            .field("picker_has_image", &self.picker.image().is_some())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::default(),
            theme_mode: ThemeMode::default(),
            filter: filter_screen::State::default(),
            picker: picker_screen::State::default(),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced calls boot through `Fn`; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes state from the config file and CLI flags, and starts
    /// decoding the filter screen's input picture.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let config = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let kind = flags.filter.unwrap_or_else(|| config.filter.kind_or_default());
        let amount = flags
            .amount
            .map(FilterAmount::new)
            .unwrap_or_else(|| config.filter.amount_or_default());
        let last_directory = config.picker.last_directory.clone();

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            filter: filter_screen::State::new(kind, amount, last_directory.clone()),
            picker: picker_screen::State::new(last_directory),
            ..Self::default()
        };

        let source = flags
            .file_path
            .map(|path| InputSource::File(PathBuf::from(path)))
            .unwrap_or_default();
        tracing::debug!(?source, ?kind, amount = amount.value(), "starting");
        let task = app.filter.load(source).map(Message::Filter);

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let screen_name = match self.screen {
            Screen::Filter => self.i18n.tr("navbar-filter-tab"),
            Screen::Picker => self.i18n.tr("navbar-picker-tab"),
        };
        format!("{screen_name} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            theme_mode: &mut self.theme_mode,
            filter: &mut self.filter,
            picker: &mut self.picker,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Filter(filter_message) => {
                update::handle_filter_message(&mut ctx, filter_message)
            }
            Message::Picker(picker_message) => {
                update::handle_picker_message(&mut ctx, picker_message)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            theme_mode: self.theme_mode,
            filter: &self.filter,
            picker: &self.picker,
        })
    }
}
