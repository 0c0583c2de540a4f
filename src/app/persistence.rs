// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Each helper reloads `settings.toml`, changes only the keys it owns and
//! writes the file back, so concurrent edits to other sections survive.

use super::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::filter_screen;
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// Loads, modifies and saves the config file.
///
/// Skipped during tests to keep the user's real config untouched; unit tests
/// exercise the `apply_*` functions directly.
fn update_config(apply: impl FnOnce(&mut Config)) {
    if cfg!(test) {
        return;
    }

    let mut cfg = config::load();
    apply(&mut cfg);

    if let Err(error) = config::save(&cfg) {
        tracing::warn!(%error, "failed to save config");
    }
}

pub(super) fn apply_filter_preferences(cfg: &mut Config, filter: &filter_screen::State) {
    cfg.filter.kind = Some(filter.kind());
    cfg.filter.amount = Some(filter.amount());
}

pub(super) fn apply_last_directory(cfg: &mut Config, directory: PathBuf) {
    cfg.picker.last_directory = Some(directory);
}

/// Stores the current filter and amount.
pub fn persist_filter_preferences(filter: &filter_screen::State) {
    update_config(|cfg| apply_filter_preferences(cfg, filter));
}

/// Stores the directory the next file dialog should open in.
pub fn persist_last_directory(directory: PathBuf) {
    update_config(|cfg| apply_last_directory(cfg, directory));
}

pub fn persist_theme_mode(theme_mode: ThemeMode) {
    update_config(|cfg| cfg.general.theme_mode = theme_mode);
}

/// Applies the newly selected locale and persists it to config.
pub fn apply_language_change(i18n: &mut I18n, locale: LanguageIdentifier) {
    i18n.set_locale(locale.clone());
    update_config(|cfg| cfg.general.language = Some(locale.to_string()));
}
