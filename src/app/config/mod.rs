// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[filter]` - Last used filter and amount
//! - `[picker]` - Directory the image picker last opened
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `INSTAFILTER_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use instafilter::app::config::{self, Config};
//! use instafilter::filter::FilterKind;
//!
//! let mut config = config::load();
//! config.filter.kind = Some(FilterKind::SepiaTone);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::filter::{FilterAmount, FilterKind};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Filter settings restored on startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<FilterKind>,

    #[serde(default = "default_amount", skip_serializing_if = "Option::is_none")]
    pub amount: Option<FilterAmount>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            kind: Some(FilterKind::default()),
            amount: default_amount(),
        }
    }
}

impl FilterConfig {
    /// Filter to start with.
    #[must_use]
    pub fn kind_or_default(&self) -> FilterKind {
        self.kind.unwrap_or_default()
    }

    /// Amount to start with, clamped to the slider range.
    #[must_use]
    pub fn amount_or_default(&self) -> FilterAmount {
        self.amount
            .map(|a| FilterAmount::new(a.value().min(MAX_FILTER_AMOUNT)))
            .unwrap_or_else(|| FilterAmount::new(DEFAULT_FILTER_AMOUNT))
    }
}

/// Image picker settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PickerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_directory: Option<PathBuf>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub filter: FilterConfig,

    #[serde(default)]
    pub picker: PickerConfig,
}

fn default_amount() -> Option<FilterAmount> {
    Some(FilterAmount::new(DEFAULT_FILTER_AMOUNT))
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Never fails: a missing file yields defaults, and an unreadable one is
/// logged and replaced by defaults.
pub fn load() -> Config {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> Config {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }
    load_from_path(&path).unwrap_or_else(|err| {
        tracing::warn!(path = %path.display(), %err, "falling back to default settings");
        Config::default()
    })
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
