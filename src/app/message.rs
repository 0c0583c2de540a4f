// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::filter::FilterKind;
use crate::ui::filter_screen;
use crate::ui::navbar;
use crate::ui::picker_screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Filter(filter_screen::Message),
    Picker(picker_screen::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional image to filter instead of the bundled example.
    pub file_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `INSTAFILTER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Filter to start with, overriding the saved one.
    pub filter: Option<FilterKind>,
    /// Amount to start with, overriding the saved one.
    pub amount: Option<f32>,
}
