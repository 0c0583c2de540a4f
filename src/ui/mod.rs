// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! screen owns its state, handles its own messages and reports side effects
//! to the application through an `Effect` value.
//!
//! # Screens
//!
//! - [`filter_screen`] - Filter selection, amount slider, preview and save
//! - [`picker_screen`] - Single picture chosen through the native picker
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Screen tabs, theme toggle and language selector
//! - [`empty_state`] - Placeholder shown when no picture is loaded
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod empty_state;
pub mod filter_screen;
pub mod navbar;
pub mod picker_screen;
pub mod styles;
pub mod theming;
