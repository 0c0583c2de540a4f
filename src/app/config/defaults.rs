// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Filter**: Amount slider bounds and step
//! - **Window**: Initial and minimum window size
//! - **Locale**: Fallback language

// ==========================================================================
// Filter Defaults
// ==========================================================================

/// Amount applied when nothing has been saved yet.
pub const DEFAULT_FILTER_AMOUNT: f32 = 1.0;

/// Lower bound of the amount slider.
pub const MIN_FILTER_AMOUNT: f32 = 0.0;

/// Upper bound of the amount slider.
pub const MAX_FILTER_AMOUNT: f32 = crate::filter::MAX_SLIDER_AMOUNT;

/// Amount slider granularity.
pub const FILTER_AMOUNT_STEP: f32 = 0.01;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const DEFAULT_WINDOW_WIDTH: f32 = 960.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither the CLI, the config nor the OS yields a
/// supported one.
pub const DEFAULT_LOCALE: &str = "en-US";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_FILTER_AMOUNT >= 0.0);
    assert!(MAX_FILTER_AMOUNT > MIN_FILTER_AMOUNT);
    assert!(DEFAULT_FILTER_AMOUNT >= MIN_FILTER_AMOUNT);
    assert!(DEFAULT_FILTER_AMOUNT <= MAX_FILTER_AMOUNT);
    assert!(FILTER_AMOUNT_STEP > 0.0);
    assert!(FILTER_AMOUNT_STEP < MAX_FILTER_AMOUNT - MIN_FILTER_AMOUNT);

    assert!(MIN_WINDOW_WIDTH > 0.0);
    assert!(MIN_WINDOW_HEIGHT > 0.0);
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
};
