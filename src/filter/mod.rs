// SPDX-License-Identifier: MPL-2.0
//! Image filters configured through named input parameters.
//!
//! Every filter declares the [`InputKey`]s it understands. Callers drive all
//! filters from one user-facing [`FilterAmount`]: [`configure`] derives the
//! intensity, radius and scale parameters from it and only sets the ones the
//! filter declares. A filter that ignores a key is left untouched by it.
//!
//! ```
//! use instafilter::filter::{configure, FilterAmount, FilterKind, InputKey, ParameterValue};
//!
//! let mut twirl = FilterKind::TwirlDistortion.create();
//! configure(twirl.as_mut(), FilterAmount::new(0.5));
//! assert_eq!(twirl.value(InputKey::Radius), Some(ParameterValue::Scalar(100.0)));
//! // Twirl has no scale parameter, so nothing was set for it.
//! assert_eq!(twirl.value(InputKey::Scale), None);
//! ```

pub mod blur;
pub mod pixellate;
pub mod sampling;
pub mod sepia;
pub mod twirl;
pub mod vignette;

use crate::media::ImageData;
use image_rs::DynamicImage;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use blur::{GaussianBlur, UnsharpMask};
pub use pixellate::Pixellate;
pub use sepia::SepiaTone;
pub use twirl::TwirlDistortion;
pub use vignette::Vignette;

// ==========================================================================
// Parameters
// ==========================================================================

/// Named parameter a filter may accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    Intensity,
    Radius,
    Scale,
    Angle,
    Center,
}

impl InputKey {
    /// Stable parameter name, as shown in logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            InputKey::Intensity => "inputIntensity",
            InputKey::Radius => "inputRadius",
            InputKey::Scale => "inputScale",
            InputKey::Angle => "inputAngle",
            InputKey::Center => "inputCenter",
        }
    }
}

impl fmt::Display for InputKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value stored under an [`InputKey`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterValue {
    Scalar(f32),
    /// Position in pixel coordinates, origin at the top-left corner.
    Point { x: f32, y: f32 },
}

impl From<f32> for ParameterValue {
    fn from(value: f32) -> Self {
        ParameterValue::Scalar(value)
    }
}

/// Multiplier turning an amount into a radius in pixels.
pub const RADIUS_PER_AMOUNT: f32 = 200.0;

/// Multiplier turning an amount into a scale in pixels.
pub const SCALE_PER_AMOUNT: f32 = 10.0;

/// Upper bound of the amount slider.
pub const MAX_SLIDER_AMOUNT: f32 = 1.0;

/// User-facing filter strength, guaranteed non-negative.
///
/// Negative and NaN inputs clamp to zero. There is no upper bound; the UI
/// slider stops at [`MAX_SLIDER_AMOUNT`] but the CLI and config may go higher.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct FilterAmount(f32);

impl FilterAmount {
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(value.max(0.0))
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for FilterAmount {
    fn default() -> Self {
        Self(1.0)
    }
}

impl From<f32> for FilterAmount {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<FilterAmount> for f32 {
    fn from(amount: FilterAmount) -> Self {
        amount.0
    }
}

/// Parameters derived from a single amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParameters {
    pub intensity: f32,
    pub radius: f32,
    pub scale: f32,
}

impl From<FilterAmount> for FilterParameters {
    fn from(amount: FilterAmount) -> Self {
        let amount = amount.value();
        Self {
            intensity: amount,
            radius: amount * RADIUS_PER_AMOUNT,
            scale: amount * SCALE_PER_AMOUNT,
        }
    }
}

// ==========================================================================
// Filter trait
// ==========================================================================

/// An image transformation configured via named parameters.
pub trait ImageFilter: Send + Sync {
    fn name(&self) -> &'static str;

    /// Parameters this filter accepts. Keys outside this list are ignored
    /// by [`ImageFilter::set_value`].
    fn input_keys(&self) -> &'static [InputKey];

    /// Stores `value` under `key`. Unknown keys and mismatched value kinds
    /// are ignored.
    fn set_value(&mut self, key: InputKey, value: ParameterValue);

    /// Current value of `key`, or `None` if the filter does not accept it or
    /// the value is computed per image (an unset center).
    fn value(&self, key: InputKey) -> Option<ParameterValue>;

    /// Renders the filter over `input`. Returns `None` when there is nothing
    /// to render (empty image).
    fn output(&self, input: &DynamicImage) -> Option<DynamicImage>;
}

/// Sets intensity, radius and scale from `amount`, each only if the filter
/// declares the key.
pub fn configure(filter: &mut dyn ImageFilter, amount: FilterAmount) {
    let params = FilterParameters::from(amount);
    let keys = filter.input_keys();

    if keys.contains(&InputKey::Intensity) {
        filter.set_value(InputKey::Intensity, params.intensity.into());
    }
    if keys.contains(&InputKey::Radius) {
        filter.set_value(InputKey::Radius, params.radius.into());
    }
    if keys.contains(&InputKey::Scale) {
        filter.set_value(InputKey::Scale, params.scale.into());
    }
}

// ==========================================================================
// Catalogue
// ==========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    #[default]
    TwirlDistortion,
    SepiaTone,
    Pixellate,
    GaussianBlur,
    UnsharpMask,
    Vignette,
}

impl FilterKind {
    pub const ALL: [FilterKind; 6] = [
        FilterKind::TwirlDistortion,
        FilterKind::SepiaTone,
        FilterKind::Pixellate,
        FilterKind::GaussianBlur,
        FilterKind::UnsharpMask,
        FilterKind::Vignette,
    ];

    /// Builds the filter with its default parameters.
    #[must_use]
    pub fn create(self) -> Box<dyn ImageFilter> {
        match self {
            FilterKind::TwirlDistortion => Box::new(TwirlDistortion::default()),
            FilterKind::SepiaTone => Box::new(SepiaTone::default()),
            FilterKind::Pixellate => Box::new(Pixellate::default()),
            FilterKind::GaussianBlur => Box::new(GaussianBlur::default()),
            FilterKind::UnsharpMask => Box::new(UnsharpMask::default()),
            FilterKind::Vignette => Box::new(Vignette::default()),
        }
    }

    /// Kebab-case identifier used by the CLI and config file.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            FilterKind::TwirlDistortion => "twirl-distortion",
            FilterKind::SepiaTone => "sepia-tone",
            FilterKind::Pixellate => "pixellate",
            FilterKind::GaussianBlur => "gaussian-blur",
            FilterKind::UnsharpMask => "unsharp-mask",
            FilterKind::Vignette => "vignette",
        }
    }

    /// Parses a CLI identifier. Accepts the kebab-case id or the short
    /// forms `twirl`, `sepia`, `blur` and `unsharp`.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim().to_lowercase();
        match id.as_str() {
            "twirl" => Some(FilterKind::TwirlDistortion),
            "sepia" => Some(FilterKind::SepiaTone),
            "blur" => Some(FilterKind::GaussianBlur),
            "unsharp" => Some(FilterKind::UnsharpMask),
            other => Self::ALL.into_iter().find(|kind| kind.id() == other),
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterKind::TwirlDistortion => "Twirl Distortion",
            FilterKind::SepiaTone => "Sepia Tone",
            FilterKind::Pixellate => "Pixellate",
            FilterKind::GaussianBlur => "Gaussian Blur",
            FilterKind::UnsharpMask => "Unsharp Mask",
            FilterKind::Vignette => "Vignette",
        };
        f.write_str(name)
    }
}

/// Creates the filter, configures it from `amount` and renders `input`.
#[must_use]
pub fn apply(kind: FilterKind, amount: FilterAmount, input: &DynamicImage) -> Option<DynamicImage> {
    let mut filter = kind.create();
    configure(filter.as_mut(), amount);
    filter.output(input)
}

/// Full pipeline from a displayable bitmap to a displayable bitmap.
///
/// Yields `None` when any conversion step produces nothing.
#[must_use]
pub fn render(kind: FilterKind, amount: FilterAmount, input: &ImageData) -> Option<ImageData> {
    let source = input.to_dynamic()?;
    let output = apply(kind, amount, &source)?;
    Some(ImageData::from_dynamic(&output))
}
