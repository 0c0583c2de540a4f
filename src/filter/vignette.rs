// SPDX-License-Identifier: MPL-2.0
//! Vignette: darkens the image progressively away from its center.

use super::sampling::{resolve_center, smoothstep, to_channel};
use super::{ImageFilter, InputKey, ParameterValue};
use image_rs::DynamicImage;

pub const DEFAULT_INTENSITY: f32 = 1.0;
pub const DEFAULT_RADIUS: f32 = 150.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Vignette {
    /// Darkening reached at and beyond the radius (0 to 1).
    pub intensity: f32,
    /// Distance in pixels over which the darkening ramps up.
    pub radius: f32,
}

impl Default for Vignette {
    fn default() -> Self {
        Self {
            intensity: DEFAULT_INTENSITY,
            radius: DEFAULT_RADIUS,
        }
    }
}

const KEYS: &[InputKey] = &[InputKey::Intensity, InputKey::Radius];

impl ImageFilter for Vignette {
    fn name(&self) -> &'static str {
        "Vignette"
    }

    fn input_keys(&self) -> &'static [InputKey] {
        KEYS
    }

    fn set_value(&mut self, key: InputKey, value: ParameterValue) {
        match (key, value) {
            (InputKey::Intensity, ParameterValue::Scalar(v)) => self.intensity = v,
            (InputKey::Radius, ParameterValue::Scalar(v)) => self.radius = v,
            _ => {}
        }
    }

    fn value(&self, key: InputKey) -> Option<ParameterValue> {
        match key {
            InputKey::Intensity => Some(self.intensity.into()),
            InputKey::Radius => Some(self.radius.into()),
            _ => None,
        }
    }

    fn output(&self, input: &DynamicImage) -> Option<DynamicImage> {
        let mut image = input.to_rgba8();
        if image.width() == 0 || image.height() == 0 {
            return None;
        }
        let strength = self.intensity.clamp(0.0, 1.0);
        if self.radius <= 0.0 || self.radius.is_nan() || strength == 0.0 {
            return Some(DynamicImage::ImageRgba8(image));
        }

        let (cx, cy) = resolve_center(&image, None);
        for (x, y, pixel) in image.enumerate_pixels_mut() {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let factor = 1.0 - strength * smoothstep(dx.hypot(dy) / self.radius);
            for c in 0..3 {
                pixel.0[c] = to_channel(f32::from(pixel.0[c]) * factor);
            }
        }

        Some(DynamicImage::ImageRgba8(image))
    }
}
