// SPDX-License-Identifier: MPL-2.0
//! Sepia toning blended by intensity.

use super::sampling::to_channel;
use super::{ImageFilter, InputKey, ParameterValue};
use image_rs::DynamicImage;

pub const DEFAULT_INTENSITY: f32 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SepiaTone {
    /// Blend factor between original (0) and fully toned (1).
    pub intensity: f32,
}

impl Default for SepiaTone {
    fn default() -> Self {
        Self {
            intensity: DEFAULT_INTENSITY,
        }
    }
}

const KEYS: &[InputKey] = &[InputKey::Intensity];

impl ImageFilter for SepiaTone {
    fn name(&self) -> &'static str {
        "SepiaTone"
    }

    fn input_keys(&self) -> &'static [InputKey] {
        KEYS
    }

    fn set_value(&mut self, key: InputKey, value: ParameterValue) {
        if let (InputKey::Intensity, ParameterValue::Scalar(v)) = (key, value) {
            self.intensity = v;
        }
    }

    fn value(&self, key: InputKey) -> Option<ParameterValue> {
        match key {
            InputKey::Intensity => Some(self.intensity.into()),
            _ => None,
        }
    }

    fn output(&self, input: &DynamicImage) -> Option<DynamicImage> {
        let mut image = input.to_rgba8();
        if image.width() == 0 || image.height() == 0 {
            return None;
        }

        let t = self.intensity.clamp(0.0, 1.0);
        for pixel in image.pixels_mut() {
            let [r, g, b, a] = pixel.0;
            let (r, g, b) = (f32::from(r), f32::from(g), f32::from(b));
            let toned = [
                0.393 * r + 0.769 * g + 0.189 * b,
                0.349 * r + 0.686 * g + 0.168 * b,
                0.272 * r + 0.534 * g + 0.131 * b,
            ];
            pixel.0 = [
                to_channel(r + (toned[0] - r) * t),
                to_channel(g + (toned[1] - g) * t),
                to_channel(b + (toned[2] - b) * t),
                a,
            ];
        }

        Some(DynamicImage::ImageRgba8(image))
    }
}
