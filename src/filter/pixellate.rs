// SPDX-License-Identifier: MPL-2.0
//! Pixellate: flattens square cells to the color at their centers.

use super::sampling::resolve_center;
use super::{ImageFilter, InputKey, ParameterValue};
use image_rs::DynamicImage;

pub const DEFAULT_SCALE: f32 = 8.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Pixellate {
    /// Grid anchor; `None` means the center of the rendered image.
    pub center: Option<(f32, f32)>,
    /// Cell edge length in pixels.
    pub scale: f32,
}

impl Default for Pixellate {
    fn default() -> Self {
        Self {
            center: None,
            scale: DEFAULT_SCALE,
        }
    }
}

const KEYS: &[InputKey] = &[InputKey::Center, InputKey::Scale];

impl ImageFilter for Pixellate {
    fn name(&self) -> &'static str {
        "Pixellate"
    }

    fn input_keys(&self) -> &'static [InputKey] {
        KEYS
    }

    fn set_value(&mut self, key: InputKey, value: ParameterValue) {
        match (key, value) {
            (InputKey::Center, ParameterValue::Point { x, y }) => self.center = Some((x, y)),
            (InputKey::Scale, ParameterValue::Scalar(v)) => self.scale = v,
            _ => {}
        }
    }

    fn value(&self, key: InputKey) -> Option<ParameterValue> {
        match key {
            InputKey::Center => self.center.map(|(x, y)| ParameterValue::Point { x, y }),
            InputKey::Scale => Some(self.scale.into()),
            _ => None,
        }
    }

    fn output(&self, input: &DynamicImage) -> Option<DynamicImage> {
        let source = input.to_rgba8();
        let (width, height) = source.dimensions();
        if width == 0 || height == 0 {
            return None;
        }
        if self.scale < 1.0 || self.scale.is_nan() {
            return Some(DynamicImage::ImageRgba8(source));
        }

        let (cx, cy) = resolve_center(&source, self.center);
        let s = self.scale;
        let sample_index = |coord: u32, origin: f32, max: u32| -> u32 {
            let cell = ((coord as f32 + 0.5 - origin) / s).floor();
            let middle = origin + (cell + 0.5) * s;
            (middle.floor().max(0.0) as u32).min(max - 1)
        };

        let mut out = source.clone();
        for (x, y, pixel) in out.enumerate_pixels_mut() {
            let sx = sample_index(x, cx, width);
            let sy = sample_index(y, cy, height);
            *pixel = *source.get_pixel(sx, sy);
        }

        Some(DynamicImage::ImageRgba8(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};

    fn pattern() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(8, 8, |x, y| {
            Rgba([(x * 30) as u8, (y * 30) as u8, 0, 255])
        }))
    }

    #[test]
    fn cells_are_uniform() {
        let mut filter = Pixellate::default();
        filter.set_value(InputKey::Scale, ParameterValue::Scalar(4.0));
        let out = filter.output(&pattern()).expect("non-empty").to_rgba8();

        // The grid is anchored at (4, 4), so [0, 4) x [0, 4) is one cell.
        let first = *out.get_pixel(0, 0);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(*out.get_pixel(x, y), first);
            }
        }
        assert_ne!(*out.get_pixel(4, 4), first);
    }

    #[test]
    fn cell_takes_its_center_color() {
        let mut filter = Pixellate::default();
        filter.set_value(InputKey::Scale, ParameterValue::Scalar(4.0));
        let out = filter.output(&pattern()).expect("non-empty").to_rgba8();
        // Cell [4, 8) has its middle at 6.0, i.e. pixel 6.
        assert_eq!(out.get_pixel(5, 5).0, [180, 180, 0, 255]);
    }

    #[test]
    fn scale_below_one_is_identity() {
        let mut filter = Pixellate::default();
        filter.set_value(InputKey::Scale, ParameterValue::Scalar(0.0));
        let input = pattern();
        let out = filter.output(&input).expect("non-empty");
        assert_eq!(out.to_rgba8(), input.to_rgba8());
    }

    #[test]
    fn huge_scale_flattens_to_one_color() {
        let mut filter = Pixellate::default();
        filter.set_value(InputKey::Scale, ParameterValue::Scalar(1000.0));
        filter.set_value(InputKey::Center, ParameterValue::Point { x: 0.0, y: 0.0 });
        let out = filter.output(&pattern()).expect("non-empty").to_rgba8();
        let first = *out.get_pixel(0, 0);
        assert!(out.pixels().all(|p| *p == first));
    }
}
