// SPDX-License-Identifier: MPL-2.0
//! Twirl distortion: rotates pixels around a center, strongest at the
//! center and fading to nothing at the radius.

use super::sampling::{bilinear, resolve_center};
use super::{ImageFilter, InputKey, ParameterValue};
use image_rs::DynamicImage;
use std::f32::consts::PI;

pub const DEFAULT_RADIUS: f32 = 300.0;
pub const DEFAULT_ANGLE: f32 = PI;

#[derive(Debug, Clone, PartialEq)]
pub struct TwirlDistortion {
    /// `None` means the center of whatever image is rendered.
    pub center: Option<(f32, f32)>,
    pub radius: f32,
    /// Rotation in radians applied at the center.
    pub angle: f32,
}

impl Default for TwirlDistortion {
    fn default() -> Self {
        Self {
            center: None,
            radius: DEFAULT_RADIUS,
            angle: DEFAULT_ANGLE,
        }
    }
}

const KEYS: &[InputKey] = &[InputKey::Center, InputKey::Radius, InputKey::Angle];

impl ImageFilter for TwirlDistortion {
    fn name(&self) -> &'static str {
        "TwirlDistortion"
    }

    fn input_keys(&self) -> &'static [InputKey] {
        KEYS
    }

    fn set_value(&mut self, key: InputKey, value: ParameterValue) {
        match (key, value) {
            (InputKey::Center, ParameterValue::Point { x, y }) => self.center = Some((x, y)),
            (InputKey::Radius, ParameterValue::Scalar(v)) => self.radius = v,
            (InputKey::Angle, ParameterValue::Scalar(v)) => self.angle = v,
            _ => {}
        }
    }

    fn value(&self, key: InputKey) -> Option<ParameterValue> {
        match key {
            InputKey::Center => self.center.map(|(x, y)| ParameterValue::Point { x, y }),
            InputKey::Radius => Some(self.radius.into()),
            InputKey::Angle => Some(self.angle.into()),
            _ => None,
        }
    }

    fn output(&self, input: &DynamicImage) -> Option<DynamicImage> {
        let source = input.to_rgba8();
        if source.width() == 0 || source.height() == 0 {
            return None;
        }
        if self.radius <= 0.0 || self.angle == 0.0 {
            return Some(DynamicImage::ImageRgba8(source));
        }

        let (cx, cy) = resolve_center(&source, self.center);
        let mut out = source.clone();

        for (x, y, pixel) in out.enumerate_pixels_mut() {
            // Work in continuous coordinates where pixel centers sit at +0.5.
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let distance = dx.hypot(dy);
            if distance >= self.radius {
                continue;
            }

            let theta = self.angle * (1.0 - distance / self.radius);
            let (sin, cos) = theta.sin_cos();
            let sx = cx + dx * cos - dy * sin;
            let sy = cy + dx * sin + dy * cos;
            *pixel = bilinear(&source, sx - 0.5, sy - 0.5);
        }

        Some(DynamicImage::ImageRgba8(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};

    fn pattern(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x * 7 % 256) as u8, (y * 11 % 256) as u8, ((x + y) % 256) as u8, 255])
        }))
    }

    #[test]
    fn declares_center_radius_and_angle_only() {
        let twirl = TwirlDistortion::default();
        assert_eq!(
            twirl.input_keys(),
            &[InputKey::Center, InputKey::Radius, InputKey::Angle]
        );
    }

    #[test]
    fn ignores_keys_it_does_not_declare() {
        let mut twirl = TwirlDistortion::default();
        twirl.set_value(InputKey::Scale, ParameterValue::Scalar(42.0));
        twirl.set_value(InputKey::Intensity, ParameterValue::Scalar(42.0));
        assert_eq!(twirl, TwirlDistortion::default());
    }

    #[test]
    fn ignores_mismatched_value_kind() {
        let mut twirl = TwirlDistortion::default();
        twirl.set_value(InputKey::Radius, ParameterValue::Point { x: 1.0, y: 1.0 });
        twirl.set_value(InputKey::Center, ParameterValue::Scalar(3.0));
        assert_eq!(twirl, TwirlDistortion::default());
    }

    #[test]
    fn zero_radius_is_identity() {
        let input = pattern(20, 20);
        let mut twirl = TwirlDistortion::default();
        twirl.set_value(InputKey::Radius, ParameterValue::Scalar(0.0));
        let out = twirl.output(&input).expect("non-empty input");
        assert_eq!(out.to_rgba8(), input.to_rgba8());
    }

    #[test]
    fn pixels_outside_radius_are_untouched() {
        let input = pattern(40, 40);
        let mut twirl = TwirlDistortion::default();
        twirl.set_value(InputKey::Radius, ParameterValue::Scalar(10.0));
        let out = twirl.output(&input).expect("non-empty input").to_rgba8();
        let src = input.to_rgba8();

        // Corners are ~28px from the center.
        for (x, y) in [(0, 0), (39, 0), (0, 39), (39, 39)] {
            assert_eq!(out.get_pixel(x, y), src.get_pixel(x, y));
        }
    }

    #[test]
    fn pixels_inside_radius_move() {
        let input = pattern(40, 40);
        let out = TwirlDistortion::default()
            .output(&input)
            .expect("non-empty input")
            .to_rgba8();
        assert_ne!(out, input.to_rgba8());
    }

    #[test]
    fn uniform_image_stays_uniform() {
        let input = DynamicImage::ImageRgba8(RgbaImage::from_pixel(16, 16, Rgba([9, 8, 7, 255])));
        let out = TwirlDistortion::default().output(&input).expect("non-empty");
        assert!(out.to_rgba8().pixels().all(|p| p.0 == [9, 8, 7, 255]));
    }

    #[test]
    fn empty_image_has_no_output() {
        let input = DynamicImage::ImageRgba8(RgbaImage::new(0, 0));
        assert!(TwirlDistortion::default().output(&input).is_none());
    }

    #[test]
    fn explicit_center_is_reported() {
        let mut twirl = TwirlDistortion::default();
        assert_eq!(twirl.value(InputKey::Center), None);
        twirl.set_value(InputKey::Center, ParameterValue::Point { x: 4.0, y: 5.0 });
        assert_eq!(
            twirl.value(InputKey::Center),
            Some(ParameterValue::Point { x: 4.0, y: 5.0 })
        );
    }
}
