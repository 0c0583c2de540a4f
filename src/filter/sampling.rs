// SPDX-License-Identifier: MPL-2.0
//! Pixel sampling helpers shared by the geometric filters.

use image_rs::{Rgba, RgbaImage};

/// Center used when a filter has no explicit center: the middle of the image.
#[must_use]
pub fn resolve_center(image: &RgbaImage, center: Option<(f32, f32)>) -> (f32, f32) {
    center.unwrap_or_else(|| (image.width() as f32 / 2.0, image.height() as f32 / 2.0))
}

/// Samples `image` at a fractional pixel position with bilinear
/// interpolation. Integer coordinates address pixel centers; positions
/// outside the image clamp to the nearest edge pixel.
///
/// The image must not be empty.
#[must_use]
pub fn bilinear(image: &RgbaImage, x: f32, y: f32) -> Rgba<u8> {
    let max_x = image.width().saturating_sub(1) as f32;
    let max_y = image.height().saturating_sub(1) as f32;
    let x = x.clamp(0.0, max_x);
    let y = y.clamp(0.0, max_y);

    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;
    let x0 = x0 as u32;
    let y0 = y0 as u32;
    let x1 = (x0 + 1).min(max_x as u32);
    let y1 = (y0 + 1).min(max_y as u32);

    let p00 = image.get_pixel(x0, y0).0;
    let p10 = image.get_pixel(x1, y0).0;
    let p01 = image.get_pixel(x0, y1).0;
    let p11 = image.get_pixel(x1, y1).0;

    let mut out = [0u8; 4];
    for c in 0..4 {
        let top = f32::from(p00[c]) * (1.0 - fx) + f32::from(p10[c]) * fx;
        let bottom = f32::from(p01[c]) * (1.0 - fx) + f32::from(p11[c]) * fx;
        out[c] = to_channel(top * (1.0 - fy) + bottom * fy);
    }
    Rgba(out)
}

/// Rounds and saturates a channel value to `0..=255`.
#[must_use]
pub fn to_channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Hermite interpolation between 0 and 1 for `t` in `0..=1`, clamped outside.
#[must_use]
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
