// SPDX-License-Identifier: MPL-2.0
//! Image decoding, encoding and the displayable bitmap type.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::{DynamicImage, GenericImageView, ImageFormat, RgbaImage};
use rust_embed::RustEmbed;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// File name of the sample picture shipped inside the binary.
pub const EXAMPLE_IMAGE: &str = "example.png";

#[derive(RustEmbed)]
#[folder = "assets/images/"]
struct BundledImages;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// RGBA pixels backing the handle, kept so filters can read them back.
    /// Stored in Arc to avoid expensive cloning.
    rgba_bytes: Arc<Vec<u8>>,
}

impl PartialEq for ImageData {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && (Arc::ptr_eq(&self.rgba_bytes, &other.rgba_bytes)
                || self.rgba_bytes == other.rgba_bytes)
    }
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.to_vec());
        Self {
            handle,
            width,
            height,
            rgba_bytes,
        }
    }

    /// Converts a decoded image into a displayable bitmap.
    #[must_use]
    pub fn from_dynamic(dynamic: &DynamicImage) -> Self {
        let (width, height) = dynamic.dimensions();
        Self::from_rgba(width, height, dynamic.to_rgba8().into_vec())
    }

    /// Rebuilds a `DynamicImage` from the stored pixels.
    ///
    /// Returns `None` if the byte count does not match the dimensions.
    #[must_use]
    pub fn to_dynamic(&self) -> Option<DynamicImage> {
        RgbaImage::from_raw(self.width, self.height, self.rgba_bytes.to_vec())
            .map(DynamicImage::ImageRgba8)
    }
}

/// Decodes an image file from disk.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Decode`] if
/// its content is not a supported image.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let bytes = fs::read(path.as_ref())?;
    load_from_memory(&bytes)
}

/// Decodes one of the pictures embedded in the binary.
///
/// # Errors
///
/// Returns [`Error::MissingAsset`] if no asset carries that name.
pub fn load_bundled(name: &str) -> Result<ImageData> {
    let asset = BundledImages::get(name).ok_or_else(|| Error::MissingAsset(name.to_string()))?;
    load_from_memory(asset.data.as_ref())
}

fn load_from_memory(bytes: &[u8]) -> Result<ImageData> {
    let img = image_rs::load_from_memory(bytes).map_err(|e| Error::Decode(e.to_string()))?;
    Ok(ImageData::from_dynamic(&img))
}

/// Encodes the bitmap to `path`, picking the format from the extension.
///
/// JPEG has no alpha channel, so pixels are flattened to RGB first.
///
/// # Errors
///
/// Returns [`Error::Encode`] for unknown extensions or encoder failures and
/// [`Error::Io`] if the file cannot be written.
pub fn save_image<P: AsRef<Path>>(image: &ImageData, path: P) -> Result<()> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)
        .map_err(|_| Error::Encode(format!("unsupported format: {}", path.display())))?;
    let dynamic = image
        .to_dynamic()
        .ok_or_else(|| Error::Encode("pixel buffer does not match dimensions".into()))?;

    let dynamic = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(dynamic.to_rgb8()),
        _ => dynamic,
    };
    dynamic.save_with_format(path, format)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::Rgba;
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_image(&image_path).expect("png should load successfully");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
        let decoded = data.to_dynamic().expect("dimensions match").to_rgba8();
        assert_eq!(decoded.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn load_missing_image_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match load_image(&missing_path) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_png_bytes_returns_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match load_image(&bad_path) {
            Err(Error::Decode(message)) => assert!(!message.is_empty()),
            other => panic!("expected Decode error for invalid png, got {other:?}"),
        }
    }

    #[test]
    fn bundled_example_is_present() {
        let data = load_bundled(EXAMPLE_IMAGE).expect("example asset should decode");
        assert!(data.width > 0);
        assert!(data.height > 0);
    }

    #[test]
    fn unknown_bundled_asset_is_missing() {
        match load_bundled("nope.png") {
            Err(Error::MissingAsset(name)) => assert_eq!(name, "nope.png"),
            other => panic!("expected MissingAsset, got {other:?}"),
        }
    }

    #[test]
    fn dynamic_conversion_preserves_pixels() {
        let source = DynamicImage::ImageRgba8(RgbaImage::from_pixel(3, 3, Rgba([1, 2, 3, 4])));
        let data = ImageData::from_dynamic(&source);
        let back = data.to_dynamic().expect("dimensions match");
        assert_eq!(back.to_rgba8().get_pixel(2, 2).0, [1, 2, 3, 4]);
    }

    #[test]
    fn mismatched_buffer_has_no_dynamic_form() {
        let data = ImageData::from_rgba(10, 10, vec![0; 4]);
        assert!(data.to_dynamic().is_none());
    }

    #[test]
    fn save_then_load_png_keeps_pixels() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("out.png");
        let data = ImageData::from_rgba(2, 1, vec![10, 20, 30, 255, 40, 50, 60, 128]);

        save_image(&data, &path).expect("png save should succeed");
        let loaded = load_image(&path).expect("saved png should load");
        assert_eq!(loaded, data);
    }

    #[test]
    fn save_jpeg_drops_alpha_without_failing() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("out.jpg");
        let data = ImageData::from_rgba(4, 4, vec![200; 4 * 4 * 4]);

        save_image(&data, &path).expect("jpeg save should succeed");
        assert!(path.exists());
    }

    #[test]
    fn save_unknown_extension_is_encode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("out.unknown");
        let data = ImageData::from_rgba(1, 1, vec![0; 4]);

        assert!(matches!(save_image(&data, &path), Err(Error::Encode(_))));
    }
}
