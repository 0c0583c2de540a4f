// SPDX-License-Identifier: MPL-2.0
//! Bitmap handling shared by the filter and picker screens.
//!
//! Pictures enter the application either from the embedded asset bundle or
//! from a file chosen through the picker, and leave it through the save
//! dialog. In between they are held as [`ImageData`], which is replaced
//! wholesale and never mutated in place.

pub mod image;

use std::path::Path;

pub use image::{load_bundled, load_image, save_image, ImageData, EXAMPLE_IMAGE};

/// Supported media extensions
pub mod extensions {
    /// Image file extensions accepted by the picker.
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
    ];

    /// Image format filters for save dialogs
    pub const IMAGE_SAVE_FILTERS: &[(&str, &[&str])] = &[
        ("PNG", &["png"]),
        ("JPEG", &["jpg", "jpeg"]),
        ("WebP", &["webp"]),
        ("TIFF", &["tiff", "tif"]),
        ("BMP", &["bmp"]),
    ];
}

/// Returns true when the path carries an image extension (case-insensitive).
#[must_use]
pub fn is_image_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .is_some_and(|ext| extensions::IMAGE_EXTENSIONS.contains(&ext.as_str()))
}
