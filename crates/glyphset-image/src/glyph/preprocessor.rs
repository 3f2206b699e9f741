// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Glyph preprocessor: grayscale, fixed-threshold binarization, inversion and
// area resize. Operates on in-memory images using the `image` crate.

use std::path::Path;

use glyphset_core::ImageSize;
use glyphset_core::error::{GlyphsetError, Result};
use image::{DynamicImage, GrayImage, ImageDecoder, ImageReader, Luma, Rgb, RgbImage};
use tracing::{debug, instrument, warn};

use super::area::resize_area;

// BT.601 luma weights in 14-bit fixed point (sum = 1 << 14).
const LUMA_SHIFT: u32 = 14;
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;

/// Single-channel glyph image moving through the preprocessing chain.
///
/// Each method consumes `self` and returns the transformed glyph, so the
/// fixed pipeline reads top to bottom:
///
/// ```ignore
/// let pixels = GlyphPreprocessor::open("dataset/65/a1.png")?
///     .binarize(128)
///     .invert()
///     .resize_area(ImageSize::new(28, 28))
///     .into_pixels();
/// ```
#[derive(Debug, Clone)]
pub struct GlyphPreprocessor {
    image: GrayImage,
}

impl GlyphPreprocessor {
    // -- Construction ---------------------------------------------------------

    /// Decode a color image from disk and convert it to grayscale.
    ///
    /// The format is sniffed from the file contents, not the extension. An
    /// EXIF orientation tag is applied, so camera images come out upright.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let decode_err = |reason: String| GlyphsetError::Decode {
            path: path.to_path_buf(),
            reason,
        };

        let mut decoder = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|err| decode_err(err.to_string()))?
            .into_decoder()
            .map_err(|err| decode_err(err.to_string()))?;
        let orientation = decoder
            .orientation()
            .map_err(|err| decode_err(err.to_string()))?;
        let mut image =
            DynamicImage::from_decoder(decoder).map_err(|err| decode_err(err.to_string()))?;
        image.apply_orientation(orientation);

        debug!(
            width = image.width(),
            height = image.height(),
            ?orientation,
            "Glyph decoded"
        );
        Ok(Self::from_dynamic(&image))
    }

    /// Convert any decoded image to grayscale. Alpha is dropped, not blended.
    pub fn from_dynamic(image: &DynamicImage) -> Self {
        Self::from_rgb(&image.to_rgb8())
    }

    /// Grayscale conversion with BT.601 luma weights.
    pub fn from_rgb(rgb: &RgbImage) -> Self {
        let image = GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
            let Rgb([r, g, b]) = *rgb.get_pixel(x, y);
            let luma = (r as u32 * LUMA_R
                + g as u32 * LUMA_G
                + b as u32 * LUMA_B
                + (1 << (LUMA_SHIFT - 1)))
                >> LUMA_SHIFT;
            Luma([luma as u8])
        });
        Self { image }
    }

    /// Wrap an image that is already single-channel.
    pub fn from_gray(image: GrayImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn as_gray(&self) -> &GrayImage {
        &self.image
    }

    pub fn into_gray(self) -> GrayImage {
        self.image
    }

    /// Consume the glyph and return its pixels flattened row-major.
    pub fn into_pixels(self) -> Vec<u8> {
        self.image.into_raw()
    }

    // -- Transformations (consume self, return new Self) -----------------------

    /// Global fixed threshold: intensities `>= threshold` become 255, the rest 0.
    pub fn binarize(mut self, threshold: u8) -> Self {
        for pixel in self.image.pixels_mut() {
            pixel.0[0] = if pixel.0[0] >= threshold { 255 } else { 0 };
        }
        self
    }

    /// Map every value `v` to `255 - v`.
    pub fn invert(mut self) -> Self {
        for pixel in self.image.pixels_mut() {
            pixel.0[0] = 255 - pixel.0[0];
        }
        self
    }

    /// Resize to exactly `size` with area averaging.
    pub fn resize_area(self, size: ImageSize) -> Self {
        Self {
            image: resize_area(&self.image, size.width, size.height),
        }
    }

    /// The full fixed pipeline after decoding: binarize, invert, resize.
    pub fn prepare(self, threshold: u8, size: ImageSize) -> Self {
        self.binarize(threshold).invert().resize_area(size)
    }
}

/// Run the whole preprocessing pipeline on one file.
///
/// Failures are logged and reported as `None`; the caller skips the file.
pub fn preprocess_glyph(path: &Path, threshold: u8, size: ImageSize) -> Option<GrayImage> {
    match GlyphPreprocessor::open(path) {
        Ok(glyph) => Some(glyph.prepare(threshold, size).into_gray()),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Error processing image");
            None
        }
    }
}

// -- Tests --------------------------------------------------------------------
