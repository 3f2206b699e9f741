// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// 3x3 sharpening convolution.

use image::{DynamicImage, ImageBuffer, Pixel};

/// Sharpen kernel, applied with a divisor of 16 (weights sum to 1).
const SHARPEN_KERNEL: [f32; 9] = [-2.0, -2.0, -2.0, -2.0, 32.0, -2.0, -2.0, -2.0, -2.0];
const SHARPEN_DIVISOR: f32 = 16.0;

/// Sharpen an image, keeping its color type where it is 8-bit.
///
/// Higher bit depths are narrowed to 8-bit RGB or RGBA first.
pub fn sharpen(image: &DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageLuma8(buf) => DynamicImage::ImageLuma8(sharpen_buffer(buf)),
        DynamicImage::ImageLumaA8(buf) => DynamicImage::ImageLumaA8(sharpen_buffer(buf)),
        DynamicImage::ImageRgb8(buf) => DynamicImage::ImageRgb8(sharpen_buffer(buf)),
        DynamicImage::ImageRgba8(buf) => DynamicImage::ImageRgba8(sharpen_buffer(buf)),
        other if other.color().has_alpha() => {
            DynamicImage::ImageRgba8(sharpen_buffer(&other.to_rgba8()))
        }
        other => DynamicImage::ImageRgb8(sharpen_buffer(&other.to_rgb8())),
    }
}

/// Convolve every channel with the sharpen kernel.
///
/// The one-pixel border is copied through unfiltered. Images smaller than
/// 3x3 are returned unchanged.
pub fn sharpen_buffer<P>(src: &ImageBuffer<P, Vec<u8>>) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    let (width, height) = src.dimensions();
    let mut out = src.clone();
    if width < 3 || height < 3 {
        return out;
    }

    let channels = P::CHANNEL_COUNT as usize;
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let mut acc = [0.0f32; 4];
            for ky in 0..3u32 {
                for kx in 0..3u32 {
                    let weight = SHARPEN_KERNEL[(ky * 3 + kx) as usize];
                    let neighbour = src.get_pixel(x + kx - 1, y + ky - 1);
                    for (sum, value) in acc.iter_mut().zip(neighbour.channels()) {
                        *sum += *value as f32 * weight;
                    }
                }
            }
            let target = out.get_pixel_mut(x, y);
            for (value, sum) in target.channels_mut().iter_mut().zip(&acc[..channels]) {
                *value = (sum / SHARPEN_DIVISOR).round().clamp(0.0, 255.0) as u8;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgba, RgbaImage};

    #[test]
    fn flat_region_is_unchanged() {
        let img = GrayImage::from_pixel(6, 6, Luma([90]));
        assert_eq!(sharpen_buffer(&img), img);
    }

    #[test]
    fn isolated_dot_is_amplified_and_neighbours_darkened() {
        let mut img = GrayImage::from_pixel(5, 5, Luma([100]));
        img.put_pixel(2, 2, Luma([140]));
        let out = sharpen_buffer(&img);
        // centre: (140*32 - 8*100*2) / 16 = 180
        assert_eq!(out.get_pixel(2, 2).0[0], 180);
        // neighbour: (100*32 - 7*100*2 - 140*2) / 16 = 95
        assert_eq!(out.get_pixel(1, 1).0[0], 95);
    }

    #[test]
    fn border_pixels_pass_through() {
        let img = GrayImage::from_fn(4, 4, |x, y| Luma([(x * 60 + y * 5) as u8]));
        let out = sharpen_buffer(&img);
        for x in 0..4 {
            assert_eq!(out.get_pixel(x, 0), img.get_pixel(x, 0));
            assert_eq!(out.get_pixel(x, 3), img.get_pixel(x, 3));
        }
        for y in 0..4 {
            assert_eq!(out.get_pixel(0, y), img.get_pixel(0, y));
            assert_eq!(out.get_pixel(3, y), img.get_pixel(3, y));
        }
    }

    #[test]
    fn tiny_images_are_untouched() {
        let img = GrayImage::from_raw(2, 2, vec![0, 255, 255, 0]).unwrap();
        assert_eq!(sharpen_buffer(&img), img);
    }

    #[test]
    fn keeps_color_type_and_opaque_alpha() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255])));
        let out = sharpen(&img);
        assert!(matches!(out, DynamicImage::ImageRgba8(_)));
        assert!(out.to_rgba8().pixels().all(|p| p.0[3] == 255));
    }
}
