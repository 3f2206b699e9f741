// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Area resampling for single-channel images.

use image::{GrayImage, Luma};

/// Resize `src` to `width` x `height` by area averaging.
///
/// Every destination pixel covers a rectangle of the source image. Its value
/// is the mean of the source pixels inside that rectangle, each weighted by
/// the fraction of it that is covered. The mean is rounded half-to-even.
///
/// This is the filter of choice for shrinking glyphs: thin strokes fade
/// instead of vanishing between sample points.
pub fn resize_area(src: &GrayImage, width: u32, height: u32) -> GrayImage {
    let (src_w, src_h) = src.dimensions();
    if (src_w, src_h) == (width, height) {
        return src.clone();
    }

    let columns = axis_spans(src_w, width);
    let rows = axis_spans(src_h, height);

    GrayImage::from_fn(width, height, |x, y| {
        let mut acc = 0.0f64;
        for &(sy, wy) in &rows[y as usize] {
            for &(sx, wx) in &columns[x as usize] {
                acc += src.get_pixel(sx, sy).0[0] as f64 * wx * wy;
            }
        }
        Luma([acc.round_ties_even().clamp(0.0, 255.0) as u8])
    })
}

/// For each destination index along one axis, the source indices it covers
/// and their normalised weights (summing to 1).
fn axis_spans(src_len: u32, dst_len: u32) -> Vec<Vec<(u32, f64)>> {
    if src_len == 0 {
        return vec![Vec::new(); dst_len as usize];
    }
    let scale = src_len as f64 / dst_len as f64;

    (0..dst_len)
        .map(|d| {
            let start = d as f64 * scale;
            let end = (start + scale).min(src_len as f64);
            let first = start.floor() as u32;
            let last = (end.ceil() as u32).min(src_len);

            (first..last)
                .filter_map(|s| {
                    let overlap = end.min(s as f64 + 1.0) - start.max(s as f64);
                    (overlap > 1e-9).then_some((s, overlap / (end - start)))
                })
                .collect()
        })
        .collect()
}
