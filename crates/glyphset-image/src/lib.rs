// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// glyphset-image: Image operations for the Glyphset dataset tools.
//
// Provides the glyph preprocessing chain (luma grayscale, fixed-threshold
// binarization, inversion, area resampling) and the bulk normalizer that
// sharpens and resizes a dataset folder in place.

pub mod glyph;
pub mod normalize;

// Re-export the primary structs so callers can use `glyphset_image::GlyphPreprocessor` etc.
pub use glyph::preprocessor::{GlyphPreprocessor, preprocess_glyph};
pub use normalize::normalizer::{NormalizeSummary, Normalizer};
