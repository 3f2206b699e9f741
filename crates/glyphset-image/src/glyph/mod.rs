// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Glyph module: turns one source image into a fixed-size, single-channel,
// white-on-black pixel grid.

pub mod area;
pub mod preprocessor;

pub use preprocessor::GlyphPreprocessor;
