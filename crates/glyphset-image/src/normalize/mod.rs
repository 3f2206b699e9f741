// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bulk normalization: sharpen and resize every glyph in a dataset folder,
// overwriting the originals.

pub mod normalizer;
pub mod sharpen;

pub use normalizer::Normalizer;
