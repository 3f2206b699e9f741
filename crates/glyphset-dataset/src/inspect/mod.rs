// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Inspection helpers: find glyphs of the wrong size, preview a CSV row, and
// sort a dataset file by label.

pub mod dimensions;
pub mod sort;
pub mod visualize;
