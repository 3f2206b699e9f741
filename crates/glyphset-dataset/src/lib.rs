// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// glyphset-dataset: Dataset file operations for Glyphset.
//
// Exports a `base/<ascii_code>/<image>` folder tree to a headerless CSV of
// labelled, flattened glyphs, and provides the inspection helpers that work on
// the tree and on the CSV (dimension check, row preview, sort by label).

pub mod csv_file;
pub mod export;
pub mod inspect;

pub use export::{ExportSummary, Exporter};
pub use inspect::dimensions::{DimensionMismatch, DimensionReport, check_dimensions};
pub use inspect::sort::{SortSummary, sort_csv};
pub use inspect::visualize::{RowPreview, load_row};
