// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Folder-to-CSV export: every glyph under `base/<ascii_code>/` becomes one
// `label,pixel_0,...,pixel_{N-1}` row.

use std::collections::BTreeSet;
use std::path::Path;

use glyphset_core::DatasetConfig;
use glyphset_core::error::{GlyphsetError, Result};
use glyphset_core::types::{DatasetRow, ImageSize, Label, LabelRange};
use glyphset_image::preprocess_glyph;
use tracing::{debug, info, instrument, warn};

use crate::csv_file::{create_writer, write_record};

/// Outcome of one export run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Label folders that existed and were read.
    pub folders: usize,
    /// Rows written to the CSV.
    pub rows: usize,
    /// Entries that failed preprocessing.
    pub skipped: usize,
}

/// Writes a dataset CSV from a labelled folder tree.
pub struct Exporter {
    target: ImageSize,
    threshold: u8,
    labels: Vec<LabelRange>,
}

impl Exporter {
    pub fn new(target: ImageSize, threshold: u8, labels: Vec<LabelRange>) -> Self {
        Self {
            target,
            threshold,
            labels,
        }
    }

    pub fn from_config(config: &DatasetConfig) -> Self {
        Self::new(config.target, config.threshold, config.labels.clone())
    }

    /// Labels in the order they are exported: ascending, each once.
    pub fn label_order(&self) -> Vec<Label> {
        self.labels
            .iter()
            .flat_map(|range| range.labels())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Export `base` to `output`, replacing whatever `output` held.
    ///
    /// Label folders are visited in ascending label order, so row order does
    /// not depend on how the filesystem lists `base`. Files inside a label
    /// folder are taken in directory listing order; sort them beforehand if
    /// byte-identical output across machines matters.
    ///
    /// A missing `base` or an unwritable `output` fails the run. A file that
    /// cannot be preprocessed is logged and skipped.
    #[instrument(skip_all, fields(base = %base.display(), output = %output.display()))]
    pub fn run(&self, base: &Path, output: &Path) -> Result<ExportSummary> {
        if !base.is_dir() {
            return Err(GlyphsetError::FolderNotFound(base.to_path_buf()));
        }

        let mut writer = create_writer(output)?;
        let mut summary = ExportSummary::default();

        for label in self.label_order() {
            let folder = base.join(label.to_string());
            if !folder.exists() {
                continue;
            }
            let entries = match std::fs::read_dir(&folder) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(folder = %folder.display(), error = %err, "Could not list label folder");
                    continue;
                }
            };
            summary.folders += 1;
            debug!(%label, glyph = %label.as_char(), "Exporting label folder");

            for entry in entries {
                let path = match entry {
                    Ok(entry) => entry.path(),
                    Err(err) => {
                        warn!(folder = %folder.display(), error = %err, "Could not read directory entry");
                        summary.skipped += 1;
                        continue;
                    }
                };

                let Some(glyph) = preprocess_glyph(&path, self.threshold, self.target) else {
                    summary.skipped += 1;
                    continue;
                };
                let row = DatasetRow::new(label, glyph.into_raw());
                write_record(&mut writer, row.to_record())?;
                summary.rows += 1;
            }
        }

        writer.flush()?;
        info!(
            folders = summary.folders,
            rows = summary.rows,
            skipped = summary.skipped,
            "CSV file saved"
        );
        Ok(summary)
    }
}

// -- Tests --------------------------------------------------------------------
