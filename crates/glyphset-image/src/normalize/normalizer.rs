// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-place normalizer: sharpens and resizes every glyph under
// `base/<ascii_code>/`, overwriting the original files.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use glyphset_core::DatasetConfig;
use glyphset_core::error::{GlyphsetError, Result};
use glyphset_core::types::{ImageSize, Label, LabelRange, in_ranges};
use image::ImageReader;
use image::imageops::FilterType;
use tracing::{debug, info, instrument, warn};

use super::sharpen::sharpen;

/// Outcome of one normalization run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NormalizeSummary {
    /// Label folders that were entered.
    pub folders: usize,
    /// Files rewritten in place.
    pub processed: usize,
    /// Files that could not be decoded, filtered, or written back.
    pub failed: usize,
}

/// Sharpen + resize pass over a dataset folder.
///
/// Destructive: originals are overwritten. Dimensions settle after one pass
/// but pixel values keep changing on every repeat, since sharpening compounds.
pub struct Normalizer {
    target: ImageSize,
    labels: Vec<LabelRange>,
}

impl Normalizer {
    pub fn new(target: ImageSize, labels: Vec<LabelRange>) -> Self {
        Self { target, labels }
    }

    pub fn from_config(config: &DatasetConfig) -> Self {
        Self::new(config.target, config.labels.clone())
    }

    /// Walk `base` in directory listing order.
    ///
    /// Subfolders whose names are not pure digits, or whose code is outside
    /// the label ranges, are skipped without comment. Only a missing or
    /// unreadable `base` is an error.
    #[instrument(skip_all, fields(base = %base.display(), target = %self.target))]
    pub fn run(&self, base: &Path) -> Result<NormalizeSummary> {
        if !base.exists() {
            return Err(GlyphsetError::FolderNotFound(base.to_path_buf()));
        }

        let mut summary = NormalizeSummary::default();
        for entry in std::fs::read_dir(base)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(base = %base.display(), error = %err, "Could not read directory entry");
                    continue;
                }
            };
            let folder = entry.path();
            if !folder.is_dir() {
                continue;
            }
            let Some(label) = entry.file_name().to_str().and_then(Label::from_dir_name) else {
                continue;
            };
            if !in_ranges(&self.labels, label) {
                debug!(%label, "Label outside configured ranges; skipping folder");
                continue;
            }

            summary.folders += 1;
            self.normalize_folder(&folder, &mut summary);
        }

        info!(
            folders = summary.folders,
            processed = summary.processed,
            failed = summary.failed,
            "Normalization finished"
        );
        Ok(summary)
    }

    fn normalize_folder(&self, folder: &Path, summary: &mut NormalizeSummary) {
        let entries = match std::fs::read_dir(folder) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(folder = %folder.display(), error = %err, "Could not list folder");
                return;
            }
        };

        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(err) => {
                    warn!(folder = %folder.display(), error = %err, "Could not read directory entry");
                    summary.failed += 1;
                    continue;
                }
            };
            match self.normalize_file(&path) {
                Ok(()) => {
                    info!(path = %path.display(), "Processed image");
                    summary.processed += 1;
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "Could not process file");
                    summary.failed += 1;
                }
            }
        }
    }

    /// Sharpen, resize, and write back in the format the file was read as.
    pub fn normalize_file(&self, path: &Path) -> Result<()> {
        let decode_err = |reason: String| GlyphsetError::Decode {
            path: path.to_path_buf(),
            reason,
        };

        let reader = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|err| decode_err(err.to_string()))?;
        let format = reader
            .format()
            .ok_or_else(|| decode_err("unrecognised image format".into()))?;
        let image = reader.decode().map_err(|err| decode_err(err.to_string()))?;

        let resized = sharpen(&image).resize_exact(
            self.target.width,
            self.target.height,
            FilterType::CatmullRom,
        );

        // Encode in memory first; a failed encode must not truncate the original.
        let mut encoded = Cursor::new(Vec::new());
        resized
            .write_to(&mut encoded, format)
            .map_err(|err| GlyphsetError::Encode {
                path: PathBuf::from(path),
                reason: err.to_string(),
            })?;
        std::fs::write(path, encoded.into_inner())?;
        Ok(())
    }
}

// -- Tests --------------------------------------------------------------------
