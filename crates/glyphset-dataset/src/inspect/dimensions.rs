// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dimension checker: recursively finds images whose size differs from the
// required glyph size.

use std::path::{Path, PathBuf};

use glyphset_core::error::{GlyphsetError, Result};
use glyphset_core::types::ImageSize;
use image::ImageReader;
use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

/// An image whose dimensions differ from the required size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionMismatch {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Findings of one dimension check.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DimensionReport {
    /// Images of the wrong size, in walk order.
    pub mismatches: Vec<DimensionMismatch>,
    /// Images that were opened and measured.
    pub checked: usize,
    /// Files that were not readable as images.
    pub skipped: usize,
}

impl DimensionReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Paths of the mismatching images.
    pub fn paths(&self) -> Vec<&Path> {
        self.mismatches.iter().map(|m| m.path.as_path()).collect()
    }
}

/// Walk `root` and every subfolder, measuring each file as an image.
///
/// Files that do not open as images are logged and left out of the report
/// rather than counted as mismatches.
#[instrument(skip_all, fields(root = %root.display(), required = %required))]
pub fn check_dimensions(root: &Path, required: ImageSize) -> Result<DimensionReport> {
    if !root.is_dir() {
        return Err(GlyphsetError::FolderNotFound(root.to_path_buf()));
    }

    let mut report = DimensionReport::default();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "Could not read directory entry");
                continue;
            }
        };
        if entry.file_type().is_dir() {
            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            debug!(folder = %relative.display(), "Checking folder");
            continue;
        }
        // Links are not followed; a link to a folder is neither checked nor skipped.
        if entry.path_is_symlink() && entry.path().is_dir() {
            debug!(path = %entry.path().display(), "Not following folder symlink");
            continue;
        }

        let path = entry.path();
        match read_dimensions(path) {
            Ok((width, height)) => {
                report.checked += 1;
                if (width, height) != (required.width, required.height) {
                    debug!(path = %path.display(), width, height, "Dimension mismatch");
                    report.mismatches.push(DimensionMismatch {
                        path: path.to_path_buf(),
                        width,
                        height,
                    });
                }
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Skipping non-image file");
                report.skipped += 1;
            }
        }
    }

    info!(
        checked = report.checked,
        mismatched = report.mismatches.len(),
        skipped = report.skipped,
        "Dimension check finished"
    );
    Ok(report)
}

/// Read an image's width and height from its header.
fn read_dimensions(path: &Path) -> Result<(u32, u32)> {
    let decode_err = |reason: String| GlyphsetError::Decode {
        path: path.to_path_buf(),
        reason,
    };
    ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|err| decode_err(err.to_string()))?
        .into_dimensions()
        .map_err(|err| decode_err(err.to_string()))
}
