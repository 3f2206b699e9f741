// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// CSV row visualizer: rebuilds one dataset row as an image for a quick look.

use std::path::Path;

use csv::StringRecord;
use glyphset_core::error::{GlyphsetError, Result};
use glyphset_core::types::ImageSize;
use image::GrayImage;
use tracing::{debug, instrument};

use crate::csv_file::read_records;

/// Intensity ramp for terminal rendering, darkest first.
const SHADES: [char; 5] = [' ', '░', '▒', '▓', '█'];

/// One dataset row reshaped into an image.
#[derive(Debug, Clone, PartialEq)]
pub struct RowPreview {
    pub index: usize,
    /// First column, kept as written.
    pub label: String,
    pub image: GrayImage,
}

impl RowPreview {
    /// The label as a character, when it is a valid ASCII code.
    pub fn glyph(&self) -> Option<char> {
        self.label.trim().parse::<u8>().ok().map(char::from)
    }

    /// Render the image as block characters, one text line per pixel row.
    pub fn render(&self) -> String {
        let (width, height) = self.image.dimensions();
        let mut out = String::with_capacity(((width + 1) * height) as usize * 3);
        for y in 0..height {
            for x in 0..width {
                let value = self.image.get_pixel(x, y).0[0] as usize;
                out.push(SHADES[value * (SHADES.len() - 1) / 255]);
            }
            out.push('\n');
        }
        out
    }

    /// Write the image as a grayscale PNG.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|err| GlyphsetError::Encode {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })
    }
}

/// Load row `index` (0-based) of `csv_path` and reshape it to `size`.
///
/// The whole file is read first. An index past the end returns
/// `IndexOutOfRange` before anything is parsed or reshaped.
#[instrument(skip_all, fields(csv = %csv_path.display(), index = index, size = %size))]
pub fn load_row(csv_path: &Path, index: usize, size: ImageSize) -> Result<RowPreview> {
    let records = read_records(csv_path)?;
    let Some(record) = records.get(index) else {
        return Err(GlyphsetError::IndexOutOfRange {
            index,
            rows: records.len(),
        });
    };
    let preview = reshape(index, record, size)?;
    debug!(label = %preview.label, "Row reshaped");
    Ok(preview)
}

fn reshape(index: usize, record: &StringRecord, size: ImageSize) -> Result<RowPreview> {
    let mut fields = record.iter();
    let label = fields
        .next()
        .ok_or_else(|| GlyphsetError::MalformedRow {
            row: index,
            reason: "row is empty".into(),
        })?
        .to_string();

    let pixels = fields
        .enumerate()
        .map(|(column, field)| {
            field.trim().parse::<u8>().map_err(|err| GlyphsetError::MalformedRow {
                row: index,
                reason: format!("column {}: '{field}': {err}", column + 1),
            })
        })
        .collect::<Result<Vec<u8>>>()?;

    let actual = pixels.len();
    let image = GrayImage::from_raw(size.width, size.height, pixels)
        .filter(|_| actual == size.pixel_count())
        .ok_or(GlyphsetError::ShapeMismatch {
            actual,
            width: size.width,
            height: size.height,
        })?;

    Ok(RowPreview {
        index,
        label,
        image,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_csv(dir: &Path, text: &str) -> std::path::PathBuf {
        let path = dir.join("rows.csv");
        std::fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn reshapes_row_after_label() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "65,0,255,255,0\r\n66,1,2,3,4\r\n");

        let preview = load_row(&path, 1, ImageSize::new(2, 2)).unwrap();
        assert_eq!(preview.label, "66");
        assert_eq!(preview.glyph(), Some('B'));
        assert_eq!(preview.image.as_raw(), &vec![1, 2, 3, 4]);
        assert_eq!(preview.image.get_pixel(0, 1).0[0], 3);
    }

    #[test]
    fn index_past_end_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "65,0,0,0,0\n");
        match load_row(&path, 1, ImageSize::new(2, 2)) {
            Err(GlyphsetError::IndexOutOfRange { index, rows }) => {
                assert_eq!((index, rows), (1, 1));
            }
            other => panic!("expected IndexOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn index_check_precedes_parsing() {
        let dir = tempfile::tempdir().unwrap();
        // Row 0 would not reshape; asking for row 5 must still be a range error.
        let path = write_csv(dir.path(), "65,x,y\n");
        assert!(matches!(
            load_row(&path, 5, ImageSize::default()),
            Err(GlyphsetError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn wrong_length_is_shape_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "65,1,2,3\n");
        assert!(matches!(
            load_row(&path, 0, ImageSize::new(2, 2)),
            Err(GlyphsetError::ShapeMismatch { actual: 3, .. })
        ));
    }

    #[test]
    fn non_numeric_pixel_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "65,1,two,3,4\n");
        assert!(matches!(
            load_row(&path, 0, ImageSize::new(2, 2)),
            Err(GlyphsetError::MalformedRow { row: 0, .. })
        ));
    }

    #[test]
    fn render_maps_intensity_to_blocks() {
        let preview = RowPreview {
            index: 0,
            label: "65".into(),
            image: GrayImage::from_raw(3, 1, vec![0, 128, 255]).unwrap(),
        };
        assert_eq!(preview.render(), " ▒█\n");
    }

    #[test]
    fn save_png_round_trips_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("row.png");
        let preview = RowPreview {
            index: 0,
            label: "97".into(),
            image: GrayImage::from_raw(2, 2, vec![0, 50, 100, 255]).unwrap(),
        };
        preview.save_png(&out).unwrap();
        assert_eq!(image::open(&out).unwrap().to_luma8(), preview.image);
    }
}
