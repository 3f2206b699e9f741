// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Glyphset dataset tools.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GlyphsetError;

/// ASCII code identifying a glyph class. Doubles as the subfolder name in the
/// dataset layout and as the first column of every dataset row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Label(pub u8);

impl Label {
    /// Parse a subfolder name into a label.
    ///
    /// Only pure-digit names are accepted (leading zeros allowed). Names that
    /// contain anything else, or whose value does not fit in 0..=255, return
    /// `None`.
    pub fn from_dir_name(name: &str) -> Option<Self> {
        if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        name.parse::<u8>().ok().map(Self)
    }

    /// The character this label encodes.
    pub fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive range of labels, e.g. `65..=90` for `A`-`Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRange {
    pub start: u8,
    pub end: u8,
}

impl LabelRange {
    /// Uppercase `A`-`Z`.
    pub const UPPERCASE: Self = Self { start: 65, end: 90 };
    /// Lowercase `a`-`z`.
    pub const LOWERCASE: Self = Self {
        start: 97,
        end: 122,
    };

    pub fn contains(&self, label: Label) -> bool {
        (self.start..=self.end).contains(&label.0)
    }

    /// Labels in ascending order.
    pub fn labels(self) -> impl Iterator<Item = Label> {
        (self.start..=self.end).map(Label)
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

/// The label universe visited by the exporter and the normalizer.
pub fn default_label_ranges() -> Vec<LabelRange> {
    vec![LabelRange::UPPERCASE, LabelRange::LOWERCASE]
}

/// Whether `label` falls in any of `ranges`.
pub fn in_ranges(ranges: &[LabelRange], label: Label) -> bool {
    ranges.iter().any(|range| range.contains(label))
}

impl fmt::Display for LabelRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Accepts `"65-90"` or a single code such as `"48"`.
impl FromStr for LabelRange {
    type Err = GlyphsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| {
            part.trim().parse::<u8>().map_err(|err| {
                GlyphsetError::InvalidConfig(format!("bad label range '{s}': {err}"))
            })
        };
        let range = match s.split_once('-') {
            Some((start, end)) => Self {
                start: parse(start)?,
                end: parse(end)?,
            },
            None => {
                let code = parse(s)?;
                Self {
                    start: code,
                    end: code,
                }
            }
        };
        if range.is_empty() {
            return Err(GlyphsetError::InvalidConfig(format!(
                "label range '{s}' is empty"
            )));
        }
        Ok(range)
    }
}

/// Pixel dimensions of a glyph image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels in a flattened grid of this size.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for ImageSize {
    fn default() -> Self {
        Self::new(28, 28)
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One line of a dataset file: the label followed by the row-major pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetRow {
    pub label: Label,
    pub pixels: Vec<u8>,
}

impl DatasetRow {
    pub fn new(label: Label, pixels: Vec<u8>) -> Self {
        Self { label, pixels }
    }

    /// Number of CSV fields this row occupies (label + pixels).
    pub fn field_count(&self) -> usize {
        1 + self.pixels.len()
    }

    /// Render as CSV fields: `label,pixel_0,...,pixel_{N-1}`.
    pub fn to_record(&self) -> Vec<String> {
        let mut record = Vec::with_capacity(self.field_count());
        record.push(self.label.to_string());
        record.extend(self.pixels.iter().map(u8::to_string));
        record
    }
}
