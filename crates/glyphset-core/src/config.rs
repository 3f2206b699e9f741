// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dataset configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GlyphsetError, Result};
use crate::types::{ImageSize, LabelRange, default_label_ranges};

/// Default binarization cutoff.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Largest glyph, in pixels, a target size may describe.
pub const MAX_TARGET_PIXELS: u64 = 4096 * 4096;

/// Where the sorter writes when no output path is given. Deliberately not
/// derived from the input filename.
pub const DEFAULT_SORTED_OUTPUT: &str = "sorted.csv";

/// Settings shared by every dataset tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Size every glyph is resized to, and the shape rows are reshaped to.
    pub target: ImageSize,
    /// Grayscale intensities at or above this become white before inversion.
    pub threshold: u8,
    /// Label subfolders visited by the exporter and the normalizer.
    pub labels: Vec<LabelRange>,
    /// Output file of the CSV sorter.
    pub sorted_output: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            target: ImageSize::default(),
            threshold: DEFAULT_THRESHOLD,
            labels: default_label_ranges(),
            sorted_output: PathBuf::from(DEFAULT_SORTED_OUTPUT),
        }
    }
}

impl DatasetConfig {
    /// Read a config from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.target.width == 0 || self.target.height == 0 {
            return Err(GlyphsetError::InvalidConfig(format!(
                "target size {} has a zero dimension",
                self.target
            )));
        }
        if self.target.width as u64 * self.target.height as u64 > MAX_TARGET_PIXELS {
            return Err(GlyphsetError::InvalidConfig(format!(
                "target size {} exceeds {MAX_TARGET_PIXELS} pixels",
                self.target
            )));
        }
        if self.labels.is_empty() {
            return Err(GlyphsetError::InvalidConfig(
                "at least one label range is required".into(),
            ));
        }
        if let Some(range) = self.labels.iter().find(|r| r.is_empty()) {
            return Err(GlyphsetError::InvalidConfig(format!(
                "label range {range} is empty"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_glyph_dataset() {
        let config = DatasetConfig::default();
        assert_eq!(config.target, ImageSize::new(28, 28));
        assert_eq!(config.threshold, 128);
        assert_eq!(config.labels, vec![LabelRange::UPPERCASE, LabelRange::LOWERCASE]);
        assert_eq!(config.sorted_output, PathBuf::from("sorted.csv"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glyphset.json");
        let config = DatasetConfig {
            threshold: 100,
            target: ImageSize::new(32, 32),
            ..DatasetConfig::default()
        };
        config.save(&path).unwrap();
        assert_eq!(DatasetConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(&path, r#"{ "threshold": 90 }"#).unwrap();
        let config = DatasetConfig::load(&path).unwrap();
        assert_eq!(config.threshold, 90);
        assert_eq!(config.target, ImageSize::default());
    }

    #[test]
    fn zero_size_is_rejected() {
        let config = DatasetConfig {
            target: ImageSize::new(0, 28),
            ..DatasetConfig::default()
        };
        assert!(matches!(config.validate(), Err(GlyphsetError::InvalidConfig(_))));
    }

    #[test]
    fn oversized_target_is_rejected() {
        let config = DatasetConfig {
            target: ImageSize::new(4_000_000_000, 28),
            ..DatasetConfig::default()
        };
        assert!(matches!(config.validate(), Err(GlyphsetError::InvalidConfig(_))));

        let largest = DatasetConfig {
            target: ImageSize::new(4096, 4096),
            ..DatasetConfig::default()
        };
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn empty_label_list_is_rejected() {
        let config = DatasetConfig {
            labels: Vec::new(),
            ..DatasetConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
