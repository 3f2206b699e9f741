// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use glyphset_core::DatasetConfig;
use glyphset_core::error::Result;
use glyphset_core::types::LabelRange;

/// Prepare folders of single-character glyph images into a labelled CSV.
#[derive(Debug, Parser)]
#[command(name = "glyphset", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every tool. Flags override `--config`.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// JSON configuration file; missing fields use the defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Glyph width in pixels (default 28).
    #[arg(long, global = true)]
    pub target_width: Option<u32>,

    /// Glyph height in pixels (default 28).
    #[arg(long, global = true)]
    pub target_height: Option<u32>,

    /// Binarization cutoff; intensities at or above become white (default 128).
    #[arg(long, global = true)]
    pub threshold: Option<u8>,

    /// Label ranges to visit, e.g. `65-90,97-122` (default A-Z and a-z).
    #[arg(long, global = true, value_delimiter = ',')]
    pub labels: Option<Vec<LabelRange>>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// Defaults, then the config file, then individual flags.
    pub fn build_config(&self) -> Result<DatasetConfig> {
        let mut config = match &self.config {
            Some(path) => DatasetConfig::load(path)?,
            None => DatasetConfig::default(),
        };
        if let Some(width) = self.target_width {
            config.target.width = width;
        }
        if let Some(height) = self.target_height {
            config.target.height = height;
        }
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(labels) = &self.labels {
            config.labels = labels.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Preprocess every glyph under <input-dir>/<ascii_code>/ into one CSV.
    Export {
        #[arg(long)]
        input_dir: PathBuf,
        #[arg(long, default_value = "output.csv")]
        output_csv: PathBuf,
    },

    /// Sharpen and resize every glyph in place. Overwrites the originals.
    Normalize {
        #[arg(long)]
        input_dir: PathBuf,
    },

    /// List images under <input-dir> whose size is not the target size.
    CheckDims {
        #[arg(long)]
        input_dir: PathBuf,
    },

    /// Show one CSV row as an image.
    View {
        #[arg(long, default_value = "output.csv")]
        input_csv: PathBuf,
        /// 0-based row to show.
        #[arg(long)]
        row_index: usize,
        /// Also write the row as a PNG.
        #[arg(long)]
        save_png: Option<PathBuf>,
    },

    /// Sort a CSV by its label column into a new file.
    Sort {
        #[arg(long, default_value = "output.csv")]
        input_csv: PathBuf,
        /// Defaults to the configured sorted output (`sorted.csv`).
        #[arg(long)]
        output_csv: Option<PathBuf>,
    },

    /// Write the effective configuration as JSON.
    InitConfig {
        #[arg(long, default_value = "glyphset.json")]
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use glyphset_core::ImageSize;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "glyphset",
            "export",
            "--input-dir",
            "glyphs",
            "--target-width",
            "32",
            "--threshold",
            "100",
            "--labels",
            "48-57,65-90",
        ]);
        let config = cli.global.build_config().unwrap();
        assert_eq!(config.target, ImageSize::new(32, 28));
        assert_eq!(config.threshold, 100);
        assert_eq!(
            config.labels,
            vec![LabelRange { start: 48, end: 57 }, LabelRange::UPPERCASE]
        );
        match cli.command {
            Command::Export {
                input_dir,
                output_csv,
            } => {
                assert_eq!(input_dir, PathBuf::from("glyphs"));
                assert_eq!(output_csv, PathBuf::from("output.csv"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn config_file_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        std::fs::write(&path, r#"{ "threshold": 90, "target": { "width": 20, "height": 20 } }"#)
            .unwrap();

        let cli = Cli::parse_from([
            "glyphset",
            "--config",
            path.to_str().unwrap(),
            "--target-height",
            "24",
            "check-dims",
            "--input-dir",
            "glyphs",
        ]);
        let config = cli.global.build_config().unwrap();
        assert_eq!(config.threshold, 90);
        assert_eq!(config.target, ImageSize::new(20, 24));
    }

    #[test]
    fn zero_width_is_rejected() {
        let cli = Cli::parse_from([
            "glyphset",
            "normalize",
            "--input-dir",
            "glyphs",
            "--target-width",
            "0",
        ]);
        assert!(cli.global.build_config().is_err());
    }

    #[test]
    fn huge_width_is_rejected() {
        let cli = Cli::parse_from([
            "glyphset",
            "export",
            "--input-dir",
            "glyphs",
            "--target-width",
            "4000000000",
        ]);
        assert!(cli.global.build_config().is_err());
    }

    #[test]
    fn bad_label_range_fails_to_parse() {
        let result = Cli::try_parse_from(["glyphset", "--labels", "z-a", "sort"]);
        assert!(result.is_err());
    }

    #[test]
    fn view_requires_row_index() {
        assert!(Cli::try_parse_from(["glyphset", "view"]).is_err());
        let cli = Cli::try_parse_from(["glyphset", "view", "--row-index", "3"]).unwrap();
        assert!(matches!(cli.command, Command::View { row_index: 3, .. }));
    }
}
