// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Glyphset: glyph dataset preparation tools
//
// Entry point. Parses the command line, initialises logging, builds the
// dataset configuration, and dispatches to the selected tool.

mod args;

use std::process::ExitCode;

use clap::Parser;
use glyphset_core::error::{GlyphsetError, Result};
use glyphset_dataset::{Exporter, check_dimensions, load_row, sort_csv};
use glyphset_image::Normalizer;

use args::{Cli, Command};

/// Exit code for any unrecoverable error.
const EXIT_FAILURE: u8 = 1;

/// Exit code for a row index past the end of the CSV.
const EXIT_OUT_OF_RANGE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.global.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    tracing::debug!("Glyphset starting");

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            match &err {
                GlyphsetError::IndexOutOfRange { index, rows } => {
                    tracing::error!(index, rows, "Row index {index} is out of range");
                }
                _ => tracing::error!(error = %err, "Glyphset failed"),
            }
            ExitCode::from(failure_code(&err))
        }
    }
}

/// Process exit status for an error that stopped a tool.
fn failure_code(err: &GlyphsetError) -> u8 {
    match err {
        GlyphsetError::IndexOutOfRange { .. } => EXIT_OUT_OF_RANGE,
        _ => EXIT_FAILURE,
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = cli.global.build_config()?;

    match cli.command {
        Command::Export {
            input_dir,
            output_csv,
        } => {
            let summary = Exporter::from_config(&config).run(&input_dir, &output_csv)?;
            println!(
                "CSV file saved to {} ({} rows, {} skipped)",
                output_csv.display(),
                summary.rows,
                summary.skipped
            );
        }

        Command::Normalize { input_dir } => {
            let summary = Normalizer::from_config(&config).run(&input_dir)?;
            println!(
                "Normalized {} images in {} folders ({} failed)",
                summary.processed, summary.folders, summary.failed
            );
        }

        Command::CheckDims { input_dir } => {
            let report = check_dimensions(&input_dir, config.target)?;
            if report.is_clean() {
                println!("All images have the required dimensions ({}).", config.target);
            } else {
                println!(
                    "The following images do not match the required dimensions ({}):",
                    config.target
                );
                for mismatch in &report.mismatches {
                    println!(
                        "{} ({}x{})",
                        mismatch.path.display(),
                        mismatch.width,
                        mismatch.height
                    );
                }
            }
        }

        Command::View {
            input_csv,
            row_index,
            save_png,
        } => {
            let preview = load_row(&input_csv, row_index, config.target)?;
            match preview.glyph() {
                Some(glyph) => println!(
                    "Displaying image for ASCII value: {} ('{glyph}')",
                    preview.label
                ),
                None => println!("Displaying image for ASCII value: {}", preview.label),
            }
            print!("{}", preview.render());
            if let Some(path) = save_png {
                preview.save_png(&path)?;
                println!("Saved row {} to {}", row_index, path.display());
            }
        }

        Command::Sort {
            input_csv,
            output_csv,
        } => {
            let output = output_csv.unwrap_or_else(|| config.sorted_output.clone());
            let summary = sort_csv(&input_csv, &output)?;
            println!("Sorted {} rows into {}", summary.rows, output.display());
        }

        Command::InitConfig { path } => {
            config.save(&path)?;
            println!("Wrote configuration to {}", path.display());
        }
    }

    Ok(ExitCode::SUCCESS)
}
