// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Glyphset.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all Glyphset operations.
#[derive(Debug, Error)]
pub enum GlyphsetError {
    // -- Image errors --
    #[error("could not decode image {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("could not encode image {path}: {reason}")]
    Encode { path: PathBuf, reason: String },

    // -- Dataset layout --
    #[error("folder '{0}' does not exist")]
    FolderNotFound(PathBuf),

    #[error("refusing to overwrite input file {0}")]
    SameInputOutput(PathBuf),

    // -- CSV errors --
    #[error("CSV error: {0}")]
    Csv(String),

    #[error("row index {index} is out of range ({rows} rows)")]
    IndexOutOfRange { index: usize, rows: usize },

    #[error("malformed row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    #[error("cannot reshape {actual} values into {width}x{height}")]
    ShapeMismatch {
        actual: usize,
        width: u32,
        height: u32,
    },

    // -- Configuration --
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, GlyphsetError>;
