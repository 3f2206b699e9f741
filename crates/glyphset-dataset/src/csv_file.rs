// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dataset CSV reading and writing.
//
// Dataset files have no header and one glyph per line. Readers accept rows of
// any length; whether a row fits a given image size is decided by the caller.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Terminator, Writer, WriterBuilder};
use glyphset_core::error::{GlyphsetError, Result};

/// Open `path` for writing, truncating any existing content.
///
/// Lines end in CRLF. Rows may differ in length.
pub fn create_writer(path: &Path) -> Result<Writer<File>> {
    let file = File::create(path)?;
    Ok(WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .terminator(Terminator::CRLF)
        .from_writer(file))
}

/// Read every record of a headerless CSV into memory.
pub fn read_records(path: &Path) -> Result<Vec<StringRecord>> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    reader
        .records()
        .map(|record| record.map_err(csv_error))
        .collect()
}

/// Write one record, mapping the csv crate's error into ours.
pub fn write_record<I, T>(writer: &mut Writer<File>, record: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    writer.write_record(record).map_err(csv_error)
}

pub(crate) fn csv_error(err: csv::Error) -> GlyphsetError {
    if err.is_io_error() {
        if let csv::ErrorKind::Io(io) = err.into_kind() {
            return GlyphsetError::Io(io);
        }
        return GlyphsetError::Csv("I/O error".into());
    }
    GlyphsetError::Csv(err.to_string())
}
