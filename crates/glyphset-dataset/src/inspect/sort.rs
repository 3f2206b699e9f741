// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// CSV sorter: orders a dataset file by its label column into a new file.

use std::path::Path;

use csv::StringRecord;
use glyphset_core::error::{GlyphsetError, Result};
use tracing::{debug, info, instrument};

use crate::csv_file::{create_writer, read_records, write_record};

/// Rows logged before and after sorting.
const PREVIEW_ROWS: usize = 4;

/// Outcome of one sort.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SortSummary {
    pub rows: usize,
    /// Rows whose first column is not a number; these sort last.
    pub unlabelled: usize,
}

/// Stable-sort `input` ascending by its first column and write to `output`.
///
/// Each output row is `original_index,label,pixel_0,...`: the leading column
/// is the row's 0-based position in `input`, so the original order can be
/// recovered. Rows with a non-numeric first column keep their relative order
/// after all numeric rows.
///
/// `output` must not be `input`.
#[instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub fn sort_csv(input: &Path, output: &Path) -> Result<SortSummary> {
    if same_file(input, output) {
        return Err(GlyphsetError::SameInputOutput(output.to_path_buf()));
    }

    let records = read_records(input)?;
    let mut rows: Vec<(usize, Option<i64>, StringRecord)> = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| (index, sort_key(&record), record))
        .collect();
    log_preview("Before sorting", &rows);

    // `sort_by_key` is stable; `None` orders after every `Some`.
    rows.sort_by_key(|(_, key, _)| (key.is_none(), *key));
    log_preview("After sorting", &rows);

    let mut writer = create_writer(output)?;
    for (index, _, record) in &rows {
        let index = index.to_string();
        write_record(
            &mut writer,
            std::iter::once(index.as_str()).chain(record.iter()),
        )?;
    }
    writer.flush()?;

    let summary = SortSummary {
        rows: rows.len(),
        unlabelled: rows.iter().filter(|(_, key, _)| key.is_none()).count(),
    };
    info!(rows = summary.rows, unlabelled = summary.unlabelled, "Sorted CSV written");
    Ok(summary)
}

fn sort_key(record: &StringRecord) -> Option<i64> {
    record.get(0).and_then(|label| label.trim().parse().ok())
}

fn log_preview(stage: &str, rows: &[(usize, Option<i64>, StringRecord)]) {
    for (index, key, _) in rows.iter().take(PREVIEW_ROWS) {
        debug!(stage, index, label = ?key, "Row");
    }
}

/// True when both paths name the same file. Paths that do not exist yet are
/// compared as given.
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(path: &Path) -> Vec<String> {
        read_records(path)
            .unwrap()
            .iter()
            .map(|r| r[1].to_string())
            .collect()
    }

    #[test]
    fn sorts_ascending_by_label() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("sorted.csv");
        std::fs::write(&input, "90,1\n65,2\n97,3\n").unwrap();

        let summary = sort_csv(&input, &output).unwrap();
        assert_eq!(summary.rows, 3);
        assert_eq!(labels(&output), vec!["65", "90", "97"]);
    }

    #[test]
    fn leading_column_is_original_position() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("sorted.csv");
        std::fs::write(&input, "90,1\n65,2\n97,3\n").unwrap();

        sort_csv(&input, &output).unwrap();
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "1,65,2\r\n0,90,1\r\n2,97,3\r\n"
        );
    }

    #[test]
    fn ties_keep_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("sorted.csv");
        std::fs::write(&input, "66,first\n65,x\n66,second\n66,third\n").unwrap();

        sort_csv(&input, &output).unwrap();
        let tails: Vec<String> = read_records(&output)
            .unwrap()
            .iter()
            .map(|r| r[2].to_string())
            .collect();
        assert_eq!(tails, vec!["x", "first", "second", "third"]);
    }

    #[test]
    fn non_numeric_labels_sort_last() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("sorted.csv");
        std::fs::write(&input, "oops,1\n97,2\n65\n").unwrap();

        let summary = sort_csv(&input, &output).unwrap();
        assert_eq!(summary.unlabelled, 1);
        assert_eq!(labels(&output), vec!["65", "97", "oops"]);
    }

    #[test]
    fn refuses_to_overwrite_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        std::fs::write(&input, "90,1\n").unwrap();

        let result = sort_csv(&input, &dir.path().join(".").join("in.csv"));
        assert!(matches!(result, Err(GlyphsetError::SameInputOutput(_))));
        assert_eq!(std::fs::read_to_string(&input).unwrap(), "90,1\n");
    }
}
