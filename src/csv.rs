//! CSV row loading and saving.
//!
//! Deliberately minimal: rows are newline-separated, fields are
//! comma-separated, no quoting or escaping. This is the boundary that feeds
//! numeric data into the structures, not a general CSV implementation.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::instrument;

use crate::errors::{CsvError, CsvResult};
use crate::util::path::PathExt;

fn ensure_csv(path: &Path) -> CsvResult<()> {
    if !path.is_csv_file() {
        return Err(CsvError::NotCsv(path.to_path_buf()));
    }
    if !path.exists() {
        return Err(CsvError::FileNotFound(path.to_path_buf()));
    }
    Ok(())
}

/// All non-empty rows of the file, in order.
#[instrument(level = "debug")]
pub fn read_rows(path: &Path) -> CsvResult<Vec<String>> {
    ensure_csv(path)?;
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut rows = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim_end_matches('\r');
        if !trimmed.is_empty() {
            rows.push(trimmed.to_string());
        }
    }
    Ok(rows)
}

/// All rows parsed field-by-field to `f64`, organized `[row][column]`.
#[instrument(level = "debug")]
pub fn read_numeric(path: &Path) -> CsvResult<Vec<Vec<f64>>> {
    let rows = read_rows(path)?;
    let mut parsed = Vec::with_capacity(rows.len());
    for (row, line) in rows.iter().enumerate() {
        let mut fields = Vec::new();
        for (col, field) in line.split(',').enumerate() {
            let value = field.trim().parse::<f64>().map_err(|_| CsvError::ParseNumber {
                value: field.trim().to_string(),
                row,
                col,
            })?;
            fields.push(value);
        }
        parsed.push(fields);
    }
    Ok(parsed)
}

/// Writes rows to `path`, creating parent directories as needed. Without
/// `overwrite`, an existing file is left alone and the data goes to a
/// `<stem> - Copy.csv` sibling instead (repeated until a free name is found).
/// Returns the path actually written.
#[instrument(level = "debug", skip(rows))]
pub fn write_rows(path: &Path, rows: &[String], overwrite: bool) -> CsvResult<PathBuf> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }

    let mut target = path.to_path_buf();
    if !overwrite {
        while target.exists() {
            let stem = target
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            target.set_file_name(format!("{stem} - Copy.csv"));
        }
    }

    let mut file = File::create(&target)?;
    for row in rows {
        writeln!(file, "{row}")?;
    }
    Ok(target)
}
