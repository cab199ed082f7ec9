//! CSV persistence for datasets.
//!
//! Artifacts are plain comma-separated files: header row = column names, one
//! record per row, [`Value::Missing`] rendered as an empty field. Loading applies
//! per-cell heuristic typing (integer, then float, then verbatim text) and maps
//! empty fields back to [`Value::Missing`]. Loading does **not** trim whitespace;
//! that belongs to [`crate::processing::preprocess`].

use std::fs;
use std::path::Path;

use crate::error::EtlResult;
use crate::types::{DataSet, Schema, Value};

/// Write a dataset to a CSV file, creating parent directories as needed.
///
/// A dataset with zero columns produces an empty file.
pub fn save_csv(dataset: &DataSet, path: impl AsRef<Path>) -> EtlResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    if dataset.schema.width() == 0 {
        fs::write(path, "")?;
        return Ok(());
    }

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(dataset.schema.column_names())?;
    for row in &dataset.rows {
        wtr.write_record(row.iter().map(|v| v.render()))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Load a dataset from a CSV file written by [`save_csv`] (or any headered CSV).
pub fn load_csv(path: impl AsRef<Path>) -> EtlResult<DataSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    load_csv_from_reader(&mut rdr)
}

/// Load a dataset from an existing CSV reader.
///
/// Duplicate header names violate the schema invariant and are rejected.
pub fn load_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> EtlResult<DataSet> {
    let headers = rdr.headers()?.clone();
    for (i, h) in headers.iter().enumerate() {
        if headers.iter().take(i).any(|prev| prev == h) {
            return Err(crate::error::EtlError::configuration(format!(
                "duplicate column '{h}' in CSV header"
            )));
        }
    }
    let schema = Schema::new(headers.iter().map(|h| h.to_string()).collect());

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let row = (0..schema.width())
            .map(|i| parse_field(record.get(i).unwrap_or("")))
            .collect();
        rows.push(row);
    }

    Ok(DataSet::new(schema, rows))
}

fn parse_field(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::Missing;
    }
    if let Ok(i) = raw.parse::<i64>() {
        return Value::Int64(i);
    }
    if let Ok(f) = raw.parse::<f64>() {
        return Value::Float64(f);
    }
    Value::Utf8(raw.to_string())
}
