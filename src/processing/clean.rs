//! Cleaning pass for raw datasets.

use crate::types::{DataSet, Value};

/// Default missing-value sentinel found in the raw data.
///
/// Raw exports mark absent fields with this literal token; cleaning normalizes it
/// to [`Value::Missing`]. Override via [`CleanOptions::missing_sentinel`].
pub const MISSING_SENTINEL: &str = "?";

/// Options controlling the cleaning pass.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    /// Literal token normalized to [`Value::Missing`] across all columns.
    pub missing_sentinel: String,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            missing_sentinel: MISSING_SENTINEL.to_string(),
        }
    }
}

/// Clean a raw dataset into a complete-rows-only dataset.
///
/// In order:
///
/// 1. Strip leading/trailing whitespace from every textual value (numeric values
///    untouched).
/// 2. Normalize the configured missing-value sentinel to [`Value::Missing`],
///    regardless of column.
/// 3. Drop every row containing at least one missing value (no imputation).
///    Surviving rows keep their original relative order.
///
/// After one pass there is nothing left for a second: `preprocess` is idempotent.
///
/// `categorical_columns` is accepted for call-site compatibility with planned
/// category-specific encodings; it currently has no effect, and names not present
/// in the schema are ignored rather than rejected.
pub fn preprocess(
    raw: &DataSet,
    categorical_columns: &[String],
    options: &CleanOptions,
) -> DataSet {
    let _ = categorical_columns;

    let normalized = raw.map_rows(|row| {
        row.iter()
            .map(|cell| match cell {
                Value::Utf8(s) => {
                    let trimmed = s.trim();
                    if trimmed == options.missing_sentinel {
                        Value::Missing
                    } else {
                        Value::Utf8(trimmed.to_string())
                    }
                }
                other => other.clone(),
            })
            .collect()
    });

    normalized.filter_rows(|row| row.iter().all(|cell| !cell.is_missing()))
}
