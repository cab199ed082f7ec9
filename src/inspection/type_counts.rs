//! Column kind / non-missing count report.

use std::io;

use crate::types::DataSet;

use super::stats::classify_column;
use super::InspectionStrategy;

/// Reports each column's kind classification and its count of non-missing values.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeCountsInspection;

impl InspectionStrategy for TypeCountsInspection {
    fn inspect(&self, dataset: &DataSet, out: &mut dyn io::Write) -> io::Result<()> {
        writeln!(out, "Column types and non-missing counts")?;
        writeln!(
            out,
            "{} rows, {} columns",
            dataset.row_count(),
            dataset.schema.width()
        )?;

        if dataset.schema.width() == 0 {
            writeln!(out, "no data")?;
            return Ok(());
        }

        for (idx, name) in dataset.schema.column_names().enumerate() {
            let kind = classify_column(dataset.rows.iter().map(|row| &row[idx]));
            let non_missing = dataset
                .rows
                .iter()
                .filter(|row| !row[idx].is_missing())
                .count();
            writeln!(out, "{name}: kind={kind} non_missing={non_missing}")?;
        }
        Ok(())
    }
}
