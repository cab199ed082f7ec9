//! Summary statistics report.

use std::io;

use crate::types::DataSet;

use super::stats::{classify_column, fmt_num, mean, quantile, sample_std, ColumnKind};
use super::InspectionStrategy;

/// Reports descriptive statistics per column.
///
/// Numeric columns get count/mean/std/min/quartiles/max; textual (and mixed)
/// columns get count/unique/top/freq. A dataset with no columns of one kind
/// produces an explicit notice for that sub-report instead of an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryStatisticsInspection;

impl InspectionStrategy for SummaryStatisticsInspection {
    fn inspect(&self, dataset: &DataSet, out: &mut dyn io::Write) -> io::Result<()> {
        let kinds: Vec<(usize, &str, ColumnKind)> = dataset
            .schema
            .column_names()
            .enumerate()
            .map(|(idx, name)| {
                (
                    idx,
                    name,
                    classify_column(dataset.rows.iter().map(|row| &row[idx])),
                )
            })
            .collect();

        writeln!(out, "Summary statistics (numeric columns)")?;
        let mut any_numeric = false;
        for &(idx, name, kind) in &kinds {
            if kind != ColumnKind::Numeric {
                continue;
            }
            any_numeric = true;
            write_numeric_line(dataset, idx, name, out)?;
        }
        if !any_numeric {
            writeln!(out, "no numeric columns")?;
        }

        writeln!(out, "Summary statistics (textual columns)")?;
        let mut any_textual = false;
        for &(idx, name, kind) in &kinds {
            if !matches!(kind, ColumnKind::Textual | ColumnKind::Mixed) {
                continue;
            }
            any_textual = true;
            write_textual_line(dataset, idx, name, out)?;
        }
        if !any_textual {
            writeln!(out, "no textual columns")?;
        }

        Ok(())
    }
}

fn write_numeric_line(
    dataset: &DataSet,
    idx: usize,
    name: &str,
    out: &mut dyn io::Write,
) -> io::Result<()> {
    let mut values: Vec<f64> = dataset
        .rows
        .iter()
        .filter_map(|row| row[idx].as_f64())
        .collect();
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let m = mean(&values);
    writeln!(
        out,
        "{name}: count={} mean={} std={} min={} 25%={} 50%={} 75%={} max={}",
        values.len(),
        fmt_num(m),
        fmt_num(sample_std(&values, m)),
        fmt_num(values[0]),
        fmt_num(quantile(&values, 0.25)),
        fmt_num(quantile(&values, 0.50)),
        fmt_num(quantile(&values, 0.75)),
        fmt_num(values[values.len() - 1]),
    )
}

fn write_textual_line(
    dataset: &DataSet,
    idx: usize,
    name: &str,
    out: &mut dyn io::Write,
) -> io::Result<()> {
    // First-seen order doubles as the tie-break for the most frequent value.
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut total = 0usize;
    for row in &dataset.rows {
        let cell = &row[idx];
        if cell.is_missing() {
            continue;
        }
        total += 1;
        let rendered = cell.render();
        match counts.iter_mut().find(|(v, _)| *v == rendered) {
            Some((_, n)) => *n += 1,
            None => counts.push((rendered, 1)),
        }
    }

    let mut top: (&str, usize) = ("", 0);
    for (v, n) in &counts {
        if *n > top.1 {
            top = (v.as_str(), *n);
        }
    }
    let (top, freq) = top;

    writeln!(
        out,
        "{name}: count={total} unique={} top='{top}' freq={freq}",
        counts.len()
    )
}
