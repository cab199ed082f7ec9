//! Strategy-based dataset inspection.
//!
//! [`DataInspector`] holds one replaceable [`InspectionStrategy`] and delegates to
//! it; swapping strategies never touches the pipeline. Strategies write a
//! human-readable report to an output sink (stdout by default) and never mutate
//! the dataset.
//!
//! Shipped strategies:
//!
//! - [`TypeCountsInspection`]: column kind classification + non-missing counts
//! - [`SummaryStatisticsInspection`]: descriptive statistics per column
//!
//! ## Example
//!
//! ```rust
//! use docstore_etl::inspection::{DataInspector, SummaryStatisticsInspection, TypeCountsInspection};
//! use docstore_etl::types::{DataSet, Schema, Value};
//!
//! let ds = DataSet::new(
//!     Schema::new(vec!["age".to_string()]),
//!     vec![vec![Value::Int64(39)], vec![Value::Int64(50)]],
//! );
//!
//! let mut inspector = DataInspector::new(Box::new(TypeCountsInspection));
//! inspector.execute_inspection(&ds);
//!
//! // Swap the diagnostic mid-session; the old strategy is discarded.
//! inspector.set_strategy(Box::new(SummaryStatisticsInspection));
//! inspector.execute_inspection(&ds);
//! ```

pub mod stats;
pub mod summary;
pub mod type_counts;

pub use stats::{classify_column, ColumnKind};
pub use summary::SummaryStatisticsInspection;
pub use type_counts::TypeCountsInspection;

use std::io;

use crate::types::DataSet;

/// A swappable diagnostic policy over a [`DataSet`].
pub trait InspectionStrategy {
    /// Write a human-readable report for `dataset` to `out`.
    fn inspect(&self, dataset: &DataSet, out: &mut dyn io::Write) -> io::Result<()>;
}

/// Runs the currently selected [`InspectionStrategy`].
///
/// Construction requires an initial strategy, so the inspector is always ready to
/// execute; [`DataInspector::set_strategy`] replaces it at any point, keeping no
/// history.
pub struct DataInspector {
    strategy: Box<dyn InspectionStrategy>,
}

impl DataInspector {
    /// Create an inspector with an initial strategy.
    pub fn new(strategy: Box<dyn InspectionStrategy>) -> Self {
        Self { strategy }
    }

    /// Replace the active strategy, discarding the old one.
    pub fn set_strategy(&mut self, strategy: Box<dyn InspectionStrategy>) {
        self.strategy = strategy;
    }

    /// Run the active strategy, reporting to stdout.
    ///
    /// The report is a side effect, not a return value; stdout write failures are
    /// ignored.
    pub fn execute_inspection(&self, dataset: &DataSet) {
        let _ = self.execute_inspection_to(dataset, &mut io::stdout());
    }

    /// Run the active strategy against an explicit output sink.
    pub fn execute_inspection_to(
        &self,
        dataset: &DataSet,
        out: &mut dyn io::Write,
    ) -> io::Result<()> {
        self.strategy.inspect(dataset, out)
    }
}
