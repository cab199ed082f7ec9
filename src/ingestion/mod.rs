//! Ingestion layer: materializing a remote collection as a [`crate::types::DataSet`].
//!
//! Backends are selected by source identifier through [`factory::IngestorFactory`]
//! and implement the [`DataIngestor`] trait. The one shipped backend is
//! [`astra::AstraDbIngestor`].
//!
//! Failure policy:
//!
//! - A connection of the wrong [`SourceKind`] is a fatal
//!   [`crate::error::EtlError::Configuration`], raised before any store call.
//! - A failure during the fetch itself degrades: the ingestor records one warning
//!   on the diagnostic sink and returns an empty dataset, so downstream stages
//!   still run (and visibly warn on zero rows) instead of crashing the run.

pub mod astra;
pub mod factory;

pub use astra::AstraDbIngestor;
pub use factory::{get_ingestor, IngestorFactory};

use crate::error::EtlResult;
use crate::observability::DiagnosticSink;
use crate::store::{SourceKind, StoreConnection};
use crate::types::DataSet;

/// A backend-specific fetch turned into a [`DataSet`].
///
/// Ingestors are stateless; diagnostics go to the injected sink and persistence is
/// the caller's concern, so implementations stay unit-testable without a
/// filesystem.
pub trait DataIngestor: std::fmt::Debug {
    /// The backend this ingestor understands.
    fn source(&self) -> SourceKind;

    /// Materialize the named collection as a dataset.
    ///
    /// See the module docs for the failure policy.
    fn ingest(
        &self,
        conn: &dyn StoreConnection,
        collection_name: &str,
        diag: &dyn DiagnosticSink,
    ) -> EtlResult<DataSet>;
}
