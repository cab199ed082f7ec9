//! `docstore-etl` is a small library for pulling a remote document collection into an
//! in-memory [`types::DataSet`], cleaning it, persisting CSV artifacts, and running
//! pluggable inspection reports over the result.
//!
//! The primary entrypoint is [`pipeline::EtlPipeline`], which wires together:
//!
//! - an ingestor selected by source identifier through
//!   [`ingestion::IngestorFactory`] (the shipped backend is `"AstraDB"`, talking to
//!   the Astra DB Data API via [`store::AstraConnection`])
//! - the cleaning pass [`processing::preprocess`] (whitespace stripping, sentinel
//!   normalization, complete-rows-only filtering)
//! - the CSV sink in [`persist`] (raw artifact after ingestion, processed artifact
//!   after cleaning)
//! - an injected [`observability::DiagnosticSink`] carrying the run's log stream
//!
//! Ingestion degrades instead of crashing: a failed fetch yields an empty dataset
//! plus a warning on the sink, so downstream stages still run. Configuration
//! problems (bad keys, unknown source identifiers, wrong connection kinds) are
//! fatal and abort the run.
//!
//! ## Quick example: clean a dataset
//!
//! ```rust
//! use docstore_etl::processing::{preprocess, CleanOptions};
//! use docstore_etl::types::{DataSet, Schema, Value};
//!
//! let raw = DataSet::new(
//!     Schema::new(vec!["age".to_string(), "workclass".to_string()]),
//!     vec![
//!         vec![Value::Utf8("39".to_string()), Value::Utf8(" State-gov".to_string())],
//!         vec![Value::Utf8("?".to_string()), Value::Utf8("Private".to_string())],
//!     ],
//! );
//!
//! let cleaned = preprocess(&raw, &[], &CleanOptions::default());
//! assert_eq!(cleaned.row_count(), 1);
//! assert_eq!(cleaned.rows[0][1], Value::Utf8("State-gov".to_string()));
//! ```
//!
//! ## Quick example: run the pipeline
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use docstore_etl::observability::{CompositeSink, FileSink, StdErrSink};
//! use docstore_etl::pipeline::{EtlPipeline, PipelineOptions};
//!
//! # fn main() -> Result<(), docstore_etl::EtlError> {
//! let diag = Arc::new(CompositeSink::new(vec![
//!     Arc::new(StdErrSink),
//!     Arc::new(FileSink::new("logs/etl.log")),
//! ]));
//!
//! let pipeline =
//!     EtlPipeline::from_config_path("config/db_config.yaml", PipelineOptions::default(), diag)?;
//!
//! let raw = pipeline.fetch_and_save()?;
//! println!("fetched rows={}", raw.row_count());
//!
//! let cleaned = pipeline.preprocess_file(
//!     pipeline.raw_path(),
//!     &["workclass".to_string(), "salary".to_string()],
//!     pipeline.processed_path(),
//! )?;
//! println!("cleaned rows={}", cleaned.row_count());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`pipeline`]: end-to-end orchestration
//! - [`config`]: YAML configuration loading
//! - [`store`]: remote document-store capability (traits + Astra client)
//! - [`ingestion`]: ingestor trait, Astra implementation, source factory
//! - [`processing`]: in-memory cleaning pass
//! - [`inspection`]: strategy-based dataset reports
//! - [`persist`]: CSV artifacts
//! - [`observability`]: injected diagnostic sinks
//! - [`types`]: schema + in-memory dataset types
//! - [`error`]: error types used across the pipeline

pub mod config;
pub mod error;
pub mod ingestion;
pub mod inspection;
pub mod observability;
pub mod persist;
pub mod pipeline;
pub mod processing;
pub mod store;
pub mod types;

pub use error::{EtlError, EtlResult};
