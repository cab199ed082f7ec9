//! End-to-end orchestration: config → ingest → persist raw → clean → persist processed.
//!
//! [`EtlPipeline`] wires the factory-selected ingestor, the store connection, the
//! cleaning pass, and the CSV sink together. Persistence is called explicitly here
//! rather than hidden inside the ingestor, so ingestion stays a pure data-access
//! step.
//!
//! Persistence failures are recorded on the diagnostic sink (the on-disk artifact
//! is stale or missing) but do not invalidate the in-memory dataset, which is
//! still returned to the caller.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{load_config, PipelineConfig};
use crate::error::{EtlError, EtlResult};
use crate::ingestion::IngestorFactory;
use crate::observability::{DiagnosticSeverity, DiagnosticSink};
use crate::persist::{load_csv, save_csv};
use crate::processing::{preprocess, CleanOptions};
use crate::store::{AstraConnection, SourceKind, StoreConnection};
use crate::types::DataSet;

/// Options controlling a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Source identifier resolved through the ingestor factory.
    pub source: String,
    /// Directory for the post-ingestion artifact.
    pub raw_dir: PathBuf,
    /// Directory for the post-cleaning artifact.
    pub processed_dir: PathBuf,
    /// Cleaning-pass options.
    pub clean: CleanOptions,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            source: SourceKind::AstraDb.identifier().to_string(),
            raw_dir: PathBuf::from("data/raw"),
            processed_dir: PathBuf::from("data/processed"),
            clean: CleanOptions::default(),
        }
    }
}

/// A configured ingestion-and-preprocessing pipeline.
///
/// Stages run to completion one after another; each stage owns its dataset value
/// and hands a fresh one to the next, keeping the raw artifact auditable next to
/// the processed one.
pub struct EtlPipeline {
    config: PipelineConfig,
    options: PipelineOptions,
    factory: IngestorFactory,
    diag: Arc<dyn DiagnosticSink>,
}

impl std::fmt::Debug for EtlPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EtlPipeline")
            .field("config", &self.config)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl EtlPipeline {
    /// Create a pipeline from an already-loaded configuration.
    pub fn new(
        config: PipelineConfig,
        options: PipelineOptions,
        diag: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            config,
            options,
            factory: IngestorFactory::default(),
            diag,
        }
    }

    /// Create a pipeline by loading configuration from a YAML file.
    ///
    /// Missing or invalid keys abort here, before any network call.
    pub fn from_config_path(
        path: impl AsRef<Path>,
        options: PipelineOptions,
        diag: Arc<dyn DiagnosticSink>,
    ) -> EtlResult<Self> {
        let path = path.as_ref();
        let config = load_config(path)?;
        diag.info(&format!("configuration loaded from {}", path.display()));
        Ok(Self::new(config, options, diag))
    }

    /// The loaded configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Mutable access to the ingestor registry, for registering extra backends.
    pub fn factory_mut(&mut self) -> &mut IngestorFactory {
        &mut self.factory
    }

    /// Connect to the configured store, ingest the collection, and persist the
    /// raw artifact to `<raw_dir>/<collection>.csv`.
    pub fn fetch_and_save(&self) -> EtlResult<DataSet> {
        let ingestor = self.factory.get(&self.options.source)?;
        let conn: Box<dyn StoreConnection> = match ingestor.source() {
            SourceKind::AstraDb => Box::new(AstraConnection::connect(&self.config.astra)?),
            SourceKind::Memory => {
                return Err(EtlError::configuration(
                    "the Memory source kind has no remote connection",
                ));
            }
        };
        self.diag
            .info(&format!("connected to {}", self.config.astra.api_endpoint));
        self.fetch_and_save_with(conn.as_ref())
    }

    /// Ingest and persist using an already-established connection.
    ///
    /// Seam for callers that manage connections themselves (and for tests).
    pub fn fetch_and_save_with(&self, conn: &dyn StoreConnection) -> EtlResult<DataSet> {
        let ingestor = self.factory.get(&self.options.source)?;
        let collection = &self.config.astra.collection_name;
        let dataset = ingestor.ingest(conn, collection, self.diag.as_ref())?;

        let path = self.options.raw_dir.join(format!("{collection}.csv"));
        self.persist(&dataset, &path, "raw");
        Ok(dataset)
    }

    /// Load a raw CSV artifact, clean it, and persist the processed artifact.
    ///
    /// Returns the cleaned dataset. A cleaning pass that drops every row of a
    /// non-empty input records a warning and continues.
    pub fn preprocess_file(
        &self,
        input: impl AsRef<Path>,
        categorical_columns: &[String],
        output: impl AsRef<Path>,
    ) -> EtlResult<DataSet> {
        let input = input.as_ref();
        self.diag
            .info(&format!("loading data from {}", input.display()));
        let raw = load_csv(input)?;

        let cleaned = preprocess(&raw, categorical_columns, &self.options.clean);
        if cleaned.is_empty() && !raw.is_empty() {
            self.diag.warning(&format!(
                "cleaning dropped all {} rows of {}",
                raw.row_count(),
                input.display()
            ));
        }

        self.persist(&cleaned, output.as_ref(), "processed");
        Ok(cleaned)
    }

    /// Default location of the processed artifact for the configured collection.
    pub fn processed_path(&self) -> PathBuf {
        self.options
            .processed_dir
            .join(format!("{}.csv", self.config.astra.collection_name))
    }

    /// Default location of the raw artifact for the configured collection.
    pub fn raw_path(&self) -> PathBuf {
        self.options
            .raw_dir
            .join(format!("{}.csv", self.config.astra.collection_name))
    }

    fn persist(&self, dataset: &DataSet, path: &Path, stage: &str) {
        match save_csv(dataset, path) {
            Ok(()) => self
                .diag
                .info(&format!("{stage} data saved to {}", path.display())),
            Err(e) => {
                let severity = match &e {
                    EtlError::Io(_) => DiagnosticSeverity::Critical,
                    _ => DiagnosticSeverity::Error,
                };
                self.diag.record(
                    severity,
                    &format!(
                        "{stage} artifact {} not written, on-disk copy is stale or missing: {e}",
                        path.display()
                    ),
                );
            }
        }
    }
}
