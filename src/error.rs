use thiserror::Error;

/// Convenience result type for pipeline operations.
pub type EtlResult<T> = Result<T, EtlError>;

/// Error type shared across the pipeline.
///
/// Two variants carry the failure classes the pipeline branches on:
///
/// - [`EtlError::Configuration`] is fatal: bad config keys, an unrecognized source
///   identifier, or a connection handle of the wrong kind. Callers abort the run.
/// - [`EtlError::Store`] is transient: remote fetch/lookup failures. The ingestor
///   recovers from these locally (one warning + an empty dataset) instead of
///   propagating them.
///
/// `Io`/`Csv` cover persistence; pipeline stages report them on the diagnostic
/// sink without invalidating an already-produced in-memory dataset.
#[derive(Debug, Error)]
pub enum EtlError {
    /// Underlying I/O error (e.g. directory creation, file write).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid or missing configuration. Fatal; no partial work is trusted.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Remote store failure during connect, collection lookup, or find.
    #[error("store error: {message}")]
    Store { message: String },
}

impl EtlError {
    /// Build a [`EtlError::Configuration`] from a message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Build a [`EtlError::Store`] from a message.
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Whether this error is recoverable at the ingestion boundary.
    ///
    /// Store failures degrade to an empty dataset; everything else propagates.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Store { .. })
    }
}
