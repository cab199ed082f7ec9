//! Pipeline configuration.
//!
//! Configuration is a small YAML document describing the remote store:
//!
//! ```yaml
//! astra:
//!   client_id: "AstraCS:..."
//!   api_endpoint: "https://<db-id>-<region>.apps.astra.datastax.com"
//!   collection_name: "adult_census_income_prediction"
//! ```
//!
//! All three keys are required. A missing key or unparsable file is a fatal
//! [`EtlError::Configuration`] surfaced at load time, before any network call.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{EtlError, EtlResult};

/// Top-level pipeline configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Remote store connection settings.
    pub astra: AstraConfig,
}

/// Connection settings for the Astra DB Data API.
///
/// Passed by shared reference into the store client; never mutated. The `Debug`
/// impl truncates the token so credentials do not leak into logs.
#[derive(Clone, Deserialize)]
pub struct AstraConfig {
    /// Application token used for authentication.
    pub client_id: String,
    /// Base URL of the database's Data API endpoint.
    pub api_endpoint: String,
    /// Name of the collection to ingest.
    pub collection_name: String,
}

impl fmt::Debug for AstraConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AstraConfig")
            .field("client_id", &redact(&self.client_id))
            .field("api_endpoint", &self.api_endpoint)
            .field("collection_name", &self.collection_name)
            .finish()
    }
}

fn redact(token: &str) -> String {
    match token.char_indices().nth(8) {
        Some((idx, _)) => format!("{}…", &token[..idx]),
        None => "…".to_string(),
    }
}

impl PipelineConfig {
    /// Parse a configuration document from YAML text.
    pub fn from_yaml_str(text: &str) -> EtlResult<Self> {
        serde_yaml::from_str(text)
            .map_err(|e| EtlError::configuration(format!("invalid config: {e}")))
    }
}

/// Load the pipeline configuration from a YAML file.
///
/// Unreadable files and missing/invalid keys both map to
/// [`EtlError::Configuration`], naming the path and the offending field.
pub fn load_config(path: impl AsRef<Path>) -> EtlResult<PipelineConfig> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        EtlError::configuration(format!("cannot read config {}: {e}", path.display()))
    })?;
    serde_yaml::from_str(&text)
        .map_err(|e| EtlError::configuration(format!("invalid config {}: {e}", path.display())))
}
