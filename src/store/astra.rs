//! Astra DB Data API client.
//!
//! Collections are reached at
//! `{api_endpoint}/api/json/v1/{keyspace}/{collection}`; a full scan is a POST of
//! `{"find": {"filter": {}}}` with the application token in the `Token` header.
//! Documents come back under `data.documents`.

use std::time::Duration;

use crate::config::AstraConfig;
use crate::error::{EtlError, EtlResult};

use super::{Document, DocumentCollection, SourceKind, StoreConnection};

const DEFAULT_KEYSPACE: &str = "default_keyspace";

// The source system had no timeouts at all; a stuck fetch hung the run forever.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const READ_TIMEOUT: Duration = Duration::from_secs(60);

/// An established connection to one Astra DB database.
#[derive(Debug)]
pub struct AstraConnection {
    agent: ureq::Agent,
    api_endpoint: String,
    token: String,
}

impl AstraConnection {
    /// Build a connection from configuration.
    ///
    /// Empty endpoint or token fields fail fast with
    /// [`EtlError::Configuration`]; no request is made until the first
    /// [`DocumentCollection::find_all`].
    pub fn connect(config: &AstraConfig) -> EtlResult<Self> {
        if config.api_endpoint.trim().is_empty() {
            return Err(EtlError::configuration("astra.api_endpoint is empty"));
        }
        if config.client_id.trim().is_empty() {
            return Err(EtlError::configuration("astra.client_id is empty"));
        }

        let agent = ureq::AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .timeout_read(READ_TIMEOUT)
            .build();

        Ok(Self {
            agent,
            api_endpoint: config.api_endpoint.trim_end_matches('/').to_string(),
            token: config.client_id.clone(),
        })
    }

    fn collection_url(&self, name: &str) -> String {
        format!(
            "{}/api/json/v1/{DEFAULT_KEYSPACE}/{name}",
            self.api_endpoint
        )
    }
}

impl StoreConnection for AstraConnection {
    fn kind(&self) -> SourceKind {
        SourceKind::AstraDb
    }

    fn collection(&self, name: &str) -> EtlResult<Box<dyn DocumentCollection + '_>> {
        Ok(Box::new(AstraCollection {
            conn: self,
            name: name.to_string(),
            url: self.collection_url(name),
        }))
    }
}

struct AstraCollection<'a> {
    conn: &'a AstraConnection,
    name: String,
    url: String,
}

impl DocumentCollection for AstraCollection<'_> {
    fn find_all(&self) -> EtlResult<Vec<Document>> {
        let response = self
            .conn
            .agent
            .post(&self.url)
            .set("Token", &self.conn.token)
            .send_json(serde_json::json!({ "find": { "filter": {} } }))
            .map_err(|e| {
                EtlError::store(format!("find on collection '{}' failed: {e}", self.name))
            })?;

        let payload: serde_json::Value = response.into_json().map_err(|e| {
            EtlError::store(format!(
                "unreadable find response for collection '{}': {e}",
                self.name
            ))
        })?;

        // The Data API reports failures in-band under an "errors" array.
        if let Some(errors) = payload.get("errors") {
            return Err(EtlError::store(format!(
                "find on collection '{}' returned errors: {errors}",
                self.name
            )));
        }

        let documents = payload
            .pointer("/data/documents")
            .and_then(|v| v.as_array())
            .ok_or_else(|| {
                EtlError::store(format!(
                    "find response for collection '{}' is missing data.documents",
                    self.name
                ))
            })?;

        documents
            .iter()
            .map(|doc| {
                doc.as_object().cloned().ok_or_else(|| {
                    EtlError::store(format!(
                        "collection '{}' returned a non-object document",
                        self.name
                    ))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::AstraConnection;
    use crate::config::AstraConfig;
    use crate::error::EtlError;
    use crate::store::{SourceKind, StoreConnection};

    fn config(endpoint: &str, token: &str) -> AstraConfig {
        AstraConfig {
            client_id: token.to_string(),
            api_endpoint: endpoint.to_string(),
            collection_name: "people".to_string(),
        }
    }

    #[test]
    fn connect_rejects_empty_endpoint() {
        let err = AstraConnection::connect(&config("", "AstraCS:token")).unwrap_err();
        assert!(matches!(err, EtlError::Configuration { .. }));
        assert!(err.to_string().contains("api_endpoint"));
    }

    #[test]
    fn connect_rejects_empty_token() {
        let err =
            AstraConnection::connect(&config("https://db.example.com", "  ")).unwrap_err();
        assert!(matches!(err, EtlError::Configuration { .. }));
        assert!(err.to_string().contains("client_id"));
    }

    #[test]
    fn collection_url_strips_trailing_slash() {
        let conn =
            AstraConnection::connect(&config("https://db.example.com/", "AstraCS:token")).unwrap();
        assert_eq!(conn.kind(), SourceKind::AstraDb);
        assert_eq!(
            conn.collection_url("people"),
            "https://db.example.com/api/json/v1/default_keyspace/people"
        );
    }
}
