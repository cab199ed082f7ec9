//! Remote document-store capability.
//!
//! The pipeline consumes the store purely through the [`StoreConnection`] /
//! [`DocumentCollection`] traits: any document store that can hand back a
//! sequence of JSON objects for an empty-filter scan is substitutable. The one
//! concrete implementation is [`astra::AstraConnection`] over the Astra DB
//! Data API.
//!
//! Connections carry a [`SourceKind`] tag so an ingestor can validate, before any
//! network call, that it was handed the backend it expects.

pub mod astra;

pub use astra::AstraConnection;

/// A single semi-structured record as returned by the remote store.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Closed set of store backend tags.
///
/// `Memory` tags in-process connections (test doubles, fixtures); it has no
/// registered ingestor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// DataStax Astra DB (Data API collections).
    AstraDb,
    /// In-process document sequences.
    Memory,
}

impl SourceKind {
    /// The source identifier naming this backend.
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::AstraDb => "AstraDB",
            Self::Memory => "Memory",
        }
    }
}

/// A handle to one named collection of a connected store.
pub trait DocumentCollection {
    /// Retrieve every document in the collection (empty filter, full scan).
    fn find_all(&self) -> crate::error::EtlResult<Vec<Document>>;
}

/// An established connection to a document store.
pub trait StoreConnection {
    /// Which backend this connection talks to.
    fn kind(&self) -> SourceKind;

    /// Look up a collection by name.
    fn collection(&self, name: &str) -> crate::error::EtlResult<Box<dyn DocumentCollection + '_>>;
}
