//! Source-identifier → ingestor factory.
//!
//! Pure lookup, no I/O. Adding a backend means registering a new
//! identifier/constructor pair; existing backends are never touched.

use crate::error::{EtlError, EtlResult};
use crate::store::SourceKind;

use super::{AstraDbIngestor, DataIngestor};

/// Constructor registered for one source identifier.
pub type IngestorCtor = fn() -> Box<dyn DataIngestor>;

/// Registry mapping source identifiers to ingestor constructors.
///
/// [`Default`] registers the shipped backends (currently `"AstraDB"`).
pub struct IngestorFactory {
    ctors: Vec<(String, IngestorCtor)>,
}

impl Default for IngestorFactory {
    fn default() -> Self {
        let mut factory = Self { ctors: Vec::new() };
        factory.register(SourceKind::AstraDb.identifier(), || {
            Box::new(AstraDbIngestor)
        });
        factory
    }
}

impl IngestorFactory {
    /// Register a constructor under `identifier`, replacing any previous entry.
    pub fn register(&mut self, identifier: impl Into<String>, ctor: IngestorCtor) {
        let identifier = identifier.into();
        self.ctors.retain(|(id, _)| *id != identifier);
        self.ctors.push((identifier, ctor));
    }

    /// Return the ingestor registered for `identifier`.
    ///
    /// Unrecognized identifiers fail with [`EtlError::Configuration`] naming the
    /// offender; there is no runtime fallback.
    pub fn get(&self, identifier: &str) -> EtlResult<Box<dyn DataIngestor>> {
        self.ctors
            .iter()
            .find(|(id, _)| id == identifier)
            .map(|(_, ctor)| ctor())
            .ok_or_else(|| {
                EtlError::configuration(format!("unsupported data source: '{identifier}'"))
            })
    }
}

/// Look up an ingestor in the default registry.
pub fn get_ingestor(identifier: &str) -> EtlResult<Box<dyn DataIngestor>> {
    IngestorFactory::default().get(identifier)
}
