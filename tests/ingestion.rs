use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use docstore_etl::error::EtlError;
use docstore_etl::ingestion::{get_ingestor, AstraDbIngestor, DataIngestor};
use docstore_etl::observability::{DiagnosticSeverity, DiagnosticSink};
use docstore_etl::store::{Document, DocumentCollection, SourceKind, StoreConnection};
use docstore_etl::types::Value;
use docstore_etl::EtlResult;

#[derive(Default)]
struct RecordingSink {
    records: Mutex<Vec<(DiagnosticSeverity, String)>>,
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, severity: DiagnosticSeverity, message: &str) {
        self.records
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
    }
}

impl RecordingSink {
    fn count_at(&self, severity: DiagnosticSeverity) -> usize {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|(s, _)| *s == severity)
            .count()
    }
}

enum FakeBehavior {
    Documents(Vec<Document>),
    FailLookup,
    FailFind,
}

struct FakeConnection {
    kind: SourceKind,
    behavior: FakeBehavior,
    collection_calls: AtomicUsize,
}

impl FakeConnection {
    fn new(kind: SourceKind, behavior: FakeBehavior) -> Self {
        Self {
            kind,
            behavior,
            collection_calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.collection_calls.load(Ordering::SeqCst)
    }
}

struct FakeCollection<'a> {
    behavior: &'a FakeBehavior,
}

impl StoreConnection for FakeConnection {
    fn kind(&self) -> SourceKind {
        self.kind
    }

    fn collection(&self, _name: &str) -> EtlResult<Box<dyn DocumentCollection + '_>> {
        self.collection_calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            FakeBehavior::FailLookup => Err(EtlError::store("collection not found")),
            _ => Ok(Box::new(FakeCollection {
                behavior: &self.behavior,
            })),
        }
    }
}

impl DocumentCollection for FakeCollection<'_> {
    fn find_all(&self) -> EtlResult<Vec<Document>> {
        match self.behavior {
            FakeBehavior::Documents(docs) => Ok(docs.clone()),
            FakeBehavior::FailFind => Err(EtlError::store("connection reset during find")),
            FakeBehavior::FailLookup => unreachable!("lookup already failed"),
        }
    }
}

fn doc(json: serde_json::Value) -> Document {
    json.as_object().cloned().unwrap()
}

#[test]
fn wrong_connection_kind_is_fatal_and_makes_no_store_call() {
    let conn = FakeConnection::new(SourceKind::Memory, FakeBehavior::Documents(Vec::new()));
    let sink = RecordingSink::default();

    let err = AstraDbIngestor
        .ingest(&conn, "adult_census", &sink)
        .unwrap_err();

    assert!(matches!(err, EtlError::Configuration { .. }));
    assert!(err.to_string().contains("Memory"));
    assert_eq!(conn.calls(), 0);
}

#[test]
fn find_failure_degrades_to_empty_dataset_with_one_warning() {
    let conn = FakeConnection::new(SourceKind::AstraDb, FakeBehavior::FailFind);
    let sink = RecordingSink::default();

    let ds = AstraDbIngestor.ingest(&conn, "adult_census", &sink).unwrap();

    assert!(ds.is_empty());
    assert_eq!(ds.schema.width(), 0);
    assert_eq!(sink.count_at(DiagnosticSeverity::Warning), 1);
    assert_eq!(sink.count_at(DiagnosticSeverity::Error), 0);
}

#[test]
fn collection_lookup_failure_also_degrades() {
    let conn = FakeConnection::new(SourceKind::AstraDb, FakeBehavior::FailLookup);
    let sink = RecordingSink::default();

    let ds = AstraDbIngestor.ingest(&conn, "adult_census", &sink).unwrap();
    assert!(ds.is_empty());
    assert_eq!(sink.count_at(DiagnosticSeverity::Warning), 1);
}

#[test]
fn documents_flatten_into_a_column_union_dataset() {
    let docs = vec![
        doc(serde_json::json!({"_id": "a", "age": 39, "workclass": "State-gov"})),
        doc(serde_json::json!({"_id": "b", "age": 50, "salary": "<=50K"})),
    ];
    let conn = FakeConnection::new(SourceKind::AstraDb, FakeBehavior::Documents(docs));
    let sink = RecordingSink::default();

    let ds = AstraDbIngestor.ingest(&conn, "adult_census", &sink).unwrap();

    let names: Vec<&str> = ds.schema.column_names().collect();
    assert_eq!(names, vec!["_id", "age", "workclass", "salary"]);
    assert_eq!(ds.row_count(), 2);
    assert_eq!(ds.rows[0][3], Value::Missing);
    assert_eq!(ds.rows[1][2], Value::Missing);
    assert_eq!(sink.count_at(DiagnosticSeverity::Warning), 0);
}

#[test]
fn empty_fetch_result_warns_but_returns_a_dataset() {
    let conn = FakeConnection::new(SourceKind::AstraDb, FakeBehavior::Documents(Vec::new()));
    let sink = RecordingSink::default();

    let ds = AstraDbIngestor.ingest(&conn, "adult_census", &sink).unwrap();
    assert!(ds.is_empty());
    assert_eq!(sink.count_at(DiagnosticSeverity::Warning), 1);
}

#[test]
fn factory_accepts_the_supported_identifier_and_rejects_others() {
    assert_eq!(get_ingestor("AstraDB").unwrap().source(), SourceKind::AstraDb);

    let err = get_ingestor("UnknownSource").unwrap_err();
    assert!(matches!(err, EtlError::Configuration { .. }));
    assert!(err.to_string().contains("UnknownSource"));
}
