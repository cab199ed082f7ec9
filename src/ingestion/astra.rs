//! Astra DB ingestor implementation.

use crate::error::{EtlError, EtlResult};
use crate::observability::DiagnosticSink;
use crate::store::{Document, SourceKind, StoreConnection};
use crate::types::{DataSet, Schema, Value};

use super::DataIngestor;

/// Ingests one Astra DB collection via an empty-filter full scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct AstraDbIngestor;

impl DataIngestor for AstraDbIngestor {
    fn source(&self) -> SourceKind {
        SourceKind::AstraDb
    }

    fn ingest(
        &self,
        conn: &dyn StoreConnection,
        collection_name: &str,
        diag: &dyn DiagnosticSink,
    ) -> EtlResult<DataSet> {
        if conn.kind() != SourceKind::AstraDb {
            return Err(EtlError::configuration(format!(
                "{} ingestor handed a {} connection",
                SourceKind::AstraDb.identifier(),
                conn.kind().identifier()
            )));
        }

        diag.info(&format!(
            "fetching all documents from collection '{collection_name}'"
        ));

        let documents = match conn
            .collection(collection_name)
            .and_then(|c| c.find_all())
        {
            Ok(documents) => documents,
            Err(e) if e.is_transient() => {
                diag.warning(&format!(
                    "ingestion from '{collection_name}' failed, substituting an empty dataset: {e}"
                ));
                return Ok(DataSet::empty());
            }
            Err(e) => return Err(e),
        };

        let dataset = flatten_documents(&documents);
        if dataset.is_empty() {
            diag.warning(&format!(
                "collection '{collection_name}' returned no documents"
            ));
        } else {
            diag.info(&format!(
                "fetched {} rows from '{collection_name}'",
                dataset.row_count()
            ));
        }
        Ok(dataset)
    }
}

/// Column-union flattening of a document sequence.
///
/// The column set is the union of field names across all documents, in first-seen
/// order; a document missing a field gets [`Value::Missing`] in that column.
/// Nested (array/object) values are rendered to their JSON text.
pub fn flatten_documents(documents: &[Document]) -> DataSet {
    let mut columns: Vec<String> = Vec::new();
    for doc in documents {
        for key in doc.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }

    let schema = Schema::new(columns);
    let rows = documents
        .iter()
        .map(|doc| {
            schema
                .columns
                .iter()
                .map(|col| doc.get(col).map(json_to_value).unwrap_or(Value::Missing))
                .collect()
        })
        .collect();

    DataSet::new(schema, rows)
}

fn json_to_value(v: &serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Missing,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int64(i)
            } else if let Some(f) = n.as_f64() {
                Value::Float64(f)
            } else {
                // u64 beyond i64 range; keep the digits.
                Value::Utf8(n.to_string())
            }
        }
        serde_json::Value::String(s) => Value::Utf8(s.clone()),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => Value::Utf8(v.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::flatten_documents;
    use crate::store::Document;
    use crate::types::Value;

    fn doc(json: serde_json::Value) -> Document {
        json.as_object().cloned().unwrap()
    }

    #[test]
    fn flatten_unions_columns_in_first_seen_order() {
        let docs = vec![
            doc(serde_json::json!({"age": 39, "workclass": "State-gov"})),
            doc(serde_json::json!({"age": 50, "salary": "<=50K"})),
        ];

        let ds = flatten_documents(&docs);
        let names: Vec<&str> = ds.schema.column_names().collect();
        assert_eq!(names, vec!["age", "workclass", "salary"]);
        assert_eq!(ds.row_count(), 2);
        // Second document has no 'workclass'; first has no 'salary'.
        assert_eq!(ds.rows[0][2], Value::Missing);
        assert_eq!(ds.rows[1][1], Value::Missing);
        assert_eq!(ds.rows[1][0], Value::Int64(50));
    }

    #[test]
    fn flatten_maps_json_scalars() {
        let docs = vec![doc(serde_json::json!({
            "i": 7,
            "f": 1.5,
            "b": true,
            "s": "text",
            "n": null,
            "nested": {"a": 1}
        }))];

        let ds = flatten_documents(&docs);
        let row = &ds.rows[0];
        assert_eq!(row[0], Value::Int64(7));
        assert_eq!(row[1], Value::Float64(1.5));
        assert_eq!(row[2], Value::Bool(true));
        assert_eq!(row[3], Value::Utf8("text".to_string()));
        assert_eq!(row[4], Value::Missing);
        assert_eq!(row[5], Value::Utf8("{\"a\":1}".to_string()));
    }

    #[test]
    fn flatten_of_no_documents_is_the_empty_dataset() {
        let ds = flatten_documents(&[]);
        assert!(ds.is_empty());
        assert_eq!(ds.schema.width(), 0);
    }
}
