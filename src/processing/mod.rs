//! In-memory dataset transformations.
//!
//! The processing layer operates on [`crate::types::DataSet`] values produced by
//! ingestion (or loaded back from a raw CSV artifact). It is deterministic and
//! purely in-memory; persisting the result is the caller's responsibility.
//!
//! Currently implemented:
//!
//! - [`preprocess()`]: whitespace stripping, sentinel normalization, and
//!   complete-rows-only filtering
//!
//! ## Example
//!
//! ```rust
//! use docstore_etl::processing::{preprocess, CleanOptions};
//! use docstore_etl::types::{DataSet, Schema, Value};
//!
//! let schema = Schema::new(vec!["age".to_string(), "workclass".to_string()]);
//! let ds = DataSet::new(
//!     schema,
//!     vec![
//!         vec![Value::Utf8("39".to_string()), Value::Utf8(" State-gov".to_string())],
//!         vec![Value::Utf8("?".to_string()), Value::Utf8("Private".to_string())],
//!     ],
//! );
//!
//! let cleaned = preprocess(&ds, &[], &CleanOptions::default());
//! assert_eq!(cleaned.row_count(), 1);
//! assert_eq!(cleaned.rows[0][1], Value::Utf8("State-gov".to_string()));
//! ```

pub mod clean;

pub use clean::{preprocess, CleanOptions, MISSING_SENTINEL};
