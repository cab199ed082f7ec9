//! Core data model types for the pipeline.
//!
//! Ingestion materializes remote documents into an in-memory [`DataSet`]: an ordered
//! [`Schema`] of column names plus row-major [`Value`] storage. Every pipeline stage
//! produces a fresh `DataSet`; nothing is mutated in place across stages.

/// A single cell value in a [`DataSet`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing value. Distinct from an empty string.
    Missing,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// Whether this cell is the missing-value marker.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Numeric view of the cell: integers widen to `f64`, floats pass through,
    /// everything else (including `Missing`) is `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int64(v) => Some(*v as f64),
            Self::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Render the cell as a flat text field.
    ///
    /// This is the form used for CSV output and report lines: `Missing` renders as
    /// an empty field, numbers and booleans via their `Display` form.
    pub fn render(&self) -> String {
        match self {
            Self::Missing => String::new(),
            Self::Int64(v) => v.to_string(),
            Self::Float64(v) => v.to_string(),
            Self::Bool(v) => v.to_string(),
            Self::Utf8(s) => s.clone(),
        }
    }
}

/// Ordered list of column names describing the shape of a [`DataSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Column names, in dataset order.
    pub columns: Vec<String>,
}

impl Schema {
    /// Create a new schema from column names.
    ///
    /// # Panics
    ///
    /// Panics if two columns share a name.
    pub fn new(columns: Vec<String>) -> Self {
        for (i, name) in columns.iter().enumerate() {
            assert!(
                !columns[..i].contains(name),
                "duplicate column name '{name}'"
            );
        }
        Self { columns }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Iterate column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.as_str())
    }

    /// Returns the index of a column by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<Value>>` in the same order as the [`Schema`] columns.
/// Invariant: every row has exactly `schema.width()` cells, so all columns have
/// equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    /// Schema describing row shape.
    pub schema: Schema,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
}

impl DataSet {
    /// Create a dataset from schema and rows.
    ///
    /// # Panics
    ///
    /// Panics if any row length differs from the schema width.
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Self {
        let width = schema.width();
        for (i, row) in rows.iter().enumerate() {
            assert!(
                row.len() == width,
                "row {i} has {} cells, schema has {width} columns",
                row.len()
            );
        }
        Self { schema, rows }
    }

    /// The empty dataset: zero rows, zero columns.
    ///
    /// This is the value a failed fetch degrades to; downstream stages treat it as
    /// any other dataset.
    pub fn empty() -> Self {
        Self {
            schema: Schema::new(Vec::new()),
            rows: Vec::new(),
        }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate the values of a named column, if it exists.
    pub fn column_values(&self, name: &str) -> Option<impl Iterator<Item = &Value>> {
        let idx = self.schema.index_of(name)?;
        Some(self.rows.iter().map(move |row| &row[idx]))
    }

    /// Create a new dataset containing only rows that match `predicate`.
    ///
    /// The returned dataset preserves the original schema and the relative order of
    /// surviving rows.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&[Value]) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .filter(|row| predicate(row.as_slice()))
            .cloned()
            .collect();
        Self {
            schema: self.schema.clone(),
            rows,
        }
    }

    /// Create a new dataset by applying `mapper` to every row.
    ///
    /// The returned dataset preserves the original schema.
    ///
    /// # Panics
    ///
    /// Panics if `mapper` returns a row with a different length than the schema
    /// column count.
    pub fn map_rows<F>(&self, mut mapper: F) -> Self
    where
        F: FnMut(&[Value]) -> Vec<Value>,
    {
        let expected_len = self.schema.width();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let out = mapper(row.as_slice());
                assert!(
                    out.len() == expected_len,
                    "mapped row length {} does not match schema width {}",
                    out.len(),
                    expected_len
                );
                out
            })
            .collect();

        Self {
            schema: self.schema.clone(),
            rows,
        }
    }
}
