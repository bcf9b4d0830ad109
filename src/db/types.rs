//! Query result types for oraddl.
//!
//! Defines the structures used to represent catalog query results.

use std::time::Duration;

/// Represents the result of executing a catalog query.
#[derive(Debug, Clone, Default)]
pub struct QueryResult {
    /// Rows of data.
    pub rows: Vec<Row>,

    /// Time taken to execute the query.
    pub execution_time: Duration,
}

impl QueryResult {
    /// Creates a new empty query result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a query result with the given rows.
    pub fn with_rows(rows: Vec<Row>) -> Self {
        Self {
            rows,
            execution_time: Duration::ZERO,
        }
    }

    /// Creates a result with one row per value, each holding a single text cell.
    pub fn from_scalars<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_rows(
            values
                .into_iter()
                .map(|v| vec![Value::String(v.into())])
                .collect(),
        )
    }

    /// Sets the execution time.
    pub fn with_execution_time(mut self, duration: Duration) -> Self {
        self.execution_time = duration;
        self
    }

    /// Returns true if the result set is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the first column of every row as text, skipping NULL cells.
    pub fn first_column(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter_map(|row| row.first())
            .filter_map(Value::as_text)
            .collect()
    }

    /// Returns the text of the single cell of a one-row result.
    ///
    /// `None` when the result has no rows, more than one row, or a NULL cell.
    pub fn single_text(&self) -> Option<String> {
        match self.rows.as_slice() {
            [row] => row.first().and_then(Value::as_text),
            _ => None,
        }
    }
}

/// A row of data from a query result.
pub type Row = Vec<Value>;

/// Represents a single value from a catalog query.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// NULL value.
    #[default]
    Null,

    /// Text value, including CLOB contents.
    String(String),
}

impl Value {
    /// Returns the value as text, or `None` for NULL.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
        }
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(val) => val.into(),
            None => Value::Null,
        }
    }
}
