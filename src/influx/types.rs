//! Wire types for the InfluxDB query API.
//!
//! Mirrors the JSON envelope returned by `/query`: a response holds result
//! sets (one per statement), each result set holds row-groups (series), and
//! each row-group holds rows of loosely typed values.

use crate::error::{DiscoveryError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A query to run against a database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Query text.
    pub command: String,

    /// Target database. May be empty; the server decides what that means.
    pub database: String,
}

impl Query {
    pub fn new(command: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            database: database.into(),
        }
    }
}

/// The envelope returned by the query endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// One result set per executed statement.
    #[serde(default)]
    pub results: Vec<ResultSet>,

    /// Top-level error reported by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    /// Creates a successful response with the given result sets.
    pub fn with_results(results: Vec<ResultSet>) -> Self {
        Self {
            results,
            error: None,
        }
    }

    /// Creates a response carrying a top-level error.
    pub fn with_error(error: impl Into<String>) -> Self {
        Self {
            results: Vec::new(),
            error: Some(error.into()),
        }
    }

    /// Returns the first embedded error, checking the top-level error before
    /// the per-statement errors. Empty strings do not count.
    pub fn error_message(&self) -> Option<&str> {
        self.error
            .as_deref()
            .filter(|e| !e.is_empty())
            .or_else(|| {
                self.results
                    .iter()
                    .find_map(|r| r.error.as_deref().filter(|e| !e.is_empty()))
            })
    }
}

/// The result of a single statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub statement_id: u32,

    /// Row-groups, called "series" by the server.
    #[serde(default)]
    pub series: Vec<RowGroup>,

    /// Statement-level error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResultSet {
    pub fn with_series(series: Vec<RowGroup>) -> Self {
        Self {
            series,
            ..Default::default()
        }
    }
}

/// A named group of rows sharing the same columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowGroup {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,

    #[serde(default)]
    pub columns: Vec<String>,

    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

impl RowGroup {
    pub fn with_values(values: Vec<Vec<Value>>) -> Self {
        Self {
            values,
            ..Default::default()
        }
    }
}

/// A raw value as it appears in a response row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl Value {
    /// Returns the name of the variant, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
        }
    }

    /// Converts a string value into its contents. Every other variant is a
    /// type error; values are never stringified.
    pub fn into_string(self) -> Result<String> {
        match self {
            Value::String(s) => Ok(s),
            other @ (Value::Null | Value::Bool(_) | Value::Integer(_) | Value::Float(_)) => {
                Err(DiscoveryError::type_error(format!(
                    "value not castable to string: {} ({})",
                    other,
                    other.type_name()
                )))
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
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

/// Flattened output of a `SHOW` query: one row per series row, one column per
/// value. Always present after a successful query, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfluxShowResult {
    pub values: Vec<Vec<String>>,
}

impl InfluxShowResult {
    pub fn new(values: Vec<Vec<String>>) -> Self {
        Self { values }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
