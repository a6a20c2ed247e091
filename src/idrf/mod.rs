//! Intermediate data representation (IDRF).
//!
//! Describes discovered schema independently of the source and destination
//! systems: named columns with a data type, grouped into a data set.

use crate::error::{DiscoveryError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Data types a discovered column can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Boolean,
    Integer,
    Float,
    String,
    Timestamp,
}

impl DataType {
    /// Returns the type name as used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single discovered column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    /// Column name.
    pub name: String,

    /// Column data type.
    pub data_type: DataType,
}

impl ColumnInfo {
    /// Creates a new column info with the given name and type.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

impl fmt::Display for ColumnInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.data_type)
    }
}

/// A described data set: one measurement with its columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataSetInfo {
    name: String,
    columns: Vec<ColumnInfo>,
    time_column: String,
}

impl DataSetInfo {
    /// Creates a data set, checking that column names are unique and that
    /// `time_column` names a timestamp column.
    pub fn new(
        name: impl Into<String>,
        columns: Vec<ColumnInfo>,
        time_column: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let time_column = time_column.into();

        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(DiscoveryError::shape(format!(
                    "duplicate column '{}' in data set '{}'",
                    column.name, name
                )));
            }
        }

        match columns.iter().find(|c| c.name == time_column) {
            Some(c) if c.data_type == DataType::Timestamp => {}
            Some(c) => {
                return Err(DiscoveryError::type_error(format!(
                    "time column '{}' must be a timestamp, found {}",
                    time_column, c.data_type
                )))
            }
            None => {
                return Err(DiscoveryError::shape(format!(
                    "time column '{}' not found in data set '{}'",
                    time_column, name
                )))
            }
        }

        Ok(Self {
            name,
            columns,
            time_column,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[ColumnInfo] {
        &self.columns
    }

    pub fn time_column(&self) -> &str {
        &self.time_column
    }
}
