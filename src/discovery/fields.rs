//! Field key discovery.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::{check_row_width, quote_identifier};
use crate::error::{DiscoveryError, Result};
use crate::idrf::{ColumnInfo, DataType};
use crate::influx::{InfluxClient, InfluxShowQueryExecutor, ShowQueryExecutor};

/// Discovers the fields of a measurement together with their types.
#[derive(Clone)]
pub struct FieldExplorer {
    executor: Arc<dyn ShowQueryExecutor>,
}

impl FieldExplorer {
    pub fn new() -> Self {
        Self::with_executor(Arc::new(InfluxShowQueryExecutor))
    }

    pub fn with_executor(executor: Arc<dyn ShowQueryExecutor>) -> Self {
        Self { executor }
    }

    /// Returns one column per field key.
    ///
    /// Rows of `SHOW FIELD KEYS` are `[fieldKey, fieldType]`. A key the
    /// server reports more than once (it can, across shards) must carry the
    /// same type every time.
    pub async fn discover_measurement_fields(
        &self,
        client: &dyn InfluxClient,
        database: &str,
        measurement: &str,
    ) -> Result<Vec<ColumnInfo>> {
        let query = format!("SHOW FIELD KEYS FROM {}", quote_identifier(measurement));
        let result = self
            .executor
            .execute_show_query(client, database, &query)
            .await?;

        check_row_width(&result, 2)?;

        let mut fields: Vec<ColumnInfo> = Vec::with_capacity(result.values.len());
        let mut seen: HashMap<String, usize> = HashMap::new();

        for row in result.values {
            let [name, type_name]: [String; 2] = row
                .try_into()
                .map_err(|_| DiscoveryError::shape("expected [fieldKey, fieldType] row"))?;
            let data_type = field_data_type(&type_name)?;

            match seen.get(&name) {
                Some(&index) if fields[index].data_type == data_type => continue,
                Some(&index) => {
                    return Err(DiscoveryError::shape(format!(
                        "field '{}' reported with conflicting types: {} and {}",
                        name, fields[index].data_type, data_type
                    )))
                }
                None => {
                    seen.insert(name.clone(), fields.len());
                    fields.push(ColumnInfo::new(name, data_type));
                }
            }
        }

        debug!(measurement, count = fields.len(), "discovered fields");
        Ok(fields)
    }
}

impl Default for FieldExplorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a server-side field type name to its IDRF type.
fn field_data_type(type_name: &str) -> Result<DataType> {
    match type_name {
        "float" => Ok(DataType::Float),
        "integer" | "unsigned" => Ok(DataType::Integer),
        "string" => Ok(DataType::String),
        "boolean" => Ok(DataType::Boolean),
        other => Err(DiscoveryError::type_error(format!(
            "unknown field type '{other}'"
        ))),
    }
}
