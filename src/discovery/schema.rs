//! Full data-set discovery for a measurement.

use std::sync::Arc;

use tracing::info;

use super::{FieldExplorer, TagExplorer};
use crate::error::Result;
use crate::idrf::{ColumnInfo, DataSetInfo, DataType};
use crate::influx::{InfluxClient, InfluxShowQueryExecutor, ShowQueryExecutor};

/// Name of the implicit timestamp column every measurement carries.
pub const TIME_COLUMN: &str = "time";

/// Combines tag and field discovery into a [`DataSetInfo`].
#[derive(Clone)]
pub struct SchemaExplorer {
    tags: TagExplorer,
    fields: FieldExplorer,
}

impl SchemaExplorer {
    pub fn new() -> Self {
        Self::with_executor(Arc::new(InfluxShowQueryExecutor))
    }

    /// Creates an explorer whose tag and field lookups share `executor`.
    pub fn with_executor(executor: Arc<dyn ShowQueryExecutor>) -> Self {
        Self {
            tags: TagExplorer::with_executor(executor.clone()),
            fields: FieldExplorer::with_executor(executor),
        }
    }

    /// Describes `measurement` as the time column, then its tags, then its
    /// fields. A name used both as tag and field is rejected.
    pub async fn discover_data_set(
        &self,
        client: &dyn InfluxClient,
        database: &str,
        measurement: &str,
    ) -> Result<DataSetInfo> {
        let tags = self
            .tags
            .discover_measurement_tags(client, database, measurement)
            .await?;
        let fields = self
            .fields
            .discover_measurement_fields(client, database, measurement)
            .await?;

        let mut columns = Vec::with_capacity(1 + tags.len() + fields.len());
        columns.push(ColumnInfo::new(TIME_COLUMN, DataType::Timestamp));
        columns.extend(tags);
        columns.extend(fields);

        let data_set = DataSetInfo::new(measurement, columns, TIME_COLUMN)?;
        info!(
            measurement,
            columns = data_set.columns().len(),
            "discovered data set"
        );
        Ok(data_set)
    }
}

impl Default for SchemaExplorer {
    fn default() -> Self {
        Self::new()
    }
}
