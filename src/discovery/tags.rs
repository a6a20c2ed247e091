//! Tag key discovery.

use std::sync::Arc;

use tracing::debug;

use super::{check_row_width, quote_identifier};
use crate::error::Result;
use crate::idrf::{ColumnInfo, DataType};
use crate::influx::{InfluxClient, InfluxShowQueryExecutor, ShowQueryExecutor};

/// Discovers the tag keys of a measurement as string-typed columns.
#[derive(Clone)]
pub struct TagExplorer {
    executor: Arc<dyn ShowQueryExecutor>,
}

impl TagExplorer {
    pub fn new() -> Self {
        Self::with_executor(Arc::new(InfluxShowQueryExecutor))
    }

    pub fn with_executor(executor: Arc<dyn ShowQueryExecutor>) -> Self {
        Self { executor }
    }

    /// Returns one column per tag key, in the order the server lists them.
    ///
    /// Tag values are always strings, so every column is [`DataType::String`].
    /// Each row of the `SHOW TAG KEYS` result must hold exactly the key.
    pub async fn discover_measurement_tags(
        &self,
        client: &dyn InfluxClient,
        database: &str,
        measurement: &str,
    ) -> Result<Vec<ColumnInfo>> {
        let query = format!("SHOW TAG KEYS FROM {}", quote_identifier(measurement));
        let result = self
            .executor
            .execute_show_query(client, database, &query)
            .await?;

        check_row_width(&result, 1)?;

        let tags: Vec<ColumnInfo> = result
            .values
            .into_iter()
            .filter_map(|row| row.into_iter().next())
            .map(|name| ColumnInfo::new(name, DataType::String))
            .collect();

        debug!(measurement, count = tags.len(), "discovered tags");
        Ok(tags)
    }
}

impl Default for TagExplorer {
    fn default() -> Self {
        Self::new()
    }
}
