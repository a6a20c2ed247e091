//! Measurement discovery.

use std::sync::Arc;

use tracing::debug;

use super::check_row_width;
use crate::error::Result;
use crate::influx::{InfluxClient, InfluxShowQueryExecutor, ShowQueryExecutor};

const SHOW_MEASUREMENTS: &str = "SHOW MEASUREMENTS";

/// Lists the measurements of a database.
#[derive(Clone)]
pub struct MeasureExplorer {
    executor: Arc<dyn ShowQueryExecutor>,
}

impl MeasureExplorer {
    pub fn new() -> Self {
        Self::with_executor(Arc::new(InfluxShowQueryExecutor))
    }

    pub fn with_executor(executor: Arc<dyn ShowQueryExecutor>) -> Self {
        Self { executor }
    }

    pub async fn fetch_available_measurements(
        &self,
        client: &dyn InfluxClient,
        database: &str,
    ) -> Result<Vec<String>> {
        let result = self
            .executor
            .execute_show_query(client, database, SHOW_MEASUREMENTS)
            .await?;

        check_row_width(&result, 1)?;

        let measurements: Vec<String> = result
            .values
            .into_iter()
            .filter_map(|row| row.into_iter().next())
            .collect();

        debug!(database, count = measurements.len(), "discovered measurements");
        Ok(measurements)
    }
}

impl Default for MeasureExplorer {
    fn default() -> Self {
        Self::new()
    }
}
