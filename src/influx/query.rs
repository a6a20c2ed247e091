//! Query execution and response decoding.
//!
//! `execute_query` separates transport failures from errors embedded in the
//! response; `execute_show_query` additionally checks the query text and
//! flattens the single result set into a string matrix.

use async_trait::async_trait;
use tracing::{debug, warn};

use super::{InfluxClient, InfluxShowResult, Query, Response, ResultSet, Value};
use crate::error::{DiscoveryError, Result};

const SHOW_PREFIX: &str = "SHOW ";

/// Decodes the outcome of a client call into result sets.
///
/// Transport errors pass through untouched. A non-empty error embedded in the
/// envelope becomes a content error carrying that exact text. Anything else,
/// including zero result sets, is success.
pub fn decode_response(response: Result<Response>) -> Result<Vec<ResultSet>> {
    let response = response?;
    if let Some(message) = response.error_message() {
        warn!(error = message, "query response carries an error");
        return Err(DiscoveryError::content(message));
    }
    Ok(response.results)
}

/// Runs `command` against `database` and decodes the response.
///
/// The database name is passed through as is, empty included.
pub async fn execute_query(
    client: &dyn InfluxClient,
    database: &str,
    command: &str,
) -> Result<Vec<ResultSet>> {
    debug!(database, query = command, "executing query");
    let query = Query::new(command, database);
    decode_response(client.query(&query).await)
}

/// Returns true if `command` starts with `SHOW ` in any letter case.
pub fn is_show_query(command: &str) -> bool {
    command
        .get(..SHOW_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(SHOW_PREFIX))
}

/// Runs a `SHOW` query and flattens its single result set.
///
/// Rows are concatenated across row-groups in order, keeping column order.
/// Any non-string value fails the whole call.
pub async fn execute_show_query(
    client: &dyn InfluxClient,
    database: &str,
    command: &str,
) -> Result<InfluxShowResult> {
    if !is_show_query(command) {
        return Err(DiscoveryError::validation(format!(
            "show query must start with '{SHOW_PREFIX}', got '{command}'"
        )));
    }

    let mut results = execute_query(client, database, command).await?;
    if results.len() != 1 {
        return Err(DiscoveryError::shape(format!(
            "expected exactly one result, got {}",
            results.len()
        )));
    }

    let result = results.remove(0);
    let values = result
        .series
        .into_iter()
        .flat_map(|group| group.values)
        .map(|row| row.into_iter().map(Value::into_string).collect::<Result<Vec<_>>>())
        .collect::<Result<Vec<Vec<String>>>>()?;

    debug!(rows = values.len(), "show query returned");
    Ok(InfluxShowResult::new(values))
}

/// Executes `SHOW` queries on behalf of discoverers.
#[async_trait]
pub trait ShowQueryExecutor: Send + Sync {
    async fn execute_show_query(
        &self,
        client: &dyn InfluxClient,
        database: &str,
        query: &str,
    ) -> Result<InfluxShowResult>;
}

/// The executor backed by [`execute_show_query`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InfluxShowQueryExecutor;

#[async_trait]
impl ShowQueryExecutor for InfluxShowQueryExecutor {
    async fn execute_show_query(
        &self,
        client: &dyn InfluxClient,
        database: &str,
        query: &str,
    ) -> Result<InfluxShowResult> {
        execute_show_query(client, database, query).await
    }
}
