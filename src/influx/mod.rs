//! InfluxDB access layer.
//!
//! Provides a trait-based client interface so discovery routines can run
//! against the HTTP client or an in-memory double interchangeably.

mod http;
mod mock;
mod query;
mod types;

pub use http::HttpInfluxClient;
pub use mock::{MockInfluxClient, MockShowQueryExecutor};
pub use query::{
    decode_response, execute_query, execute_show_query, is_show_query, InfluxShowQueryExecutor,
    ShowQueryExecutor,
};
pub use types::{InfluxShowResult, Query, Response, ResultSet, RowGroup, Value};

use crate::config::ConnectionParams;
use crate::error::{DiscoveryError, Result};
use async_trait::async_trait;

/// Creates an HTTP client for the given connection parameters.
///
/// Fails when no parameters are given or the server address is empty.
/// Connectivity is not verified.
pub fn create_client(params: Option<&ConnectionParams>) -> Result<HttpInfluxClient> {
    let params =
        params.ok_or_else(|| DiscoveryError::config("connection parameters are required"))?;
    HttpInfluxClient::new(params)
}

/// The single capability discovery needs from a data source: run a query
/// and hand back the raw response envelope.
///
/// Implementations return `Err` only for transport failures; errors the
/// server embeds in the envelope are left for the caller to decode.
#[async_trait]
pub trait InfluxClient: Send + Sync {
    async fn query(&self, query: &Query) -> Result<Response>;
}
