//! Test doubles for the InfluxDB client and the show-query executor.

use async_trait::async_trait;
use std::sync::Mutex;

use super::{InfluxClient, InfluxShowResult, Query, Response, ShowQueryExecutor};
use crate::error::{DiscoveryError, Result};

/// A client that answers every query with the same canned outcome and
/// records the queries it was asked to run.
#[derive(Debug)]
pub struct MockInfluxClient {
    outcome: Result<Response>,
    queries: Mutex<Vec<Query>>,
}

impl MockInfluxClient {
    /// Creates a client that returns `response` for every query.
    pub fn with_response(response: Response) -> Self {
        Self {
            outcome: Ok(response),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Creates a client whose transport fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(DiscoveryError::transport(message)),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Returns the queries issued so far.
    pub fn queries(&self) -> Vec<Query> {
        self.queries
            .lock()
            .map(|q| q.clone())
            .unwrap_or_default()
    }

    /// Returns how many queries were issued.
    pub fn call_count(&self) -> usize {
        self.queries.lock().map(|q| q.len()).unwrap_or_default()
    }
}

impl Default for MockInfluxClient {
    fn default() -> Self {
        Self::with_response(Response::default())
    }
}

#[async_trait]
impl InfluxClient for MockInfluxClient {
    async fn query(&self, query: &Query) -> Result<Response> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query.clone());
        }
        self.outcome.clone()
    }
}

/// A show-query executor that returns a canned outcome, for testing
/// discoverers without building raw responses.
#[derive(Debug)]
pub struct MockShowQueryExecutor {
    outcome: Result<InfluxShowResult>,
    queries: Mutex<Vec<String>>,
}

impl MockShowQueryExecutor {
    /// Creates an executor returning a matrix of the given rows.
    pub fn with_values<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        Self::with_outcome(Ok(InfluxShowResult::new(values)))
    }

    /// Creates an executor that always fails with `error`.
    pub fn failing(error: DiscoveryError) -> Self {
        Self::with_outcome(Err(error))
    }

    fn with_outcome(outcome: Result<InfluxShowResult>) -> Self {
        Self {
            outcome,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Returns the query texts issued so far.
    pub fn queries(&self) -> Vec<String> {
        self.queries
            .lock()
            .map(|q| q.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ShowQueryExecutor for MockShowQueryExecutor {
    async fn execute_show_query(
        &self,
        _client: &dyn InfluxClient,
        _database: &str,
        query: &str,
    ) -> Result<InfluxShowResult> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query.to_string());
        }
        self.outcome.clone()
    }
}
