//! HTTP client for the InfluxDB 1.x query API.
//!
//! Issues `GET /query?db=..&q=..` requests with reqwest and decodes the JSON
//! envelope. Connectivity is never checked at construction time.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::{InfluxClient, Query, Response};
use crate::config::ConnectionParams;
use crate::error::{DiscoveryError, Result};

/// Default timeout for query requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// InfluxDB client speaking the HTTP query API.
#[derive(Debug, Clone)]
pub struct HttpInfluxClient {
    server: String,
    username: Option<String>,
    password: Option<String>,
    http_client: Client,
}

impl HttpInfluxClient {
    /// Creates a client from connection parameters.
    ///
    /// Fails only when the server address is missing or empty.
    pub fn new(params: &ConnectionParams) -> Result<Self> {
        let server = params
            .server()
            .ok_or_else(|| DiscoveryError::config("server address is required"))?
            .to_string();

        let http_client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| DiscoveryError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            server,
            username: params.username.clone().filter(|u| !u.is_empty()),
            password: params.password.clone(),
            http_client,
        })
    }

    /// Returns the configured server address.
    pub fn server(&self) -> &str {
        &self.server
    }

    fn query_url(&self) -> Result<Url> {
        let mut base = self.server.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        Url::parse(&base)
            .and_then(|url| url.join("query"))
            .map_err(|e| {
                DiscoveryError::transport(format!("invalid server address '{}': {e}", self.server))
            })
    }
}

#[async_trait]
impl InfluxClient for HttpInfluxClient {
    async fn query(&self, query: &Query) -> Result<Response> {
        let url = self.query_url()?;
        debug!(%url, database = %query.database, "sending query request");

        let mut request = self.http_client.get(url).query(&[
            ("db", query.database.as_str()),
            ("q", query.command.as_str()),
        ]);
        if let Some(username) = &self.username {
            request = request.basic_auth(username, self.password.as_ref());
        }

        let response = request
            .send()
            .await
            .map_err(|e| DiscoveryError::transport(format!("failed to send query request: {e}")))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            DiscoveryError::transport(format!("failed to read the response bytes: {e}"))
        })?;

        match serde_json::from_slice::<Response>(&body) {
            // Error statuses usually still carry a JSON body with an "error" field.
            Ok(decoded) if status.is_success() || decoded.error_message().is_some() => Ok(decoded),
            Ok(_) => Err(DiscoveryError::transport(format!(
                "server responded with error [{status}]: {}",
                String::from_utf8_lossy(&body)
            ))),
            Err(e) if status.is_success() => Err(DiscoveryError::transport(format!(
                "failed to parse JSON response: {e}"
            ))),
            Err(_) => Err(DiscoveryError::transport(format!(
                "server responded with error [{status}]: {}",
                String::from_utf8_lossy(&body)
            ))),
        }
    }
}
