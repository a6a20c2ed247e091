//! Configuration management for outflux.
//!
//! Handles loading configuration from TOML files and environment variables,
//! with support for named InfluxDB connections.

use crate::error::{DiscoveryError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Environment variable holding the server address.
pub const ENV_SERVER: &str = "INFLUX_SERVER";
/// Environment variable holding the username.
pub const ENV_USERNAME: &str = "INFLUX_USERNAME";
/// Environment variable holding the password.
pub const ENV_PASSWORD: &str = "INFLUX_PASSWORD";
/// Environment variable holding the database name.
pub const ENV_DATABASE: &str = "INFLUX_DATABASE";

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Named InfluxDB connections.
    #[serde(default)]
    pub connections: HashMap<String, ConnectionParams>,
}

/// InfluxDB connection parameters.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ConnectionParams {
    /// Server address, e.g. `http://localhost:8086`.
    pub server: Option<String>,

    /// Username for basic auth.
    pub username: Option<String>,

    /// Password (not recommended to store in config).
    pub password: Option<String>,

    /// Database to discover.
    pub database: Option<String>,
}

impl ConnectionParams {
    /// Creates params for the given server address.
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: Some(server.into()),
            ..Default::default()
        }
    }

    /// Sets username and password.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Sets the database.
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Returns the server address if one is set and non-empty. The address
    /// is returned exactly as configured.
    pub fn server(&self) -> Option<&str> {
        self.server.as_deref().filter(|s| !s.is_empty())
    }

    /// Returns the database name, or an error if none was configured.
    pub fn require_database(&self) -> Result<&str> {
        self.database
            .as_deref()
            .ok_or_else(|| DiscoveryError::config("Database name is required"))
    }

    /// Merges another config into this one, with the other taking precedence.
    pub fn merge(&mut self, other: &ConnectionParams) {
        if other.server.is_some() {
            self.server = other.server.clone();
        }
        if other.username.is_some() {
            self.username = other.username.clone();
        }
        if other.password.is_some() {
            self.password = other.password.clone();
        }
        if other.database.is_some() {
            self.database = other.database.clone();
        }
    }

    /// Applies environment variables (INFLUX_SERVER, etc.) as defaults.
    pub fn apply_env_defaults(&mut self) {
        self.apply_defaults_from(|key| std::env::var(key).ok());
    }

    fn apply_defaults_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if self.server.is_none() {
            self.server = lookup(ENV_SERVER);
        }
        if self.username.is_none() {
            self.username = lookup(ENV_USERNAME);
        }
        if self.password.is_none() {
            self.password = lookup(ENV_PASSWORD);
        }
        if self.database.is_none() {
            self.database = lookup(ENV_DATABASE);
        }
    }

    /// Returns a display-safe string (no password) for UI purposes.
    pub fn display_string(&self) -> String {
        let server = self.server().unwrap_or("<no server>");
        let database = self.database.as_deref().unwrap_or("unknown");
        match self.username.as_deref().filter(|u| !u.is_empty()) {
            Some(user) => format!("{database} @ {server} as {user}"),
            None => format!("{database} @ {server}"),
        }
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("outflux")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file. A missing file yields the default config.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| DiscoveryError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            DiscoveryError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }

    /// Gets a named connection, or the default connection if name is None.
    pub fn get_connection(&self, name: Option<&str>) -> Option<&ConnectionParams> {
        let key = name.unwrap_or("default");
        self.connections.get(key)
    }
}
