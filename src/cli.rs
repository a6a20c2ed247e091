//! Command-line argument parsing for outflux.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use outflux_discovery::config::{Config, ConnectionParams};

/// Output format for discovery results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per item.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Discover InfluxDB schema ahead of a migration.
#[derive(Parser, Debug)]
#[command(name = "outflux")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Connection selection shared by all subcommands.
#[derive(Args, Debug, Default)]
pub struct ConnectionArgs {
    /// InfluxDB server address (e.g., http://localhost:8086)
    #[arg(short = 's', long, value_name = "URL", global = true)]
    pub server: Option<String>,

    /// Username
    #[arg(short = 'u', long, value_name = "USER", global = true)]
    pub user: Option<String>,

    /// Password
    #[arg(long, value_name = "PASSWORD", global = true)]
    pub password: Option<String>,

    /// Database to discover
    #[arg(short = 'd', long = "db", value_name = "DATABASE", global = true)]
    pub database: Option<String>,

    /// Use named connection from config
    #[arg(short = 'c', long, value_name = "NAME", global = true)]
    pub connection: Option<String>,

    /// Config file path
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the measurements in the database
    Measurements,
    /// List the tag columns of a measurement
    Tags {
        /// Measurement name
        measurement: String,
    },
    /// List the field columns of a measurement
    Fields {
        /// Measurement name
        measurement: String,
    },
    /// Describe a measurement as time, tag and field columns
    Schema {
        /// Measurement name
        measurement: String,
    },
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl ConnectionArgs {
    /// Returns the connection params given on the command line only.
    pub fn to_connection_params(&self) -> ConnectionParams {
        ConnectionParams {
            server: self.server.clone(),
            username: self.user.clone(),
            password: self.password.clone(),
            database: self.database.clone(),
        }
    }

    /// Returns the config file path to use.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// Returns the named connection to use, if specified.
    pub fn connection_name(&self) -> Option<&str> {
        self.connection.as_deref()
    }
}
