//! Outflux - discover InfluxDB schema ahead of a migration.

mod cli;

use anyhow::{anyhow, Context};
use cli::{Cli, Command, ConnectionArgs, OutputFormat};
use outflux_discovery::config::{Config, ConnectionParams};
use outflux_discovery::discovery::{FieldExplorer, MeasureExplorer, SchemaExplorer, TagExplorer};
use outflux_discovery::error::DiscoveryError;
use outflux_discovery::idrf::ColumnInfo;
use outflux_discovery::influx::create_client;
use outflux_discovery::logging;
use serde::Serialize;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();
    logging::init_stderr_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        match e.downcast_ref::<DiscoveryError>() {
            Some(d) => error!("{}: {:#}", d.category(), e),
            None => error!("{:#}", e),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let params = resolve_connection(&cli.connection)?;
    info!("Connection: {}", params.display_string());

    let client = create_client(Some(&params))?;
    let database = params.require_database()?;

    match &cli.command {
        Command::Measurements => {
            let measurements = MeasureExplorer::new()
                .fetch_available_measurements(&client, database)
                .await
                .context("listing measurements")?;
            print_output(cli.format, &measurements, |m| m.clone())?;
        }
        Command::Tags { measurement } => {
            let tags = TagExplorer::new()
                .discover_measurement_tags(&client, database, measurement)
                .await
                .with_context(|| format!("discovering tags of '{measurement}'"))?;
            print_output(cli.format, &tags, ColumnInfo::to_string)?;
        }
        Command::Fields { measurement } => {
            let fields = FieldExplorer::new()
                .discover_measurement_fields(&client, database, measurement)
                .await
                .with_context(|| format!("discovering fields of '{measurement}'"))?;
            print_output(cli.format, &fields, ColumnInfo::to_string)?;
        }
        Command::Schema { measurement } => {
            let data_set = SchemaExplorer::new()
                .discover_data_set(&client, database, measurement)
                .await
                .with_context(|| format!("discovering schema of '{measurement}'"))?;
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&data_set)?),
                OutputFormat::Text => {
                    println!("{}", data_set.name());
                    for column in data_set.columns() {
                        println!("  {column}");
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_output<T: Serialize>(
    format: OutputFormat,
    items: &[T],
    line: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(items)?),
        OutputFormat::Text => items.iter().for_each(|item| println!("{}", line(item))),
    }
    Ok(())
}

/// Resolves the final connection params with precedence:
/// CLI arguments, then the named (or default) connection from the config
/// file, then environment variables.
fn resolve_connection(args: &ConnectionArgs) -> anyhow::Result<ConnectionParams> {
    let config_path = args.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;

    let mut params = match args.connection_name() {
        Some(name) => config
            .get_connection(Some(name))
            .cloned()
            .ok_or_else(|| anyhow!("Connection '{name}' not found in config file"))?,
        None => config.get_connection(None).cloned().unwrap_or_default(),
    };

    params.merge(&args.to_connection_params());
    params.apply_env_defaults();

    Ok(params)
}
