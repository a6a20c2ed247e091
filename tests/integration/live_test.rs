//! Discovery against a running InfluxDB.
//!
//! Skipped unless INFLUX_TEST_URL is set. INFLUX_TEST_DATABASE selects the
//! database (defaults to `_internal`, which every 1.x server has).

use outflux_discovery::config::ConnectionParams;
use outflux_discovery::discovery::{MeasureExplorer, SchemaExplorer};
use outflux_discovery::influx::{create_client, HttpInfluxClient};

fn get_test_client() -> Option<(HttpInfluxClient, String)> {
    let url = std::env::var("INFLUX_TEST_URL").ok()?;
    let database =
        std::env::var("INFLUX_TEST_DATABASE").unwrap_or_else(|_| "_internal".to_string());
    let client = create_client(Some(&ConnectionParams::new(url))).ok()?;
    Some((client, database))
}

#[tokio::test]
async fn test_discover_first_measurement() {
    let Some((client, database)) = get_test_client() else {
        eprintln!("Skipping test: INFLUX_TEST_URL not set");
        return;
    };

    let measurements = MeasureExplorer::new()
        .fetch_available_measurements(&client, &database)
        .await
        .unwrap();

    let Some(first) = measurements.first() else {
        eprintln!("Skipping test: database {database} has no measurements");
        return;
    };

    let data_set = SchemaExplorer::new()
        .discover_data_set(&client, &database, first)
        .await
        .unwrap();
    assert_eq!(data_set.name(), first);
    assert_eq!(data_set.columns()[0].name, "time");
}
