//! Discovery routines driven by injected show-query executors.

use std::sync::Arc;

use outflux_discovery::discovery::{FieldExplorer, MeasureExplorer, SchemaExplorer, TagExplorer};
use outflux_discovery::error::{DiscoveryError, ErrorKind};
use outflux_discovery::idrf::{ColumnInfo, DataType};
use outflux_discovery::influx::{MockInfluxClient, MockShowQueryExecutor};
use pretty_assertions::assert_eq;

const DATABASE: &str = "database";
const MEASURE: &str = "measure";

#[tokio::test]
async fn test_discover_measurement_tags_cases() {
    let client = MockInfluxClient::default();

    let tags = TagExplorer::with_executor(Arc::new(MockShowQueryExecutor::failing(
        DiscoveryError::content("error executing query"),
    )));
    assert!(tags
        .discover_measurement_tags(&client, DATABASE, MEASURE)
        .await
        .is_err());

    let tags = TagExplorer::with_executor(Arc::new(MockShowQueryExecutor::with_values(
        Vec::<Vec<String>>::new(),
    )));
    let result = tags
        .discover_measurement_tags(&client, DATABASE, MEASURE)
        .await
        .unwrap();
    assert_eq!(result, Vec::<ColumnInfo>::new());

    let tags = TagExplorer::with_executor(Arc::new(MockShowQueryExecutor::with_values([[
        "1", "2",
    ]])));
    let err = tags
        .discover_measurement_tags(&client, DATABASE, MEASURE)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);
    assert!(err.to_string().contains("too many columns"));

    let tags = TagExplorer::with_executor(Arc::new(MockShowQueryExecutor::with_values([["1"]])));
    let result = tags
        .discover_measurement_tags(&client, DATABASE, MEASURE)
        .await
        .unwrap();
    assert_eq!(result, vec![ColumnInfo::new("1", DataType::String)]);

    // The executor was mocked, so the client never saw a query.
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_explorers_share_one_executor() {
    let executor = Arc::new(MockShowQueryExecutor::with_values([["x", "string"]]));
    let client = MockInfluxClient::default();

    let fields = FieldExplorer::with_executor(executor.clone())
        .discover_measurement_fields(&client, DATABASE, "cpu")
        .await
        .unwrap();
    assert_eq!(fields, vec![ColumnInfo::new("x", DataType::String)]);

    let err = MeasureExplorer::with_executor(executor.clone())
        .fetch_available_measurements(&client, DATABASE)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);

    assert_eq!(
        executor.queries(),
        vec![
            "SHOW FIELD KEYS FROM \"cpu\"".to_string(),
            "SHOW MEASUREMENTS".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_schema_explorer_propagates_shape_error() {
    // Tag rows must be one column wide, so the first lookup already fails.
    let executor = Arc::new(MockShowQueryExecutor::with_values([["usage", "float"]]));
    let err = SchemaExplorer::with_executor(executor.clone())
        .discover_data_set(&MockInfluxClient::default(), DATABASE, "cpu")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Shape);
    assert_eq!(executor.queries().len(), 1);
}
