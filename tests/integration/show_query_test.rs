//! Query and show-query execution through the public API.

use outflux_discovery::config::ConnectionParams;
use outflux_discovery::error::{DiscoveryError, ErrorKind};
use outflux_discovery::influx::{
    create_client, execute_query, execute_show_query, InfluxShowResult, MockInfluxClient,
    Response, ResultSet, RowGroup, Value,
};
use pretty_assertions::assert_eq;

fn one_result(series: Vec<RowGroup>) -> Response {
    Response::with_results(vec![ResultSet::with_series(series)])
}

#[test]
fn test_create_client_rejects_missing_or_empty_params() {
    assert_eq!(create_client(None).unwrap_err().kind(), ErrorKind::Config);

    let empty = ConnectionParams::default();
    assert_eq!(
        create_client(Some(&empty)).unwrap_err().kind(),
        ErrorKind::Config
    );
}

#[test]
fn test_create_client_accepts_any_non_empty_server() {
    for server in ["http://someaddress", "localhost:8086", "whatever", " "] {
        assert!(create_client(Some(&ConnectionParams::new(server))).is_ok());
    }
}

#[tokio::test]
async fn test_execute_query_cases() {
    // Transport failure before any response
    let client = MockInfluxClient::failing("error");
    let err = execute_query(&client, "database name", "query 1")
        .await
        .unwrap_err();
    assert_eq!(err, DiscoveryError::transport("error"));

    // Error embedded in the response
    let client = MockInfluxClient::with_response(Response::with_error("some error in response"));
    let err = execute_query(&client, "database name", "query 2")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "some error in response");

    // No result sets
    let client = MockInfluxClient::with_response(Response::with_results(vec![]));
    let results = execute_query(&client, "database name", "query 3")
        .await
        .unwrap();
    assert!(results.is_empty());

    // One result set without row-groups
    let client = MockInfluxClient::with_response(one_result(vec![]));
    let results = execute_query(&client, "database name", "query 4")
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    assert!(results[0].series.is_empty());
}

#[tokio::test]
async fn test_show_query_failures() {
    let client = MockInfluxClient::default();
    let err = execute_show_query(&client, "database", "SELECT * FROM cpu")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(client.call_count(), 0);

    let cases = [
        (MockInfluxClient::failing("error"), ErrorKind::Transport),
        (
            MockInfluxClient::with_response(Response::with_results(vec![
                ResultSet::default(),
                ResultSet::default(),
            ])),
            ErrorKind::Shape,
        ),
        (
            MockInfluxClient::with_response(one_result(vec![RowGroup::with_values(vec![vec![
                Value::Integer(1),
            ]])])),
            ErrorKind::Type,
        ),
        (
            MockInfluxClient::with_response(one_result(vec![RowGroup::with_values(vec![vec![
                Value::Null,
            ]])])),
            ErrorKind::Type,
        ),
    ];

    for (client, kind) in cases {
        let err = execute_show_query(&client, "database", "SHOW something")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), kind, "unexpected error: {err}");
    }
}

#[tokio::test]
async fn test_show_query_with_results() {
    let client = MockInfluxClient::with_response(one_result(vec![RowGroup::with_values(vec![
        vec![Value::from("1")],
    ])]));
    let result = execute_show_query(&client, "database", "SHOW something")
        .await
        .unwrap();
    assert_eq!(result, InfluxShowResult::new(vec![vec!["1".to_string()]]));

    let client = MockInfluxClient::with_response(one_result(vec![]));
    let result = execute_show_query(&client, "database", "show something")
        .await
        .unwrap();
    assert!(result.values.is_empty());
}
