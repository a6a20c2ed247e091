//! End-to-end discovery over HTTP against a mock InfluxDB server.

use mockito::{Matcher, Server, ServerGuard};
use outflux_discovery::config::ConnectionParams;
use outflux_discovery::discovery::{SchemaExplorer, TagExplorer};
use outflux_discovery::error::ErrorKind;
use outflux_discovery::idrf::{ColumnInfo, DataType};
use outflux_discovery::influx::{create_client, HttpInfluxClient};
use pretty_assertions::assert_eq;

fn client_for(server: &ServerGuard) -> HttpInfluxClient {
    create_client(Some(&ConnectionParams::new(server.url()))).unwrap()
}

fn query_matcher(q: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("db".into(), "telegraf".into()),
        Matcher::UrlEncoded("q".into(), q.into()),
    ])
}

#[tokio::test]
async fn test_discover_tags_over_http() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/query")
        .match_query(query_matcher("SHOW TAG KEYS FROM \"cpu\""))
        .with_status(200)
        .with_body(
            r#"{"results":[{"statement_id":0,"series":[{"name":"cpu","columns":["tagKey"],"values":[["cpu"],["host"]]}]}]}"#,
        )
        .create_async()
        .await;

    let tags = TagExplorer::new()
        .discover_measurement_tags(&client_for(&server), "telegraf", "cpu")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(
        tags,
        vec![
            ColumnInfo::new("cpu", DataType::String),
            ColumnInfo::new("host", DataType::String),
        ]
    );
}

#[tokio::test]
async fn test_discover_tags_for_measurement_without_tags() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/query")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"results":[{"statement_id":0}]}"#)
        .create_async()
        .await;

    let tags = TagExplorer::new()
        .discover_measurement_tags(&client_for(&server), "telegraf", "empty")
        .await
        .unwrap();
    assert!(tags.is_empty());
}

#[tokio::test]
async fn test_database_not_found_is_content_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/query")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"results":[{"statement_id":0,"error":"database not found: telegraf"}]}"#)
        .create_async()
        .await;

    let err = TagExplorer::new()
        .discover_measurement_tags(&client_for(&server), "telegraf", "cpu")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Content);
    assert_eq!(err.to_string(), "database not found: telegraf");
}

#[tokio::test]
async fn test_discover_data_set_over_http() {
    let mut server = Server::new_async().await;
    let _tags = server
        .mock("GET", "/query")
        .match_query(query_matcher("SHOW TAG KEYS FROM \"mem\""))
        .with_status(200)
        .with_body(
            r#"{"results":[{"statement_id":0,"series":[{"name":"mem","columns":["tagKey"],"values":[["host"]]}]}]}"#,
        )
        .create_async()
        .await;
    let _fields = server
        .mock("GET", "/query")
        .match_query(query_matcher("SHOW FIELD KEYS FROM \"mem\""))
        .with_status(200)
        .with_body(
            r#"{"results":[{"statement_id":0,"series":[{"name":"mem","columns":["fieldKey","fieldType"],"values":[["used","integer"],["used_percent","float"]]}]}]}"#,
        )
        .create_async()
        .await;

    let data_set = SchemaExplorer::new()
        .discover_data_set(&client_for(&server), "telegraf", "mem")
        .await
        .unwrap();

    assert_eq!(
        data_set.columns(),
        &[
            ColumnInfo::new("time", DataType::Timestamp),
            ColumnInfo::new("host", DataType::String),
            ColumnInfo::new("used", DataType::Integer),
            ColumnInfo::new("used_percent", DataType::Float),
        ]
    );
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Port 9 (discard) on localhost is almost never listening.
    let client = create_client(Some(&ConnectionParams::new("http://127.0.0.1:9"))).unwrap();
    let err = TagExplorer::new()
        .discover_measurement_tags(&client, "telegraf", "cpu")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}
