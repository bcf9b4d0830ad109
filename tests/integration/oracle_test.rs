//! Oracle integration tests.
//!
//! These tests require a running Oracle database and Instant Client.
//! Set ORADDL_TEST_DSN (and optionally ORADDL_TEST_TABLE as SCHEMA.TABLE)
//! to run them.

use oraddl::config::ConnectionConfig;
use oraddl::db::{CatalogClient, OracleClient};
use oraddl::ddl::{self, ObjectKind};

/// Helper to get the test DSN from environment.
fn get_test_dsn() -> Option<String> {
    std::env::var("ORADDL_TEST_DSN").ok()
}

/// Helper to create a test client.
async fn get_test_client() -> Option<OracleClient> {
    let dsn = get_test_dsn()?;
    let config = ConnectionConfig::from_dsn(&dsn).ok()?;
    OracleClient::connect(&config).await.ok()
}

#[tokio::test]
async fn test_connect_and_close() {
    let Some(client) = get_test_client().await else {
        eprintln!("Skipping test: ORADDL_TEST_DSN not set");
        return;
    };

    client.close().await.unwrap();
}

#[tokio::test]
async fn test_session_directive() {
    let Some(client) = get_test_client().await else {
        eprintln!("Skipping test: ORADDL_TEST_DSN not set");
        return;
    };

    ddl::prepare_session(&client, true).await.unwrap();
    client.close().await.unwrap();
}

#[tokio::test]
async fn test_scalar_query() {
    let Some(client) = get_test_client().await else {
        eprintln!("Skipping test: ORADDL_TEST_DSN not set");
        return;
    };

    let result = client
        .execute_query("select :a || :b from dual", &["FOO", "_TBL"])
        .await
        .unwrap();
    assert_eq!(result.single_text(), Some("FOO_TBL".to_string()));

    client.close().await.unwrap();
}

#[tokio::test]
async fn test_extract_table() {
    let Some(client) = get_test_client().await else {
        eprintln!("Skipping test: ORADDL_TEST_DSN not set");
        return;
    };
    let Some((schema, table)) = std::env::var("ORADDL_TEST_TABLE")
        .ok()
        .and_then(|t| t.split_once('.').map(|(s, n)| (s.to_string(), n.to_string())))
    else {
        eprintln!("Skipping test: ORADDL_TEST_TABLE not set");
        client.close().await.unwrap();
        return;
    };

    ddl::prepare_session(&client, true).await.unwrap();
    let (object, text) = ddl::extract(&client, &schema, &table).await.unwrap();

    assert_eq!(object.kind(), ObjectKind::Table);
    assert!(text.contains("CREATE TABLE"));

    client.close().await.unwrap();
}

#[tokio::test(flavor = "current_thread")]
async fn test_connect_with_unresolvable_alias() {
    if get_test_dsn().is_none() {
        eprintln!("Skipping test: ORADDL_TEST_DSN not set");
        return;
    }

    let config = ConnectionConfig::from_dsn("nobody/nothing@no_such_tns_alias_xyz").unwrap();
    let result = OracleClient::connect(&config).await;
    assert!(matches!(
        result,
        Err(oraddl::error::DdlError::Connection(_))
    ));
}
