//! End-to-end extraction tests.
//!
//! Drive the session directive, classification and retrieval through the
//! public API against a scripted catalog.

use oraddl::db::{CatalogClient, MockCatalogClient, QueryResult};
use oraddl::ddl::{self, sql, ObjectKind};
use oraddl::error::DdlError;
use oraddl::output::{self, OutputFormat, PostProcess};
use pretty_assertions::assert_eq;
use std::time::Duration;

fn foo_tbl_catalog() -> MockCatalogClient {
    MockCatalogClient::new()
        .on(sql::CLASSIFY_OBJECT, QueryResult::from_scalars(["TABLE"]))
        .on(
            sql::GET_DDL,
            QueryResult::from_scalars(["CREATE TABLE FOO_TBL (...)"]),
        )
        .on(
            sql::GET_DEPENDENT_DDL,
            QueryResult::from_scalars(["CREATE INDEX FOO_IDX ..."]),
        )
}

#[tokio::test]
async fn test_table_scenario() {
    let client = foo_tbl_catalog();

    ddl::prepare_session(&client, true).await.unwrap();
    let (object, text) = ddl::extract(&client, "XXT", "FOO_TBL").await.unwrap();

    assert_eq!(object.kind(), ObjectKind::Table);
    assert_eq!(text, "CREATE TABLE FOO_TBL (...)\nCREATE INDEX FOO_IDX ...");

    let rendered = output::render(&object, &text, OutputFormat::Text).unwrap();
    assert_eq!(rendered, "CREATE TABLE FOO_TBL (...)\nCREATE INDEX FOO_IDX ...");
}

#[tokio::test]
async fn test_session_directive_comes_first() {
    let client = foo_tbl_catalog();

    ddl::prepare_session(&client, true).await.unwrap();
    ddl::extract(&client, "xxt", "foo_tbl").await.unwrap();

    let calls = client.calls();
    assert_eq!(calls.len(), 4);
    assert!(calls[0].sql.contains("set_transform_param"));
    assert!(calls[0].sql.contains("'SQLTERMINATOR', true"));
    assert_eq!(calls[1].sql, sql::CLASSIFY_OBJECT);
    assert_eq!(client.calls_matching("set_transform_param").len(), 1);
}

#[tokio::test]
async fn test_mixed_case_inputs_extract_identically() {
    let mut outputs = Vec::new();
    for (schema, name) in [("xxt", "foo_tbl"), ("Xxt", "Foo_Tbl"), ("XXT", "FOO_TBL")] {
        let client = foo_tbl_catalog();
        outputs.push(ddl::extract(&client, schema, name).await.unwrap());
    }
    assert!(outputs.windows(2).all(|w| w[0] == w[1]));
}

#[tokio::test]
async fn test_table_scenario_reversed_completion() {
    let client = MockCatalogClient::new()
        .on(sql::CLASSIFY_OBJECT, QueryResult::from_scalars(["TABLE"]))
        .on_delayed(
            sql::GET_DDL,
            QueryResult::from_scalars(["CREATE TABLE FOO_TBL (...)"]),
            Duration::from_millis(100),
        )
        .on(
            sql::GET_DEPENDENT_DDL,
            QueryResult::from_scalars(["CREATE INDEX FOO_IDX ..."]),
        );

    let (_, text) = ddl::extract(&client, "XXT", "FOO_TBL").await.unwrap();
    assert_eq!(text, "CREATE TABLE FOO_TBL (...)\nCREATE INDEX FOO_IDX ...");
}

#[tokio::test]
async fn test_package_body_scenario() {
    let body = "CREATE OR REPLACE PACKAGE BODY \"XXT\".\"XXT_UTIL\" IS\nEND XXT_UTIL;\n/";
    let client = MockCatalogClient::new()
        .on(sql::CLASSIFY_OBJECT, QueryResult::from_scalars(["PACKAGE BODY"]))
        .on(sql::GET_DDL, QueryResult::from_scalars([body]));

    let (object, text) = ddl::extract(&client, "xxt", "xxt_util").await.unwrap();
    assert_eq!(object.kind(), ObjectKind::PackageBody);
    assert_eq!(text, body);

    let retrievals = client.calls_matching(sql::GET_DDL);
    assert_eq!(retrievals.len(), 1);
    assert_eq!(retrievals[0].params[0], "PACKAGE_BODY");
    assert!(client.calls_matching(sql::GET_DEPENDENT_DDL).is_empty());

    let stripped = PostProcess { strip_quotes: true }.apply(text);
    assert_eq!(
        stripped,
        "CREATE OR REPLACE PACKAGE BODY XXT.XXT_UTIL IS\nEND XXT_UTIL;\n/"
    );
}

#[tokio::test]
async fn test_unknown_object_stops_before_retrieval() {
    let client = MockCatalogClient::new().on(sql::CLASSIFY_OBJECT, QueryResult::new());

    let err = ddl::extract(&client, "XXT", "NOPE").await.unwrap_err();
    assert!(matches!(err, DdlError::ObjectNotFound { .. }));
    assert_eq!(client.calls().len(), 1);
}

#[tokio::test]
async fn test_index_object_is_reported() {
    let client = MockCatalogClient::new().on(sql::CLASSIFY_OBJECT, QueryResult::from_scalars(["INDEX"]));

    let err = ddl::extract(&client, "XXT", "FOO_IDX").await.unwrap_err();
    assert!(matches!(err, DdlError::Unsupported(_)));
    assert_eq!(err.category(), "Retrieval Error");
}

#[tokio::test]
async fn test_partial_table_fetch_yields_no_output() {
    let client = MockCatalogClient::new()
        .on(sql::CLASSIFY_OBJECT, QueryResult::from_scalars(["TABLE"]))
        .on(
            sql::GET_DDL,
            QueryResult::from_scalars(["CREATE TABLE FOO_TBL (...)"]),
        )
        .fail_on(
            sql::GET_DEPENDENT_DDL,
            "ORA-31608: specified object of type INDEX not found",
        );

    let result = ddl::extract(&client, "XXT", "FOO_TBL").await;
    match result {
        Err(DdlError::Retrieval(msg)) => assert!(msg.contains("ORA-31608")),
        other => panic!("expected retrieval failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_session_directive_failure() {
    let client = MockCatalogClient::new().fail_on(
        "set_transform_param",
        "ORA-06550: line 1, column 7: PLS-00201",
    );
    let err = ddl::prepare_session(&client, false).await.unwrap_err();
    assert!(matches!(err, DdlError::Query(_)));

    client.close().await.unwrap();
}

#[tokio::test]
async fn test_json_rendering_of_extraction() {
    let client = foo_tbl_catalog();
    let (object, text) = ddl::extract(&client, "xxt", "foo_tbl").await.unwrap();

    let rendered = output::render(&object, &text, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value["kind"], "TABLE");
    assert_eq!(value["schema"], "XXT");
    assert_eq!(
        value["ddl"],
        "CREATE TABLE FOO_TBL (...)\nCREATE INDEX FOO_IDX ..."
    );
}
