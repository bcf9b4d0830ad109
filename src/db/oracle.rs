//! Oracle catalog client implementation.
//!
//! Provides the `OracleClient` struct that implements the `CatalogClient` trait
//! on top of the blocking `oracle` driver.

use crate::config::ConnectionConfig;
use crate::db::{CatalogClient, QueryResult, Row, Value};
use crate::error::{DdlError, Result};
use async_trait::async_trait;
use oracle::sql_type::ToSql;
use oracle::Connection;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::debug;

/// Oracle database client.
///
/// The driver is blocking, so every call runs on the blocking thread pool.
/// The session is shared behind a mutex, which serializes concurrent calls.
pub struct OracleClient {
    conn: Arc<Mutex<Connection>>,
}

impl OracleClient {
    /// Opens a session for the given connection.
    pub async fn connect(config: &ConnectionConfig) -> Result<Self> {
        let target = config.display_string();
        let user = config.user.clone();
        let password = config.password.clone().unwrap_or_default();
        let connect_string = config.connect_string.clone();

        debug!("Connecting to {target}");
        let conn = tokio::task::spawn_blocking(move || {
            Connection::connect(user, password, connect_string)
        })
        .await
        .map_err(|e| DdlError::connection(format!("Connection task failed: {e}")))?
        .map_err(|e| map_connection_error(&e, &target))?;

        debug!("Connected to {target}");
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Runs `f` against the session on the blocking thread pool.
    async fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .map_err(|_| DdlError::connection("Session lock poisoned"))?;
            f(&*conn)
        })
        .await
        .map_err(|e| DdlError::query(format!("Query task failed: {e}")))?
    }
}

#[async_trait]
impl CatalogClient for OracleClient {
    async fn execute_query(&self, sql: &str, params: &[&str]) -> Result<QueryResult> {
        let sql = sql.to_string();
        let params = owned(params);

        self.with_connection(move |conn| {
            let start = Instant::now();
            let binds = bind_params(&params);

            let rows = conn
                .query(&sql, &binds)
                .map_err(|e| map_query_error(&e))?
                .map(|row| row.map_err(|e| map_query_error(&e)).and_then(|r| convert_row(&r)))
                .collect::<Result<Vec<Row>>>()?;

            Ok(QueryResult::with_rows(rows).with_execution_time(start.elapsed()))
        })
        .await
    }

    async fn execute(&self, sql: &str, params: &[&str]) -> Result<()> {
        let sql = sql.to_string();
        let params = owned(params);

        self.with_connection(move |conn| {
            let binds = bind_params(&params);
            conn.execute(&sql, &binds)
                .map(|_| ())
                .map_err(|e| map_query_error(&e))
        })
        .await
    }

    async fn close(&self) -> Result<()> {
        self.with_connection(|conn| {
            conn.close()
                .map_err(|e| DdlError::connection(format!("Failed to close session: {e}")))
        })
        .await
    }
}

fn owned(params: &[&str]) -> Vec<String> {
    params.iter().map(|p| p.to_string()).collect()
}

fn bind_params(params: &[String]) -> Vec<&dyn ToSql> {
    params.iter().map(|p| p as &dyn ToSql).collect()
}

/// Converts a driver row, reading every column as optional text.
fn convert_row(row: &oracle::Row) -> Result<Row> {
    (0..row.sql_values().len())
        .map(|i| {
            row.get::<usize, Option<String>>(i)
                .map(Value::from)
                .map_err(|e| map_query_error(&e))
        })
        .collect()
}

fn map_query_error(error: &oracle::Error) -> DdlError {
    let message = error.to_string();
    if is_connection_lost(&message) {
        DdlError::connection(message)
    } else {
        DdlError::query(message)
    }
}

/// Errors that mean the session itself is unusable.
fn is_connection_lost(message: &str) -> bool {
    ["ORA-03113", "ORA-03114", "ORA-03135", "DPI-1010", "DPI-1080"]
        .iter()
        .any(|code| message.contains(code))
}

/// Maps driver connection errors to user-friendly messages.
fn map_connection_error(error: &oracle::Error, target: &str) -> DdlError {
    let message = error.to_string();

    if message.contains("DPI-1047") {
        DdlError::connection(format!(
            "Oracle client libraries could not be loaded. Install Oracle Instant Client. ({message})"
        ))
    } else if message.contains("ORA-01017") {
        DdlError::connection(format!(
            "Authentication failed for {target}. Check your credentials."
        ))
    } else if message.contains("ORA-12154") || message.contains("ORA-12514") {
        DdlError::connection(format!(
            "Cannot resolve connect string for {target}. Check the DSN."
        ))
    } else if message.contains("ORA-12541") || message.contains("ORA-12170") {
        DdlError::connection(format!(
            "Cannot reach {target}. Check that the listener is running."
        ))
    } else {
        DdlError::connection(message)
    }
}
