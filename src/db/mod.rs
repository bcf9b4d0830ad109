//! Catalog access layer for oraddl.
//!
//! Provides a trait-based interface for executing catalog statements, so the
//! extraction logic can run against Oracle or an in-memory test double.

mod mock;
mod oracle;
mod types;

pub use mock::{FailingCatalogClient, MockCatalogClient, RecordedCall};
pub use self::oracle::OracleClient;
pub use types::{QueryResult, Row, Value};

use crate::config::ConnectionConfig;
use crate::error::Result;
use async_trait::async_trait;

/// Opens a catalog client for the given connection.
///
/// This is the central factory function for database connections.
pub async fn connect(config: &ConnectionConfig) -> Result<Box<dyn CatalogClient>> {
    let client = OracleClient::connect(config).await?;
    Ok(Box::new(client))
}

/// Trait defining the interface for catalog clients.
///
/// One client wraps one database session. Implementations must accept
/// concurrent calls, serializing them internally if the session requires it.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Executes a query with positional bind parameters and returns its rows.
    async fn execute_query(&self, sql: &str, params: &[&str]) -> Result<QueryResult>;

    /// Executes a statement that returns no rows.
    async fn execute(&self, sql: &str, params: &[&str]) -> Result<()>;

    /// Closes the database session.
    async fn close(&self) -> Result<()>;
}
