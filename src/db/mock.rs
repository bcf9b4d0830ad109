//! Mock catalog clients for testing.
//!
//! `MockCatalogClient` answers statements from a script and records every
//! call; `FailingCatalogClient` behaves like a dropped session.

use super::{CatalogClient, QueryResult};
use crate::error::{DdlError, Result};
use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// A statement received by a mock client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub sql: String,
    pub params: Vec<String>,
}

#[derive(Debug, Clone)]
enum Outcome {
    Rows(QueryResult),
    Fail(String),
}

#[derive(Debug, Clone)]
struct Scripted {
    fragment: String,
    outcome: Outcome,
    delay: Duration,
}

/// A mock catalog client that returns scripted results.
///
/// Each script entry matches statements containing its SQL fragment; the
/// first match wins. Unmatched statements succeed with no rows.
#[derive(Debug, Default)]
pub struct MockCatalogClient {
    script: Vec<Scripted>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockCatalogClient {
    /// Creates a mock with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers statements containing `fragment` with `result`.
    pub fn on(self, fragment: impl Into<String>, result: QueryResult) -> Self {
        self.on_delayed(fragment, result, Duration::ZERO)
    }

    /// Answers statements containing `fragment` with `result` after `delay`.
    pub fn on_delayed(
        mut self,
        fragment: impl Into<String>,
        result: QueryResult,
        delay: Duration,
    ) -> Self {
        self.script.push(Scripted {
            fragment: fragment.into(),
            outcome: Outcome::Rows(result),
            delay,
        });
        self
    }

    /// Fails statements containing `fragment` with a query error.
    pub fn fail_on(mut self, fragment: impl Into<String>, message: impl Into<String>) -> Self {
        self.script.push(Scripted {
            fragment: fragment.into(),
            outcome: Outcome::Fail(message.into()),
            delay: Duration::ZERO,
        });
        self
    }

    /// Returns every call received so far, in arrival order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the calls whose SQL contains `fragment`.
    pub fn calls_matching(&self, fragment: &str) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|call| call.sql.contains(fragment))
            .collect()
    }

    async fn answer(&self, sql: &str, params: &[&str]) -> Result<QueryResult> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedCall {
                sql: sql.to_string(),
                params: params.iter().map(|p| p.to_string()).collect(),
            });

        let Some(entry) = self.script.iter().find(|s| sql.contains(&s.fragment)) else {
            return Ok(QueryResult::new());
        };

        if !entry.delay.is_zero() {
            tokio::time::sleep(entry.delay).await;
        }

        match &entry.outcome {
            Outcome::Rows(result) => Ok(result.clone()),
            Outcome::Fail(message) => Err(DdlError::query(message.clone())),
        }
    }
}

#[async_trait]
impl CatalogClient for MockCatalogClient {
    async fn execute_query(&self, sql: &str, params: &[&str]) -> Result<QueryResult> {
        self.answer(sql, params).await
    }

    async fn execute(&self, sql: &str, params: &[&str]) -> Result<()> {
        self.answer(sql, params).await.map(|_| ())
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

/// A catalog client whose session is gone: every call is a connection error.
#[derive(Debug, Clone)]
pub struct FailingCatalogClient {
    message: String,
}

impl FailingCatalogClient {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl CatalogClient for FailingCatalogClient {
    async fn execute_query(&self, _sql: &str, _params: &[&str]) -> Result<QueryResult> {
        Err(DdlError::connection(self.message.clone()))
    }

    async fn execute(&self, _sql: &str, _params: &[&str]) -> Result<()> {
        Err(DdlError::connection(self.message.clone()))
    }

    async fn close(&self) -> Result<()> {
        Err(DdlError::connection(self.message.clone()))
    }
}
