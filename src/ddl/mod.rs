//! DDL extraction: object classification and definition retrieval.
//!
//! An extraction resolves what kind of object a `(schema, name)` pair refers
//! to, then fetches the definition text appropriate for that kind.

mod classifier;
mod retriever;
pub mod sql;

pub use classifier::{classify, normalize_name};
pub use retriever::retrieve;

use crate::db::CatalogClient;
use crate::error::Result;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

/// The kinds of catalog object this tool distinguishes.
///
/// The catalog and `dbms_metadata` disagree on how package bodies are
/// spelled, so the two label mappings are kept separate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectKind {
    Table,
    Index,
    PackageBody,
    /// Any catalog type outside the supported set.
    Illegal,
}

impl ObjectKind {
    /// Translates an `object_type` value from `dba_objects`.
    pub fn from_catalog_label(label: &str) -> Self {
        match label {
            "TABLE" => Self::Table,
            "INDEX" => Self::Index,
            "PACKAGE BODY" => Self::PackageBody,
            _ => Self::Illegal,
        }
    }

    /// Returns the label `dbms_metadata` expects for this kind.
    pub fn metadata_label(&self) -> Option<&'static str> {
        match self {
            Self::Table => Some("TABLE"),
            Self::Index => Some("INDEX"),
            Self::PackageBody => Some("PACKAGE_BODY"),
            Self::Illegal => None,
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Index => write!(f, "index"),
            Self::PackageBody => write!(f, "package body"),
            Self::Illegal => write!(f, "illegal"),
        }
    }
}

/// A classified catalog object. Schema and name are stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectRef {
    schema: String,
    name: String,
    kind: ObjectKind,
}

impl ObjectRef {
    pub fn new(schema: impl AsRef<str>, name: impl AsRef<str>, kind: ObjectKind) -> Self {
        Self {
            schema: schema.as_ref().to_uppercase(),
            name: name.as_ref().to_uppercase(),
            kind,
        }
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}.{}", self.kind, self.schema, self.name)
    }
}

/// Sets the session-wide `dbms_metadata` transform parameters.
///
/// Must run once per connection, before any DDL is generated.
pub async fn prepare_session(client: &dyn CatalogClient, sql_terminator: bool) -> Result<()> {
    debug!("Setting SQLTERMINATOR={sql_terminator}");
    client
        .execute(&sql::session_transform(sql_terminator), &[])
        .await
}

/// Classifies `schema.name` and retrieves its DDL.
pub async fn extract(
    client: &dyn CatalogClient,
    schema: &str,
    name: &str,
) -> Result<(ObjectRef, String)> {
    let object = classify(client, schema, name).await?;
    info!("Resolved {object}");

    let ddl = retrieve(client, &object).await?;
    debug!("Retrieved {} bytes of DDL for {object}", ddl.len());

    Ok((object, ddl))
}
