//! Error types for oraddl.
//!
//! Defines the main error enum used throughout the application.

use thiserror::Error;

/// Main error type for DDL extraction.
#[derive(Error, Debug)]
pub enum DdlError {
    /// Database connection errors (listener unreachable, bad credentials, etc.)
    #[error("Connection error: {0}")]
    Connection(String),

    /// Schema or object name that cannot be a catalog identifier.
    #[error("Invalid {field} name '{value}': {reason}")]
    InvalidName {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    /// No eligible catalog row for the requested object.
    #[error("Object {schema}.{name} not found")]
    ObjectNotFound { schema: String, name: String },

    /// More than one eligible catalog row for the requested object.
    #[error("Object {schema}.{name} is ambiguous: catalog reports {}", .types.join(", "))]
    AmbiguousObject {
        schema: String,
        name: String,
        types: Vec<String>,
    },

    /// The catalog reports a type outside the supported taxonomy.
    #[error("Object {schema}.{name} has unsupported type '{label}'")]
    UnsupportedObjectType {
        schema: String,
        name: String,
        label: String,
    },

    /// The classification lookup itself failed.
    #[error("Classification error: {0}")]
    Classification(String),

    /// A definition-retrieval call failed or returned nothing.
    #[error("Retrieval error: {0}")]
    Retrieval(String),

    /// The object kind has no retrieval path.
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// Statement execution errors reported by the driver.
    #[error("Query error: {0}")]
    Query(String),

    /// Configuration errors (invalid config file, missing connection, etc.)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DdlError {
    /// Creates a connection error with the given message.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a classification error with the given message.
    pub fn classification(msg: impl Into<String>) -> Self {
        Self::Classification(msg.into())
    }

    /// Creates a retrieval error with the given message.
    pub fn retrieval(msg: impl Into<String>) -> Self {
        Self::Retrieval(msg.into())
    }

    /// Creates an unsupported-kind error with the given message.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// Creates a query error with the given message.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Connection(_) => "Connection Error",
            Self::InvalidName { .. } => "Input Error",
            Self::ObjectNotFound { .. }
            | Self::AmbiguousObject { .. }
            | Self::UnsupportedObjectType { .. }
            | Self::Classification(_) => "Classification Error",
            Self::Retrieval(_) | Self::Unsupported(_) => "Retrieval Error",
            Self::Query(_) => "Query Error",
            Self::Config(_) => "Configuration Error",
        }
    }

    /// Returns true if the error came from resolving the object's kind.
    pub fn is_classification(&self) -> bool {
        self.category() == "Classification Error"
    }
}

/// Result type alias using DdlError.
pub type Result<T> = std::result::Result<T, DdlError>;
