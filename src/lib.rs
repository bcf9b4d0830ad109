//! oraddl - extract DDL for Oracle schema objects.
//!
//! This library exposes the core modules for use by the binary and in
//! integration tests.

pub mod config;
pub mod db;
pub mod ddl;
pub mod error;
pub mod logging;
pub mod output;
