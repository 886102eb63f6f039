//! Core database infrastructure
//!
//! This module provides the foundational database components:
//! - `ConnectionProvider`: contract for supplying a live connection
//! - `DatabaseConn`: SQLite implementation of the provider
//! - `SchemaManager`: Schema initialization and management
//! - `SchemaStatus`: Schema state enumeration

mod connection;
mod schema;

pub use connection::{ConnectionProvider, DatabaseConn};
pub use schema::{SchemaDefinitions, SchemaManager, SchemaStatus, SCHEMA_VERSION};
