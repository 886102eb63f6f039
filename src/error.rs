//! Error types for database access
//!
//! Every fallible operation of the country store returns [`DatabaseError`].
//! Failures are surfaced to the caller as-is; nothing in the store retries.

use rusqlite::ErrorCode;
use thiserror::Error;

/// Errors returned by the country store
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The store could not be opened, pinged, or has already been released
    #[error("connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<rusqlite::Error>,
    },

    /// The statement was rejected or a row could not be mapped
    #[error("query error: {0}")]
    Query(#[source] rusqlite::Error),

    /// The requested sort column is not part of the countries table
    #[error("unknown sort field '{0}'")]
    InvalidSortField(String),

    /// The caller-supplied deadline passed before the query finished
    #[error("query deadline exceeded")]
    DeadlineExceeded,

    /// The schema metadata is unreadable
    #[error("schema error: {0}")]
    Schema(String),
}

impl DatabaseError {
    pub(crate) fn connection(message: impl Into<String>, source: rusqlite::Error) -> Self {
        DatabaseError::Connection {
            message: message.into(),
            source: Some(source),
        }
    }

    pub(crate) fn closed() -> Self {
        DatabaseError::Connection {
            message: "connection has been released".to_string(),
            source: None,
        }
    }
}

impl From<rusqlite::Error> for DatabaseError {
    fn from(e: rusqlite::Error) -> Self {
        if e.sqlite_error_code() == Some(ErrorCode::OperationInterrupted) {
            DatabaseError::DeadlineExceeded
        } else {
            DatabaseError::Query(e)
        }
    }
}

/// Result alias used throughout the database module
pub type Result<T, E = DatabaseError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_maps_to_deadline() {
        let err = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_INTERRUPT),
            None,
        );
        assert!(matches!(
            DatabaseError::from(err),
            DatabaseError::DeadlineExceeded
        ));
    }

    #[test]
    fn test_other_failures_map_to_query() {
        let err = DatabaseError::from(rusqlite::Error::QueryReturnedNoRows);
        assert!(matches!(err, DatabaseError::Query(_)));
    }

    #[test]
    fn test_closed_is_connection_error() {
        let err = DatabaseError::closed();
        assert_eq!(
            err.to_string(),
            "connection error: connection has been released"
        );
    }
}
