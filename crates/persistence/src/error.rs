//! Store error taxonomy.
//!
//! Store failures are reported to the caller with a human-readable message
//! and never crash the process. The startup readiness check is the one
//! place where a store error becomes fatal.

use thiserror::Error;

/// Errors surfaced by any `GuestStore` backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached (connection refused, timeout).
    #[error("Store unreachable: {0}")]
    Unavailable(String),

    /// The store rejected the operation (constraint violation, bad query).
    #[error("Store rejected the operation: {0}")]
    Query(String),

    /// Anything else the backend reported.
    #[error("Store backend error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(e) => StoreError::Unavailable(e.to_string()),
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                StoreError::Unavailable(err.to_string())
            }
            sqlx::Error::Database(db_err) => StoreError::Query(db_err.to_string()),
            _ => StoreError::Backend(err.to_string()),
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            StoreError::Unavailable(err.to_string())
        } else {
            StoreError::Backend(err.to_string())
        }
    }
}
