//! Infrastructure layer for the user store
//!
//! This crate provides the PostgreSQL-backed persistence for the `users`
//! table:
//! - Database access (PostgreSQL with sqlx)
//! - Repository pattern implementation
//!
//! ## Architecture
//!
//! The repository is a thin translation layer: each operation is a single
//! round trip that turns a domain call into one parameterized SQL statement
//! and maps the result rows back into [`user_store_domain::User`] records.
//! It holds no state besides a shared pool handle, performs no caching and
//! no retries, and leaves error handling and logging decisions to the
//! caller.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use user_store_infrastructure::{
//!     database::{DatabaseConfig, DatabasePool},
//!     repositories::{PgUserRepository, UserRepository},
//! };
//!
//! // Initialize database pool
//! let db_config = DatabaseConfig::from_env()?;
//! let pool = DatabasePool::new(&db_config).await?;
//!
//! // Create repository
//! let users = PgUserRepository::new(pool.pool().clone());
//! ```

pub mod database;
pub mod repositories;

// Re-export commonly used types
pub use database::{DatabaseConfig, DatabasePool, HealthStatus, PoolStats};
pub use repositories::{PgUserRepository, UserRepository};

// Re-export result and error types
pub type Result<T> = std::result::Result<T, Error>;

/// Infrastructure-level errors
///
/// Only [`Error::NotFound`] is a classified outcome callers are expected to
/// branch on; every other storage failure is wrapped into
/// [`Error::Database`] together with the name of the operation that hit it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Resource not found
    #[error("not found: {0}")]
    NotFound(String),

    /// A statement, query or connection failure from sqlx, tagged with the
    /// failing operation. Constraint violations (e.g. a duplicate id on
    /// insert) and row decode failures land here as well; they are not
    /// classified further.
    #[error("{operation}: {source}")]
    Database {
        /// Name of the failing operation.
        operation: &'static str,
        /// Underlying driver error.
        #[source]
        source: sqlx::Error,
    },

    /// Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The caller's cancellation or timeout signal fired mid-operation
    #[error("operation cancelled")]
    Cancelled,
}

impl Error {
    /// Wrap a driver error with the name of the failing operation.
    fn database(operation: &'static str, source: sqlx::Error) -> Self {
        Self::Database { operation, source }
    }

    /// Check whether this is the NotFound classification, as opposed to an
    /// operational failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Database { .. } | Self::Cancelled)
    }
}

/// Callers racing a repository future against [`tokio::time::timeout`] can
/// convert the elapsed deadline into the cancellation-class error with `?`.
impl From<tokio::time::error::Elapsed> for Error {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        Self::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_not_found_classification() {
        let err = Error::NotFound("user 42".to_string());
        assert!(err.is_not_found());
        assert!(!err.is_retryable());

        let err = Error::database("get user", sqlx::Error::PoolTimedOut);
        assert!(!err.is_not_found());
        assert!(err.is_retryable());
    }

    #[test]
    fn test_database_errors_carry_operation_name() {
        let err = Error::database("create user", sqlx::Error::PoolTimedOut);
        assert!(err.to_string().starts_with("create user: "));
    }

    #[tokio::test]
    async fn test_elapsed_converts_to_cancelled() {
        let raced =
            tokio::time::timeout(Duration::from_millis(1), std::future::pending::<()>()).await;
        let err: Error = raced.unwrap_err().into();
        assert!(matches!(err, Error::Cancelled));
        assert!(!err.is_not_found());
    }
}
