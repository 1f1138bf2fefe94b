//! Typed error type for the db crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    /// The server could not be reached or refused the connection.
    #[error("connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// The server accepted the connection but the statement failed.
    #[error("query error: {0}")]
    Query(#[source] sqlx::Error),

    #[error("recipe {0} not found")]
    NotFound(i32),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => Self::Connection(err),
            other => Self::Query(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_errors_are_connection_errors() {
        let err: DbError =
            sqlx::Error::Io(io::Error::new(io::ErrorKind::ConnectionRefused, "refused")).into();
        assert!(matches!(err, DbError::Connection(_)));
    }

    #[test]
    fn closed_pool_is_a_connection_error() {
        let err: DbError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, DbError::Connection(_)));
    }

    #[test]
    fn statement_failures_are_query_errors() {
        let err: DbError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DbError::Query(_)));

        let err: DbError = sqlx::Error::ColumnNotFound("rating".into()).into();
        assert!(matches!(err, DbError::Query(_)));
    }

    #[test]
    fn not_found_names_the_missing_id() {
        let err = DbError::NotFound(42);
        assert_eq!(err.to_string(), "recipe 42 not found");
    }
}
