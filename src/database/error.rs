//! Database error taxonomy

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Errors surfaced by the database layer.
///
/// Nothing is recovered locally: connection and schema failures are fatal at
/// bootstrap, integrity violations propagate unchanged to the caller that
/// attempted the write.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("database connection failed: {0}")]
    Connection(#[source] DbErr),

    #[error("schema setup failed: {0}")]
    Schema(#[source] DbErr),

    #[error("integrity violation: {0}")]
    Integrity(#[source] DbErr),

    #[error("query failed: {0}")]
    Query(#[source] DbErr),
}

impl From<DbErr> for DatabaseError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_))
            | Some(SqlErr::ForeignKeyConstraintViolation(_)) => DatabaseError::Integrity(err),
            _ => match err {
                DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => DatabaseError::Connection(err),
                _ => DatabaseError::Query(err),
            },
        }
    }
}
