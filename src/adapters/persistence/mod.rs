use sqlx::PgPool;

use crate::app_error::AppError;

pub mod waitlist;

#[derive(Clone)]
pub struct PostgresPersistence {
    pool: PgPool,
}

impl PostgresPersistence {
    pub fn new(pool: PgPool) -> Self {
        PostgresPersistence { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        // Log the actual error for debugging, but don't expose details
        tracing::error!(error = ?err, "Database error");
        if is_storage_unavailable(&err) {
            AppError::StorageUnavailable("Database operation failed".into())
        } else {
            AppError::Unknown("Unexpected database response".into())
        }
    }
}

/// Errors caused by the database being unreachable, overloaded, or shutting down.
/// Decoding, mapping and schema errors are programming errors and fall outside this set.
fn is_storage_unavailable(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => true,
        sqlx::Error::Database(db) => db.code().is_some_and(|code| is_transient_sqlstate(&code)),
        _ => false,
    }
}

/// SQLSTATE codes for connection exceptions (08), insufficient resources (53), operator
/// intervention (57P0x), serialization failure (40001) and deadlock (40P01).
fn is_transient_sqlstate(code: &str) -> bool {
    code.starts_with("08")
        || code.starts_with("53")
        || code.starts_with("57P0")
        || code == "40001"
        || code == "40P01"
}
