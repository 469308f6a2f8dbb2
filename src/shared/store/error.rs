use sea_orm::{DbErr, SqlErr};

/// Failure modes shared by every repository port.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    /// Singleton already present, or a unique key collided.
    #[error("Record already exists")]
    AlreadyExists,

    /// Lock wait exceeded the configured timeout. Safe to retry.
    #[error("Storage is busy, retry later")]
    Contention,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Postgres wording for SQLSTATE 23505, for errors that only reach us as text.
const UNIQUE_VIOLATION_MESSAGE: &str = "duplicate key value violates unique constraint";

impl RepositoryError {
    /// Classifies a sea-orm error. Unique violations come from the driver's
    /// SQLSTATE where available; lock timeouts are reported as 55P03.
    pub fn from_db(e: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
            return RepositoryError::AlreadyExists;
        }

        let msg = e.to_string();
        let lower = msg.to_lowercase();

        if lower.contains("55p03") || lower.contains("lock timeout") {
            RepositoryError::Contention
        } else if lower.contains("23505") || lower.contains(UNIQUE_VIOLATION_MESSAGE) {
            RepositoryError::AlreadyExists
        } else {
            RepositoryError::DatabaseError(msg)
        }
    }
}
