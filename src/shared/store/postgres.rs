use std::time::Duration;

use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction, TransactionTrait};

use super::RepositoryError;

/// Opens a transaction whose row-lock waits fail after `lock_timeout`
/// (SQLSTATE 55P03, mapped to `Contention`).
///
/// Dropping the returned transaction without committing rolls it back, so
/// every `?` inside a mutation leaves storage untouched.
pub async fn begin_with_lock_timeout(
    db: &DatabaseConnection,
    lock_timeout: Duration,
) -> Result<DatabaseTransaction, RepositoryError> {
    let txn = db.begin().await.map_err(RepositoryError::from_db)?;

    txn.execute_unprepared(&format!(
        "SET LOCAL lock_timeout = '{}ms'",
        lock_timeout.as_millis()
    ))
    .await
    .map_err(RepositoryError::from_db)?;

    Ok(txn)
}

pub async fn commit(txn: DatabaseTransaction) -> Result<(), RepositoryError> {
    txn.commit().await.map_err(RepositoryError::from_db)
}
