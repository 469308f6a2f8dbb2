//! Helpers for asserting on the statements a repository sent to a
//! `MockDatabase`.

use std::sync::Arc;

use sea_orm::{DatabaseConnection, MockExecResult};

pub fn exec_ok(rows_affected: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected,
    }
}

/// Debug rendering of every statement the connection saw. Identifiers appear
/// as `\"table\"` in it, which the builders below match.
pub fn transaction_log(db: Arc<DatabaseConnection>) -> String {
    let db = Arc::try_unwrap(db)
        .ok()
        .expect("repository still holds the connection");
    format!("{:?}", db.into_transaction_log())
}

pub fn delete_from(table: &str) -> String {
    format!(r#"DELETE FROM \"{table}\""#)
}

pub fn insert_into(table: &str) -> String {
    format!(r#"INSERT INTO \"{table}\""#)
}

pub fn update_of(table: &str) -> String {
    format!(r#"UPDATE \"{table}\""#)
}
