use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

/// Proof that a bearer token passed verification.
///
/// Only the credential gate can mint one, so every use case that takes an
/// `&AdminSession` is unreachable without a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    username: String,
}

impl AdminSession {
    pub(in crate::modules::auth) fn new(username: String) -> Self {
        Self { username }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    #[cfg(test)]
    pub fn for_tests(username: &str) -> Self {
        Self::new(username.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuedToken {
    pub access_token: String,
    pub token_type: &'static str,
    /// Lifetime in seconds.
    pub expires_in: i64,
    pub expires_at: DateTime<Utc>,
}
