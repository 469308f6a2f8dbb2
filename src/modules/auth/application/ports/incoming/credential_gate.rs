use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{AdminSession, IssuedToken};
use crate::modules::auth::application::ports::outgoing::{HashError, TokenError};
use crate::shared::store::RepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Hash(#[from] HashError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Guards every write. Reads never go through it.
#[async_trait]
pub trait CredentialGate: Send + Sync {
    /// `Ok(false)` for an unknown user, an inactive user or a wrong password.
    async fn authenticate(&self, username: &str, password: &str) -> Result<bool, AuthError>;

    fn issue_token(&self, username: &str) -> Result<IssuedToken, AuthError>;

    fn verify_token(&self, token: &str) -> Result<AdminSession, TokenError>;
}
