use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::modules::auth::application::domain::entities::{AdminSession, IssuedToken};
use crate::modules::auth::application::ports::incoming::{AuthError, CredentialGate};
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, TokenError, TokenProvider, UserRepository,
};

pub struct CredentialGateService<U>
where
    U: UserRepository,
{
    users: U,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    /// Hash checked for unknown usernames, computed on first use with the
    /// configured hasher.
    decoy_hash: OnceCell<String>,
}

const DECOY_PASSWORD: &str = "decoy-password-never-stored";

impl<U> CredentialGateService<U>
where
    U: UserRepository,
{
    pub fn new(
        users: U,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            users,
            password_hasher,
            token_provider,
            decoy_hash: OnceCell::new(),
        }
    }

    /// Unknown names cost one password verification, same as a wrong password.
    async fn verify_against_decoy(&self, password: &str) -> Result<(), AuthError> {
        let decoy = self
            .decoy_hash
            .get_or_try_init(|| self.password_hasher.hash_password(DECOY_PASSWORD))
            .await?;
        self.password_hasher.verify_password(password, decoy).await?;
        Ok(())
    }
}

#[async_trait]
impl<U> CredentialGate for CredentialGateService<U>
where
    U: UserRepository + Send + Sync,
{
    async fn authenticate(&self, username: &str, password: &str) -> Result<bool, AuthError> {
        let Some(user) = self.users.find_by_username(username.trim()).await? else {
            self.verify_against_decoy(password).await?;
            debug!(username, "Authentication failed: unknown user");
            return Ok(false);
        };

        if !user.is_active {
            warn!(username, "Authentication refused: user is inactive");
            return Ok(false);
        }

        let matches = self
            .password_hasher
            .verify_password(password, &user.password_hash)
            .await?;

        if !matches {
            debug!(username, "Authentication failed: password mismatch");
        }

        Ok(matches)
    }

    fn issue_token(&self, username: &str) -> Result<IssuedToken, AuthError> {
        Ok(self.token_provider.issue(username)?)
    }

    fn verify_token(&self, token: &str) -> Result<AdminSession, TokenError> {
        let claims = self.token_provider.verify(token)?;

        if claims.sub.trim().is_empty() {
            return Err(TokenError::Malformed);
        }

        Ok(AdminSession::new(claims.sub))
    }
}
