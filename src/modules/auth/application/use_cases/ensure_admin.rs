use std::sync::Arc;

use tracing::{info, warn};

use crate::config::AdminConfig;
use crate::modules::auth::application::domain::entities::NewUser;
use crate::modules::auth::application::ports::incoming::AuthError;
use crate::modules::auth::application::ports::outgoing::{PasswordHasher, UserRepository};
use crate::shared::store::RepositoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureAdminOutcome {
    Created,
    AlreadyPresent,
}

/// Startup step that stores the configured admin with a hashed password.
/// An existing user with that name is left untouched.
pub struct EnsureAdminUseCase<U>
where
    U: UserRepository,
{
    users: U,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<U> EnsureAdminUseCase<U>
where
    U: UserRepository + Send + Sync,
{
    pub fn new(users: U, password_hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            users,
            password_hasher,
        }
    }

    pub async fn execute(&self, admin: &AdminConfig) -> Result<EnsureAdminOutcome, AuthError> {
        if self.users.find_by_username(&admin.username).await?.is_some() {
            info!(username = %admin.username, "Admin user already present");
            return Ok(EnsureAdminOutcome::AlreadyPresent);
        }

        if admin.uses_default_password() {
            warn!(
                username = %admin.username,
                "Creating admin with the default demo password; set ADMIN_PASSWORD"
            );
        }

        let password_hash = self.password_hasher.hash_password(&admin.password).await?;

        match self
            .users
            .create_user(NewUser {
                username: admin.username.clone(),
                password_hash,
            })
            .await
        {
            Ok(user) => {
                info!(user_id = user.id, username = %user.username, "Admin user created");
                Ok(EnsureAdminOutcome::Created)
            }
            // Another instance won the race.
            Err(RepositoryError::AlreadyExists) => Ok(EnsureAdminOutcome::AlreadyPresent),
            Err(e) => Err(e.into()),
        }
    }
}
