use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use crate::modules::auth::application::domain::entities::{NewUser, User};
use crate::modules::auth::application::ports::outgoing::UserRepository;
use crate::shared::store::{Guarded, RepositoryError, Table};

/// Clones share the same table.
#[derive(Clone)]
pub struct UserRepositoryMemory {
    users: Arc<Guarded<Table<User>>>,
}

impl UserRepositoryMemory {
    pub fn new(lock_timeout: Duration) -> Self {
        Self {
            users: Arc::new(Guarded::new(Table::default(), lock_timeout)),
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryMemory {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let users = self.users.read().await?;
        let user = users.values().find(|u| u.username == username).cloned();
        Ok(user)
    }

    async fn create_user(&self, user: NewUser) -> Result<User, RepositoryError> {
        let mut users = self.users.write().await?;

        if users.values().any(|u| u.username == user.username) {
            return Err(RepositoryError::AlreadyExists);
        }

        Ok(users.insert_with(|id| User {
            id,
            username: user.username,
            password_hash: user.password_hash,
            is_active: true,
            created_at: Utc::now(),
        }))
    }
}
