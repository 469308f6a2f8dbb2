use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{NewUser, User};
use crate::shared::store::RepositoryError;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

    /// Fails with `AlreadyExists` when the username is taken.
    async fn create_user(&self, user: NewUser) -> Result<User, RepositoryError>;
}
