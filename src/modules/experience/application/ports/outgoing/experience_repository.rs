use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::{
    Experience, ExperienceChanges, NewExperience,
};
use crate::shared::store::RepositoryError;

/// Storage for the experience aggregate. Every mutation is atomic: the root
/// and its children are written, replaced or removed together.
#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// Ordered by `order_index`, children included.
    async fn list(&self) -> Result<Vec<Experience>, RepositoryError>;

    async fn get(&self, id: i32) -> Result<Experience, RepositoryError>;

    async fn create(&self, data: NewExperience) -> Result<Experience, RepositoryError>;

    async fn update(
        &self,
        id: i32,
        changes: ExperienceChanges,
    ) -> Result<Experience, RepositoryError>;

    /// Removes the root and every child row.
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
