use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::{
    NewSkill, Skill, SkillChanges, SkillFilter,
};
use crate::shared::store::RepositoryError;

#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// Sorted by `(order_index, name)`.
    async fn list(&self, filter: SkillFilter) -> Result<Vec<Skill>, RepositoryError>;

    async fn get(&self, id: i32) -> Result<Skill, RepositoryError>;

    async fn create(&self, data: NewSkill) -> Result<Skill, RepositoryError>;

    async fn update(&self, id: i32, changes: SkillChanges) -> Result<Skill, RepositoryError>;

    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
