use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::AdminSession;
use crate::modules::skill::application::domain::entities::{
    NewSkill, Skill, SkillChanges, SkillFilter, SkillGroup,
};
use crate::shared::error::ContentError;

#[async_trait]
pub trait SkillUseCases: Send + Sync {
    async fn list(&self, filter: SkillFilter) -> Result<Vec<Skill>, ContentError>;

    async fn grouped(&self) -> Result<Vec<SkillGroup>, ContentError>;

    async fn categories(&self) -> Result<Vec<String>, ContentError>;

    async fn get(&self, id: i32) -> Result<Skill, ContentError>;

    async fn create(&self, session: &AdminSession, data: NewSkill) -> Result<Skill, ContentError>;

    async fn update(
        &self,
        session: &AdminSession,
        id: i32,
        changes: SkillChanges,
    ) -> Result<Skill, ContentError>;

    async fn delete(&self, session: &AdminSession, id: i32) -> Result<(), ContentError>;
}
