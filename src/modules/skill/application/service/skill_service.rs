use async_trait::async_trait;
use tracing::info;

use crate::modules::auth::application::domain::entities::AdminSession;
use crate::modules::skill::application::domain::entities::{
    distinct_categories, group_by_category, NewSkill, Skill, SkillChanges, SkillFilter,
    SkillGroup,
};
use crate::modules::skill::application::ports::incoming::SkillUseCases;
use crate::modules::skill::application::ports::outgoing::SkillRepository;
use crate::shared::error::ContentError;

pub struct SkillService<R>
where
    R: SkillRepository,
{
    repo: R,
}

impl<R> SkillService<R>
where
    R: SkillRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> SkillUseCases for SkillService<R>
where
    R: SkillRepository,
{
    async fn list(&self, filter: SkillFilter) -> Result<Vec<Skill>, ContentError> {
        Ok(self.repo.list(filter).await?)
    }

    async fn grouped(&self) -> Result<Vec<SkillGroup>, ContentError> {
        let skills = self.repo.list(SkillFilter::default()).await?;
        Ok(group_by_category(skills))
    }

    async fn categories(&self) -> Result<Vec<String>, ContentError> {
        let skills = self.repo.list(SkillFilter::default()).await?;
        Ok(distinct_categories(&skills))
    }

    async fn get(&self, id: i32) -> Result<Skill, ContentError> {
        Ok(self.repo.get(id).await?)
    }

    async fn create(&self, session: &AdminSession, data: NewSkill) -> Result<Skill, ContentError> {
        let data = data.validated()?;
        let created = self.repo.create(data).await?;

        info!(
            skill_id = created.id,
            category = %created.category,
            admin = session.username(),
            "Skill created"
        );
        Ok(created)
    }

    async fn update(
        &self,
        session: &AdminSession,
        id: i32,
        changes: SkillChanges,
    ) -> Result<Skill, ContentError> {
        let changes = changes.validated()?;
        let updated = self.repo.update(id, changes).await?;

        info!(skill_id = id, admin = session.username(), "Skill updated");
        Ok(updated)
    }

    async fn delete(&self, session: &AdminSession, id: i32) -> Result<(), ContentError> {
        self.repo.delete(id).await?;

        info!(skill_id = id, admin = session.username(), "Skill deleted");
        Ok(())
    }
}
