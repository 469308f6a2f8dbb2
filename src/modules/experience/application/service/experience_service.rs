use async_trait::async_trait;
use tracing::info;

use crate::modules::auth::application::domain::entities::AdminSession;
use crate::modules::experience::application::domain::entities::{
    Experience, ExperienceChanges, NewExperience,
};
use crate::modules::experience::application::ports::incoming::ExperienceUseCases;
use crate::modules::experience::application::ports::outgoing::ExperienceRepository;
use crate::shared::error::ContentError;

pub struct ExperienceService<R>
where
    R: ExperienceRepository,
{
    repo: R,
}

impl<R> ExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ExperienceUseCases for ExperienceService<R>
where
    R: ExperienceRepository,
{
    async fn list(&self) -> Result<Vec<Experience>, ContentError> {
        Ok(self.repo.list().await?)
    }

    async fn get(&self, id: i32) -> Result<Experience, ContentError> {
        Ok(self.repo.get(id).await?)
    }

    async fn create(
        &self,
        session: &AdminSession,
        data: NewExperience,
    ) -> Result<Experience, ContentError> {
        let data = data.validated()?;
        let created = self.repo.create(data).await?;

        info!(experience_id = created.id, admin = session.username(), "Experience created");
        Ok(created)
    }

    async fn update(
        &self,
        session: &AdminSession,
        id: i32,
        changes: ExperienceChanges,
    ) -> Result<Experience, ContentError> {
        let changes = changes.validated()?;
        let updated = self.repo.update(id, changes).await?;

        info!(experience_id = id, admin = session.username(), "Experience updated");
        Ok(updated)
    }

    async fn delete(&self, session: &AdminSession, id: i32) -> Result<(), ContentError> {
        self.repo.delete(id).await?;

        info!(experience_id = id, admin = session.username(), "Experience deleted");
        Ok(())
    }
}
