use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::AdminSession;
use crate::modules::experience::application::domain::entities::{
    Experience, ExperienceChanges, NewExperience,
};
use crate::shared::error::ContentError;

#[async_trait]
pub trait ExperienceUseCases: Send + Sync {
    async fn list(&self) -> Result<Vec<Experience>, ContentError>;

    async fn get(&self, id: i32) -> Result<Experience, ContentError>;

    async fn create(
        &self,
        session: &AdminSession,
        data: NewExperience,
    ) -> Result<Experience, ContentError>;

    async fn update(
        &self,
        session: &AdminSession,
        id: i32,
        changes: ExperienceChanges,
    ) -> Result<Experience, ContentError>;

    async fn delete(&self, session: &AdminSession, id: i32) -> Result<(), ContentError>;
}
