use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::AdminSession;
use crate::modules::project::application::domain::entities::{
    NewProject, Project, ProjectChanges, ProjectFilter,
};
use crate::shared::error::ContentError;

#[async_trait]
pub trait ProjectUseCases: Send + Sync {
    async fn list(&self, filter: ProjectFilter) -> Result<Vec<Project>, ContentError>;

    async fn get(&self, id: i32) -> Result<Project, ContentError>;

    async fn create(&self, session: &AdminSession, data: NewProject)
        -> Result<Project, ContentError>;

    async fn update(
        &self,
        session: &AdminSession,
        id: i32,
        changes: ProjectChanges,
    ) -> Result<Project, ContentError>;

    async fn delete(&self, session: &AdminSession, id: i32) -> Result<(), ContentError>;
}
