use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{
    NewProject, Project, ProjectChanges, ProjectFilter,
};
use crate::shared::store::RepositoryError;

/// Storage for the project aggregate (technologies, features, metrics).
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Ordered by `order_index`, then id.
    async fn list(&self, filter: ProjectFilter) -> Result<Vec<Project>, RepositoryError>;

    async fn get(&self, id: i32) -> Result<Project, RepositoryError>;

    async fn create(&self, data: NewProject) -> Result<Project, RepositoryError>;

    async fn update(&self, id: i32, changes: ProjectChanges) -> Result<Project, RepositoryError>;

    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
