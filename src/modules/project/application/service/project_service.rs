use async_trait::async_trait;
use tracing::info;

use crate::modules::auth::application::domain::entities::AdminSession;
use crate::modules::project::application::domain::entities::{
    NewProject, Project, ProjectChanges, ProjectFilter,
};
use crate::modules::project::application::ports::incoming::ProjectUseCases;
use crate::modules::project::application::ports::outgoing::ProjectRepository;
use crate::shared::error::ContentError;

pub struct ProjectService<R>
where
    R: ProjectRepository,
{
    repo: R,
}

impl<R> ProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ProjectUseCases for ProjectService<R>
where
    R: ProjectRepository,
{
    async fn list(&self, filter: ProjectFilter) -> Result<Vec<Project>, ContentError> {
        Ok(self.repo.list(filter).await?)
    }

    async fn get(&self, id: i32) -> Result<Project, ContentError> {
        Ok(self.repo.get(id).await?)
    }

    async fn create(
        &self,
        session: &AdminSession,
        data: NewProject,
    ) -> Result<Project, ContentError> {
        let data = data.validated()?;
        let created = self.repo.create(data).await?;

        info!(
            project_id = created.id,
            featured = created.is_featured,
            admin = session.username(),
            "Project created"
        );
        Ok(created)
    }

    async fn update(
        &self,
        session: &AdminSession,
        id: i32,
        changes: ProjectChanges,
    ) -> Result<Project, ContentError> {
        let changes = changes.validated()?;
        let updated = self.repo.update(id, changes).await?;

        info!(project_id = id, admin = session.username(), "Project updated");
        Ok(updated)
    }

    async fn delete(&self, session: &AdminSession, id: i32) -> Result<(), ContentError> {
        self.repo.delete(id).await?;

        info!(project_id = id, admin = session.username(), "Project deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::store::RepositoryError;
    use chrono::Utc;
    use mockall::{mock, predicate::*};

    mock! {
        pub ProjectRepo {}
        #[async_trait]
        impl ProjectRepository for ProjectRepo {
            async fn list(&self, filter: ProjectFilter) -> Result<Vec<Project>, RepositoryError>;
            async fn get(&self, id: i32) -> Result<Project, RepositoryError>;
            async fn create(&self, data: NewProject) -> Result<Project, RepositoryError>;
            async fn update(&self, id: i32, changes: ProjectChanges) -> Result<Project, RepositoryError>;
            async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
        }
    }

    fn session() -> AdminSession {
        AdminSession::for_tests("admin")
    }

    fn project(id: i32, featured: bool) -> Project {
        Project {
            id,
            title: format!("Project {id}"),
            description: "Something useful".to_string(),
            image: None,
            github_url: None,
            live_url: None,
            order_index: 0,
            is_featured: featured,
            created_at: Utc::now(),
            updated_at: None,
            technologies: vec![],
            features: vec![],
            metrics: vec![],
        }
    }

    #[tokio::test]
    async fn test_list_forwards_filter() {
        let mut repo = MockProjectRepo::new();
        repo.expect_list()
            .with(eq(ProjectFilter::featured()))
            .times(1)
            .returning(|_| Ok(vec![project(1, true)]));

        let service = ProjectService::new(repo);
        let list = service.list(ProjectFilter::featured()).await.unwrap();

        assert_eq!(list.len(), 1);
        assert!(list[0].is_featured);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_description() {
        let mut repo = MockProjectRepo::new();
        repo.expect_create().never();

        let service = ProjectService::new(repo);
        let data = NewProject {
            title: "Search".to_string(),
            description: " ".to_string(),
            image: None,
            github_url: None,
            live_url: None,
            order_index: 0,
            is_featured: false,
            technologies: vec![],
            features: vec![],
            metrics: vec![],
        };

        let result = service.create(&session(), data).await;
        assert!(matches!(result, Err(ContentError::Validation(e)) if e.field == "description"));
    }

    #[tokio::test]
    async fn test_delete_missing_maps_not_found() {
        let mut repo = MockProjectRepo::new();
        repo.expect_delete()
            .with(eq(8))
            .returning(|_| Err(RepositoryError::NotFound));

        let service = ProjectService::new(repo);
        assert_eq!(service.delete(&session(), 8).await, Err(ContentError::NotFound));
    }

    #[tokio::test]
    async fn test_update_contention_passes_through() {
        let mut repo = MockProjectRepo::new();
        repo.expect_update()
            .returning(|_, _| Err(RepositoryError::Contention));

        let service = ProjectService::new(repo);
        let result = service
            .update(&session(), 1, ProjectChanges::default())
            .await;
        assert_eq!(result, Err(ContentError::Contention));
    }
}
