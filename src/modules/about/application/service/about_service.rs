use async_trait::async_trait;
use tracing::info;

use crate::modules::about::application::domain::entities::{
    AboutInfo, AboutInfoChanges, Highlight, HighlightInput, NewAboutInfo,
};
use crate::modules::about::application::ports::incoming::AboutUseCases;
use crate::modules::about::application::ports::outgoing::AboutRepository;
use crate::modules::auth::application::domain::entities::AdminSession;
use crate::shared::error::ContentError;

pub struct AboutService<R>
where
    R: AboutRepository,
{
    repo: R,
}

impl<R> AboutService<R>
where
    R: AboutRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> AboutUseCases for AboutService<R>
where
    R: AboutRepository,
{
    async fn get_info(&self) -> Result<AboutInfo, ContentError> {
        Ok(self.repo.get_info().await?)
    }

    async fn create_info(
        &self,
        session: &AdminSession,
        data: NewAboutInfo,
    ) -> Result<AboutInfo, ContentError> {
        let data = data.validated()?;
        let created = self.repo.create_info(data).await?;

        info!(about_id = created.id, admin = session.username(), "About info created");
        Ok(created)
    }

    async fn update_info(
        &self,
        session: &AdminSession,
        changes: AboutInfoChanges,
    ) -> Result<AboutInfo, ContentError> {
        let changes = changes.validated()?;
        let updated = self.repo.update_info(changes).await?;

        info!(about_id = updated.id, admin = session.username(), "About info updated");
        Ok(updated)
    }

    async fn list_highlights(&self) -> Result<Vec<Highlight>, ContentError> {
        Ok(self.repo.list_highlights().await?)
    }

    async fn create_highlight(
        &self,
        session: &AdminSession,
        data: HighlightInput,
    ) -> Result<Highlight, ContentError> {
        let data = data.validated()?;
        let created = self.repo.create_highlight(data).await?;

        info!(highlight_id = created.id, admin = session.username(), "Highlight created");
        Ok(created)
    }

    async fn update_highlight(
        &self,
        session: &AdminSession,
        id: i32,
        data: HighlightInput,
    ) -> Result<Highlight, ContentError> {
        let data = data.validated()?;
        let updated = self.repo.update_highlight(id, data).await?;

        info!(highlight_id = id, admin = session.username(), "Highlight updated");
        Ok(updated)
    }

    async fn delete_highlight(&self, session: &AdminSession, id: i32) -> Result<(), ContentError> {
        self.repo.delete_highlight(id).await?;

        info!(highlight_id = id, admin = session.username(), "Highlight deleted");
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
        pub AboutRepo {}
        #[async_trait]
        impl AboutRepository for AboutRepo {
            async fn get_info(&self) -> Result<AboutInfo, RepositoryError>;
            async fn create_info(&self, data: NewAboutInfo) -> Result<AboutInfo, RepositoryError>;
            async fn update_info(&self, changes: AboutInfoChanges) -> Result<AboutInfo, RepositoryError>;
            async fn list_highlights(&self) -> Result<Vec<Highlight>, RepositoryError>;
            async fn create_highlight(&self, data: HighlightInput) -> Result<Highlight, RepositoryError>;
            async fn update_highlight(&self, id: i32, data: HighlightInput) -> Result<Highlight, RepositoryError>;
            async fn delete_highlight(&self, id: i32) -> Result<(), RepositoryError>;
        }
    }

    fn new_info() -> NewAboutInfo {
        NewAboutInfo {
            name: "Ada".to_string(),
            title: "ML Engineer".to_string(),
            description: "Builds models".to_string(),
            profile_image: None,
            years_experience: 6,
            project_count: 30,
            model_count: 12,
            accuracy_rate: 95,
            resume_url: None,
        }
    }

    #[tokio::test]
    async fn test_get_info_not_configured() {
        let mut repo = MockAboutRepo::new();
        repo.expect_get_info()
            .returning(|| Err(RepositoryError::NotFound));

        let result = AboutService::new(repo).get_info().await;
        assert_eq!(result, Err(ContentError::NotFound));
    }

    #[tokio::test]
    async fn test_second_create_is_conflict() {
        let mut repo = MockAboutRepo::new();
        repo.expect_create_info()
            .times(1)
            .returning(|_| Err(RepositoryError::AlreadyExists));

        let result = AboutService::new(repo)
            .create_info(&AdminSession::for_tests("admin"), new_info())
            .await;
        assert_eq!(result, Err(ContentError::AlreadyExists));
    }

    #[tokio::test]
    async fn test_negative_counter_never_reaches_store() {
        let mut repo = MockAboutRepo::new();
        repo.expect_create_info().never();

        let mut data = new_info();
        data.years_experience = -3;
        let result = AboutService::new(repo)
            .create_info(&AdminSession::for_tests("admin"), data)
            .await;
        assert!(matches!(result, Err(ContentError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_highlight_passes_trimmed_input() {
        let mut repo = MockAboutRepo::new();
        repo.expect_update_highlight()
            .with(
                eq(7),
                eq(HighlightInput {
                    icon: "rocket".to_string(),
                    text: "Shipped".to_string(),
                    order_index: 2,
                }),
            )
            .times(1)
            .returning(|id, data| {
                Ok(Highlight {
                    id,
                    icon: data.icon,
                    text: data.text,
                    order_index: data.order_index,
                    created_at: Utc::now(),
                })
            });

        let updated = AboutService::new(repo)
            .update_highlight(
                &AdminSession::for_tests("admin"),
                7,
                HighlightInput {
                    icon: " rocket ".to_string(),
                    text: "Shipped ".to_string(),
                    order_index: 2,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.icon, "rocket");
    }
}
