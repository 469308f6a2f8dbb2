use async_trait::async_trait;

use crate::modules::about::application::domain::entities::{
    AboutInfo, AboutInfoChanges, Highlight, HighlightInput, NewAboutInfo,
};
use crate::shared::store::RepositoryError;

#[async_trait]
pub trait AboutRepository: Send + Sync {
    /// `NotFound` until the singleton has been created.
    async fn get_info(&self) -> Result<AboutInfo, RepositoryError>;

    /// `AlreadyExists` when the singleton is already present.
    async fn create_info(&self, data: NewAboutInfo) -> Result<AboutInfo, RepositoryError>;

    async fn update_info(&self, changes: AboutInfoChanges) -> Result<AboutInfo, RepositoryError>;

    async fn list_highlights(&self) -> Result<Vec<Highlight>, RepositoryError>;

    async fn create_highlight(&self, data: HighlightInput) -> Result<Highlight, RepositoryError>;

    async fn update_highlight(
        &self,
        id: i32,
        data: HighlightInput,
    ) -> Result<Highlight, RepositoryError>;

    async fn delete_highlight(&self, id: i32) -> Result<(), RepositoryError>;
}
