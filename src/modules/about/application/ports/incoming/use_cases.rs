use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::AdminSession;
use crate::modules::about::application::domain::entities::{
    AboutInfo, AboutInfoChanges, Highlight, HighlightInput, NewAboutInfo,
};
use crate::shared::error::ContentError;

#[async_trait]
pub trait AboutUseCases: Send + Sync {
    async fn get_info(&self) -> Result<AboutInfo, ContentError>;

    async fn create_info(
        &self,
        session: &AdminSession,
        data: NewAboutInfo,
    ) -> Result<AboutInfo, ContentError>;

    async fn update_info(
        &self,
        session: &AdminSession,
        changes: AboutInfoChanges,
    ) -> Result<AboutInfo, ContentError>;

    async fn list_highlights(&self) -> Result<Vec<Highlight>, ContentError>;

    async fn create_highlight(
        &self,
        session: &AdminSession,
        data: HighlightInput,
    ) -> Result<Highlight, ContentError>;

    async fn update_highlight(
        &self,
        session: &AdminSession,
        id: i32,
        data: HighlightInput,
    ) -> Result<Highlight, ContentError>;

    async fn delete_highlight(&self, session: &AdminSession, id: i32) -> Result<(), ContentError>;
}
