use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::AdminSession;
use crate::modules::contact::application::domain::entities::{
    ContactInfo, ContactInfoChanges, ContactMessage, MessageQuery, NewContactInfo,
    NewContactMessage,
};
use crate::shared::error::ContentError;

#[async_trait]
pub trait ContactUseCases: Send + Sync {
    async fn get_info(&self) -> Result<ContactInfo, ContentError>;

    async fn create_info(
        &self,
        session: &AdminSession,
        data: NewContactInfo,
    ) -> Result<ContactInfo, ContentError>;

    async fn update_info(
        &self,
        session: &AdminSession,
        changes: ContactInfoChanges,
    ) -> Result<ContactInfo, ContentError>;

    /// Public: visitors submit without a session.
    async fn submit_message(&self, data: NewContactMessage)
        -> Result<ContactMessage, ContentError>;

    async fn list_messages(
        &self,
        session: &AdminSession,
        query: MessageQuery,
    ) -> Result<Vec<ContactMessage>, ContentError>;

    async fn mark_read(
        &self,
        session: &AdminSession,
        id: i32,
    ) -> Result<ContactMessage, ContentError>;

    async fn delete_message(&self, session: &AdminSession, id: i32) -> Result<(), ContentError>;
}
