use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::{
    ContactInfo, ContactInfoChanges, ContactMessage, MessageQuery, NewContactInfo,
    NewContactMessage,
};
use crate::shared::store::RepositoryError;

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn get_info(&self) -> Result<ContactInfo, RepositoryError>;

    async fn create_info(&self, data: NewContactInfo) -> Result<ContactInfo, RepositoryError>;

    async fn update_info(
        &self,
        changes: ContactInfoChanges,
    ) -> Result<ContactInfo, RepositoryError>;

    async fn create_message(
        &self,
        data: NewContactMessage,
    ) -> Result<ContactMessage, RepositoryError>;

    /// Newest first, then `skip`/`limit` applied.
    async fn list_messages(
        &self,
        query: MessageQuery,
    ) -> Result<Vec<ContactMessage>, RepositoryError>;

    async fn mark_read(&self, id: i32) -> Result<ContactMessage, RepositoryError>;

    async fn delete_message(&self, id: i32) -> Result<(), RepositoryError>;
}
