use async_trait::async_trait;
use tracing::{debug, info};

use crate::modules::auth::application::domain::entities::AdminSession;
use crate::modules::contact::application::domain::entities::{
    ContactInfo, ContactInfoChanges, ContactMessage, MessageQuery, NewContactInfo,
    NewContactMessage,
};
use crate::modules::contact::application::ports::incoming::ContactUseCases;
use crate::modules::contact::application::ports::outgoing::ContactRepository;
use crate::shared::error::ContentError;

pub struct ContactService<R>
where
    R: ContactRepository,
{
    repo: R,
}

impl<R> ContactService<R>
where
    R: ContactRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ContactUseCases for ContactService<R>
where
    R: ContactRepository,
{
    async fn get_info(&self) -> Result<ContactInfo, ContentError> {
        Ok(self.repo.get_info().await?)
    }

    async fn create_info(
        &self,
        session: &AdminSession,
        data: NewContactInfo,
    ) -> Result<ContactInfo, ContentError> {
        let data = data.validated()?;
        let created = self.repo.create_info(data).await?;

        info!(contact_id = created.id, admin = session.username(), "Contact info created");
        Ok(created)
    }

    async fn update_info(
        &self,
        session: &AdminSession,
        changes: ContactInfoChanges,
    ) -> Result<ContactInfo, ContentError> {
        let changes = changes.validated()?;
        let updated = self.repo.update_info(changes).await?;

        info!(contact_id = updated.id, admin = session.username(), "Contact info updated");
        Ok(updated)
    }

    async fn submit_message(
        &self,
        data: NewContactMessage,
    ) -> Result<ContactMessage, ContentError> {
        let data = data.validated()?;
        let stored = self.repo.create_message(data).await?;

        info!(message_id = stored.id, "Contact message received");
        Ok(stored)
    }

    async fn list_messages(
        &self,
        session: &AdminSession,
        query: MessageQuery,
    ) -> Result<Vec<ContactMessage>, ContentError> {
        let query = query.validated()?;
        debug!(
            unread_only = query.unread_only,
            skip = query.skip,
            limit = query.limit,
            admin = session.username(),
            "Listing contact messages"
        );
        Ok(self.repo.list_messages(query).await?)
    }

    async fn mark_read(
        &self,
        session: &AdminSession,
        id: i32,
    ) -> Result<ContactMessage, ContentError> {
        let message = self.repo.mark_read(id).await?;

        info!(message_id = id, admin = session.username(), "Contact message marked read");
        Ok(message)
    }

    async fn delete_message(&self, session: &AdminSession, id: i32) -> Result<(), ContentError> {
        self.repo.delete_message(id).await?;

        info!(message_id = id, admin = session.username(), "Contact message deleted");
        Ok(())
    }
}
