use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use crate::modules::contact::application::domain::entities::{
    ContactInfo, ContactInfoChanges, ContactMessage, MessageQuery, NewContactInfo,
    NewContactMessage,
};
use crate::modules::contact::application::ports::outgoing::ContactRepository;
use crate::shared::store::{Guarded, RepositoryError, Table};

#[derive(Default)]
struct ContactTables {
    /// Holds at most one row.
    info: Table<ContactInfo>,
    messages: Table<ContactMessage>,
}

#[derive(Clone)]
pub struct ContactRepositoryMemory {
    tables: Arc<Guarded<ContactTables>>,
}

impl ContactRepositoryMemory {
    pub fn new(lock_timeout: Duration) -> Self {
        Self {
            tables: Arc::new(Guarded::new(ContactTables::default(), lock_timeout)),
        }
    }
}

fn window(n: u64) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}

#[async_trait]
impl ContactRepository for ContactRepositoryMemory {
    async fn get_info(&self) -> Result<ContactInfo, RepositoryError> {
        let tables = self.tables.read().await?;
        let info = tables
            .info
            .values()
            .next()
            .cloned()
            .ok_or(RepositoryError::NotFound);
        info
    }

    async fn create_info(&self, data: NewContactInfo) -> Result<ContactInfo, RepositoryError> {
        let mut tables = self.tables.write().await?;
        if !tables.info.is_empty() {
            return Err(RepositoryError::AlreadyExists);
        }

        Ok(tables.info.insert_with(|id| ContactInfo {
            id,
            email: data.email,
            phone: data.phone,
            location: data.location,
            linkedin_url: data.linkedin_url,
            github_url: data.github_url,
            twitter_url: data.twitter_url,
            website_url: data.website_url,
            created_at: Utc::now(),
            updated_at: None,
        }))
    }

    async fn update_info(
        &self,
        changes: ContactInfoChanges,
    ) -> Result<ContactInfo, RepositoryError> {
        let mut tables = self.tables.write().await?;
        let id = tables
            .info
            .values()
            .next()
            .map(|info| info.id)
            .ok_or(RepositoryError::NotFound)?;
        let info = tables.info.get_mut(id).ok_or(RepositoryError::NotFound)?;

        changes.email.apply_required(&mut info.email);
        changes.phone.apply_to(&mut info.phone);
        changes.location.apply_to(&mut info.location);
        changes.linkedin_url.apply_to(&mut info.linkedin_url);
        changes.github_url.apply_to(&mut info.github_url);
        changes.twitter_url.apply_to(&mut info.twitter_url);
        changes.website_url.apply_to(&mut info.website_url);
        info.updated_at = Some(Utc::now());

        Ok(info.clone())
    }

    async fn create_message(
        &self,
        data: NewContactMessage,
    ) -> Result<ContactMessage, RepositoryError> {
        let mut tables = self.tables.write().await?;

        Ok(tables.messages.insert_with(|id| ContactMessage {
            id,
            name: data.name,
            email: data.email,
            subject: data.subject,
            message: data.message,
            is_read: false,
            created_at: Utc::now(),
        }))
    }

    async fn list_messages(
        &self,
        query: MessageQuery,
    ) -> Result<Vec<ContactMessage>, RepositoryError> {
        let tables = self.tables.read().await?;

        let mut inbox: Vec<ContactMessage> = tables
            .messages
            .values()
            .filter(|m| query.matches(m))
            .cloned()
            .collect();
        inbox.sort_by_key(ContactMessage::inbox_key);

        Ok(inbox
            .into_iter()
            .skip(window(query.skip))
            .take(window(query.limit))
            .collect())
    }

    async fn mark_read(&self, id: i32) -> Result<ContactMessage, RepositoryError> {
        let mut tables = self.tables.write().await?;
        let message = tables
            .messages
            .get_mut(id)
            .ok_or(RepositoryError::NotFound)?;

        message.is_read = true;
        Ok(message.clone())
    }

    async fn delete_message(&self, id: i32) -> Result<(), RepositoryError> {
        let mut tables = self.tables.write().await?;
        tables
            .messages
            .remove(id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::store::PatchField;

    fn repo() -> ContactRepositoryMemory {
        ContactRepositoryMemory::new(Duration::from_millis(200))
    }

    fn message(subject: &str) -> NewContactMessage {
        NewContactMessage {
            name: "Visitor".to_string(),
            email: "visitor@example.com".to_string(),
            subject: Some(subject.to_string()),
            message: "Hello".to_string(),
        }
    }

    fn subjects(list: &[ContactMessage]) -> Vec<&str> {
        list.iter()
            .map(|m| m.subject.as_deref().unwrap_or_default())
            .collect()
    }

    #[tokio::test]
    async fn test_inbox_newest_first_with_paging() {
        let repo = repo();
        for subject in ["one", "two", "three", "four"] {
            repo.create_message(message(subject)).await.unwrap();
        }

        let all = repo.list_messages(MessageQuery::default()).await.unwrap();
        assert_eq!(subjects(&all), vec!["four", "three", "two", "one"]);

        let page = repo
            .list_messages(MessageQuery {
                unread_only: false,
                skip: 1,
                limit: 2,
            })
            .await
            .unwrap();
        assert_eq!(subjects(&page), vec!["three", "two"]);
    }

    #[tokio::test]
    async fn test_unread_only_hides_read_messages() {
        let repo = repo();
        let first = repo.create_message(message("first")).await.unwrap();
        repo.create_message(message("second")).await.unwrap();

        let read = repo.mark_read(first.id).await.unwrap();
        assert!(read.is_read);

        let unread = repo.list_messages(MessageQuery::unread()).await.unwrap();
        assert_eq!(subjects(&unread), vec!["second"]);
    }

    #[tokio::test]
    async fn test_missing_message() {
        let repo = repo();
        assert_eq!(repo.mark_read(3).await, Err(RepositoryError::NotFound));
        assert_eq!(repo.delete_message(3).await, Err(RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_contact_info_singleton() {
        let repo = repo();
        let info = NewContactInfo {
            email: "me@example.com".to_string(),
            phone: None,
            location: Some("Berlin".to_string()),
            linkedin_url: None,
            github_url: Some("https://github.com/me".to_string()),
            twitter_url: None,
            website_url: None,
        };

        repo.create_info(info.clone()).await.unwrap();
        assert_eq!(
            repo.create_info(info).await,
            Err(RepositoryError::AlreadyExists)
        );

        let updated = repo
            .update_info(ContactInfoChanges {
                github_url: PatchField::Null,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(updated.github_url, None);
        assert_eq!(updated.location.as_deref(), Some("Berlin"));
    }
}
