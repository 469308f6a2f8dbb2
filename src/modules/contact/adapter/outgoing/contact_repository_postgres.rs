use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use std::time::Duration;

use crate::modules::contact::adapter::outgoing::sea_orm_entity::{contact_info, contact_messages};
use crate::modules::contact::application::domain::entities::{
    ContactInfo, ContactInfoChanges, ContactMessage, MessageQuery, NewContactInfo,
    NewContactMessage,
};
use crate::modules::contact::application::ports::outgoing::ContactRepository;
use crate::shared::store::postgres::{begin_with_lock_timeout, commit};
use crate::shared::store::{PatchField, RepositoryError};

#[derive(Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
    lock_timeout: Duration,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>, lock_timeout: Duration) -> Self {
        Self { db, lock_timeout }
    }
}

fn model_to_info(m: contact_info::Model) -> ContactInfo {
    ContactInfo {
        id: m.id,
        email: m.email,
        phone: m.phone,
        location: m.location,
        linkedin_url: m.linkedin_url,
        github_url: m.github_url,
        twitter_url: m.twitter_url,
        website_url: m.website_url,
        created_at: m.created_at.with_timezone(&Utc),
        updated_at: m.updated_at.map(|t| t.with_timezone(&Utc)),
    }
}

fn model_to_message(m: contact_messages::Model) -> ContactMessage {
    ContactMessage {
        id: m.id,
        name: m.name,
        email: m.email,
        subject: m.subject,
        message: m.message,
        is_read: m.is_read,
        created_at: m.created_at.with_timezone(&Utc),
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn get_info(&self) -> Result<ContactInfo, RepositoryError> {
        contact_info::Entity::find()
            .one(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?
            .map(model_to_info)
            .ok_or(RepositoryError::NotFound)
    }

    async fn create_info(&self, data: NewContactInfo) -> Result<ContactInfo, RepositoryError> {
        let txn = self.db.begin().await.map_err(RepositoryError::from_db)?;

        let existing = contact_info::Entity::find()
            .count(&txn)
            .await
            .map_err(RepositoryError::from_db)?;
        if existing > 0 {
            return Err(RepositoryError::AlreadyExists);
        }

        let model = contact_info::ActiveModel {
            email: Set(data.email),
            phone: Set(data.phone),
            location: Set(data.location),
            linkedin_url: Set(data.linkedin_url),
            github_url: Set(data.github_url),
            twitter_url: Set(data.twitter_url),
            website_url: Set(data.website_url),
            created_at: Set(Utc::now().fixed_offset()),
            updated_at: Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(RepositoryError::from_db)?;

        commit(txn).await?;
        Ok(model_to_info(model))
    }

    async fn update_info(
        &self,
        changes: ContactInfoChanges,
    ) -> Result<ContactInfo, RepositoryError> {
        let txn = begin_with_lock_timeout(&self.db, self.lock_timeout).await?;

        let current = contact_info::Entity::find()
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(RepositoryError::from_db)?
            .ok_or(RepositoryError::NotFound)?;

        let mut model: contact_info::ActiveModel = current.into();

        if let PatchField::Value(v) = changes.email {
            model.email = Set(v);
        }
        if let Some(v) = changes.phone.into_nullable() {
            model.phone = Set(v);
        }
        if let Some(v) = changes.location.into_nullable() {
            model.location = Set(v);
        }
        if let Some(v) = changes.linkedin_url.into_nullable() {
            model.linkedin_url = Set(v);
        }
        if let Some(v) = changes.github_url.into_nullable() {
            model.github_url = Set(v);
        }
        if let Some(v) = changes.twitter_url.into_nullable() {
            model.twitter_url = Set(v);
        }
        if let Some(v) = changes.website_url.into_nullable() {
            model.website_url = Set(v);
        }
        model.updated_at = Set(Some(Utc::now().fixed_offset()));

        let saved = model.update(&txn).await.map_err(RepositoryError::from_db)?;
        commit(txn).await?;

        Ok(model_to_info(saved))
    }

    async fn create_message(
        &self,
        data: NewContactMessage,
    ) -> Result<ContactMessage, RepositoryError> {
        let model = contact_messages::ActiveModel {
            name: Set(data.name),
            email: Set(data.email),
            subject: Set(data.subject),
            message: Set(data.message),
            is_read: Set(false),
            created_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .map_err(RepositoryError::from_db)?;

        Ok(model_to_message(model))
    }

    async fn list_messages(
        &self,
        query: MessageQuery,
    ) -> Result<Vec<ContactMessage>, RepositoryError> {
        let mut select = contact_messages::Entity::find();
        if query.unread_only {
            select = select.filter(contact_messages::Column::IsRead.eq(false));
        }

        let rows = select
            .order_by_desc(contact_messages::Column::CreatedAt)
            .order_by_desc(contact_messages::Column::Id)
            .offset(query.skip)
            .limit(query.limit)
            .all(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?;

        Ok(rows.into_iter().map(model_to_message).collect())
    }

    async fn mark_read(&self, id: i32) -> Result<ContactMessage, RepositoryError> {
        let txn = begin_with_lock_timeout(&self.db, self.lock_timeout).await?;

        let current = contact_messages::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(RepositoryError::from_db)?
            .ok_or(RepositoryError::NotFound)?;

        if current.is_read {
            commit(txn).await?;
            return Ok(model_to_message(current));
        }

        let mut model: contact_messages::ActiveModel = current.into();
        model.is_read = Set(true);

        let saved = model.update(&txn).await.map_err(RepositoryError::from_db)?;
        commit(txn).await?;

        Ok(model_to_message(saved))
    }

    async fn delete_message(&self, id: i32) -> Result<(), RepositoryError> {
        let result = contact_messages::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::db::{exec_ok, transaction_log, update_of};
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn message_row(id: i32, is_read: bool) -> contact_messages::Model {
        contact_messages::Model {
            id,
            name: "Visitor".to_string(),
            email: "visitor@example.com".to_string(),
            subject: None,
            message: "Hello".to_string(),
            is_read,
            created_at: Utc::now().fixed_offset(),
        }
    }

    fn repo(db: &Arc<DatabaseConnection>) -> ContactRepositoryPostgres {
        ContactRepositoryPostgres::new(db.clone(), Duration::from_millis(500))
    }

    #[tokio::test]
    async fn test_unread_inbox_query() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![message_row(2, false)]])
                .into_connection(),
        );

        let list = repo(&db)
            .list_messages(MessageQuery {
                unread_only: true,
                skip: 10,
                limit: 5,
            })
            .await
            .unwrap();
        assert_eq!(list.len(), 1);

        let log = transaction_log(db);
        assert!(log.contains(r#"\"is_read\" = $1"#));
        assert!(log.contains(r#"\"created_at\" DESC"#));
        assert!(log.contains("LIMIT $2 OFFSET $3"));
    }

    #[tokio::test]
    async fn test_mark_read_updates_unread_row() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results(vec![exec_ok(0)])
                .append_query_results(vec![vec![message_row(4, false)]])
                .append_query_results(vec![vec![message_row(4, true)]])
                .into_connection(),
        );

        let message = repo(&db).mark_read(4).await.unwrap();
        assert!(message.is_read);

        let log = transaction_log(db);
        assert!(log.contains("FOR UPDATE"));
        assert!(log.contains(&update_of("contact_messages")));
    }

    #[tokio::test]
    async fn test_mark_read_twice_writes_nothing() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results(vec![exec_ok(0)])
                .append_query_results(vec![vec![message_row(4, true)]])
                .into_connection(),
        );

        assert!(repo(&db).mark_read(4).await.unwrap().is_read);
        assert!(!transaction_log(db).contains(&update_of("contact_messages")));
    }

    #[tokio::test]
    async fn test_delete_missing_message() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results(vec![exec_ok(0)])
                .into_connection(),
        );

        assert_eq!(
            repo(&db).delete_message(8).await,
            Err(RepositoryError::NotFound)
        );
    }
}
