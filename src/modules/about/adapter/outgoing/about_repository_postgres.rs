use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
    Set, TransactionTrait,
};
use std::sync::Arc;
use std::time::Duration;

use crate::modules::about::adapter::outgoing::sea_orm_entity::{about_info, highlights};
use crate::modules::about::application::domain::entities::{
    AboutInfo, AboutInfoChanges, Highlight, HighlightInput, NewAboutInfo,
};
use crate::modules::about::application::ports::outgoing::AboutRepository;
use crate::shared::store::postgres::{begin_with_lock_timeout, commit};
use crate::shared::store::{PatchField, RepositoryError};

#[derive(Clone)]
pub struct AboutRepositoryPostgres {
    db: Arc<DatabaseConnection>,
    lock_timeout: Duration,
}

impl AboutRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>, lock_timeout: Duration) -> Self {
        Self { db, lock_timeout }
    }
}

fn model_to_info(m: about_info::Model) -> AboutInfo {
    AboutInfo {
        id: m.id,
        name: m.name,
        title: m.title,
        description: m.description,
        profile_image: m.profile_image,
        years_experience: m.years_experience,
        project_count: m.project_count,
        model_count: m.model_count,
        accuracy_rate: m.accuracy_rate,
        resume_url: m.resume_url,
        created_at: m.created_at.with_timezone(&Utc),
        updated_at: m.updated_at.map(|t| t.with_timezone(&Utc)),
    }
}

fn model_to_highlight(m: highlights::Model) -> Highlight {
    Highlight {
        id: m.id,
        icon: m.icon,
        text: m.text,
        order_index: m.order_index,
        created_at: m.created_at.with_timezone(&Utc),
    }
}

#[async_trait]
impl AboutRepository for AboutRepositoryPostgres {
    async fn get_info(&self) -> Result<AboutInfo, RepositoryError> {
        about_info::Entity::find()
            .one(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?
            .map(model_to_info)
            .ok_or(RepositoryError::NotFound)
    }

    async fn create_info(&self, data: NewAboutInfo) -> Result<AboutInfo, RepositoryError> {
        let txn = self.db.begin().await.map_err(RepositoryError::from_db)?;

        // The singleton index rejects a racing second insert as 23505 as well.
        let existing = about_info::Entity::find()
            .count(&txn)
            .await
            .map_err(RepositoryError::from_db)?;
        if existing > 0 {
            return Err(RepositoryError::AlreadyExists);
        }

        let model = about_info::ActiveModel {
            name: Set(data.name),
            title: Set(data.title),
            description: Set(data.description),
            profile_image: Set(data.profile_image),
            years_experience: Set(data.years_experience),
            project_count: Set(data.project_count),
            model_count: Set(data.model_count),
            accuracy_rate: Set(data.accuracy_rate),
            resume_url: Set(data.resume_url),
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

    async fn update_info(&self, changes: AboutInfoChanges) -> Result<AboutInfo, RepositoryError> {
        let txn = begin_with_lock_timeout(&self.db, self.lock_timeout).await?;

        let current = about_info::Entity::find()
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(RepositoryError::from_db)?
            .ok_or(RepositoryError::NotFound)?;

        let mut model: about_info::ActiveModel = current.into();

        if let PatchField::Value(v) = changes.name {
            model.name = Set(v);
        }
        if let PatchField::Value(v) = changes.title {
            model.title = Set(v);
        }
        if let PatchField::Value(v) = changes.description {
            model.description = Set(v);
        }
        if let Some(v) = changes.profile_image.into_nullable() {
            model.profile_image = Set(v);
        }
        if let PatchField::Value(v) = changes.years_experience {
            model.years_experience = Set(v);
        }
        if let PatchField::Value(v) = changes.project_count {
            model.project_count = Set(v);
        }
        if let PatchField::Value(v) = changes.model_count {
            model.model_count = Set(v);
        }
        if let PatchField::Value(v) = changes.accuracy_rate {
            model.accuracy_rate = Set(v);
        }
        if let Some(v) = changes.resume_url.into_nullable() {
            model.resume_url = Set(v);
        }
        model.updated_at = Set(Some(Utc::now().fixed_offset()));

        let saved = model.update(&txn).await.map_err(RepositoryError::from_db)?;
        commit(txn).await?;

        Ok(model_to_info(saved))
    }

    async fn list_highlights(&self) -> Result<Vec<Highlight>, RepositoryError> {
        let rows = highlights::Entity::find()
            .order_by_asc(highlights::Column::OrderIndex)
            .order_by_asc(highlights::Column::Id)
            .all(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?;

        Ok(rows.into_iter().map(model_to_highlight).collect())
    }

    async fn create_highlight(&self, data: HighlightInput) -> Result<Highlight, RepositoryError> {
        let model = highlights::ActiveModel {
            icon: Set(data.icon),
            text: Set(data.text),
            order_index: Set(data.order_index),
            created_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .map_err(RepositoryError::from_db)?;

        Ok(model_to_highlight(model))
    }

    async fn update_highlight(
        &self,
        id: i32,
        data: HighlightInput,
    ) -> Result<Highlight, RepositoryError> {
        let txn = begin_with_lock_timeout(&self.db, self.lock_timeout).await?;

        let current = highlights::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(RepositoryError::from_db)?
            .ok_or(RepositoryError::NotFound)?;

        let mut model: highlights::ActiveModel = current.into();
        model.icon = Set(data.icon);
        model.text = Set(data.text);
        model.order_index = Set(data.order_index);

        let saved = model.update(&txn).await.map_err(RepositoryError::from_db)?;
        commit(txn).await?;

        Ok(model_to_highlight(saved))
    }

    async fn delete_highlight(&self, id: i32) -> Result<(), RepositoryError> {
        let result = highlights::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
