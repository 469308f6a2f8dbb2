use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use std::sync::Arc;
use std::time::Duration;

use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;
use crate::modules::skill::application::domain::entities::{
    NewSkill, Skill, SkillChanges, SkillFilter,
};
use crate::modules::skill::application::ports::outgoing::SkillRepository;
use crate::shared::store::postgres::{begin_with_lock_timeout, commit};
use crate::shared::store::{PatchField, RepositoryError};

#[derive(Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
    lock_timeout: Duration,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>, lock_timeout: Duration) -> Self {
        Self { db, lock_timeout }
    }
}

fn model_to_skill(m: skills::Model) -> Skill {
    Skill {
        id: m.id,
        name: m.name,
        category: m.category,
        proficiency: m.proficiency,
        icon: m.icon,
        order_index: m.order_index,
        created_at: m.created_at.with_timezone(&Utc),
    }
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn list(&self, filter: SkillFilter) -> Result<Vec<Skill>, RepositoryError> {
        let mut query = skills::Entity::find();
        if let Some(category) = filter.category {
            query = query.filter(skills::Column::Category.eq(category));
        }

        let rows = query
            .order_by_asc(skills::Column::OrderIndex)
            .order_by_asc(skills::Column::Name)
            .order_by_asc(skills::Column::Id)
            .all(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?;

        Ok(rows.into_iter().map(model_to_skill).collect())
    }

    async fn get(&self, id: i32) -> Result<Skill, RepositoryError> {
        skills::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?
            .map(model_to_skill)
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, data: NewSkill) -> Result<Skill, RepositoryError> {
        let model = skills::ActiveModel {
            name: Set(data.name),
            category: Set(data.category),
            proficiency: Set(data.proficiency),
            icon: Set(data.icon),
            order_index: Set(data.order_index),
            created_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .map_err(RepositoryError::from_db)?;

        Ok(model_to_skill(model))
    }

    async fn update(&self, id: i32, changes: SkillChanges) -> Result<Skill, RepositoryError> {
        let txn = begin_with_lock_timeout(&self.db, self.lock_timeout).await?;

        let current = skills::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(RepositoryError::from_db)?
            .ok_or(RepositoryError::NotFound)?;

        let mut model: skills::ActiveModel = current.clone().into();

        if let PatchField::Value(v) = changes.name {
            model.name = Set(v);
        }
        if let PatchField::Value(v) = changes.category {
            model.category = Set(v);
        }
        if let PatchField::Value(v) = changes.proficiency {
            model.proficiency = Set(v);
        }
        if let Some(v) = changes.icon.into_nullable() {
            model.icon = Set(v);
        }
        if let PatchField::Value(v) = changes.order_index {
            model.order_index = Set(v);
        }

        // Skills carry no updated_at, so an empty patch has nothing to write.
        let saved = if model.is_changed() {
            model.update(&txn).await.map_err(RepositoryError::from_db)?
        } else {
            current
        };
        commit(txn).await?;

        Ok(model_to_skill(saved))
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = skills::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
