use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use std::time::Duration;

use crate::modules::experience::adapter::outgoing::sea_orm_entity::{
    achievements, experience_projects, experience_technologies, experiences, responsibilities,
};
use crate::modules::experience::application::domain::entities::{
    Experience, ExperienceChanges, ExperienceProject, NewExperience, NewExperienceProject,
};
use crate::modules::experience::application::ports::outgoing::ExperienceRepository;
use crate::shared::content::{ListEntry, NewListEntry, NewTechnology, Technology};
use crate::shared::store::postgres::{begin_with_lock_timeout, commit};
use crate::shared::store::{PatchField, RepositoryError};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
    lock_timeout: Duration,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>, lock_timeout: Duration) -> Self {
        Self { db, lock_timeout }
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Experience>, RepositoryError> {
        let roots = experiences::Entity::find()
            .order_by_asc(experiences::Column::OrderIndex)
            .order_by_asc(experiences::Column::Id)
            .all(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?;

        if roots.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = roots.iter().map(|r| r.id).collect();
        let children = ChildRows::fetch(&*self.db, &ids).await?;

        Ok(roots
            .into_iter()
            .map(|root| children.assemble(root))
            .collect())
    }

    async fn get(&self, id: i32) -> Result<Experience, RepositoryError> {
        let root = experiences::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?
            .ok_or(RepositoryError::NotFound)?;

        let children = ChildRows::fetch(&*self.db, &[id]).await?;
        Ok(children.assemble(root))
    }

    async fn create(&self, data: NewExperience) -> Result<Experience, RepositoryError> {
        let txn = self.db.begin().await.map_err(RepositoryError::from_db)?;

        let root = experiences::ActiveModel {
            title: Set(data.title),
            company: Set(data.company),
            duration: Set(data.duration),
            location: Set(data.location),
            employment_type: Set(data.employment_type),
            order_index: Set(data.order_index),
            created_at: Set(Utc::now().fixed_offset()),
            updated_at: Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(RepositoryError::from_db)?;

        insert_responsibilities(&txn, root.id, data.responsibilities).await?;
        insert_achievements(&txn, root.id, data.achievements).await?;
        insert_projects(&txn, root.id, data.projects).await?;
        insert_technologies(&txn, root.id, data.technologies).await?;

        let children = ChildRows::fetch(&txn, &[root.id]).await?;
        commit(txn).await?;

        Ok(children.assemble(root))
    }

    async fn update(
        &self,
        id: i32,
        changes: ExperienceChanges,
    ) -> Result<Experience, RepositoryError> {
        let txn = begin_with_lock_timeout(&self.db, self.lock_timeout).await?;

        let current = experiences::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(RepositoryError::from_db)?
            .ok_or(RepositoryError::NotFound)?;

        let mut model: experiences::ActiveModel = current.into();

        if let PatchField::Value(v) = changes.title {
            model.title = Set(v);
        }
        if let PatchField::Value(v) = changes.company {
            model.company = Set(v);
        }
        if let PatchField::Value(v) = changes.duration {
            model.duration = Set(v);
        }
        if let PatchField::Value(v) = changes.location {
            model.location = Set(v);
        }
        if let PatchField::Value(v) = changes.employment_type {
            model.employment_type = Set(v);
        }
        if let PatchField::Value(v) = changes.order_index {
            model.order_index = Set(v);
        }
        model.updated_at = Set(Some(Utc::now().fixed_offset()));

        let root = model.update(&txn).await.map_err(RepositoryError::from_db)?;

        // Present collections are replaced wholesale, even when empty.
        if let Some(items) = changes.responsibilities {
            responsibilities::Entity::delete_many()
                .filter(responsibilities::Column::ExperienceId.eq(id))
                .exec(&txn)
                .await
                .map_err(RepositoryError::from_db)?;
            insert_responsibilities(&txn, id, items).await?;
        }
        if let Some(items) = changes.achievements {
            achievements::Entity::delete_many()
                .filter(achievements::Column::ExperienceId.eq(id))
                .exec(&txn)
                .await
                .map_err(RepositoryError::from_db)?;
            insert_achievements(&txn, id, items).await?;
        }
        if let Some(items) = changes.projects {
            experience_projects::Entity::delete_many()
                .filter(experience_projects::Column::ExperienceId.eq(id))
                .exec(&txn)
                .await
                .map_err(RepositoryError::from_db)?;
            insert_projects(&txn, id, items).await?;
        }
        if let Some(items) = changes.technologies {
            experience_technologies::Entity::delete_many()
                .filter(experience_technologies::Column::ExperienceId.eq(id))
                .exec(&txn)
                .await
                .map_err(RepositoryError::from_db)?;
            insert_technologies(&txn, id, items).await?;
        }

        let children = ChildRows::fetch(&txn, &[id]).await?;
        commit(txn).await?;

        Ok(children.assemble(root))
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let txn = begin_with_lock_timeout(&self.db, self.lock_timeout).await?;

        experiences::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(RepositoryError::from_db)?
            .ok_or(RepositoryError::NotFound)?;

        // Children first; the FK cascade covers rows written outside this code.
        responsibilities::Entity::delete_many()
            .filter(responsibilities::Column::ExperienceId.eq(id))
            .exec(&txn)
            .await
            .map_err(RepositoryError::from_db)?;
        achievements::Entity::delete_many()
            .filter(achievements::Column::ExperienceId.eq(id))
            .exec(&txn)
            .await
            .map_err(RepositoryError::from_db)?;
        experience_projects::Entity::delete_many()
            .filter(experience_projects::Column::ExperienceId.eq(id))
            .exec(&txn)
            .await
            .map_err(RepositoryError::from_db)?;
        experience_technologies::Entity::delete_many()
            .filter(experience_technologies::Column::ExperienceId.eq(id))
            .exec(&txn)
            .await
            .map_err(RepositoryError::from_db)?;

        experiences::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(RepositoryError::from_db)?;

        commit(txn).await
    }
}

// ============================================================================
// Child rows
// ============================================================================

/// Child rows of one or more experiences, each list already in display order.
struct ChildRows {
    responsibilities: Vec<responsibilities::Model>,
    achievements: Vec<achievements::Model>,
    projects: Vec<experience_projects::Model>,
    technologies: Vec<experience_technologies::Model>,
}

impl ChildRows {
    async fn fetch<C: ConnectionTrait>(conn: &C, ids: &[i32]) -> Result<Self, RepositoryError> {
        let responsibilities = responsibilities::Entity::find()
            .filter(responsibilities::Column::ExperienceId.is_in(ids.to_vec()))
            .order_by_asc(responsibilities::Column::OrderIndex)
            .order_by_asc(responsibilities::Column::Id)
            .all(conn)
            .await
            .map_err(RepositoryError::from_db)?;

        let achievements = achievements::Entity::find()
            .filter(achievements::Column::ExperienceId.is_in(ids.to_vec()))
            .order_by_asc(achievements::Column::OrderIndex)
            .order_by_asc(achievements::Column::Id)
            .all(conn)
            .await
            .map_err(RepositoryError::from_db)?;

        let projects = experience_projects::Entity::find()
            .filter(experience_projects::Column::ExperienceId.is_in(ids.to_vec()))
            .order_by_asc(experience_projects::Column::OrderIndex)
            .order_by_asc(experience_projects::Column::Id)
            .all(conn)
            .await
            .map_err(RepositoryError::from_db)?;

        let technologies = experience_technologies::Entity::find()
            .filter(experience_technologies::Column::ExperienceId.is_in(ids.to_vec()))
            .order_by_asc(experience_technologies::Column::Id)
            .all(conn)
            .await
            .map_err(RepositoryError::from_db)?;

        Ok(Self {
            responsibilities,
            achievements,
            projects,
            technologies,
        })
    }

    fn assemble(&self, root: experiences::Model) -> Experience {
        let id = root.id;

        Experience {
            id,
            title: root.title,
            company: root.company,
            duration: root.duration,
            location: root.location,
            employment_type: root.employment_type,
            order_index: root.order_index,
            created_at: root.created_at.with_timezone(&Utc),
            updated_at: root.updated_at.map(|t| t.with_timezone(&Utc)),
            responsibilities: self
                .responsibilities
                .iter()
                .filter(|r| r.experience_id == id)
                .map(|r| ListEntry {
                    id: r.id,
                    description: r.description.clone(),
                    order_index: r.order_index,
                })
                .collect(),
            achievements: self
                .achievements
                .iter()
                .filter(|a| a.experience_id == id)
                .map(|a| ListEntry {
                    id: a.id,
                    description: a.description.clone(),
                    order_index: a.order_index,
                })
                .collect(),
            projects: self
                .projects
                .iter()
                .filter(|p| p.experience_id == id)
                .map(|p| ExperienceProject {
                    id: p.id,
                    name: p.name.clone(),
                    description: p.description.clone(),
                    order_index: p.order_index,
                })
                .collect(),
            technologies: self
                .technologies
                .iter()
                .filter(|t| t.experience_id == id)
                .map(|t| Technology {
                    id: t.id,
                    name: t.name.clone(),
                })
                .collect(),
        }
    }
}

async fn insert_responsibilities<C: ConnectionTrait>(
    conn: &C,
    experience_id: i32,
    items: Vec<NewListEntry>,
) -> Result<(), RepositoryError> {
    if items.is_empty() {
        return Ok(());
    }

    responsibilities::Entity::insert_many(items.into_iter().map(|r| {
        responsibilities::ActiveModel {
            experience_id: Set(experience_id),
            description: Set(r.description),
            order_index: Set(r.order_index),
            ..Default::default()
        }
    }))
    .exec_without_returning(conn)
    .await
    .map_err(RepositoryError::from_db)?;

    Ok(())
}

async fn insert_achievements<C: ConnectionTrait>(
    conn: &C,
    experience_id: i32,
    items: Vec<NewListEntry>,
) -> Result<(), RepositoryError> {
    if items.is_empty() {
        return Ok(());
    }

    achievements::Entity::insert_many(items.into_iter().map(|a| achievements::ActiveModel {
        experience_id: Set(experience_id),
        description: Set(a.description),
        order_index: Set(a.order_index),
        ..Default::default()
    }))
    .exec_without_returning(conn)
    .await
    .map_err(RepositoryError::from_db)?;

    Ok(())
}

async fn insert_projects<C: ConnectionTrait>(
    conn: &C,
    experience_id: i32,
    items: Vec<NewExperienceProject>,
) -> Result<(), RepositoryError> {
    if items.is_empty() {
        return Ok(());
    }

    experience_projects::Entity::insert_many(items.into_iter().map(|p| {
        experience_projects::ActiveModel {
            experience_id: Set(experience_id),
            name: Set(p.name),
            description: Set(p.description),
            order_index: Set(p.order_index),
            ..Default::default()
        }
    }))
    .exec_without_returning(conn)
    .await
    .map_err(RepositoryError::from_db)?;

    Ok(())
}

async fn insert_technologies<C: ConnectionTrait>(
    conn: &C,
    experience_id: i32,
    items: Vec<NewTechnology>,
) -> Result<(), RepositoryError> {
    if items.is_empty() {
        return Ok(());
    }

    experience_technologies::Entity::insert_many(items.into_iter().map(|t| {
        experience_technologies::ActiveModel {
            experience_id: Set(experience_id),
            name: Set(t.name),
            ..Default::default()
        }
    }))
    .exec_without_returning(conn)
    .await
    .map_err(RepositoryError::from_db)?;

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
