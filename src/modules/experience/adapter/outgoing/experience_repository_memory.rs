use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::experience::application::domain::entities::{
    Experience, ExperienceChanges, ExperienceProject, NewExperience,
};
use crate::modules::experience::application::ports::outgoing::ExperienceRepository;
use crate::shared::content::{sort_by_position, ListEntry, Technology};
use crate::shared::store::{Guarded, Owned, RepositoryError, Table};

#[derive(Debug, Clone)]
struct ExperienceRow {
    id: i32,
    title: String,
    company: String,
    duration: String,
    location: String,
    employment_type: String,
    order_index: i32,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

#[derive(Default)]
struct ExperienceTables {
    experiences: Table<ExperienceRow>,
    responsibilities: Table<Owned<ListEntry>>,
    achievements: Table<Owned<ListEntry>>,
    projects: Table<Owned<ExperienceProject>>,
    technologies: Table<Owned<Technology>>,
}

impl ExperienceTables {
    fn assemble(&self, row: &ExperienceRow) -> Experience {
        let mut responsibilities = self.responsibilities.children_of(row.id);
        let mut achievements = self.achievements.children_of(row.id);
        let mut projects = self.projects.children_of(row.id);
        sort_by_position(&mut responsibilities);
        sort_by_position(&mut achievements);
        sort_by_position(&mut projects);

        Experience {
            id: row.id,
            title: row.title.clone(),
            company: row.company.clone(),
            duration: row.duration.clone(),
            location: row.location.clone(),
            employment_type: row.employment_type.clone(),
            order_index: row.order_index,
            created_at: row.created_at,
            updated_at: row.updated_at,
            responsibilities,
            achievements,
            projects,
            technologies: self.technologies.children_of(row.id),
        }
    }

    fn drop_children(&mut self, id: i32) {
        self.responsibilities.remove_children(id);
        self.achievements.remove_children(id);
        self.projects.remove_children(id);
        self.technologies.remove_children(id);
    }
}

/// In-process experience store. All five tables sit behind one lock, so a
/// reader never sees a root without its children or half of a replacement.
#[derive(Clone)]
pub struct ExperienceRepositoryMemory {
    tables: Arc<Guarded<ExperienceTables>>,
}

impl ExperienceRepositoryMemory {
    pub fn new(lock_timeout: Duration) -> Self {
        Self {
            tables: Arc::new(Guarded::new(ExperienceTables::default(), lock_timeout)),
        }
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryMemory {
    async fn list(&self) -> Result<Vec<Experience>, RepositoryError> {
        let tables = self.tables.read().await?;

        let mut list: Vec<Experience> = tables
            .experiences
            .values()
            .map(|row| tables.assemble(row))
            .collect();
        sort_by_position(&mut list);

        Ok(list)
    }

    async fn get(&self, id: i32) -> Result<Experience, RepositoryError> {
        let tables = self.tables.read().await?;
        let row = tables
            .experiences
            .get(id)
            .ok_or(RepositoryError::NotFound)?;

        Ok(tables.assemble(row))
    }

    async fn create(&self, data: NewExperience) -> Result<Experience, RepositoryError> {
        let mut tables = self.tables.write().await?;

        let root = tables.experiences.insert_with(|id| ExperienceRow {
            id,
            title: data.title,
            company: data.company,
            duration: data.duration,
            location: data.location,
            employment_type: data.employment_type,
            order_index: data.order_index,
            created_at: Utc::now(),
            updated_at: None,
        });

        tables
            .responsibilities
            .insert_entries(root.id, data.responsibilities);
        tables.achievements.insert_entries(root.id, data.achievements);
        tables
            .projects
            .insert_children(root.id, data.projects, |id, p| ExperienceProject {
                id,
                name: p.name,
                description: p.description,
                order_index: p.order_index,
            });
        tables
            .technologies
            .insert_technologies(root.id, data.technologies);

        Ok(tables.assemble(&root))
    }

    async fn update(
        &self,
        id: i32,
        changes: ExperienceChanges,
    ) -> Result<Experience, RepositoryError> {
        let mut tables = self.tables.write().await?;

        let row = tables
            .experiences
            .get_mut(id)
            .ok_or(RepositoryError::NotFound)?;

        changes.title.apply_required(&mut row.title);
        changes.company.apply_required(&mut row.company);
        changes.duration.apply_required(&mut row.duration);
        changes.location.apply_required(&mut row.location);
        changes.employment_type.apply_required(&mut row.employment_type);
        changes.order_index.apply_required(&mut row.order_index);
        row.updated_at = Some(Utc::now());
        let row = row.clone();

        if let Some(items) = changes.responsibilities {
            tables.responsibilities.remove_children(id);
            tables.responsibilities.insert_entries(id, items);
        }
        if let Some(items) = changes.achievements {
            tables.achievements.remove_children(id);
            tables.achievements.insert_entries(id, items);
        }
        if let Some(items) = changes.projects {
            tables.projects.remove_children(id);
            tables.projects.insert_children(id, items, |child_id, p| ExperienceProject {
                id: child_id,
                name: p.name,
                description: p.description,
                order_index: p.order_index,
            });
        }
        if let Some(items) = changes.technologies {
            tables.technologies.remove_children(id);
            tables.technologies.insert_technologies(id, items);
        }

        Ok(tables.assemble(&row))
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut tables = self.tables.write().await?;

        tables
            .experiences
            .remove(id)
            .ok_or(RepositoryError::NotFound)?;
        tables.drop_children(id);

        Ok(())
    }
}
