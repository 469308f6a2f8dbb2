use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::project::application::domain::entities::{
    NewProject, Project, ProjectChanges, ProjectFilter,
};
use crate::modules::project::application::ports::outgoing::ProjectRepository;
use crate::shared::content::{sort_by_position, ListEntry, Technology};
use crate::shared::store::{Guarded, Owned, RepositoryError, Table};

#[derive(Debug, Clone)]
struct ProjectRow {
    id: i32,
    title: String,
    description: String,
    image: Option<String>,
    github_url: Option<String>,
    live_url: Option<String>,
    order_index: i32,
    is_featured: bool,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

#[derive(Default)]
struct ProjectTables {
    projects: Table<ProjectRow>,
    technologies: Table<Owned<Technology>>,
    features: Table<Owned<ListEntry>>,
    metrics: Table<Owned<ListEntry>>,
}

impl ProjectTables {
    fn assemble(&self, row: &ProjectRow) -> Project {
        let mut features = self.features.children_of(row.id);
        let mut metrics = self.metrics.children_of(row.id);
        sort_by_position(&mut features);
        sort_by_position(&mut metrics);

        Project {
            id: row.id,
            title: row.title.clone(),
            description: row.description.clone(),
            image: row.image.clone(),
            github_url: row.github_url.clone(),
            live_url: row.live_url.clone(),
            order_index: row.order_index,
            is_featured: row.is_featured,
            created_at: row.created_at,
            updated_at: row.updated_at,
            technologies: self.technologies.children_of(row.id),
            features,
            metrics,
        }
    }
}

#[derive(Clone)]
pub struct ProjectRepositoryMemory {
    tables: Arc<Guarded<ProjectTables>>,
}

impl ProjectRepositoryMemory {
    pub fn new(lock_timeout: Duration) -> Self {
        Self {
            tables: Arc::new(Guarded::new(ProjectTables::default(), lock_timeout)),
        }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryMemory {
    async fn list(&self, filter: ProjectFilter) -> Result<Vec<Project>, RepositoryError> {
        let tables = self.tables.read().await?;

        let mut list: Vec<Project> = tables
            .projects
            .values()
            .filter(|row| filter.matches(row.is_featured))
            .map(|row| tables.assemble(row))
            .collect();
        sort_by_position(&mut list);

        Ok(list)
    }

    async fn get(&self, id: i32) -> Result<Project, RepositoryError> {
        let tables = self.tables.read().await?;
        let row = tables.projects.get(id).ok_or(RepositoryError::NotFound)?;

        Ok(tables.assemble(row))
    }

    async fn create(&self, data: NewProject) -> Result<Project, RepositoryError> {
        let mut tables = self.tables.write().await?;

        let root = tables.projects.insert_with(|id| ProjectRow {
            id,
            title: data.title,
            description: data.description,
            image: data.image,
            github_url: data.github_url,
            live_url: data.live_url,
            order_index: data.order_index,
            is_featured: data.is_featured,
            created_at: Utc::now(),
            updated_at: None,
        });

        tables
            .technologies
            .insert_technologies(root.id, data.technologies);
        tables.features.insert_entries(root.id, data.features);
        tables.metrics.insert_entries(root.id, data.metrics);

        Ok(tables.assemble(&root))
    }

    async fn update(&self, id: i32, changes: ProjectChanges) -> Result<Project, RepositoryError> {
        let mut tables = self.tables.write().await?;

        let row = tables.projects.get_mut(id).ok_or(RepositoryError::NotFound)?;

        changes.title.apply_required(&mut row.title);
        changes.description.apply_required(&mut row.description);
        changes.image.apply_to(&mut row.image);
        changes.github_url.apply_to(&mut row.github_url);
        changes.live_url.apply_to(&mut row.live_url);
        changes.order_index.apply_required(&mut row.order_index);
        changes.is_featured.apply_required(&mut row.is_featured);
        row.updated_at = Some(Utc::now());
        let row = row.clone();

        if let Some(items) = changes.technologies {
            tables.technologies.remove_children(id);
            tables.technologies.insert_technologies(id, items);
        }
        if let Some(items) = changes.features {
            tables.features.remove_children(id);
            tables.features.insert_entries(id, items);
        }
        if let Some(items) = changes.metrics {
            tables.metrics.remove_children(id);
            tables.metrics.insert_entries(id, items);
        }

        Ok(tables.assemble(&row))
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut tables = self.tables.write().await?;

        tables.projects.remove(id).ok_or(RepositoryError::NotFound)?;
        tables.technologies.remove_children(id);
        tables.features.remove_children(id);
        tables.metrics.remove_children(id);

        Ok(())
    }
}
