use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use std::time::Duration;

use crate::modules::project::adapter::outgoing::sea_orm_entity::{
    project_features, project_metrics, project_technologies, projects,
};
use crate::modules::project::application::domain::entities::{
    NewProject, Project, ProjectChanges, ProjectFilter,
};
use crate::modules::project::application::ports::outgoing::ProjectRepository;
use crate::shared::content::{ListEntry, NewListEntry, NewTechnology, Technology};
use crate::shared::store::postgres::{begin_with_lock_timeout, commit};
use crate::shared::store::{PatchField, RepositoryError};

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
    lock_timeout: Duration,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>, lock_timeout: Duration) -> Self {
        Self { db, lock_timeout }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn list(&self, filter: ProjectFilter) -> Result<Vec<Project>, RepositoryError> {
        let mut query = projects::Entity::find();
        if let Some(featured) = filter.featured {
            query = query.filter(projects::Column::IsFeatured.eq(featured));
        }

        let roots = query
            .order_by_asc(projects::Column::OrderIndex)
            .order_by_asc(projects::Column::Id)
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

    async fn get(&self, id: i32) -> Result<Project, RepositoryError> {
        let root = projects::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?
            .ok_or(RepositoryError::NotFound)?;

        let children = ChildRows::fetch(&*self.db, &[id]).await?;
        Ok(children.assemble(root))
    }

    async fn create(&self, data: NewProject) -> Result<Project, RepositoryError> {
        let txn = self.db.begin().await.map_err(RepositoryError::from_db)?;

        let root = projects::ActiveModel {
            title: Set(data.title),
            description: Set(data.description),
            image: Set(data.image),
            github_url: Set(data.github_url),
            live_url: Set(data.live_url),
            order_index: Set(data.order_index),
            is_featured: Set(data.is_featured),
            created_at: Set(Utc::now().fixed_offset()),
            updated_at: Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(RepositoryError::from_db)?;

        insert_technologies(&txn, root.id, data.technologies).await?;
        insert_features(&txn, root.id, data.features).await?;
        insert_metrics(&txn, root.id, data.metrics).await?;

        let children = ChildRows::fetch(&txn, &[root.id]).await?;
        commit(txn).await?;

        Ok(children.assemble(root))
    }

    async fn update(&self, id: i32, changes: ProjectChanges) -> Result<Project, RepositoryError> {
        let txn = begin_with_lock_timeout(&self.db, self.lock_timeout).await?;

        let current = projects::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(RepositoryError::from_db)?
            .ok_or(RepositoryError::NotFound)?;

        let mut model: projects::ActiveModel = current.into();

        if let PatchField::Value(v) = changes.title {
            model.title = Set(v);
        }
        if let PatchField::Value(v) = changes.description {
            model.description = Set(v);
        }
        if let Some(v) = changes.image.into_nullable() {
            model.image = Set(v);
        }
        if let Some(v) = changes.github_url.into_nullable() {
            model.github_url = Set(v);
        }
        if let Some(v) = changes.live_url.into_nullable() {
            model.live_url = Set(v);
        }
        if let PatchField::Value(v) = changes.order_index {
            model.order_index = Set(v);
        }
        if let PatchField::Value(v) = changes.is_featured {
            model.is_featured = Set(v);
        }
        model.updated_at = Set(Some(Utc::now().fixed_offset()));

        let root = model.update(&txn).await.map_err(RepositoryError::from_db)?;

        if let Some(items) = changes.technologies {
            project_technologies::Entity::delete_many()
                .filter(project_technologies::Column::ProjectId.eq(id))
                .exec(&txn)
                .await
                .map_err(RepositoryError::from_db)?;
            insert_technologies(&txn, id, items).await?;
        }
        if let Some(items) = changes.features {
            project_features::Entity::delete_many()
                .filter(project_features::Column::ProjectId.eq(id))
                .exec(&txn)
                .await
                .map_err(RepositoryError::from_db)?;
            insert_features(&txn, id, items).await?;
        }
        if let Some(items) = changes.metrics {
            project_metrics::Entity::delete_many()
                .filter(project_metrics::Column::ProjectId.eq(id))
                .exec(&txn)
                .await
                .map_err(RepositoryError::from_db)?;
            insert_metrics(&txn, id, items).await?;
        }

        let children = ChildRows::fetch(&txn, &[id]).await?;
        commit(txn).await?;

        Ok(children.assemble(root))
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let txn = begin_with_lock_timeout(&self.db, self.lock_timeout).await?;

        projects::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(RepositoryError::from_db)?
            .ok_or(RepositoryError::NotFound)?;

        project_technologies::Entity::delete_many()
            .filter(project_technologies::Column::ProjectId.eq(id))
            .exec(&txn)
            .await
            .map_err(RepositoryError::from_db)?;
        project_features::Entity::delete_many()
            .filter(project_features::Column::ProjectId.eq(id))
            .exec(&txn)
            .await
            .map_err(RepositoryError::from_db)?;
        project_metrics::Entity::delete_many()
            .filter(project_metrics::Column::ProjectId.eq(id))
            .exec(&txn)
            .await
            .map_err(RepositoryError::from_db)?;

        projects::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(RepositoryError::from_db)?;

        commit(txn).await
    }
}

struct ChildRows {
    technologies: Vec<project_technologies::Model>,
    features: Vec<project_features::Model>,
    metrics: Vec<project_metrics::Model>,
}

impl ChildRows {
    async fn fetch<C: ConnectionTrait>(conn: &C, ids: &[i32]) -> Result<Self, RepositoryError> {
        let technologies = project_technologies::Entity::find()
            .filter(project_technologies::Column::ProjectId.is_in(ids.to_vec()))
            .order_by_asc(project_technologies::Column::Id)
            .all(conn)
            .await
            .map_err(RepositoryError::from_db)?;

        let features = project_features::Entity::find()
            .filter(project_features::Column::ProjectId.is_in(ids.to_vec()))
            .order_by_asc(project_features::Column::OrderIndex)
            .order_by_asc(project_features::Column::Id)
            .all(conn)
            .await
            .map_err(RepositoryError::from_db)?;

        let metrics = project_metrics::Entity::find()
            .filter(project_metrics::Column::ProjectId.is_in(ids.to_vec()))
            .order_by_asc(project_metrics::Column::OrderIndex)
            .order_by_asc(project_metrics::Column::Id)
            .all(conn)
            .await
            .map_err(RepositoryError::from_db)?;

        Ok(Self {
            technologies,
            features,
            metrics,
        })
    }

    fn assemble(&self, root: projects::Model) -> Project {
        let id = root.id;

        Project {
            id,
            title: root.title,
            description: root.description,
            image: root.image,
            github_url: root.github_url,
            live_url: root.live_url,
            order_index: root.order_index,
            is_featured: root.is_featured,
            created_at: root.created_at.with_timezone(&Utc),
            updated_at: root.updated_at.map(|t| t.with_timezone(&Utc)),
            technologies: self
                .technologies
                .iter()
                .filter(|t| t.project_id == id)
                .map(|t| Technology {
                    id: t.id,
                    name: t.name.clone(),
                })
                .collect(),
            features: self
                .features
                .iter()
                .filter(|f| f.project_id == id)
                .map(|f| ListEntry {
                    id: f.id,
                    description: f.description.clone(),
                    order_index: f.order_index,
                })
                .collect(),
            metrics: self
                .metrics
                .iter()
                .filter(|m| m.project_id == id)
                .map(|m| ListEntry {
                    id: m.id,
                    description: m.description.clone(),
                    order_index: m.order_index,
                })
                .collect(),
        }
    }
}

async fn insert_technologies<C: ConnectionTrait>(
    conn: &C,
    project_id: i32,
    items: Vec<NewTechnology>,
) -> Result<(), RepositoryError> {
    if items.is_empty() {
        return Ok(());
    }

    project_technologies::Entity::insert_many(items.into_iter().map(|t| {
        project_technologies::ActiveModel {
            project_id: Set(project_id),
            name: Set(t.name),
            ..Default::default()
        }
    }))
    .exec_without_returning(conn)
    .await
    .map_err(RepositoryError::from_db)?;

    Ok(())
}

async fn insert_features<C: ConnectionTrait>(
    conn: &C,
    project_id: i32,
    items: Vec<NewListEntry>,
) -> Result<(), RepositoryError> {
    if items.is_empty() {
        return Ok(());
    }

    project_features::Entity::insert_many(items.into_iter().map(|f| {
        project_features::ActiveModel {
            project_id: Set(project_id),
            description: Set(f.description),
            order_index: Set(f.order_index),
            ..Default::default()
        }
    }))
    .exec_without_returning(conn)
    .await
    .map_err(RepositoryError::from_db)?;

    Ok(())
}

async fn insert_metrics<C: ConnectionTrait>(
    conn: &C,
    project_id: i32,
    items: Vec<NewListEntry>,
) -> Result<(), RepositoryError> {
    if items.is_empty() {
        return Ok(());
    }

    project_metrics::Entity::insert_many(items.into_iter().map(|m| {
        project_metrics::ActiveModel {
            project_id: Set(project_id),
            description: Set(m.description),
            order_index: Set(m.order_index),
            ..Default::default()
        }
    }))
    .exec_without_returning(conn)
    .await
    .map_err(RepositoryError::from_db)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::db::{delete_from, exec_ok, insert_into, transaction_log, update_of};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn root(id: i32, is_featured: bool) -> projects::Model {
        projects::Model {
            id,
            title: format!("Project {id}"),
            description: "Does things".to_string(),
            image: None,
            github_url: Some("https://github.com/example/p".to_string()),
            live_url: None,
            order_index: 0,
            is_featured,
            created_at: Utc::now().fixed_offset(),
            updated_at: None,
        }
    }

    fn feature(id: i32, project_id: i32, text: &str) -> project_features::Model {
        project_features::Model {
            id,
            project_id,
            description: text.to_string(),
            order_index: 0,
        }
    }

    fn with_children(
        db: MockDatabase,
        tech: Vec<project_technologies::Model>,
        features: Vec<project_features::Model>,
    ) -> MockDatabase {
        db.append_query_results(vec![tech])
            .append_query_results(vec![features])
            .append_query_results(vec![Vec::<project_metrics::Model>::new()])
    }

    fn repo(db: &Arc<DatabaseConnection>) -> ProjectRepositoryPostgres {
        ProjectRepositoryPostgres::new(db.clone(), Duration::from_millis(500))
    }

    #[tokio::test]
    async fn test_featured_filter_is_pushed_to_sql() {
        let mock = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![root(1, true), root(2, true)]]);
        let mock = with_children(
            mock,
            vec![project_technologies::Model {
                id: 7,
                project_id: 2,
                name: "Rust".to_string(),
            }],
            vec![feature(3, 1, "Search")],
        );

        let db = Arc::new(mock.into_connection());
        let list = repo(&db).list(ProjectFilter::featured()).await.unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].features[0].description, "Search");
        assert!(list[0].technologies.is_empty());
        assert_eq!(list[1].technologies[0].name, "Rust");

        let log = transaction_log(db);
        assert!(log.contains(r#"\"is_featured\" = $1"#));
        assert!(log.contains(r#"ORDER BY \"projects\".\"order_index\" ASC"#));
    }

    #[tokio::test]
    async fn test_unfiltered_list_has_no_featured_predicate() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<projects::Model>::new()])
                .into_connection(),
        );

        assert!(repo(&db)
            .list(ProjectFilter::default())
            .await
            .unwrap()
            .is_empty());
        assert!(!transaction_log(db).contains(r#"\"is_featured\" ="#));
    }

    #[tokio::test]
    async fn test_create_skips_empty_child_inserts() {
        let mock = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![root(4, false)]])
            .append_exec_results(vec![exec_ok(1)]);
        let mock = with_children(mock, vec![], vec![feature(9, 4, "Offline mode")]);

        let db = Arc::new(mock.into_connection());
        let created = repo(&db)
            .create(NewProject {
                title: "Project 4".to_string(),
                description: "Does things".to_string(),
                image: None,
                github_url: None,
                live_url: None,
                order_index: 0,
                is_featured: false,
                technologies: vec![],
                features: vec![NewListEntry::new("Offline mode", 0)],
                metrics: vec![],
            })
            .await
            .unwrap();

        assert_eq!(created.features[0].id, 9);

        let log = transaction_log(db);
        assert!(log.contains(&insert_into("projects")));
        assert!(log.contains(&insert_into("project_features")));
        assert!(!log.contains(&insert_into("project_technologies")));
        assert!(!log.contains(&insert_into("project_metrics")));
    }

    #[tokio::test]
    async fn test_delete_removes_children_before_root() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results(vec![
                    exec_ok(0),
                    exec_ok(2),
                    exec_ok(1),
                    exec_ok(1),
                    exec_ok(1),
                ])
                .append_query_results(vec![vec![root(1, true)]])
                .into_connection(),
        );

        repo(&db).delete(1).await.unwrap();

        let log = transaction_log(db);
        let root_delete = log.find(&delete_from("projects")).unwrap();
        for child in ["project_technologies", "project_features", "project_metrics"] {
            assert!(log.find(&delete_from(child)).unwrap() < root_delete);
        }
    }

    #[tokio::test]
    async fn test_delete_missing_touches_nothing() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results(vec![exec_ok(0)])
                .append_query_results(vec![Vec::<projects::Model>::new()])
                .into_connection(),
        );

        assert_eq!(repo(&db).delete(5).await, Err(RepositoryError::NotFound));
        assert!(!transaction_log(db).contains(&delete_from("project_features")));
    }

    #[tokio::test]
    async fn test_update_replaces_only_present_collections() {
        let mut updated = root(1, false);
        updated.title = "Renamed".to_string();
        updated.updated_at = Some(Utc::now().fixed_offset());

        let mock = MockDatabase::new(DatabaseBackend::Postgres)
            // SET LOCAL, delete features, insert features
            .append_exec_results(vec![exec_ok(0), exec_ok(2), exec_ok(1)])
            .append_query_results(vec![vec![root(1, false)]])
            .append_query_results(vec![vec![updated]]);
        let mock = with_children(
            mock,
            vec![project_technologies::Model {
                id: 3,
                project_id: 1,
                name: "Untouched".to_string(),
            }],
            vec![feature(12, 1, "Realtime sync")],
        );

        let db = Arc::new(mock.into_connection());
        let result = repo(&db)
            .update(
                1,
                ProjectChanges {
                    title: PatchField::Value("Renamed".to_string()),
                    features: Some(vec![NewListEntry::new("Realtime sync", 0)]),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(result.title, "Renamed");
        assert_eq!(result.features[0].description, "Realtime sync");
        assert_eq!(result.technologies[0].name, "Untouched");

        let log = transaction_log(db);
        assert!(log.contains("FOR UPDATE"));
        assert!(log.contains(&update_of("projects")));
        assert!(log.contains(&delete_from("project_features")));
        assert!(log.contains(&insert_into("project_features")));
        assert!(!log.contains(&delete_from("project_technologies")));
        assert!(!log.contains(&delete_from("project_metrics")));
        assert!(!log.contains(&insert_into("project_technologies")));
    }

    #[tokio::test]
    async fn test_update_with_empty_features_deletes_without_insert() {
        let mock = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec_ok(0), exec_ok(3)])
            .append_query_results(vec![vec![root(1, true)]])
            .append_query_results(vec![vec![root(1, true)]]);
        let mock = with_children(mock, vec![], vec![]);

        let db = Arc::new(mock.into_connection());
        let result = repo(&db)
            .update(
                1,
                ProjectChanges {
                    features: Some(vec![]),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(result.features.is_empty());

        let log = transaction_log(db);
        assert!(log.contains(&delete_from("project_features")));
        assert!(!log.contains(&insert_into("project_features")));
    }

    #[tokio::test]
    async fn test_update_null_image_clears_the_column() {
        let mut current = root(1, false);
        current.image = Some("/img/old.png".to_string());

        let mock = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec_ok(0)])
            .append_query_results(vec![vec![current]])
            .append_query_results(vec![vec![root(1, false)]]);
        let mock = with_children(mock, vec![], vec![]);

        let db = Arc::new(mock.into_connection());
        let result = repo(&db)
            .update(
                1,
                ProjectChanges {
                    image: PatchField::Null,
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(result.image, None);

        let log = transaction_log(db);
        assert!(log.contains(r#"\"image\" = $"#));
        assert!(!log.contains(r#"\"github_url\" = $"#));
        assert!(!log.contains(&delete_from("project_features")));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results(vec![exec_ok(0)])
                .append_query_results(vec![Vec::<projects::Model>::new()])
                .into_connection(),
        );

        let result = repo(&db)
            .update(
                42,
                ProjectChanges {
                    features: Some(vec![]),
                    technologies: Some(vec![]),
                    ..Default::default()
                },
            )
            .await;
        assert_eq!(result, Err(RepositoryError::NotFound));

        let log = transaction_log(db);
        assert!(!log.contains(&update_of("projects")));
        assert!(!log.contains(&delete_from("project_features")));
        assert!(!log.contains(&delete_from("project_technologies")));
    }

    #[tokio::test]
    async fn test_delete_failure_midway_rolls_back_before_root() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                // SET LOCAL, delete technologies, then features fails
                .append_exec_results(vec![exec_ok(0), exec_ok(2)])
                .append_exec_errors(vec![DbErr::Custom("connection reset".to_string())])
                .append_query_results(vec![vec![root(1, true)]])
                .into_connection(),
        );

        let result = repo(&db).delete(1).await;
        assert!(matches!(result, Err(RepositoryError::DatabaseError(_))));

        let log = transaction_log(db);
        assert!(log.contains(&delete_from("project_technologies")));
        assert!(log.contains("ROLLBACK"));
        assert!(!log.contains("COMMIT"));
        assert!(!log.contains(&delete_from("project_metrics")));
        assert!(!log.contains(&delete_from("projects")));
    }

    #[tokio::test]
    async fn test_update_failure_between_delete_and_insert_rolls_back() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                // SET LOCAL, delete technologies, then the replacement insert fails
                .append_exec_results(vec![exec_ok(0), exec_ok(2)])
                .append_exec_errors(vec![DbErr::Custom("connection reset".to_string())])
                .append_query_results(vec![vec![root(1, false)]])
                .append_query_results(vec![vec![root(1, false)]])
                .into_connection(),
        );

        let result = repo(&db)
            .update(
                1,
                ProjectChanges {
                    technologies: Some(vec![NewTechnology::new("Rust")]),
                    metrics: Some(vec![NewListEntry::new("p99 under 50ms", 0)]),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(RepositoryError::DatabaseError(_))));

        let log = transaction_log(db);
        assert!(log.contains(&delete_from("project_technologies")));
        assert!(log.contains("ROLLBACK"));
        assert!(!log.contains("COMMIT"));
        assert!(!log.contains(&delete_from("project_metrics")));
    }
}
