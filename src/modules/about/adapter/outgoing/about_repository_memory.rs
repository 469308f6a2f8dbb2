use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use crate::modules::about::application::domain::entities::{
    AboutInfo, AboutInfoChanges, Highlight, HighlightInput, NewAboutInfo,
};
use crate::modules::about::application::ports::outgoing::AboutRepository;
use crate::shared::content::sort_by_position;
use crate::shared::store::{Guarded, RepositoryError, Table};

#[derive(Default)]
struct AboutTables {
    /// Holds at most one row.
    info: Table<AboutInfo>,
    highlights: Table<Highlight>,
}

#[derive(Clone)]
pub struct AboutRepositoryMemory {
    tables: Arc<Guarded<AboutTables>>,
}

impl AboutRepositoryMemory {
    pub fn new(lock_timeout: Duration) -> Self {
        Self {
            tables: Arc::new(Guarded::new(AboutTables::default(), lock_timeout)),
        }
    }
}

#[async_trait]
impl AboutRepository for AboutRepositoryMemory {
    async fn get_info(&self) -> Result<AboutInfo, RepositoryError> {
        let tables = self.tables.read().await?;
        let info = tables
            .info
            .values()
            .next()
            .cloned()
            .ok_or(RepositoryError::NotFound);
        info
    }

    async fn create_info(&self, data: NewAboutInfo) -> Result<AboutInfo, RepositoryError> {
        let mut tables = self.tables.write().await?;
        if !tables.info.is_empty() {
            return Err(RepositoryError::AlreadyExists);
        }

        Ok(tables.info.insert_with(|id| AboutInfo {
            id,
            name: data.name,
            title: data.title,
            description: data.description,
            profile_image: data.profile_image,
            years_experience: data.years_experience,
            project_count: data.project_count,
            model_count: data.model_count,
            accuracy_rate: data.accuracy_rate,
            resume_url: data.resume_url,
            created_at: Utc::now(),
            updated_at: None,
        }))
    }

    async fn update_info(&self, changes: AboutInfoChanges) -> Result<AboutInfo, RepositoryError> {
        let mut tables = self.tables.write().await?;
        let id = tables
            .info
            .values()
            .next()
            .map(|info| info.id)
            .ok_or(RepositoryError::NotFound)?;
        let info = tables.info.get_mut(id).ok_or(RepositoryError::NotFound)?;

        changes.name.apply_required(&mut info.name);
        changes.title.apply_required(&mut info.title);
        changes.description.apply_required(&mut info.description);
        changes.profile_image.apply_to(&mut info.profile_image);
        changes.years_experience.apply_required(&mut info.years_experience);
        changes.project_count.apply_required(&mut info.project_count);
        changes.model_count.apply_required(&mut info.model_count);
        changes.accuracy_rate.apply_required(&mut info.accuracy_rate);
        changes.resume_url.apply_to(&mut info.resume_url);
        info.updated_at = Some(Utc::now());

        Ok(info.clone())
    }

    async fn list_highlights(&self) -> Result<Vec<Highlight>, RepositoryError> {
        let tables = self.tables.read().await?;
        let mut highlights: Vec<Highlight> = tables.highlights.values().cloned().collect();
        sort_by_position(&mut highlights);
        Ok(highlights)
    }

    async fn create_highlight(&self, data: HighlightInput) -> Result<Highlight, RepositoryError> {
        let mut tables = self.tables.write().await?;

        Ok(tables.highlights.insert_with(|id| Highlight {
            id,
            icon: data.icon,
            text: data.text,
            order_index: data.order_index,
            created_at: Utc::now(),
        }))
    }

    async fn update_highlight(
        &self,
        id: i32,
        data: HighlightInput,
    ) -> Result<Highlight, RepositoryError> {
        let mut tables = self.tables.write().await?;
        let highlight = tables
            .highlights
            .get_mut(id)
            .ok_or(RepositoryError::NotFound)?;

        highlight.icon = data.icon;
        highlight.text = data.text;
        highlight.order_index = data.order_index;

        Ok(highlight.clone())
    }

    async fn delete_highlight(&self, id: i32) -> Result<(), RepositoryError> {
        let mut tables = self.tables.write().await?;
        tables
            .highlights
            .remove(id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::store::PatchField;

    fn repo() -> AboutRepositoryMemory {
        AboutRepositoryMemory::new(Duration::from_millis(200))
    }

    fn new_info(name: &str) -> NewAboutInfo {
        NewAboutInfo {
            name: name.to_string(),
            title: "ML Engineer".to_string(),
            description: "Builds models".to_string(),
            profile_image: Some("/img/me.png".to_string()),
            years_experience: 6,
            project_count: 30,
            model_count: 12,
            accuracy_rate: 95,
            resume_url: None,
        }
    }

    fn highlight(text: &str, order_index: i32) -> HighlightInput {
        HighlightInput {
            icon: "star".to_string(),
            text: text.to_string(),
            order_index,
        }
    }

    #[tokio::test]
    async fn test_singleton_lifecycle() {
        let repo = repo();
        assert_eq!(repo.get_info().await, Err(RepositoryError::NotFound));
        assert_eq!(
            repo.update_info(AboutInfoChanges::default()).await,
            Err(RepositoryError::NotFound)
        );

        let created = repo.create_info(new_info("Ada")).await.unwrap();
        assert_eq!(
            repo.create_info(new_info("Grace")).await,
            Err(RepositoryError::AlreadyExists)
        );
        assert_eq!(repo.get_info().await.unwrap().name, "Ada");

        let updated = repo
            .update_info(AboutInfoChanges {
                profile_image: PatchField::Null,
                model_count: PatchField::Value(13),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.profile_image, None);
        assert_eq!(updated.model_count, 13);
        assert_eq!(updated.project_count, 30);
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_highlights_ordered_and_overwritten() {
        let repo = repo();
        let second = repo.create_highlight(highlight("second", 2)).await.unwrap();
        repo.create_highlight(highlight("first", 1)).await.unwrap();

        let texts: Vec<_> = repo
            .list_highlights()
            .await
            .unwrap()
            .into_iter()
            .map(|h| h.text)
            .collect();
        assert_eq!(texts, vec!["first", "second"]);

        let moved = repo
            .update_highlight(second.id, highlight("now first", 0))
            .await
            .unwrap();
        assert_eq!(moved.order_index, 0);
        assert_eq!(repo.list_highlights().await.unwrap()[0].text, "now first");
    }

    #[tokio::test]
    async fn test_missing_highlight() {
        let repo = repo();
        assert_eq!(
            repo.update_highlight(4, highlight("x", 0)).await,
            Err(RepositoryError::NotFound)
        );
        assert_eq!(repo.delete_highlight(4).await, Err(RepositoryError::NotFound));
    }
}
