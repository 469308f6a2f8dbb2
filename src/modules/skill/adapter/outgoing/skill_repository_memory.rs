use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use crate::modules::skill::application::domain::entities::{
    sort_skills, NewSkill, Skill, SkillChanges, SkillFilter,
};
use crate::modules::skill::application::ports::outgoing::SkillRepository;
use crate::shared::store::{Guarded, RepositoryError, Table};

#[derive(Clone)]
pub struct SkillRepositoryMemory {
    skills: Arc<Guarded<Table<Skill>>>,
}

impl SkillRepositoryMemory {
    pub fn new(lock_timeout: Duration) -> Self {
        Self {
            skills: Arc::new(Guarded::new(Table::default(), lock_timeout)),
        }
    }
}

#[async_trait]
impl SkillRepository for SkillRepositoryMemory {
    async fn list(&self, filter: SkillFilter) -> Result<Vec<Skill>, RepositoryError> {
        let skills = self.skills.read().await?;

        let mut list: Vec<Skill> = skills
            .values()
            .filter(|s| filter.matches(&s.category))
            .cloned()
            .collect();
        sort_skills(&mut list);

        Ok(list)
    }

    async fn get(&self, id: i32) -> Result<Skill, RepositoryError> {
        let skills = self.skills.read().await?;
        skills.get(id).cloned().ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, data: NewSkill) -> Result<Skill, RepositoryError> {
        let mut skills = self.skills.write().await?;

        Ok(skills.insert_with(|id| Skill {
            id,
            name: data.name,
            category: data.category,
            proficiency: data.proficiency,
            icon: data.icon,
            order_index: data.order_index,
            created_at: Utc::now(),
        }))
    }

    async fn update(&self, id: i32, changes: SkillChanges) -> Result<Skill, RepositoryError> {
        let mut skills = self.skills.write().await?;
        let skill = skills.get_mut(id).ok_or(RepositoryError::NotFound)?;

        changes.name.apply_required(&mut skill.name);
        changes.category.apply_required(&mut skill.category);
        changes.proficiency.apply_required(&mut skill.proficiency);
        changes.icon.apply_to(&mut skill.icon);
        changes.order_index.apply_required(&mut skill.order_index);

        Ok(skill.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut skills = self.skills.write().await?;
        skills.remove(id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::store::PatchField;

    fn new_skill(name: &str, category: &str, order_index: i32) -> NewSkill {
        NewSkill {
            name: name.to_string(),
            category: category.to_string(),
            proficiency: 90,
            icon: Some("rust.svg".to_string()),
            order_index,
        }
    }

    #[tokio::test]
    async fn test_category_filter_and_ordering() {
        let repo = SkillRepositoryMemory::new(Duration::from_millis(200));
        repo.create(new_skill("Rust", "Languages", 0)).await.unwrap();
        repo.create(new_skill("Kubernetes", "DevOps", 0)).await.unwrap();
        repo.create(new_skill("Go", "Languages", 0)).await.unwrap();
        repo.create(new_skill("C", "Languages", 1)).await.unwrap();

        let languages = repo.list(SkillFilter::category("Languages")).await.unwrap();
        let names: Vec<_> = languages.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Go", "Rust", "C"]);

        assert!(repo
            .list(SkillFilter::category("Cooking"))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_update_clears_icon_and_keeps_rest() {
        let repo = SkillRepositoryMemory::new(Duration::from_millis(200));
        let created = repo.create(new_skill("Rust", "Languages", 0)).await.unwrap();

        let updated = repo
            .update(
                created.id,
                SkillChanges {
                    icon: PatchField::Null,
                    proficiency: PatchField::Value(95),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.icon, None);
        assert_eq!(updated.proficiency, 95);
        assert_eq!(updated.category, "Languages");
        assert_eq!(repo.get(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_delete_then_missing() {
        let repo = SkillRepositoryMemory::new(Duration::from_millis(200));
        let created = repo.create(new_skill("Rust", "Languages", 0)).await.unwrap();

        repo.delete(created.id).await.unwrap();
        assert_eq!(repo.delete(created.id).await, Err(RepositoryError::NotFound));
        assert_eq!(repo.get(created.id).await, Err(RepositoryError::NotFound));
    }
}
