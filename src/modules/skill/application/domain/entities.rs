use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::store::PatchField;
use crate::shared::validation::{
    optional_text, patch_optional_text, patch_required, percentage, required_text,
    ValidationError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub id: i32,
    pub name: String,
    pub category: String,
    /// 0..=100
    pub proficiency: i32,
    pub icon: Option<String>,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
}

impl Skill {
    /// `(order_index, name)`, with the id as a final tie-break.
    pub fn sort_key(&self) -> (i32, &str, i32) {
        (self.order_index, self.name.as_str(), self.id)
    }
}

pub fn sort_skills(skills: &mut [Skill]) {
    skills.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SkillFilter {
    pub category: Option<String>,
}

impl SkillFilter {
    pub fn category(name: &str) -> Self {
        Self {
            category: Some(name.to_string()),
        }
    }

    pub fn matches(&self, skill_category: &str) -> bool {
        self.category
            .as_deref()
            .map_or(true, |wanted| wanted == skill_category)
    }
}

/// Compact entry used by the grouped listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupedSkill {
    pub id: i32,
    pub name: String,
    pub level: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<GroupedSkill>,
}

/// Groups already-sorted skills by category. Categories keep the order in
/// which they first appear.
pub fn group_by_category(skills: Vec<Skill>) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();

    for skill in skills {
        let entry = GroupedSkill {
            id: skill.id,
            name: skill.name,
            level: skill.proficiency,
        };
        match groups.iter_mut().find(|g| g.category == skill.category) {
            Some(group) => group.skills.push(entry),
            None => groups.push(SkillGroup {
                category: skill.category,
                skills: vec![entry],
            }),
        }
    }

    groups
}

pub fn distinct_categories(skills: &[Skill]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for skill in skills {
        if !seen.contains(&skill.category) {
            seen.push(skill.category.clone());
        }
    }
    seen
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewSkill {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub proficiency: i32,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub order_index: i32,
}

impl NewSkill {
    pub fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required_text("name", &self.name)?,
            category: required_text("category", &self.category)?,
            proficiency: percentage("proficiency", self.proficiency)?,
            icon: optional_text(self.icon),
            order_index: self.order_index,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SkillChanges {
    #[serde(default)]
    pub name: PatchField<String>,
    #[serde(default)]
    pub category: PatchField<String>,
    #[serde(default)]
    pub proficiency: PatchField<i32>,
    #[serde(default)]
    pub icon: PatchField<String>,
    #[serde(default)]
    pub order_index: PatchField<i32>,
}

impl SkillChanges {
    pub fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            name: patch_required("name", self.name, |v| required_text("name", &v))?,
            category: patch_required("category", self.category, |v| {
                required_text("category", &v)
            })?,
            proficiency: patch_required("proficiency", self.proficiency, |v| {
                percentage("proficiency", v)
            })?,
            icon: patch_optional_text(self.icon),
            order_index: patch_required("order_index", self.order_index, Ok)?,
        })
    }
}
