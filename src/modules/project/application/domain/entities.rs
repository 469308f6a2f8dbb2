use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::content::{
    validate_all, validate_replacement, ListEntry, NewListEntry, NewTechnology, Positioned,
    Technology,
};
use crate::shared::store::PatchField;
use crate::shared::validation::{
    optional_text, patch_optional_text, patch_required, required_text, ValidationError,
};

pub type ProjectTechnology = Technology;
pub type ProjectFeature = ListEntry;
pub type ProjectMetric = ListEntry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub order_index: i32,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub technologies: Vec<ProjectTechnology>,
    pub features: Vec<ProjectFeature>,
    pub metrics: Vec<ProjectMetric>,
}

impl Positioned for Project {
    fn position(&self) -> (i32, i32) {
        (self.order_index, self.id)
    }
}

/// `?featured=true` keeps featured projects only, `false` the others.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectFilter {
    pub featured: Option<bool>,
}

impl ProjectFilter {
    pub fn featured() -> Self {
        Self {
            featured: Some(true),
        }
    }

    pub fn matches(&self, is_featured: bool) -> bool {
        self.featured.map_or(true, |wanted| wanted == is_featured)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub technologies: Vec<NewTechnology>,
    #[serde(default)]
    pub features: Vec<NewListEntry>,
    #[serde(default)]
    pub metrics: Vec<NewListEntry>,
}

impl NewProject {
    pub fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            title: required_text("title", &self.title)?,
            description: required_text("description", &self.description)?,
            image: optional_text(self.image),
            github_url: optional_text(self.github_url),
            live_url: optional_text(self.live_url),
            order_index: self.order_index,
            is_featured: self.is_featured,
            technologies: validate_all(self.technologies, |t| t.validated("technologies"))?,
            features: validate_all(self.features, |f| f.validated("features"))?,
            metrics: validate_all(self.metrics, |m| m.validated("metrics"))?,
        })
    }
}

/// Partial update. Link and image fields accept `null` to clear them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectChanges {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub image: PatchField<String>,
    #[serde(default)]
    pub github_url: PatchField<String>,
    #[serde(default)]
    pub live_url: PatchField<String>,
    #[serde(default)]
    pub order_index: PatchField<i32>,
    #[serde(default)]
    pub is_featured: PatchField<bool>,
    #[serde(default)]
    pub technologies: Option<Vec<NewTechnology>>,
    #[serde(default)]
    pub features: Option<Vec<NewListEntry>>,
    #[serde(default)]
    pub metrics: Option<Vec<NewListEntry>>,
}

impl ProjectChanges {
    pub fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            title: patch_required("title", self.title, |v| required_text("title", &v))?,
            description: patch_required("description", self.description, |v| {
                required_text("description", &v)
            })?,
            image: patch_optional_text(self.image),
            github_url: patch_optional_text(self.github_url),
            live_url: patch_optional_text(self.live_url),
            order_index: patch_required("order_index", self.order_index, Ok)?,
            is_featured: patch_required("is_featured", self.is_featured, Ok)?,
            technologies: validate_replacement(self.technologies, |t| {
                t.validated("technologies")
            })?,
            features: validate_replacement(self.features, |f| f.validated("features"))?,
            metrics: validate_replacement(self.metrics, |m| m.validated("metrics"))?,
        })
    }
}
