use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::content::Positioned;
use crate::shared::store::PatchField;
use crate::shared::validation::{
    non_negative, optional_text, patch_optional_text, patch_required, percentage, required_text,
    ValidationError,
};

/// The single "about me" record. Absent until an admin creates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutInfo {
    pub id: i32,
    pub name: String,
    pub title: String,
    pub description: String,
    pub profile_image: Option<String>,
    pub years_experience: i32,
    pub project_count: i32,
    pub model_count: i32,
    /// 0..=100
    pub accuracy_rate: i32,
    pub resume_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewAboutInfo {
    pub name: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub years_experience: i32,
    #[serde(default)]
    pub project_count: i32,
    #[serde(default)]
    pub model_count: i32,
    #[serde(default)]
    pub accuracy_rate: i32,
    #[serde(default)]
    pub resume_url: Option<String>,
}

impl NewAboutInfo {
    pub fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required_text("name", &self.name)?,
            title: required_text("title", &self.title)?,
            description: required_text("description", &self.description)?,
            profile_image: optional_text(self.profile_image),
            years_experience: non_negative("years_experience", self.years_experience)?,
            project_count: non_negative("project_count", self.project_count)?,
            model_count: non_negative("model_count", self.model_count)?,
            accuracy_rate: percentage("accuracy_rate", self.accuracy_rate)?,
            resume_url: optional_text(self.resume_url),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AboutInfoChanges {
    #[serde(default)]
    pub name: PatchField<String>,
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub profile_image: PatchField<String>,
    #[serde(default)]
    pub years_experience: PatchField<i32>,
    #[serde(default)]
    pub project_count: PatchField<i32>,
    #[serde(default)]
    pub model_count: PatchField<i32>,
    #[serde(default)]
    pub accuracy_rate: PatchField<i32>,
    #[serde(default)]
    pub resume_url: PatchField<String>,
}

impl AboutInfoChanges {
    pub fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            name: patch_required("name", self.name, |v| required_text("name", &v))?,
            title: patch_required("title", self.title, |v| required_text("title", &v))?,
            description: patch_required("description", self.description, |v| {
                required_text("description", &v)
            })?,
            profile_image: patch_optional_text(self.profile_image),
            years_experience: patch_required("years_experience", self.years_experience, |v| {
                non_negative("years_experience", v)
            })?,
            project_count: patch_required("project_count", self.project_count, |v| {
                non_negative("project_count", v)
            })?,
            model_count: patch_required("model_count", self.model_count, |v| {
                non_negative("model_count", v)
            })?,
            accuracy_rate: patch_required("accuracy_rate", self.accuracy_rate, |v| {
                percentage("accuracy_rate", v)
            })?,
            resume_url: patch_optional_text(self.resume_url),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub id: i32,
    pub icon: String,
    pub text: String,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
}

impl Positioned for Highlight {
    fn position(&self) -> (i32, i32) {
        (self.order_index, self.id)
    }
}

/// Body of both create and update: an update overwrites every field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HighlightInput {
    pub icon: String,
    pub text: String,
    #[serde(default)]
    pub order_index: i32,
}

impl HighlightInput {
    pub fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            icon: required_text("icon", &self.icon)?,
            text: required_text("text", &self.text)?,
            order_index: self.order_index,
        })
    }
}
