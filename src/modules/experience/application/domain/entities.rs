use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::content::{
    validate_all, validate_replacement, ListEntry, NewListEntry, NewTechnology, Positioned,
    Technology,
};
use crate::shared::store::PatchField;
use crate::shared::validation::{optional_text, patch_required, required_text, ValidationError};

pub type Responsibility = ListEntry;
pub type Achievement = ListEntry;
pub type ExperienceTechnology = Technology;

/// Work history entry with its four owned child collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Experience {
    pub id: i32,
    pub title: String,
    pub company: String,
    pub duration: String,
    pub location: String,
    pub employment_type: String,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub responsibilities: Vec<Responsibility>,
    pub achievements: Vec<Achievement>,
    pub projects: Vec<ExperienceProject>,
    pub technologies: Vec<ExperienceTechnology>,
}

impl Positioned for Experience {
    fn position(&self) -> (i32, i32) {
        (self.order_index, self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceProject {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub order_index: i32,
}

impl Positioned for ExperienceProject {
    fn position(&self) -> (i32, i32) {
        (self.order_index, self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExperienceProject {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub order_index: i32,
}

impl NewExperienceProject {
    fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required_text("projects.name", &self.name)?,
            description: optional_text(self.description),
            order_index: self.order_index,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewExperience {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub location: String,
    pub employment_type: String,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default)]
    pub responsibilities: Vec<NewListEntry>,
    #[serde(default)]
    pub achievements: Vec<NewListEntry>,
    #[serde(default)]
    pub projects: Vec<NewExperienceProject>,
    #[serde(default)]
    pub technologies: Vec<NewTechnology>,
}

impl NewExperience {
    pub fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            title: required_text("title", &self.title)?,
            company: required_text("company", &self.company)?,
            duration: required_text("duration", &self.duration)?,
            location: required_text("location", &self.location)?,
            employment_type: required_text("employment_type", &self.employment_type)?,
            order_index: self.order_index,
            responsibilities: validate_all(self.responsibilities, |r| {
                r.validated("responsibilities")
            })?,
            achievements: validate_all(self.achievements, |a| a.validated("achievements"))?,
            projects: validate_all(self.projects, NewExperienceProject::validated)?,
            technologies: validate_all(self.technologies, |t| t.validated("technologies"))?,
        })
    }
}

/// Partial update. Scalars follow [`PatchField`]; a present collection
/// replaces the stored one entirely, an absent one is left as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExperienceChanges {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub company: PatchField<String>,
    #[serde(default)]
    pub duration: PatchField<String>,
    #[serde(default)]
    pub location: PatchField<String>,
    #[serde(default)]
    pub employment_type: PatchField<String>,
    #[serde(default)]
    pub order_index: PatchField<i32>,
    #[serde(default)]
    pub responsibilities: Option<Vec<NewListEntry>>,
    #[serde(default)]
    pub achievements: Option<Vec<NewListEntry>>,
    #[serde(default)]
    pub projects: Option<Vec<NewExperienceProject>>,
    #[serde(default)]
    pub technologies: Option<Vec<NewTechnology>>,
}

impl ExperienceChanges {
    pub fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            title: patch_required("title", self.title, |v| required_text("title", &v))?,
            company: patch_required("company", self.company, |v| required_text("company", &v))?,
            duration: patch_required("duration", self.duration, |v| {
                required_text("duration", &v)
            })?,
            location: patch_required("location", self.location, |v| {
                required_text("location", &v)
            })?,
            employment_type: patch_required("employment_type", self.employment_type, |v| {
                required_text("employment_type", &v)
            })?,
            order_index: patch_required("order_index", self.order_index, Ok)?,
            responsibilities: validate_replacement(self.responsibilities, |r| {
                r.validated("responsibilities")
            })?,
            achievements: validate_replacement(self.achievements, |a| {
                a.validated("achievements")
            })?,
            projects: validate_replacement(self.projects, NewExperienceProject::validated)?,
            technologies: validate_replacement(self.technologies, |t| {
                t.validated("technologies")
            })?,
        })
    }

    pub fn touches_scalars(&self) -> bool {
        !(self.title.is_unset()
            && self.company.is_unset()
            && self.duration.is_unset()
            && self.location.is_unset()
            && self.employment_type.is_unset()
            && self.order_index.is_unset())
    }
}
