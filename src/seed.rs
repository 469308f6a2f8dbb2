//! Demo content for the memory backend.
//!
//! The fixture file is read once at startup and replayed through the same
//! create operations the admin API uses, so it is validated the same way.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::modules::about::application::domain::entities::{HighlightInput, NewAboutInfo};
use crate::modules::auth::application::domain::entities::AdminSession;
use crate::modules::contact::application::domain::entities::NewContactInfo;
use crate::modules::experience::application::domain::entities::NewExperience;
use crate::modules::project::application::domain::entities::NewProject;
use crate::modules::skill::application::domain::entities::NewSkill;
use crate::shared::error::ContentError;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub about: Option<NewAboutInfo>,
    #[serde(default)]
    pub highlights: Vec<HighlightInput>,
    #[serde(default)]
    pub experience: Vec<NewExperience>,
    #[serde(default)]
    pub projects: Vec<NewProject>,
    #[serde(default)]
    pub skills: Vec<NewSkill>,
    #[serde(default)]
    pub contact: Option<NewContactInfo>,
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Cannot read fixture file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Fixture file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Fixture entry in '{section}' was rejected: {source}")]
    Rejected {
        section: &'static str,
        source: ContentError,
    },
}

fn rejected(section: &'static str) -> impl FnOnce(ContentError) -> SeedError {
    move |source| SeedError::Rejected { section, source }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub highlights: usize,
    pub experience: usize,
    pub projects: usize,
    pub skills: usize,
}

impl Fixtures {
    pub fn from_json(raw: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Inserts every entry in file order. Stops at the first rejected entry.
    pub async fn load(
        self,
        state: &AppState,
        session: &AdminSession,
    ) -> Result<SeedSummary, SeedError> {
        let mut summary = SeedSummary::default();

        if let Some(about) = self.about {
            state
                .about_use_cases
                .create_info(session, about)
                .await
                .map_err(rejected("about"))?;
        }
        for highlight in self.highlights {
            state
                .about_use_cases
                .create_highlight(session, highlight)
                .await
                .map_err(rejected("highlights"))?;
            summary.highlights += 1;
        }
        for experience in self.experience {
            state
                .experience_use_cases
                .create(session, experience)
                .await
                .map_err(rejected("experience"))?;
            summary.experience += 1;
        }
        for project in self.projects {
            state
                .project_use_cases
                .create(session, project)
                .await
                .map_err(rejected("projects"))?;
            summary.projects += 1;
        }
        for skill in self.skills {
            state
                .skill_use_cases
                .create(session, skill)
                .await
                .map_err(rejected("skills"))?;
            summary.skills += 1;
        }
        if let Some(contact) = self.contact {
            state
                .contact_use_cases
                .create_info(session, contact)
                .await
                .map_err(rejected("contact"))?;
        }

        info!(
            highlights = summary.highlights,
            experience = summary.experience,
            projects = summary.projects,
            skills = summary.skills,
            "Fixtures loaded"
        );
        Ok(summary)
    }
}
