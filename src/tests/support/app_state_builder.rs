use std::sync::Arc;
use std::time::Duration;

use actix_web::web;

use crate::modules::about::adapter::outgoing::AboutRepositoryMemory;
use crate::modules::about::application::ports::incoming::AboutUseCases;
use crate::modules::about::application::service::AboutService;
use crate::modules::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginUserUseCase,
};
use crate::modules::contact::adapter::outgoing::ContactRepositoryMemory;
use crate::modules::contact::application::ports::incoming::ContactUseCases;
use crate::modules::contact::application::service::ContactService;
use crate::modules::experience::adapter::outgoing::ExperienceRepositoryMemory;
use crate::modules::experience::application::ports::incoming::ExperienceUseCases;
use crate::modules::experience::application::service::ExperienceService;
use crate::modules::project::adapter::outgoing::ProjectRepositoryMemory;
use crate::modules::project::application::ports::incoming::ProjectUseCases;
use crate::modules::project::application::service::ProjectService;
use crate::modules::skill::adapter::outgoing::SkillRepositoryMemory;
use crate::modules::skill::application::ports::incoming::SkillUseCases;
use crate::modules::skill::application::service::SkillService;
use crate::tests::support::auth_helper::test_gate;
use crate::AppState;

const LOCK_TIMEOUT: Duration = Duration::from_secs(1);

/// App state backed by fresh, empty memory stores. Override any use case
/// with the `with_*` methods.
pub struct TestAppStateBuilder {
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    about: Arc<dyn AboutUseCases + Send + Sync>,
    experience: Arc<dyn ExperienceUseCases + Send + Sync>,
    project: Arc<dyn ProjectUseCases + Send + Sync>,
    skill: Arc<dyn SkillUseCases + Send + Sync>,
    contact: Arc<dyn ContactUseCases + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            login_user: Arc::new(LoginUserUseCase::new(test_gate())),
            about: Arc::new(AboutService::new(AboutRepositoryMemory::new(LOCK_TIMEOUT))),
            experience: Arc::new(ExperienceService::new(ExperienceRepositoryMemory::new(
                LOCK_TIMEOUT,
            ))),
            project: Arc::new(ProjectService::new(ProjectRepositoryMemory::new(
                LOCK_TIMEOUT,
            ))),
            skill: Arc::new(SkillService::new(SkillRepositoryMemory::new(LOCK_TIMEOUT))),
            contact: Arc::new(ContactService::new(ContactRepositoryMemory::new(
                LOCK_TIMEOUT,
            ))),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_about(mut self, uc: Arc<dyn AboutUseCases + Send + Sync>) -> Self {
        self.about = uc;
        self
    }

    pub fn with_experience(mut self, uc: Arc<dyn ExperienceUseCases + Send + Sync>) -> Self {
        self.experience = uc;
        self
    }

    pub fn with_project(mut self, uc: Arc<dyn ProjectUseCases + Send + Sync>) -> Self {
        self.project = uc;
        self
    }

    pub fn with_skill(mut self, uc: Arc<dyn SkillUseCases + Send + Sync>) -> Self {
        self.skill = uc;
        self
    }

    pub fn with_contact(mut self, uc: Arc<dyn ContactUseCases + Send + Sync>) -> Self {
        self.contact = uc;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            login_user_use_case: self.login_user,
            about_use_cases: self.about,
            experience_use_cases: self.experience,
            project_use_cases: self.project,
            skill_use_cases: self.skill,
            contact_use_cases: self.contact,
        })
    }
}
