pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod seed;
pub mod shared;

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;
use crate::config::{AdminConfig, AppConfig, StoreBackend};
use crate::modules::about::adapter::outgoing::{AboutRepositoryMemory, AboutRepositoryPostgres};
use crate::modules::about::application::ports::incoming::AboutUseCases;
use crate::modules::about::application::service::AboutService;
use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::adapter::outgoing::security::{Argon2Hasher, MultiSchemeHasher};
use crate::modules::auth::adapter::outgoing::{UserRepositoryMemory, UserRepositoryPostgres};
use crate::modules::auth::application::ports::incoming::CredentialGate;
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserRepository,
};
use crate::modules::auth::application::services::CredentialGateService;
use crate::modules::auth::application::use_cases::ensure_admin::EnsureAdminUseCase;
use crate::modules::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginUserUseCase,
};
use crate::modules::contact::adapter::outgoing::{
    ContactRepositoryMemory, ContactRepositoryPostgres,
};
use crate::modules::contact::application::ports::incoming::ContactUseCases;
use crate::modules::contact::application::service::ContactService;
use crate::modules::experience::adapter::outgoing::{
    ExperienceRepositoryMemory, ExperienceRepositoryPostgres,
};
use crate::modules::experience::application::ports::incoming::ExperienceUseCases;
use crate::modules::experience::application::service::ExperienceService;
use crate::modules::project::adapter::outgoing::{
    ProjectRepositoryMemory, ProjectRepositoryPostgres,
};
use crate::modules::project::application::ports::incoming::ProjectUseCases;
use crate::modules::project::application::service::ProjectService;
use crate::modules::skill::adapter::outgoing::{SkillRepositoryMemory, SkillRepositoryPostgres};
use crate::modules::skill::application::ports::incoming::SkillUseCases;
use crate::modules::skill::application::service::SkillService;
use crate::seed::Fixtures;
use crate::shared::api::custom_json_config;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub about_use_cases: Arc<dyn AboutUseCases + Send + Sync>,
    pub experience_use_cases: Arc<dyn ExperienceUseCases + Send + Sync>,
    pub project_use_cases: Arc<dyn ProjectUseCases + Send + Sync>,
    pub skill_use_cases: Arc<dyn SkillUseCases + Send + Sync>,
    pub contact_use_cases: Arc<dyn ContactUseCases + Send + Sync>,
}

/// Content use cases without the login flow, which needs the gate first.
struct ContentServices {
    about: Arc<dyn AboutUseCases + Send + Sync>,
    experience: Arc<dyn ExperienceUseCases + Send + Sync>,
    project: Arc<dyn ProjectUseCases + Send + Sync>,
    skill: Arc<dyn SkillUseCases + Send + Sync>,
    contact: Arc<dyn ContactUseCases + Send + Sync>,
}

impl ContentServices {
    #[cfg(not(tarpaulin_include))]
    fn postgres(db: &Arc<DatabaseConnection>, config: &AppConfig) -> Self {
        let timeout = config.lock_timeout;
        Self {
            about: Arc::new(AboutService::new(AboutRepositoryPostgres::new(
                Arc::clone(db),
                timeout,
            ))),
            experience: Arc::new(ExperienceService::new(ExperienceRepositoryPostgres::new(
                Arc::clone(db),
                timeout,
            ))),
            project: Arc::new(ProjectService::new(ProjectRepositoryPostgres::new(
                Arc::clone(db),
                timeout,
            ))),
            skill: Arc::new(SkillService::new(SkillRepositoryPostgres::new(
                Arc::clone(db),
                timeout,
            ))),
            contact: Arc::new(ContactService::new(ContactRepositoryPostgres::new(
                Arc::clone(db),
                timeout,
            ))),
        }
    }

    #[cfg(not(tarpaulin_include))]
    fn memory(config: &AppConfig) -> Self {
        let timeout = config.lock_timeout;
        Self {
            about: Arc::new(AboutService::new(AboutRepositoryMemory::new(timeout))),
            experience: Arc::new(ExperienceService::new(ExperienceRepositoryMemory::new(
                timeout,
            ))),
            project: Arc::new(ProjectService::new(ProjectRepositoryMemory::new(timeout))),
            skill: Arc::new(SkillService::new(SkillRepositoryMemory::new(timeout))),
            contact: Arc::new(ContactService::new(ContactRepositoryMemory::new(timeout))),
        }
    }

    fn into_state(self, gate: Arc<dyn CredentialGate + Send + Sync>) -> AppState {
        AppState {
            login_user_use_case: Arc::new(LoginUserUseCase::new(gate)),
            about_use_cases: self.about,
            experience_use_cases: self.experience,
            project_use_cases: self.project,
            skill_use_cases: self.skill,
            contact_use_cases: self.contact,
        }
    }
}

/// Stores the configured admin, then builds the gate over the same user store.
#[cfg(not(tarpaulin_include))]
async fn credential_gate<U>(
    users: U,
    admin: &AdminConfig,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
) -> anyhow::Result<Arc<dyn CredentialGate + Send + Sync>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let outcome = EnsureAdminUseCase::new(users.clone(), Arc::clone(&hasher))
        .execute(admin)
        .await?;
    info!(?outcome, username = %admin.username, "Admin account checked");

    Ok(Arc::new(CredentialGateService::new(users, hasher, tokens)))
}

#[cfg(not(tarpaulin_include))]
async fn connect(config: &AppConfig) -> anyhow::Result<Arc<DatabaseConnection>> {
    let url = config
        .database_url
        .clone()
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is required for the postgres backend"))?;

    let mut opt = ConnectOptions::new(url);
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(std::time::Duration::from_secs(5))
        .acquire_timeout(std::time::Duration::from_secs(5))
        .idle_timeout(std::time::Duration::from_secs(300))
        .max_lifetime(std::time::Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await?;

    if config.run_migrations {
        info!("Applying pending migrations");
        Migrator::up(&conn, None).await?;
    }

    Ok(Arc::new(conn))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env()?;
    let admin = AdminConfig::from_env()?;

    let hasher: Arc<dyn PasswordHasher + Send + Sync> =
        Arc::new(MultiSchemeHasher::new(Argon2Hasher::from_env()?));
    let tokens: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(JwtConfig::from_env()?));

    let (db, content, gate) = match config.backend {
        StoreBackend::Postgres => {
            let db = connect(&config).await?;
            let users = UserRepositoryPostgres::new(Arc::clone(&db));
            let gate = credential_gate(users, &admin, hasher, tokens).await?;
            let content = ContentServices::postgres(&db, &config);
            (Some(db), content, gate)
        }
        StoreBackend::Memory => {
            info!("Using the in-memory store; content is lost on restart");
            let users = UserRepositoryMemory::new(config.lock_timeout);
            let gate = credential_gate(users, &admin, hasher, tokens).await?;
            (None, ContentServices::memory(&config), gate)
        }
    };

    let state = content.into_state(Arc::clone(&gate));

    if let Some(path) = config.fixtures_path.as_deref() {
        if db.is_some() {
            info!(path = %path.display(), "Ignoring fixtures for the postgres backend");
        } else {
            let issued = gate.issue_token(&admin.username)?;
            let session = gate.verify_token(&issued.access_token)?;
            let summary = Fixtures::from_file(path)?.load(&state, &session).await?;
            info!(?summary, path = %path.display(), "Fixtures loaded");
        }
    }

    let server_url = config.bind_address();
    info!("Server run on: {}", server_url);

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&gate)));

        if let Some(db) = &db {
            app = app.app_data(web::Data::new(Arc::clone(db)));
        }

        app.configure(init_routes).service(
            SwaggerUi::new("/api/docs/{_:.*}").url("/api/openapi.json", openapi.clone()),
        )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::{about, auth, contact, experience, project, skill};

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(auth::adapter::incoming::web::routes::current_admin_handler);
    // About
    cfg.service(about::adapter::incoming::web::routes::get_about_info_handler);
    cfg.service(about::adapter::incoming::web::routes::create_about_info_handler);
    cfg.service(about::adapter::incoming::web::routes::update_about_info_handler);
    cfg.service(about::adapter::incoming::web::routes::get_highlights_handler);
    cfg.service(about::adapter::incoming::web::routes::create_highlight_handler);
    cfg.service(about::adapter::incoming::web::routes::update_highlight_handler);
    cfg.service(about::adapter::incoming::web::routes::delete_highlight_handler);
    // Experience
    cfg.service(experience::adapter::incoming::web::routes::get_experiences_handler);
    cfg.service(experience::adapter::incoming::web::routes::get_experience_handler);
    cfg.service(experience::adapter::incoming::web::routes::create_experience_handler);
    cfg.service(experience::adapter::incoming::web::routes::update_experience_handler);
    cfg.service(experience::adapter::incoming::web::routes::delete_experience_handler);
    // Projects
    cfg.service(project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(project::adapter::incoming::web::routes::get_project_handler);
    cfg.service(project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(project::adapter::incoming::web::routes::delete_project_handler);
    // Skills: literal paths before /{id}
    cfg.service(skill::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(skill::adapter::incoming::web::routes::get_skills_grouped_handler);
    cfg.service(skill::adapter::incoming::web::routes::get_skill_categories_handler);
    cfg.service(skill::adapter::incoming::web::routes::get_skill_handler);
    cfg.service(skill::adapter::incoming::web::routes::create_skill_handler);
    cfg.service(skill::adapter::incoming::web::routes::update_skill_handler);
    cfg.service(skill::adapter::incoming::web::routes::delete_skill_handler);
    // Contact
    cfg.service(contact::adapter::incoming::web::routes::get_contact_info_handler);
    cfg.service(contact::adapter::incoming::web::routes::create_contact_info_handler);
    cfg.service(contact::adapter::incoming::web::routes::update_contact_info_handler);
    cfg.service(contact::adapter::incoming::web::routes::submit_message_handler);
    cfg.service(contact::adapter::incoming::web::routes::get_messages_handler);
    cfg.service(contact::adapter::incoming::web::routes::mark_message_read_handler);
    cfg.service(contact::adapter::incoming::web::routes::delete_message_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
