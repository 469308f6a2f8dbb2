use actix_web::{post, web, Responder};

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::application::domain::entities::NewProject;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/projects")]
pub async fn create_project_handler(
    admin: AdminUser,
    req: web::Json<NewProject>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .project_use_cases
        .create(admin.session(), req.into_inner())
        .await
    {
        Ok(created) => ApiResponse::created(created),
        Err(e) => ApiResponse::from_content_error("Project", e),
    }
}
