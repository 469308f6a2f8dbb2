use actix_web::{put, web, Responder};

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::application::domain::entities::ProjectChanges;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/api/projects/{id}")]
pub async fn update_project_handler(
    admin: AdminUser,
    path: web::Path<i32>,
    req: web::Json<ProjectChanges>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .project_use_cases
        .update(admin.session(), path.into_inner(), req.into_inner())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => ApiResponse::from_content_error("Project", e),
    }
}
