use actix_web::{put, web, Responder};

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::experience::application::domain::entities::ExperienceChanges;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Partial update. Collections present in the body replace the stored ones.
#[put("/api/experience/{id}")]
pub async fn update_experience_handler(
    admin: AdminUser,
    path: web::Path<i32>,
    req: web::Json<ExperienceChanges>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .experience_use_cases
        .update(admin.session(), path.into_inner(), req.into_inner())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => ApiResponse::from_content_error("Experience", e),
    }
}
