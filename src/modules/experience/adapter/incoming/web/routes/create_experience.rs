use actix_web::{post, web, Responder};

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::experience::application::domain::entities::NewExperience;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/experience")]
pub async fn create_experience_handler(
    admin: AdminUser,
    req: web::Json<NewExperience>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .experience_use_cases
        .create(admin.session(), req.into_inner())
        .await
    {
        Ok(created) => ApiResponse::created(created),
        Err(e) => ApiResponse::from_content_error("Experience", e),
    }
}
