use actix_web::{delete, web, Responder};

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/experience/{id}")]
pub async fn delete_experience_handler(
    admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .experience_use_cases
        .delete(admin.session(), path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => ApiResponse::from_content_error("Experience", e),
    }
}
