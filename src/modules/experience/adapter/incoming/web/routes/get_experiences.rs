use actix_web::{get, web, Responder};

use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/experience")]
pub async fn get_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    match data.experience_use_cases.list().await {
        Ok(experiences) => ApiResponse::success(experiences),
        Err(e) => ApiResponse::from_content_error("Experience", e),
    }
}

#[get("/api/experience/{id}")]
pub async fn get_experience_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experience_use_cases.get(path.into_inner()).await {
        Ok(experience) => ApiResponse::success(experience),
        Err(e) => ApiResponse::from_content_error("Experience", e),
    }
}
