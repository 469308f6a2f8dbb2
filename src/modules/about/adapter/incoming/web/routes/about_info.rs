use actix_web::{get, post, put, web, Responder};

use crate::modules::about::application::domain::entities::{AboutInfoChanges, NewAboutInfo};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// 404 `ABOUT_INFO_NOT_FOUND` until an admin has created the record.
#[get("/api/about/info")]
pub async fn get_about_info_handler(data: web::Data<AppState>) -> impl Responder {
    match data.about_use_cases.get_info().await {
        Ok(info) => ApiResponse::success(info),
        Err(e) => ApiResponse::from_content_error("About info", e),
    }
}

#[post("/api/about/info")]
pub async fn create_about_info_handler(
    admin: AdminUser,
    req: web::Json<NewAboutInfo>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .about_use_cases
        .create_info(admin.session(), req.into_inner())
        .await
    {
        Ok(created) => ApiResponse::created(created),
        Err(e) => ApiResponse::from_content_error("About info", e),
    }
}

#[put("/api/about/info")]
pub async fn update_about_info_handler(
    admin: AdminUser,
    req: web::Json<AboutInfoChanges>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .about_use_cases
        .update_info(admin.session(), req.into_inner())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => ApiResponse::from_content_error("About info", e),
    }
}
