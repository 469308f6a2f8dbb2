use actix_web::{get, post, put, web, Responder};

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::contact::application::domain::entities::{ContactInfoChanges, NewContactInfo};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/contact/info")]
pub async fn get_contact_info_handler(data: web::Data<AppState>) -> impl Responder {
    match data.contact_use_cases.get_info().await {
        Ok(info) => ApiResponse::success(info),
        Err(e) => ApiResponse::from_content_error("Contact info", e),
    }
}

#[post("/api/contact/info")]
pub async fn create_contact_info_handler(
    admin: AdminUser,
    req: web::Json<NewContactInfo>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .contact_use_cases
        .create_info(admin.session(), req.into_inner())
        .await
    {
        Ok(created) => ApiResponse::created(created),
        Err(e) => ApiResponse::from_content_error("Contact info", e),
    }
}

#[put("/api/contact/info")]
pub async fn update_contact_info_handler(
    admin: AdminUser,
    req: web::Json<ContactInfoChanges>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .contact_use_cases
        .update_info(admin.session(), req.into_inner())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => ApiResponse::from_content_error("Contact info", e),
    }
}
