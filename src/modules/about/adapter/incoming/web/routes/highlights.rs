use actix_web::{delete, get, post, put, web, Responder};

use crate::modules::about::application::domain::entities::HighlightInput;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/about/highlights")]
pub async fn get_highlights_handler(data: web::Data<AppState>) -> impl Responder {
    match data.about_use_cases.list_highlights().await {
        Ok(highlights) => ApiResponse::success(highlights),
        Err(e) => ApiResponse::from_content_error("Highlight", e),
    }
}

#[post("/api/about/highlights")]
pub async fn create_highlight_handler(
    admin: AdminUser,
    req: web::Json<HighlightInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .about_use_cases
        .create_highlight(admin.session(), req.into_inner())
        .await
    {
        Ok(created) => ApiResponse::created(created),
        Err(e) => ApiResponse::from_content_error("Highlight", e),
    }
}

/// Overwrites icon, text and order_index.
#[put("/api/about/highlights/{id}")]
pub async fn update_highlight_handler(
    admin: AdminUser,
    path: web::Path<i32>,
    req: web::Json<HighlightInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .about_use_cases
        .update_highlight(admin.session(), path.into_inner(), req.into_inner())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => ApiResponse::from_content_error("Highlight", e),
    }
}

#[delete("/api/about/highlights/{id}")]
pub async fn delete_highlight_handler(
    admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .about_use_cases
        .delete_highlight(admin.session(), path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => ApiResponse::from_content_error("Highlight", e),
    }
}
